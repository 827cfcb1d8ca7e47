//! Configuration loading with precedence handling.
//!
//! Precedence, lowest to highest: built-in defaults → config file →
//! environment variables → CLI arguments. Each layer only overrides the
//! fields it sets; a missing config file is not an error.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::state::app_state::BrowseSettings;
use crate::state::default_genre_names;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read an existing config file.
    #[error("Failed to read config file at {}: {reason}", .path.display())]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML.
    #[error("Invalid TOML in {}: {reason}", .path.display())]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure (`~/.config/mgv/config.toml`).
/// All fields optional; unset fields fall back to defaults.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Results per search overlay page.
    #[serde(default)]
    pub search_page_size: Option<usize>,

    /// Cards per carousel page.
    #[serde(default)]
    pub carousel_page_size: Option<usize>,

    /// Exit-phase delay in milliseconds.
    #[serde(default)]
    pub slide_out_ms: Option<u64>,

    /// Enter-phase delay in milliseconds.
    #[serde(default)]
    pub slide_in_ms: Option<u64>,

    /// Genre vocabulary override (display order).
    #[serde(default)]
    pub genres: Option<Vec<String>>,

    /// Path to the tracing log file.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub search_page_size: usize,
    pub carousel_page_size: usize,
    pub slide_out_ms: u64,
    pub slide_in_ms: u64,
    pub genres: Vec<String>,
    pub log_file: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            search_page_size: 6,
            carousel_page_size: 4,
            slide_out_ms: 300,
            slide_in_ms: 600,
            genres: default_genre_names(),
            log_file: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Overlay a config file onto the defaults.
    pub fn merge_file(mut self, file: ConfigFile) -> Self {
        if let Some(v) = file.search_page_size {
            self.search_page_size = v;
        }
        if let Some(v) = file.carousel_page_size {
            self.carousel_page_size = v;
        }
        if let Some(v) = file.slide_out_ms {
            self.slide_out_ms = v;
        }
        if let Some(v) = file.slide_in_ms {
            self.slide_in_ms = v;
        }
        if let Some(v) = file.genres {
            self.genres = v;
        }
        if let Some(v) = file.log_file {
            self.log_file = v;
        }
        self
    }

    /// Apply environment overrides (`MGV_LOG_FILE`).
    pub fn apply_env(mut self) -> Self {
        if let Ok(path) = std::env::var("MGV_LOG_FILE") {
            self.log_file = PathBuf::from(path);
        }
        self
    }

    /// Page sizes and delays for the browsing state.
    pub fn browse_settings(&self) -> BrowseSettings {
        BrowseSettings {
            carousel_page_size: self.carousel_page_size.max(1),
            search_page_size: self.search_page_size.max(1),
            slide_out_delay: Duration::from_millis(self.slide_out_ms),
            slide_in_delay: Duration::from_millis(self.slide_in_ms),
        }
    }
}

/// Default log file path (`~/.local/state/mgv/mgv.log` on Unix), falling
/// back to the current directory when no state dir is available.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("mgv").join("mgv.log")
    } else {
        PathBuf::from("mgv.log")
    }
}

/// Default config file path (`~/.config/mgv/config.toml`), `None` when the
/// config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mgv").join("config.toml"))
}

/// Load a config file from a specific path. A missing file yields
/// `Ok(None)`; only read or parse failures are errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    Ok(Some(config))
}

/// Load configuration with path precedence: explicit `--config` path, then
/// the `MGV_CONFIG` environment variable, then the default path.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }
    if let Ok(env_path) = std::env::var("MGV_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }
    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }
    Ok(None)
}
