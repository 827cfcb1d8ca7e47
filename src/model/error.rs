//! Error taxonomy for the mgv application.
//!
//! Structured errors via `thiserror`, composing with `?` through `From`
//! conversions. The browsing core itself has no failure states (degenerate
//! inputs produce valid empty states); errors here cover the impure shell:
//! dataset loading, configuration, logging setup, and the terminal.
//!
//! Item-level dataset defects (bad date, unknown status) are non-fatal:
//! the loader degrades them to defaults and logs a warning. File-level
//! defects (missing file, invalid JSON, duplicate ids) are fatal.

use std::path::PathBuf;
use thiserror::Error;

use crate::model::ItemId;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to load the catalog dataset.
    #[error("Failed to load catalog: {0}")]
    Data(#[from] DataError),

    /// Failed to load or parse configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Failed to initialize file logging.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or rendering failure.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered while loading the catalog dataset.
#[derive(Debug, Error)]
pub enum DataError {
    /// The catalog file does not exist at the given path.
    #[error("Catalog file not found: {}", .path.display())]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// The catalog file is not valid JSON for the expected schema.
    #[error("Invalid catalog JSON: {message}")]
    InvalidJson {
        /// Parser error details.
        message: String,
    },

    /// Two catalog entries share an id. Ids key carousel and search
    /// rendering, so the dataset must be fixed rather than deduplicated
    /// silently.
    #[error("Duplicate catalog item id {id}")]
    DuplicateId {
        /// The id that appeared more than once.
        id: ItemId,
    },

    /// I/O failure reading the catalog file.
    #[error("IO error reading catalog: {0}")]
    Io(#[from] std::io::Error),
}
