//! mgv — manga/manhwa/anime catalog browser.
//!
//! TUI application for browsing a static catalog dataset: per-genre
//! paginated carousels with directional slide transitions, and a
//! free-text search overlay with filters and smart pagination.
//!
//! The crate follows a Pure Core / Impure Shell architecture: `model`,
//! `query`, and `state` are pure and testable without a terminal; `data`,
//! `view`, and the binary are the shell.

pub mod config;
pub mod data;
pub mod logging;
pub mod model;
pub mod query;
pub mod state;
pub mod timer;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
