//! Domain model types (pure).
//!
//! All types in this module are pure data with parse helpers.

pub mod error;
pub mod item;

// Re-export for convenience
pub use error::{AppError, DataError};
pub use item::{CatalogItem, ItemId, ItemKind, ItemStatus};
