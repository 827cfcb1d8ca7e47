//! Free-text query engine (pure).
//!
//! Normalization-tolerant matching plus attribute filters and a stable
//! date-descending sort. No caching; cheap enough per keystroke.

pub mod engine;
pub mod normalize;

// Re-export for convenience
pub use engine::{search, QueryState};
pub use normalize::{matches_all_tokens, normalize, tokenize};
