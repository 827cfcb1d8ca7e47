//! UI state machines (pure).
//!
//! All state transitions are pure functions; the only effect is timer
//! scheduling through the injected `TimerHost` capability.

pub mod app_state;
pub mod carousel;
pub mod genre;
pub mod key_handler;
pub mod paged;
pub mod search_overlay;
pub mod slide;

// Re-export for convenience
pub use app_state::{AppState, BrowseSettings};
pub use carousel::{CarouselState, CarouselView};
pub use genre::{default_genre_names, group_by_genre, GenreBucket, DEFAULT_GENRES};
pub use key_handler::{handle_key_action, KeyAction};
pub use paged::{Direction, PageLabel, PagedWindow};
pub use search_overlay::{Backdrop, OverlayController, SearchOverlayState, SearchView};
pub use slide::{SlideClass, SlideMachine, TransitionState};
