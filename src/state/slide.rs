//! Slide transition state machine.
//!
//! One machine per carousel sequences the directional page-change
//! animation: an exit phase, the underlying page advance, an enter phase,
//! then back to idle. The machine owns no clock; delays go through an
//! injected [`TimerHost`] and expirations come back as explicit
//! `timer_fired` calls, so the full sequence is testable synchronously.
//!
//! Navigation requests received while a transition is in flight are
//! ignored: at most one transition per carousel, and rapid clicks can
//! never advance the page more than once per completed sequence.

use std::time::Duration;

use crate::state::paged::{Direction, PagedWindow};
use crate::timer::{TimerHost, TimerToken};

/// Exit-phase delay before the page advances.
pub const SLIDE_OUT_DELAY: Duration = Duration::from_millis(300);
/// Enter-phase delay before the machine returns to idle.
pub const SLIDE_IN_DELAY: Duration = Duration::from_millis(600);

// ===== SlideClass =====

/// Visual class applied to the carousel while a transition runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideClass {
    ExitLeft,
    ExitRight,
    EnterFromRight,
    EnterFromLeft,
}

impl SlideClass {
    /// Stylesheet-style name, e.g. for logging.
    pub fn name(self) -> &'static str {
        match self {
            Self::ExitLeft => "slide-out-left",
            Self::ExitRight => "slide-out-right",
            Self::EnterFromRight => "slide-in-right",
            Self::EnterFromLeft => "slide-in-left",
        }
    }

    fn exit_for(direction: Direction) -> Self {
        match direction {
            Direction::Next => Self::ExitLeft,
            Direction::Prev => Self::ExitRight,
        }
    }

    fn enter_for(direction: Direction) -> Self {
        match direction {
            Direction::Next => Self::EnterFromRight,
            Direction::Prev => Self::EnterFromLeft,
        }
    }
}

// ===== TransitionState =====

/// The three phases of a carousel transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionState {
    /// No transition running; requests are accepted.
    Idle,
    /// Exit animation running; the page has not advanced yet.
    SlidingOut(Direction),
    /// Page advanced; enter animation running.
    SlidingIn(Direction),
}

// ===== SlideMachine =====

/// Per-carousel transition sequencer.
#[derive(Debug)]
pub struct SlideMachine {
    state: TransitionState,
    pending: Option<TimerToken>,
    out_delay: Duration,
    in_delay: Duration,
}

impl SlideMachine {
    /// Machine with the standard 300 ms / 600 ms delays.
    pub fn new() -> Self {
        Self::with_delays(SLIDE_OUT_DELAY, SLIDE_IN_DELAY)
    }

    /// Machine with explicit delays (config override).
    pub fn with_delays(out_delay: Duration, in_delay: Duration) -> Self {
        Self {
            state: TransitionState::Idle,
            pending: None,
            out_delay,
            in_delay,
        }
    }

    /// Current phase.
    pub fn state(&self) -> TransitionState {
        self.state
    }

    /// Visual class for the current phase, `None` when idle.
    pub fn visual_class(&self) -> Option<SlideClass> {
        match self.state {
            TransitionState::Idle => None,
            TransitionState::SlidingOut(dir) => Some(SlideClass::exit_for(dir)),
            TransitionState::SlidingIn(dir) => Some(SlideClass::enter_for(dir)),
        }
    }

    /// Whether a transition is in flight.
    pub fn is_busy(&self) -> bool {
        self.state != TransitionState::Idle
    }

    /// Handle a navigation request. Starts the exit phase and schedules
    /// its timer when idle; returns `false` (ignored) while a transition
    /// is already running.
    pub fn request(&mut self, direction: Direction, timers: &mut dyn TimerHost) -> bool {
        if self.is_busy() {
            return false;
        }
        self.state = TransitionState::SlidingOut(direction);
        self.pending = Some(timers.schedule(self.out_delay));
        true
    }

    /// Handle a timer expiration.
    ///
    /// Only the machine's own pending token is acted on; stale tokens
    /// (cancelled, or belonging to another carousel) are ignored.
    /// Returns `true` when the token was consumed.
    pub fn timer_fired<T>(
        &mut self,
        token: TimerToken,
        window: &mut PagedWindow<T>,
        timers: &mut dyn TimerHost,
    ) -> bool {
        if self.pending != Some(token) {
            return false;
        }
        self.pending = None;
        match self.state {
            TransitionState::SlidingOut(direction) => {
                window.advance(direction);
                self.state = TransitionState::SlidingIn(direction);
                self.pending = Some(timers.schedule(self.in_delay));
            }
            TransitionState::SlidingIn(_) => {
                self.state = TransitionState::Idle;
            }
            TransitionState::Idle => {}
        }
        true
    }

    /// Cancel any in-flight transition, e.g. on carousel teardown. The
    /// pending timer is cancelled at the host so it can never fire
    /// against destroyed state.
    pub fn cancel(&mut self, timers: &mut dyn TimerHost) {
        if let Some(token) = self.pending.take() {
            timers.cancel(token);
        }
        self.state = TransitionState::Idle;
    }
}

impl Default for SlideMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "slide_tests.rs"]
mod tests;
