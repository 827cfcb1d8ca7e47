//! Timer capability for delayed state transitions.
//!
//! Timers are the only asynchronous primitive in the application. State
//! machines never touch the wall clock directly: they schedule through
//! the [`TimerHost`] trait and receive expirations as explicit events.
//! This keeps transition sequencing testable without real waits and makes
//! cancellation on teardown a local, guaranteed operation.
//!
//! Two hosts are provided: [`DeadlineQueue`] for the real event loop
//! (expirations drive the poll timeout) and [`ManualTimerHost`] for tests
//! (expirations fire on demand).

use std::time::{Duration, Instant};

// ===== TimerToken =====

/// Handle to one scheduled timer. Tokens are unique per host and never
/// reused, so a stale token held after cancellation can be recognized
/// and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

// ===== TimerHost =====

/// Capability to schedule and cancel one-shot timers.
pub trait TimerHost {
    /// Schedule a timer to fire after `delay`. Returns its token.
    fn schedule(&mut self, delay: Duration) -> TimerToken;

    /// Cancel a pending timer. Cancelling an already-fired or unknown
    /// token is a no-op.
    fn cancel(&mut self, token: TimerToken);
}

// ===== DeadlineQueue =====

/// Production timer host backed by wall-clock deadlines.
///
/// The event loop asks for [`DeadlineQueue::next_deadline`] to bound its
/// input poll, then drains [`DeadlineQueue::pop_expired`] and routes each
/// token to its owner.
#[derive(Debug, Default)]
pub struct DeadlineQueue {
    next_token: u64,
    pending: Vec<(TimerToken, Instant)>,
}

impl DeadlineQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|(_, at)| *at).min()
    }

    /// Remove and return all timers whose deadline is at or before `now`,
    /// in deadline order.
    pub fn pop_expired(&mut self, now: Instant) -> Vec<TimerToken> {
        let mut expired: Vec<(TimerToken, Instant)> = Vec::new();
        self.pending.retain(|entry| {
            if entry.1 <= now {
                expired.push(*entry);
                false
            } else {
                true
            }
        });
        expired.sort_by_key(|(_, at)| *at);
        expired.into_iter().map(|(token, _)| token).collect()
    }

    /// Whether any timer is still pending.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    fn mint(&mut self) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        token
    }
}

impl TimerHost for DeadlineQueue {
    fn schedule(&mut self, delay: Duration) -> TimerToken {
        let token = self.mint();
        self.pending.push((token, Instant::now() + delay));
        token
    }

    fn cancel(&mut self, token: TimerToken) {
        self.pending.retain(|(t, _)| *t != token);
    }
}

// ===== ManualTimerHost =====

/// Test timer host: records scheduled delays and fires timers only when
/// told to, in scheduling order.
#[derive(Debug, Default)]
pub struct ManualTimerHost {
    next_token: u64,
    pending: Vec<(TimerToken, Duration)>,
}

impl ManualTimerHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pending timers with their requested delays, oldest first.
    pub fn pending(&self) -> &[(TimerToken, Duration)] {
        &self.pending
    }

    /// Number of timers that have not fired or been cancelled.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Pop the oldest pending timer as fired. Returns `None` when nothing
    /// is pending.
    pub fn fire_next(&mut self) -> Option<TimerToken> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0).0)
        }
    }
}

impl TimerHost for ManualTimerHost {
    fn schedule(&mut self, delay: Duration) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.pending.push((token, delay));
        token
    }

    fn cancel(&mut self, token: TimerToken) {
        self.pending.retain(|(t, _)| *t != token);
    }
}
