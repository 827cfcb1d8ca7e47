//! Tests for the slide transition state machine.

use super::*;
use crate::timer::ManualTimerHost;

fn window() -> PagedWindow<usize> {
    PagedWindow::new((0..10).collect(), 4)
}

// ===== Happy-path sequencing =====

#[test]
fn next_request_runs_exit_advance_enter_idle() {
    let mut timers = ManualTimerHost::new();
    let mut machine = SlideMachine::new();
    let mut w = window();

    assert!(machine.request(Direction::Next, &mut timers));
    assert_eq!(machine.state(), TransitionState::SlidingOut(Direction::Next));
    assert_eq!(machine.visual_class(), Some(SlideClass::ExitLeft));
    assert_eq!(w.current_page(), 0, "page must not advance before the exit delay");
    assert_eq!(timers.pending_count(), 1);
    assert_eq!(timers.pending()[0].1, SLIDE_OUT_DELAY);

    let token = timers.fire_next().expect("exit timer pending");
    assert!(machine.timer_fired(token, &mut w, &mut timers));
    assert_eq!(w.current_page(), 1, "page advances exactly once at phase flip");
    assert_eq!(machine.state(), TransitionState::SlidingIn(Direction::Next));
    assert_eq!(machine.visual_class(), Some(SlideClass::EnterFromRight));
    assert_eq!(timers.pending()[0].1, SLIDE_IN_DELAY);

    let token = timers.fire_next().expect("enter timer pending");
    assert!(machine.timer_fired(token, &mut w, &mut timers));
    assert_eq!(machine.state(), TransitionState::Idle);
    assert_eq!(machine.visual_class(), None);
    assert_eq!(w.current_page(), 1);
    assert_eq!(timers.pending_count(), 0);
}

#[test]
fn prev_request_uses_mirrored_classes_and_wraps() {
    let mut timers = ManualTimerHost::new();
    let mut machine = SlideMachine::new();
    let mut w = window();

    machine.request(Direction::Prev, &mut timers);
    assert_eq!(machine.visual_class(), Some(SlideClass::ExitRight));

    let token = timers.fire_next().expect("exit timer");
    machine.timer_fired(token, &mut w, &mut timers);
    assert_eq!(w.current_page(), 2, "prev from page 0 wraps to the last page");
    assert_eq!(machine.visual_class(), Some(SlideClass::EnterFromLeft));
}

// ===== Re-entrant requests =====

#[test]
fn request_during_sliding_out_is_ignored() {
    let mut timers = ManualTimerHost::new();
    let mut machine = SlideMachine::new();
    let mut w = window();

    assert!(machine.request(Direction::Next, &mut timers));
    assert!(!machine.request(Direction::Next, &mut timers));
    assert!(!machine.request(Direction::Prev, &mut timers));
    assert_eq!(timers.pending_count(), 1, "no extra timers scheduled");

    // Drive the first transition to completion: one advance only.
    let token = timers.fire_next().expect("exit timer");
    machine.timer_fired(token, &mut w, &mut timers);
    let token = timers.fire_next().expect("enter timer");
    machine.timer_fired(token, &mut w, &mut timers);

    assert_eq!(w.current_page(), 1);
    assert_eq!(machine.state(), TransitionState::Idle);
}

#[test]
fn request_during_sliding_in_is_ignored() {
    let mut timers = ManualTimerHost::new();
    let mut machine = SlideMachine::new();
    let mut w = window();

    machine.request(Direction::Next, &mut timers);
    let token = timers.fire_next().expect("exit timer");
    machine.timer_fired(token, &mut w, &mut timers);

    assert!(!machine.request(Direction::Next, &mut timers));
    assert_eq!(w.current_page(), 1);
}

#[test]
fn new_request_accepted_after_idle() {
    let mut timers = ManualTimerHost::new();
    let mut machine = SlideMachine::new();
    let mut w = window();

    for expected_page in [1, 2, 0] {
        assert!(machine.request(Direction::Next, &mut timers));
        let token = timers.fire_next().expect("exit timer");
        machine.timer_fired(token, &mut w, &mut timers);
        let token = timers.fire_next().expect("enter timer");
        machine.timer_fired(token, &mut w, &mut timers);
        assert_eq!(w.current_page(), expected_page);
    }
}

// ===== Cancellation =====

#[test]
fn cancel_mid_transition_cancels_timer_and_resets() {
    let mut timers = ManualTimerHost::new();
    let mut machine = SlideMachine::new();
    let mut w = window();

    machine.request(Direction::Next, &mut timers);
    machine.cancel(&mut timers);

    assert_eq!(machine.state(), TransitionState::Idle);
    assert_eq!(timers.pending_count(), 0, "pending timer cancelled at the host");
    assert_eq!(w.current_page(), 0, "cancelled exit phase never advances");
}

#[test]
fn stale_token_after_cancel_is_ignored() {
    let mut timers = ManualTimerHost::new();
    let mut machine = SlideMachine::new();
    let mut w = window();

    machine.request(Direction::Next, &mut timers);
    let token = timers.pending()[0].0;
    machine.cancel(&mut timers);

    // Even if the token somehow fires after cancellation it must not
    // mutate anything.
    assert!(!machine.timer_fired(token, &mut w, &mut timers));
    assert_eq!(machine.state(), TransitionState::Idle);
    assert_eq!(w.current_page(), 0);
}

#[test]
fn foreign_token_is_not_consumed() {
    let mut timers = ManualTimerHost::new();
    let mut machine = SlideMachine::new();
    let mut other = SlideMachine::new();
    let mut w = window();
    let mut other_w = window();

    machine.request(Direction::Next, &mut timers);
    other.request(Direction::Next, &mut timers);

    // Fire the first machine's token against the second machine: rejected.
    let first_token = timers.pending()[0].0;
    assert!(!other.timer_fired(first_token, &mut other_w, &mut timers));
    assert_eq!(other.state(), TransitionState::SlidingOut(Direction::Next));

    // The rightful owner still consumes it.
    let token = timers.fire_next().expect("first machine's exit timer");
    assert_eq!(token, first_token);
    assert!(machine.timer_fired(token, &mut w, &mut timers));
}

// ===== Delay configuration =====

#[test]
fn custom_delays_are_scheduled() {
    let mut timers = ManualTimerHost::new();
    let mut machine =
        SlideMachine::with_delays(Duration::from_millis(10), Duration::from_millis(20));
    let mut w = window();

    machine.request(Direction::Next, &mut timers);
    assert_eq!(timers.pending()[0].1, Duration::from_millis(10));

    let token = timers.fire_next().expect("exit timer");
    machine.timer_fired(token, &mut w, &mut timers);
    assert_eq!(timers.pending()[0].1, Duration::from_millis(20));
}
