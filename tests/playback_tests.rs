// Integration tests for the playback controller

use algoscope::algorithms::{max_profit, two_sum};
use algoscope::playback::{PlaybackController, BASE_TICK, MAX_SPEED};
use std::rc::Rc;
use std::time::{Duration, Instant};

fn controller(prices: &[i64]) -> PlaybackController {
    PlaybackController::new(Rc::new(max_profit::generate(prices)))
}

#[test]
fn test_play_at_end_rewinds() {
    let now = Instant::now();
    let mut ctl = controller(&[7, 1, 5]);
    ctl.jump_to_end();
    assert_eq!(ctl.step_index(), ctl.total_steps() - 1);

    ctl.play(now);
    assert!(ctl.is_playing());
    assert_eq!(ctl.step_index(), 0);
    assert!(ctl.next_deadline().is_some());
}

#[test]
fn test_step_forward_reaches_end() {
    let mut ctl = controller(&[7, 1, 5, 3, 6, 4]);
    let n = ctl.total_steps();

    for _ in 0..n - 1 {
        assert!(ctl.step_forward());
    }
    assert_eq!(ctl.step_index(), n - 1);

    assert!(!ctl.step_forward());
    assert!(!ctl.step_forward());
    assert_eq!(ctl.step_index(), n - 1);
}

#[test]
fn test_step_back_clamps_at_start() {
    let mut ctl = controller(&[1, 2]);
    assert!(!ctl.step_back());
    assert!(ctl.is_at_start());
    ctl.step_forward();
    assert!(!ctl.is_at_start());
    assert!(ctl.step_back());
    assert_eq!(ctl.step_index(), 0);
}

#[test]
fn test_stepping_pauses() {
    let now = Instant::now();
    let mut ctl = controller(&[1, 2, 3]);
    ctl.play(now);
    ctl.step_forward();
    assert!(!ctl.is_playing());
    assert!(ctl.pending_tick().is_none());

    ctl.play(now);
    ctl.step_back();
    assert!(!ctl.is_playing());
    assert!(ctl.pending_tick().is_none());
}

#[test]
fn test_double_speed_halves_interval() {
    let mut ctl = controller(&[1, 2, 3]);
    assert_eq!(ctl.interval(), BASE_TICK);
    ctl.set_speed(2.0);
    assert_eq!(ctl.interval(), BASE_TICK / 2);
    assert_eq!(ctl.interval(), Duration::from_millis(500));
}

#[test]
fn test_autoplay_stops_exactly_at_end() {
    let start = Instant::now();
    let mut ctl = controller(&[7, 1, 5, 3, 6, 4]);
    ctl.set_speed(2.0);
    ctl.play(start);

    let n = ctl.total_steps();
    let mut now = start;
    let mut ticks = 0;
    while let Some(due) = ctl.next_deadline() {
        assert_eq!(due - now, Duration::from_millis(500));
        now = due;
        assert!(ctl.poll(now));
        ticks += 1;
        assert!(ticks < n, "loop did not stop");
    }

    assert_eq!(ticks, n - 1);
    assert_eq!(ctl.step_index(), n - 1);
    assert!(!ctl.is_playing());

    // Nothing further happens, however late we poll
    assert!(!ctl.poll(now + BASE_TICK * 10));
    assert_eq!(ctl.step_index(), n - 1);
}

#[test]
fn test_stale_tick_is_noop() {
    let now = Instant::now();
    let mut ctl = controller(&[1, 2, 3]);
    ctl.play(now);
    let stale = ctl.pending_tick().expect("tick scheduled").token;

    ctl.pause();
    assert!(!ctl.fire(stale, now + BASE_TICK));
    assert_eq!(ctl.step_index(), 0);

    // A fresh loop mints a new token; the old one still does nothing
    ctl.play(now);
    assert!(!ctl.fire(stale, now + BASE_TICK));
    assert_eq!(ctl.step_index(), 0);
    let fresh = ctl.pending_tick().expect("tick scheduled").token;
    assert_ne!(fresh, stale);
    assert!(ctl.fire(fresh, now + BASE_TICK));
    assert_eq!(ctl.step_index(), 1);
}

#[test]
fn test_restart_cancels_and_rewinds() {
    let now = Instant::now();
    let mut ctl = controller(&[1, 2, 3]);
    ctl.play(now);
    ctl.poll(now + BASE_TICK);
    ctl.poll(now + BASE_TICK * 2);
    assert_eq!(ctl.step_index(), 2);

    ctl.restart();
    assert_eq!(ctl.step_index(), 0);
    assert!(!ctl.is_playing());
    assert!(ctl.next_deadline().is_none());
}

#[test]
fn test_stepping_to_end_leaves_no_timer() {
    let now = Instant::now();
    // Init, Scan, Update, Done
    let mut ctl = PlaybackController::new(Rc::new(two_sum::generate(&[5], 10)));
    assert_eq!(ctl.total_steps(), 4);
    ctl.play(now);
    while ctl.step_forward() {}
    assert!(ctl.is_at_end());
    assert!(!ctl.is_playing());
    assert!(ctl.pending_tick().is_none());
}

#[test]
fn test_speed_change_applies_to_next_tick() {
    let now = Instant::now();
    let mut ctl = controller(&[1, 2, 3, 4]);
    ctl.play(now);
    ctl.set_speed(MAX_SPEED);
    // Already scheduled tick keeps its due time
    assert_eq!(ctl.next_deadline(), Some(now + BASE_TICK));
    assert!(ctl.poll(now + BASE_TICK));
    assert_eq!(
        ctl.next_deadline(),
        Some(now + BASE_TICK + BASE_TICK.div_f64(MAX_SPEED))
    );
}

#[test]
fn test_load_keeps_speed_and_cancels() {
    let now = Instant::now();
    let mut ctl = controller(&[1, 2, 3]);
    ctl.set_speed(1.5);
    ctl.play(now);
    let stale = ctl.pending_tick().expect("tick scheduled").token;

    ctl.load(Rc::new(max_profit::generate(&[9, 8])));
    assert_eq!(ctl.step_index(), 0);
    assert!(!ctl.is_playing());
    assert_eq!(ctl.speed(), 1.5);
    assert!(!ctl.fire(stale, now + BASE_TICK));
}
