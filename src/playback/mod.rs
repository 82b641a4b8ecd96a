//! Timed playback over a [`Trace`]
//!
//! [`PlaybackController`] owns the step pointer, the playing flag and the speed
//! multiplier, and runs the auto-advance loop. The loop is an explicit
//! scheduled tick: at most one [`ScheduledTick`] is outstanding, and every
//! (re)schedule mints a fresh [`TickToken`]. A tick delivered with a token that
//! is no longer pending is ignored, so a late tick after pause, restart or a
//! trace swap can never move the pointer.
//!
//! Time is passed in by the host (`now: Instant`) rather than read here; the
//! terminal front end feeds `Instant::now()` from its event loop.
//!
//! # States
//!
//! ```text
//!            play (at last -> rewind to 0)
//!   Paused  ---------------------------->  Running
//!           <----------------------------
//!            play / pause / step / restart / end reached
//! ```

use crate::trace::{Step, Trace};
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Tick interval at speed 1.0
pub const BASE_TICK: Duration = Duration::from_millis(1000);

pub const MIN_SPEED: f64 = 0.25;
pub const MAX_SPEED: f64 = 4.0;
pub const DEFAULT_SPEED: f64 = 1.0;

/// Speeds offered by the faster/slower keys
pub const SPEED_PRESETS: [f64; 5] = [0.5, 1.0, 1.5, 2.0, 3.0];

/// Clamp a requested speed multiplier into the supported range
pub fn clamp_speed(multiplier: f64) -> f64 {
    if !multiplier.is_finite() {
        tracing::warn!(multiplier, "non-finite speed requested, using default");
        return DEFAULT_SPEED;
    }
    let clamped = multiplier.clamp(MIN_SPEED, MAX_SPEED);
    if clamped != multiplier {
        tracing::warn!(requested = multiplier, clamped, "speed out of range");
    }
    clamped
}

/// Next preset above `speed`, or the highest preset
pub fn faster_speed(speed: f64) -> f64 {
    SPEED_PRESETS
        .iter()
        .copied()
        .find(|&preset| preset > speed)
        .unwrap_or(SPEED_PRESETS[SPEED_PRESETS.len() - 1])
}

/// Next preset below `speed`, or the lowest preset
pub fn slower_speed(speed: f64) -> f64 {
    SPEED_PRESETS
        .iter()
        .rev()
        .copied()
        .find(|&preset| preset < speed)
        .unwrap_or(SPEED_PRESETS[0])
}

/// Mutable playback position, owned by the controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    pub step_index: usize,
    pub is_playing: bool,
    pub speed: f64,
}

impl Default for PlaybackState {
    fn default() -> Self {
        PlaybackState {
            step_index: 0,
            is_playing: false,
            speed: DEFAULT_SPEED,
        }
    }
}

/// Identity of one scheduled tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickToken(u64);

/// The single outstanding auto-advance tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTick {
    pub token: TickToken,
    pub due: Instant,
}

/// Playback state machine for one visualization
#[derive(Debug)]
pub struct PlaybackController {
    trace: Rc<Trace>,
    state: PlaybackState,
    pending: Option<ScheduledTick>,
    next_token: u64,
}

impl PlaybackController {
    pub fn new(trace: Rc<Trace>) -> Self {
        PlaybackController {
            trace,
            state: PlaybackState::default(),
            pending: None,
            next_token: 0,
        }
    }

    /// Replace the trace; cancels any pending tick and rewinds, keeping speed
    pub fn load(&mut self, trace: Rc<Trace>) {
        self.cancel();
        self.trace = trace;
        self.state.step_index = 0;
        self.state.is_playing = false;
        tracing::debug!(steps = self.trace.len(), "trace loaded");
    }

    // ========== Transport ==========

    /// Toggle playback
    ///
    /// When paused on the last step, playback restarts from the first step.
    pub fn play(&mut self, now: Instant) {
        if self.state.is_playing {
            self.pause();
            return;
        }
        if self.is_at_end() {
            self.state.step_index = 0;
        }
        self.state.is_playing = true;
        tracing::debug!(step = self.state.step_index, "play");
        self.start_loop(now);
    }

    pub fn pause(&mut self) {
        self.cancel();
        if self.state.is_playing {
            tracing::debug!(step = self.state.step_index, "pause");
        }
        self.state.is_playing = false;
    }

    /// Move one step forward; always pauses. Returns whether the index moved.
    pub fn step_forward(&mut self) -> bool {
        self.pause();
        if self.is_at_end() {
            return false;
        }
        self.state.step_index += 1;
        tracing::trace!(step = self.state.step_index, "step forward");
        true
    }

    /// Move one step back; always pauses. Returns whether the index moved.
    pub fn step_back(&mut self) -> bool {
        self.pause();
        if self.state.step_index == 0 {
            return false;
        }
        self.state.step_index -= 1;
        tracing::trace!(step = self.state.step_index, "step back");
        true
    }

    /// Rewind to the first step and pause
    pub fn restart(&mut self) {
        self.pause();
        self.state.step_index = 0;
        tracing::debug!("restart");
    }

    /// Pause on the last step
    pub fn jump_to_end(&mut self) {
        self.pause();
        self.state.step_index = self.trace.last_index();
    }

    /// Change the speed multiplier
    ///
    /// An already scheduled tick keeps its due time; the new interval applies
    /// from the next tick on.
    pub fn set_speed(&mut self, multiplier: f64) {
        self.state.speed = clamp_speed(multiplier);
        tracing::debug!(speed = self.state.speed, "speed changed");
    }

    /// Step up to the next speed preset
    pub fn faster(&mut self) {
        self.set_speed(faster_speed(self.state.speed));
    }

    /// Step down to the previous speed preset
    pub fn slower(&mut self) {
        self.set_speed(slower_speed(self.state.speed));
    }

    // ========== Auto-advance loop ==========

    /// Interval between ticks at the current speed
    pub fn interval(&self) -> Duration {
        BASE_TICK.div_f64(self.state.speed)
    }

    /// Due time of the pending tick, if the loop is running
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.map(|tick| tick.due)
    }

    pub fn pending_tick(&self) -> Option<ScheduledTick> {
        self.pending
    }

    /// Fire the pending tick if it is due. Returns whether the index moved.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(tick) if now >= tick.due => self.fire(tick.token, now),
            _ => false,
        }
    }

    /// Deliver a tick. Stale tokens are ignored. Returns whether the index moved.
    pub fn fire(&mut self, token: TickToken, now: Instant) -> bool {
        if self.pending.map(|tick| tick.token) != Some(token) {
            tracing::trace!(?token, "stale tick ignored");
            return false;
        }
        self.pending = None;
        if !self.state.is_playing || self.is_at_end() {
            self.state.is_playing = false;
            return false;
        }

        self.state.step_index += 1;
        tracing::trace!(step = self.state.step_index, "tick");

        if self.is_at_end() {
            self.state.is_playing = false;
            tracing::debug!(step = self.state.step_index, "playback complete");
        } else {
            self.schedule(now);
        }
        true
    }

    /// Drop the pending tick, if any
    pub fn cancel(&mut self) {
        if let Some(tick) = self.pending.take() {
            tracing::trace!(token = ?tick.token, "tick cancelled");
        }
    }

    fn start_loop(&mut self, now: Instant) {
        self.cancel();
        if self.is_at_end() {
            // Nothing left to advance to; never leave a timer behind
            self.state.is_playing = false;
            return;
        }
        self.schedule(now);
    }

    fn schedule(&mut self, now: Instant) {
        let token = TickToken(self.next_token);
        self.next_token += 1;
        self.pending = Some(ScheduledTick {
            token,
            due: now + self.interval(),
        });
    }

    // ========== Getters ==========

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn step_index(&self) -> usize {
        self.state.step_index
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    pub fn speed(&self) -> f64 {
        self.state.speed
    }

    pub fn trace(&self) -> &Rc<Trace> {
        &self.trace
    }

    pub fn total_steps(&self) -> usize {
        self.trace.len()
    }

    pub fn current_step(&self) -> &Step {
        &self.trace[self.state.step_index]
    }

    pub fn is_at_start(&self) -> bool {
        self.state.step_index == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.state.step_index >= self.trace.last_index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::contains_duplicate;
    use crate::trace::value::Outcome;
    use crate::trace::{Phase, TraceBuilder};

    fn controller(nums: &[i64]) -> PlaybackController {
        PlaybackController::new(Rc::new(contains_duplicate::generate(nums)))
    }

    #[test]
    fn test_initial_state() {
        let ctl = controller(&[1, 2]);
        assert_eq!(ctl.state(), PlaybackState::default());
        assert!(ctl.next_deadline().is_none());
    }

    #[test]
    fn test_play_schedules_one_tick() {
        let now = Instant::now();
        let mut ctl = controller(&[1, 2, 3]);
        ctl.play(now);
        assert!(ctl.is_playing());
        assert_eq!(ctl.next_deadline(), Some(now + BASE_TICK));
    }

    #[test]
    fn test_play_toggles_to_pause() {
        let now = Instant::now();
        let mut ctl = controller(&[1, 2, 3]);
        ctl.play(now);
        ctl.step_forward();
        ctl.play(now);
        ctl.play(now);
        assert!(!ctl.is_playing());
        assert_eq!(ctl.step_index(), 1);
        assert!(ctl.pending_tick().is_none());
    }

    #[test]
    fn test_poll_before_due_does_nothing() {
        let now = Instant::now();
        let mut ctl = controller(&[1, 2, 3]);
        ctl.play(now);
        assert!(!ctl.poll(now + Duration::from_millis(999)));
        assert_eq!(ctl.step_index(), 0);
        assert!(ctl.poll(now + BASE_TICK));
        assert_eq!(ctl.step_index(), 1);
    }

    #[test]
    fn test_faster_and_slower_walk_presets() {
        let mut ctl = controller(&[1]);
        ctl.faster();
        assert_eq!(ctl.speed(), 1.5);
        ctl.slower();
        ctl.slower();
        assert_eq!(ctl.speed(), 0.5);
        ctl.slower();
        assert_eq!(ctl.speed(), 0.5);
    }

    #[test]
    fn test_clamp_speed() {
        assert_eq!(clamp_speed(10.0), MAX_SPEED);
        assert_eq!(clamp_speed(0.0), MIN_SPEED);
        assert_eq!(clamp_speed(-2.0), MIN_SPEED);
        assert_eq!(clamp_speed(f64::NAN), DEFAULT_SPEED);
        assert_eq!(clamp_speed(2.0), 2.0);
    }

    #[test]
    fn test_load_resets_and_cancels() {
        let now = Instant::now();
        let mut ctl = controller(&[1, 2, 3]);
        ctl.set_speed(2.0);
        ctl.play(now);
        ctl.poll(now + BASE_TICK);
        let stale = ctl.pending_tick().map(|t| t.token);

        ctl.load(Rc::new(contains_duplicate::generate(&[4, 4])));
        assert_eq!(ctl.step_index(), 0);
        assert!(!ctl.is_playing());
        assert!(ctl.next_deadline().is_none());
        assert_eq!(ctl.speed(), 2.0);

        if let Some(token) = stale {
            assert!(!ctl.fire(token, now + BASE_TICK * 2));
        }
        assert_eq!(ctl.step_index(), 0);
    }

    #[test]
    fn test_play_on_single_step_trace_stays_paused() {
        let now = Instant::now();
        let trace = TraceBuilder::new()
            .finish(Step::new(Phase::Done, "nothing to do").with_result(Outcome::Bool(false)));
        let mut ctl = PlaybackController::new(Rc::new(trace));
        assert!(ctl.is_at_end());

        ctl.play(now);
        assert!(!ctl.is_playing());
        assert!(ctl.pending_tick().is_none());
        assert!(ctl.next_deadline().is_none());
        assert_eq!(ctl.step_index(), 0);

        // Polling later finds nothing scheduled
        assert!(!ctl.poll(now + BASE_TICK));
    }
}
