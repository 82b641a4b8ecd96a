//! # Introduction
//!
//! Algoscope steps through classic array algorithms one decision at a time.
//! Each run is recorded up front as an immutable trace of steps, which is then
//! played back (or walked by hand) next to a source listing whose current line
//! follows the step being shown.
//!
//! ## Pipeline
//!
//! ```text
//! Input → Generator → Trace → Playback → Line sync → TUI
//! ```
//!
//! 1. [`input`] parses and validates the numbers and target typed by the user.
//! 2. [`algorithms`] runs contains-duplicate, pair-sum or max-profit and
//!    records a [`trace::Trace`] ending in exactly one terminal step.
//! 3. [`playback`] owns the step pointer, play/pause, speed and the scheduled
//!    auto-advance tick.
//! 4. [`sync`] maps a step's [`trace::Phase`] to a line of the listing shown
//!    by [`catalog`].
//! 5. [`registry`] publishes the active visualization's transport so the
//!    toolbar keys reach it without holding the controller.
//! 6. [`visualizer`] ties one algorithm, input and language together.
//! 7. [`ui`] is the ratatui front end; not part of the stable library API.
//!
//! [`cli`], [`config`], [`logging`] and [`errors`] are the binary's plumbing.

pub mod algorithms;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod errors;
pub mod input;
pub mod logging;
pub mod playback;
pub mod registry;
pub mod sync;
pub mod trace;
pub mod ui;
pub mod visualizer;
