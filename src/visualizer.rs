//! One mounted visualization
//!
//! A [`Visualizer`] ties the engine together for a host UI: it holds the
//! selected algorithm, input and language, regenerates the trace whenever the
//! input or algorithm changes, owns the playback controller, and publishes the
//! controller's transport to the active-controls registry for as long as it is
//! alive. Dropping it cancels any pending tick and withdraws its binding.

use crate::algorithms::{Algorithm, ProblemInput};
use crate::catalog::{self, SourceListing};
use crate::playback::PlaybackController;
use crate::registry::{self, ControlsBinding};
use crate::sync::Language;
use crate::trace::{Step, Trace};
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

pub struct Visualizer {
    algorithm: Algorithm,
    input: ProblemInput,
    language: Language,
    controller: Rc<RefCell<PlaybackController>>,
    binding: ControlsBinding,
}

impl Visualizer {
    /// Generate the first trace and publish the transport
    pub fn mount(algorithm: Algorithm, input: ProblemInput, language: Language) -> Self {
        let trace = Rc::new(algorithm.trace(&input));
        tracing::debug!(
            algorithm = algorithm.id(),
            steps = trace.len(),
            "visualizer mounted"
        );
        let controller = Rc::new(RefCell::new(PlaybackController::new(trace)));
        let binding = ControlsBinding::new(controller.clone());
        registry::register_active(binding.clone());

        Visualizer {
            algorithm,
            input,
            language,
            controller,
            binding,
        }
    }

    /// Replace the input and regenerate the trace
    pub fn set_input(&mut self, input: ProblemInput) {
        self.input = input;
        self.regenerate();
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        if self.algorithm != algorithm {
            self.algorithm = algorithm;
            self.regenerate();
        }
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn cycle_language(&mut self) -> Language {
        self.language = self.language.next();
        self.language
    }

    fn regenerate(&mut self) {
        let trace = Rc::new(self.algorithm.trace(&self.input));
        tracing::debug!(
            algorithm = self.algorithm.id(),
            len = self.input.nums.len(),
            steps = trace.len(),
            "trace regenerated"
        );
        self.controller.borrow_mut().load(trace);
    }

    // ========== Getters for UI ==========

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn input(&self) -> &ProblemInput {
        &self.input
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn binding(&self) -> &ControlsBinding {
        &self.binding
    }

    pub fn controller(&self) -> Ref<'_, PlaybackController> {
        self.controller.borrow()
    }

    pub fn controller_mut(&self) -> RefMut<'_, PlaybackController> {
        self.controller.borrow_mut()
    }

    pub fn trace(&self) -> Rc<Trace> {
        self.controller.borrow().trace().clone()
    }

    /// The step currently displayed
    pub fn current_step(&self) -> Step {
        self.controller.borrow().current_step().clone()
    }

    /// Listing for the selected language (or its fallback)
    pub fn listing(&self) -> SourceListing {
        catalog::listing(self.algorithm, self.language)
    }

    /// Line to highlight for the current step, re-derived on every call
    pub fn highlighted_line(&self) -> Option<usize> {
        let phase = self.controller.borrow().current_step().phase;
        self.listing().line_for(phase)
    }
}

impl Drop for Visualizer {
    fn drop(&mut self) {
        if let Ok(mut controller) = self.controller.try_borrow_mut() {
            controller.cancel();
        }
        registry::unregister_active(&self.binding);
        tracing::debug!(algorithm = self.algorithm.id(), "visualizer unmounted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::Phase;
    use std::time::Instant;

    #[test]
    fn test_mount_registers_and_drop_unregisters() {
        let vis = Visualizer::mount(
            Algorithm::ContainsDuplicate,
            ProblemInput::new(vec![1, 2, 1], 0),
            Language::Python,
        );
        assert_eq!(registry::current_active().as_ref(), Some(vis.binding()));
        drop(vis);
        assert!(registry::current_active().is_none());
    }

    #[test]
    fn test_late_unmount_keeps_newer_binding() {
        let first = Visualizer::mount(
            Algorithm::MaxProfit,
            ProblemInput::new(vec![7, 1, 5], 0),
            Language::Java,
        );
        let second = Visualizer::mount(
            Algorithm::TwoSum,
            ProblemInput::new(vec![2, 7], 9),
            Language::Python,
        );
        drop(first);
        assert_eq!(registry::current_active().as_ref(), Some(second.binding()));
    }

    #[test]
    fn test_set_input_resets_playback() {
        let mut vis = Visualizer::mount(
            Algorithm::ContainsDuplicate,
            ProblemInput::new(vec![1, 2, 3], 0),
            Language::Python,
        );
        vis.controller_mut().play(Instant::now());
        vis.controller_mut().step_forward();
        vis.set_input(ProblemInput::new(vec![9, 9], 0));

        let ctl = vis.controller();
        assert_eq!(ctl.step_index(), 0);
        assert!(!ctl.is_playing());
        assert!(ctl.next_deadline().is_none());
        assert_eq!(ctl.total_steps(), 5);
    }

    #[test]
    fn test_highlight_follows_step_and_language() {
        let mut vis = Visualizer::mount(
            Algorithm::ContainsDuplicate,
            ProblemInput::new(vec![4], 0),
            Language::Python,
        );
        assert_eq!(vis.current_step().phase, Phase::Init);
        assert_eq!(vis.highlighted_line(), Some(2));

        vis.controller_mut().step_forward();
        assert_eq!(vis.highlighted_line(), Some(4));
        // Idempotent on redundant recomputation
        assert_eq!(vis.highlighted_line(), vis.highlighted_line());

        vis.set_language(Language::Java);
        assert_eq!(vis.highlighted_line(), Some(5));
    }
}
