//! Active-controls registry
//!
//! Lets the one mounted visualization publish its transport so an external
//! toolbar can drive it without holding a reference to the visualization.
//!
//! The registry has a single slot. [`ControlsRegistry::register`] always
//! installs the given binding, replacing any previous one (last registration
//! wins). [`ControlsRegistry::unregister`] clears the slot only when the
//! installed binding is the caller's own, so a late unregister from a
//! visualization that has already been replaced cannot evict its successor.
//!
//! The engine runs on the UI thread and bindings hold `Rc`s, so the
//! process-wide slot is a thread-local [`SingleSlotRegistry`] reached through
//! [`register_active`], [`unregister_active`] and [`current_active`].

use crate::playback::PlaybackController;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::time::Instant;

/// Transport operations a toolbar can invoke
pub trait Transport {
    /// Play/pause toggle
    fn toggle_play(&self, now: Instant);
    fn step_forward(&self);
    fn step_back(&self);
    fn restart(&self);
    fn set_speed(&self, multiplier: f64);
    fn is_playing(&self) -> bool;
    fn speed(&self) -> f64;
}

impl Transport for RefCell<PlaybackController> {
    fn toggle_play(&self, now: Instant) {
        self.borrow_mut().play(now);
    }

    fn step_forward(&self) {
        self.borrow_mut().step_forward();
    }

    fn step_back(&self) {
        self.borrow_mut().step_back();
    }

    fn restart(&self) {
        self.borrow_mut().restart();
    }

    fn set_speed(&self, multiplier: f64) {
        self.borrow_mut().set_speed(multiplier);
    }

    fn is_playing(&self) -> bool {
        self.borrow().is_playing()
    }

    fn speed(&self) -> f64 {
        self.borrow().speed()
    }
}

/// Generation token identifying one binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingToken(u64);

thread_local! {
    static NEXT_TOKEN: Cell<u64> = const { Cell::new(1) };
}

impl BindingToken {
    fn next() -> Self {
        NEXT_TOKEN.with(|next| {
            let token = next.get();
            next.set(token + 1);
            BindingToken(token)
        })
    }
}

/// A published transport
#[derive(Clone)]
pub struct ControlsBinding {
    token: BindingToken,
    transport: Rc<dyn Transport>,
}

impl ControlsBinding {
    pub fn new(transport: Rc<dyn Transport>) -> Self {
        ControlsBinding {
            token: BindingToken::next(),
            transport,
        }
    }

    pub fn token(&self) -> BindingToken {
        self.token
    }

    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.transport.is_playing()
    }

    pub fn speed(&self) -> f64 {
        self.transport.speed()
    }
}

impl PartialEq for ControlsBinding {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}

impl Eq for ControlsBinding {}

impl fmt::Debug for ControlsBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlsBinding")
            .field("token", &self.token)
            .finish_non_exhaustive()
    }
}

/// Publish point for the active visualization's transport
pub trait ControlsRegistry {
    /// Install `binding`, replacing whatever is installed
    fn register(&self, binding: ControlsBinding);
    /// Clear the slot if `binding` is the installed one. Returns whether it did.
    fn unregister(&self, binding: &ControlsBinding) -> bool;
    fn current(&self) -> Option<ControlsBinding>;
}

/// Single-slot registry: one binding at a time, no queue
#[derive(Debug, Default)]
pub struct SingleSlotRegistry {
    slot: RefCell<Option<ControlsBinding>>,
}

impl SingleSlotRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ControlsRegistry for SingleSlotRegistry {
    fn register(&self, binding: ControlsBinding) {
        let replaced = self.slot.borrow_mut().replace(binding);
        if let Some(previous) = replaced {
            tracing::debug!(token = ?previous.token, "controls binding replaced");
        }
    }

    fn unregister(&self, binding: &ControlsBinding) -> bool {
        let mut slot = self.slot.borrow_mut();
        if slot.as_ref() == Some(binding) {
            *slot = None;
            true
        } else {
            tracing::debug!(token = ?binding.token, "stale unregister ignored");
            false
        }
    }

    fn current(&self) -> Option<ControlsBinding> {
        self.slot.borrow().clone()
    }
}

thread_local! {
    static ACTIVE_CONTROLS: SingleSlotRegistry = SingleSlotRegistry::new();
}

pub fn register_active(binding: ControlsBinding) {
    ACTIVE_CONTROLS.with(|registry| registry.register(binding));
}

pub fn unregister_active(binding: &ControlsBinding) -> bool {
    ACTIVE_CONTROLS.with(|registry| registry.unregister(binding))
}

pub fn current_active() -> Option<ControlsBinding> {
    ACTIVE_CONTROLS.with(|registry| registry.current())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::max_profit;

    fn binding() -> (Rc<RefCell<PlaybackController>>, ControlsBinding) {
        let controller = Rc::new(RefCell::new(PlaybackController::new(Rc::new(
            max_profit::generate(&[3, 1, 4]),
        ))));
        let binding = ControlsBinding::new(controller.clone());
        (controller, binding)
    }

    #[test]
    fn test_register_replaces() {
        let registry = SingleSlotRegistry::new();
        let (_a_ctl, a) = binding();
        let (_b_ctl, b) = binding();
        registry.register(a.clone());
        registry.register(b.clone());
        assert_eq!(registry.current(), Some(b));
    }

    #[test]
    fn test_stale_unregister_is_rejected() {
        let registry = SingleSlotRegistry::new();
        let (_a_ctl, a) = binding();
        let (_b_ctl, b) = binding();
        registry.register(a.clone());
        registry.register(b.clone());
        assert!(!registry.unregister(&a));
        assert_eq!(registry.current(), Some(b.clone()));
        assert!(registry.unregister(&b));
        assert_eq!(registry.current(), None);
    }

    #[test]
    fn test_binding_drives_controller() {
        let registry = SingleSlotRegistry::new();
        let (ctl, b) = binding();
        registry.register(b);

        let current = registry.current().expect("binding installed");
        current.transport().step_forward();
        current.transport().step_forward();
        assert_eq!(ctl.borrow().step_index(), 2);

        current.transport().set_speed(2.0);
        assert_eq!(current.speed(), 2.0);

        current.transport().toggle_play(Instant::now());
        assert!(current.is_playing());
        current.transport().restart();
        assert!(!current.is_playing());
        assert_eq!(ctl.borrow().step_index(), 0);
    }

    #[test]
    fn test_tokens_are_unique() {
        let (_a_ctl, a) = binding();
        let (_b_ctl, b) = binding();
        assert_ne!(a.token(), b.token());
        assert_ne!(a, b);
        assert_eq!(a.clone(), a);
    }
}
