//! Step observer trait for monitoring world steps.

/// Trait for observing world steps.
///
/// Implement this trait to monitor simulation progress (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations. Paused worlds do not call any of them.
pub trait StepObserver {
    /// Called once every spring has accumulated its force. `skipped` counts
    /// springs whose endpoints coincided and applied nothing.
    fn on_springs_applied(&mut self, _applied: usize, _skipped: usize) {}

    /// Called after all particles have been integrated.
    fn on_integrate(&mut self, _particles: usize) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
