//! Step observer trait for monitoring simulation progress.

/// Trait for observing simulation frames.
///
/// Implement this trait to monitor solver progress (e.g., for debugging,
/// an on-screen overlay, or performance profiling). All methods have default
/// no-op implementations.
pub trait StepObserver {
    /// Called after all free nodes have been integrated (Verlet step).
    fn on_integrate(&mut self) {}

    /// Called after the out-of-bounds check with the number of nodes it killed.
    fn on_out_of_bounds(&mut self, _killed: usize) {}

    /// Called after each relaxation iteration.
    fn on_constraint_iteration(&mut self, _iteration: usize) {}

    /// Called after dead links and nodes have been removed from the scene.
    fn on_cull(&mut self, _nodes_removed: usize, _links_removed: usize) {}

    /// Called when a frame is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Running totals over every observed frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    pub frames: usize,
    pub iterations: usize,
    pub out_of_bounds: usize,
    pub nodes_culled: usize,
    pub links_culled: usize,
}

impl StepObserver for StepStats {
    fn on_out_of_bounds(&mut self, killed: usize) {
        self.out_of_bounds += killed;
    }

    fn on_constraint_iteration(&mut self, _iteration: usize) {
        self.iterations += 1;
    }

    fn on_cull(&mut self, nodes_removed: usize, links_removed: usize) {
        self.nodes_culled += nodes_removed;
        self.links_culled += links_removed;
    }

    fn on_step_complete(&mut self) {
        self.frames += 1;
    }
}
