//! Configuration types for the solver and the scene's viewport.

use crate::float::Float;
use crate::vec::Vec2;

/// Configuration for one call to [`advance`](crate::solver::advance).
///
/// # Builder Pattern
/// ```
/// use ropework::config::SolverConfig;
/// use ropework::vec::Vec2;
///
/// let config: SolverConfig<f64> = SolverConfig::new()
///     .with_iterations(20)
///     .with_gravity(Vec2::new(0.0, -0.2));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig<F: Float> {
    /// Relaxation passes over all links per frame. 0 disables relaxation.
    /// More iterations = stiffer links but slower. Default: 10.
    pub iterations: usize,
    /// Added to every free node once per frame. Default: (0, -0.1).
    pub gravity: Vec2<F>,
}

impl<F: Float> SolverConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SolverConfig {
            iterations: 10,
            gravity: Vec2::new(F::zero(), F::from_f64(-0.1)),
        }
    }

    /// Set the number of relaxation iterations.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the per-frame gravity vector.
    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }
}

impl<F: Float> Default for SolverConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Visible area the scene is laid out in. y grows upwards from 0.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport<F: Float> {
    pub width: F,
    pub height: F,
    /// Side of the square drawn for each node, and of its pick box.
    pub node_size: F,
}

impl<F: Float> Viewport<F> {
    pub fn new(width: F, height: F) -> Self {
        Viewport { width, height, node_size: F::from_f32(10.0) }
    }

    pub fn with_node_size(mut self, node_size: F) -> Self {
        self.node_size = node_size;
        self
    }
}

impl<F: Float> Default for Viewport<F> {
    fn default() -> Self {
        Self::new(F::from_f32(1280.0), F::from_f32(720.0))
    }
}
