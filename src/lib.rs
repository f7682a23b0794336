//! Verlet point masses joined by rigid-length links, for rope and cloth toys.
//!
//! `ropework` simulates *nodes* (point masses with implicit velocity) joined by
//! *links* (distance constraints) that settle under gravity. Every frame the
//! solver integrates free nodes, relaxes all links a fixed number of times and
//! removes anything that fell out of the world.
//!
//! # Features
//!
//! - **Verlet integration**: Position-based dynamics with implicit velocity
//! - **Link relaxation**: Iterative Gauss-Seidel passes, configurable count
//! - **Lifecycle**: Nodes falling below the viewport are culled with their links
//! - **Stable handles**: `NodeId` / `LinkId` stay invalid once culled
//! - **Grid builder**: Zig-zag rows of hanging chains
//! - **Interaction**: Pointer spawn and drag, ready for a UI layer
//! - **Observable**: Monitor frames via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! # Example
//! ```
//! use ropework::{advance, NoOpStepObserver, Scene, SolverConfig, Vec2};
//!
//! let mut scene: Scene<f64> = Scene::new();
//! let anchor = scene.create_node(Vec2::new(100.0, 300.0), true);
//! let bob = scene.create_node(Vec2::new(130.0, 300.0), false);
//! scene.create_link(anchor, bob).unwrap();
//!
//! let config = SolverConfig::new();
//! for _ in 0..60 {
//!     advance(&mut scene, &config, &mut NoOpStepObserver);
//! }
//! assert!(scene.node(bob).unwrap().pos.y < 300.0);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod node;
pub mod link;
pub mod scene;
pub mod solver;
pub mod grid;
pub mod interaction;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use node::{Node, NodeId};
pub use link::{Link, LinkId};
pub use scene::Scene;
pub use solver::advance;
pub use grid::{GridConfig, GridSummary};
pub use interaction::{Modifiers, SpawnResult};
pub use config::{SolverConfig, Viewport};
pub use observer::{StepObserver, NoOpStepObserver, StepStats};
pub use error::SceneError;
