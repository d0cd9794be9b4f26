//! 2D grappling hook mechanic for games.
//!
//! `hookline` drives a grappling hook: a projectile flies toward a target
//! point, anchors to a valid surface, and a Verlet rope between the player
//! and the hook is simulated every physics tick, with optional automatic
//! pulling of the player toward the hook once attached.
//!
//! # Features
//!
//! - **Verlet rope**: position-based dynamics with implicit velocity
//! - **Constraint relaxation**: iterative Gauss-Seidel distance passes with
//!   exactly pinned anchors
//! - **Segment collision**: periodic push-out against the host's colliders
//! - **Grapple lifecycle**: idle / extending / attached / pulling /
//!   retracting state machine with fail-safe retraction
//! - **Pull force model**: force-based hauling that composes with the
//!   host's rigid-body integration
//! - **Host seams**: `CollisionWorld` and `PlayerBody` traits; the core
//!   owns no engine objects
//! - **Observable**: monitor solver passes via the `StepObserver` trait
//!
//! The crate is single-threaded by design: commands, contact reports, and
//! `fixed_step` run on the host's fixed-timestep schedule, and rendering
//! reads rope geometry only after the tick completes.

pub mod config;
pub mod error;
pub mod grapple;
pub mod hook;
pub mod observer;
pub mod pull;
pub mod rope;
pub mod solver;
pub mod world;

// Re-export primary API
pub use config::{GrappleConfig, RopeConfig};
pub use error::GrappleError;
pub use grapple::{GrappleController, GrappleState};
pub use hook::Hook;
pub use observer::{NoOpStepObserver, StepObserver};
pub use pull::pull_force;
pub use rope::{Rope, RopeSegment, MIN_ACTIVE_SEGMENTS};
pub use solver::{constrain, integrate, RopeSolver};
pub use world::{ColliderId, CollisionWorld, PlayerBody, RayHit, SurfaceKind};
