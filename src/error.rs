//! Error types for grapple configuration.

use thiserror::Error;

/// Errors reported when validating a grapple or rope configuration.
///
/// All of these are fatal at initialization: a controller is never
/// constructed from an invalid configuration. Runtime geometry
/// degeneracies are guarded locally and never surface as errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GrappleError {
    #[error("constraint stiffness must be in (0, 1], got {0}")]
    InvalidStiffness(f32),
    #[error("segment length must be positive and finite, got {0}")]
    InvalidSegmentLength(f32),
    #[error("rope needs at least 2 segments, got {0}")]
    InvalidSegmentCount(usize),
    #[error("constraint iteration count must be at least 1")]
    InvalidIterations,
    #[error("collision check interval must be at least 1")]
    InvalidCollisionInterval,
    #[error("collision probe radius must be positive and finite, got {0}")]
    InvalidProbeRadius(f32),
    #[error("damping must be in [0, 1], got {0}")]
    InvalidDamping(f32),
    #[error("max grapple range must be positive and finite, got {0}")]
    InvalidRange(f32),
    #[error("hook speed must be positive and finite, got {0}")]
    InvalidSpeed(f32),
    #[error("arrival epsilon must be non-negative and finite, got {0}")]
    InvalidEpsilon(f32),
    #[error("max pull speed must be positive and finite, got {0}")]
    InvalidPullSpeed(f32),
    #[error("approach gain must be positive and finite, got {0}")]
    InvalidGain(f32),
    #[error("pull responsiveness must be positive and finite, got {0}")]
    InvalidResponsiveness(f32),
    #[error("minimum stand-off must be non-negative and finite, got {0}")]
    InvalidStandoff(f32),
    #[error("max swing length must be positive and finite, got {0}")]
    InvalidSwingLength(f32),
}
