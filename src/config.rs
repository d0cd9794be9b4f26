//! Configuration for the rope solver and the grapple controller.

use glam::Vec2;

use crate::error::GrappleError;

/// Tuning for the Verlet rope solver.
///
/// # Builder Pattern
/// ```
/// use glam::Vec2;
/// use hookline::RopeConfig;
///
/// let config = RopeConfig::new()
///     .with_gravity(Vec2::new(0.0, -1.0))
///     .with_stiffness(0.95)
///     .with_iterations(12);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RopeConfig {
    /// Gravity acceleration applied to free segments. Default: (0, -1).
    pub gravity: Vec2,
    /// Velocity damping factor [0, 1]. 1.0 = no damping. Default: 0.98.
    pub damping: f32,
    /// Fraction of positional error corrected per constraint pass, in
    /// (0, 1]. Lower values yield a softer, slower-converging rope.
    /// Default: 0.98.
    pub stiffness: f32,
    /// Constraint relaxation iterations per tick. Higher stiffness needs
    /// fewer iterations. Default: 15.
    pub iterations: usize,
    /// Run the collision pass every Nth constraint iteration. Default: 2.
    pub collision_interval: usize,
    /// Probe radius for segment-collider overlap checks. Default: 0.1.
    pub probe_radius: f32,
    /// Rest length of one rope segment. Default: 0.2.
    pub segment_length: f32,
    /// Maximum number of segments the rope may hold. Growth past this is
    /// clamped, never an error. Default: 50.
    pub max_segments: usize,
}

impl RopeConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        RopeConfig {
            gravity: Vec2::new(0.0, -1.0),
            damping: 0.98,
            stiffness: 0.98,
            iterations: 15,
            collision_interval: 2,
            probe_radius: 0.1,
            segment_length: 0.2,
            max_segments: 50,
        }
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }

    /// Set the constraint stiffness.
    pub fn with_stiffness(mut self, stiffness: f32) -> Self {
        self.stiffness = stiffness;
        self
    }

    /// Set the number of constraint iterations per tick.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the collision check interval.
    pub fn with_collision_interval(mut self, interval: usize) -> Self {
        self.collision_interval = interval;
        self
    }

    /// Set the collision probe radius.
    pub fn with_probe_radius(mut self, radius: f32) -> Self {
        self.probe_radius = radius;
        self
    }

    /// Set the rest length of one segment.
    pub fn with_segment_length(mut self, length: f32) -> Self {
        self.segment_length = length;
        self
    }

    /// Set the maximum segment count.
    pub fn with_max_segments(mut self, max: usize) -> Self {
        self.max_segments = max;
        self
    }

    /// Check every parameter; invalid values are fatal at initialization.
    pub fn validate(&self) -> Result<(), GrappleError> {
        if !(self.stiffness > 0.0 && self.stiffness <= 1.0) {
            return Err(GrappleError::InvalidStiffness(self.stiffness));
        }
        if !(self.damping >= 0.0 && self.damping <= 1.0) {
            return Err(GrappleError::InvalidDamping(self.damping));
        }
        if !(self.segment_length > 0.0 && self.segment_length.is_finite()) {
            return Err(GrappleError::InvalidSegmentLength(self.segment_length));
        }
        if self.max_segments < 2 {
            return Err(GrappleError::InvalidSegmentCount(self.max_segments));
        }
        if self.iterations == 0 {
            return Err(GrappleError::InvalidIterations);
        }
        if self.collision_interval == 0 {
            return Err(GrappleError::InvalidCollisionInterval);
        }
        if !(self.probe_radius > 0.0 && self.probe_radius.is_finite()) {
            return Err(GrappleError::InvalidProbeRadius(self.probe_radius));
        }
        Ok(())
    }
}

impl Default for RopeConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Tuning for the grapple lifecycle: cast range, hook travel, and the
/// pull-force model.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GrappleConfig {
    /// Maximum cast range from the player. Fire targets beyond this are
    /// clamped onto the range circle. Default: 10.
    pub max_range: f32,
    /// Hook travel speed. Default: 15.
    pub hook_speed: f32,
    /// The hook counts as arrived within this distance of its target.
    /// Default: 0.01.
    pub arrive_epsilon: f32,
    /// Upper bound on the desired approach speed while pulling.
    /// Default: 10.
    pub max_pull_speed: f32,
    /// Desired-speed gain per unit of distance beyond the stand-off.
    /// Default: 2.
    pub approach_gain: f32,
    /// Multiplier on the corrective pull force. Default: 5.
    pub responsiveness: f32,
    /// Pulling stops once the player is this close to the hook.
    /// Default: 3.
    pub min_standoff: f32,
    /// While attached, stretching past this length triggers an automatic
    /// pull. Default: 10.
    pub max_swing_length: f32,
    /// Suspend the host's locomotion controller while pulling.
    /// Default: false.
    pub disable_locomotion_during_pull: bool,
    /// Rope solver tuning.
    pub rope: RopeConfig,
}

impl GrappleConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        GrappleConfig {
            max_range: 10.0,
            hook_speed: 15.0,
            arrive_epsilon: 0.01,
            max_pull_speed: 10.0,
            approach_gain: 2.0,
            responsiveness: 5.0,
            min_standoff: 3.0,
            max_swing_length: 10.0,
            disable_locomotion_during_pull: false,
            rope: RopeConfig::new(),
        }
    }

    /// Set the maximum cast range.
    pub fn with_max_range(mut self, range: f32) -> Self {
        self.max_range = range;
        self
    }

    /// Set the hook travel speed.
    pub fn with_hook_speed(mut self, speed: f32) -> Self {
        self.hook_speed = speed;
        self
    }

    /// Set the hook arrival epsilon.
    pub fn with_arrive_epsilon(mut self, epsilon: f32) -> Self {
        self.arrive_epsilon = epsilon;
        self
    }

    /// Set the maximum pull approach speed.
    pub fn with_max_pull_speed(mut self, speed: f32) -> Self {
        self.max_pull_speed = speed;
        self
    }

    /// Set the desired-speed gain.
    pub fn with_approach_gain(mut self, gain: f32) -> Self {
        self.approach_gain = gain;
        self
    }

    /// Set the pull-force responsiveness multiplier.
    pub fn with_responsiveness(mut self, responsiveness: f32) -> Self {
        self.responsiveness = responsiveness;
        self
    }

    /// Set the minimum stand-off distance.
    pub fn with_min_standoff(mut self, standoff: f32) -> Self {
        self.min_standoff = standoff;
        self
    }

    /// Set the auto-pull swing length.
    pub fn with_max_swing_length(mut self, length: f32) -> Self {
        self.max_swing_length = length;
        self
    }

    /// Suspend the host's locomotion controller while pulling.
    pub fn with_locomotion_disabled_during_pull(mut self, disable: bool) -> Self {
        self.disable_locomotion_during_pull = disable;
        self
    }

    /// Set the rope solver tuning.
    pub fn with_rope(mut self, rope: RopeConfig) -> Self {
        self.rope = rope;
        self
    }

    /// Check every parameter; invalid values are fatal at initialization.
    pub fn validate(&self) -> Result<(), GrappleError> {
        if !(self.max_range > 0.0 && self.max_range.is_finite()) {
            return Err(GrappleError::InvalidRange(self.max_range));
        }
        if !(self.hook_speed > 0.0 && self.hook_speed.is_finite()) {
            return Err(GrappleError::InvalidSpeed(self.hook_speed));
        }
        if !(self.arrive_epsilon >= 0.0 && self.arrive_epsilon.is_finite()) {
            return Err(GrappleError::InvalidEpsilon(self.arrive_epsilon));
        }
        if !(self.max_pull_speed > 0.0 && self.max_pull_speed.is_finite()) {
            return Err(GrappleError::InvalidPullSpeed(self.max_pull_speed));
        }
        if !(self.approach_gain > 0.0 && self.approach_gain.is_finite()) {
            return Err(GrappleError::InvalidGain(self.approach_gain));
        }
        if !(self.responsiveness > 0.0 && self.responsiveness.is_finite()) {
            return Err(GrappleError::InvalidResponsiveness(self.responsiveness));
        }
        if !(self.min_standoff >= 0.0 && self.min_standoff.is_finite()) {
            return Err(GrappleError::InvalidStandoff(self.min_standoff));
        }
        if !(self.max_swing_length > 0.0 && self.max_swing_length.is_finite()) {
            return Err(GrappleError::InvalidSwingLength(self.max_swing_length));
        }
        self.rope.validate()
    }
}

impl Default for GrappleConfig {
    fn default() -> Self {
        Self::new()
    }
}
