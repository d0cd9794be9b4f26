//! Seams to the host's physics engine and player body.

use glam::Vec2;

/// Opaque handle to a solid collider owned by the host's physics engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColliderId(pub u32);

/// Closed classification of a surface the hook or rope can touch.
///
/// Resolved once by the host per contact and passed in by value; the core
/// never inspects tags or layer masks. Anything other than `Grapple` is
/// treated as grapple-invalid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SurfaceKind {
    /// A valid anchor target for the hook.
    Grapple,
    /// Solid geometry the hook cannot anchor to.
    Solid,
    /// Anything the host did not classify.
    Unknown,
}

impl SurfaceKind {
    /// Whether the hook may anchor to this surface.
    pub fn grapple_valid(self) -> bool {
        matches!(self, SurfaceKind::Grapple)
    }
}

/// A raycast hit returned by the host's physics engine.
///
/// On the fire path the hit gates the command: a cast with no hit is a
/// silent no-op, while the hook still flies toward the range-clamped aim
/// point. The surface the hook finally anchors to is decided by contact
/// reports in flight, not by this hit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayHit {
    pub point: Vec2,
    pub kind: SurfaceKind,
}

/// Spatial queries the rope and grapple consume from the host's physics
/// engine. The core only reads; it never moves the host's colliders.
pub trait CollisionWorld {
    /// Nearest solid hit along `dir` from `origin`, within `max_distance`.
    /// `dir` is expected to be unit length.
    fn raycast(&self, origin: Vec2, dir: Vec2, max_distance: f32) -> Option<RayHit>;

    /// Append every solid collider overlapping the circle to `out`.
    fn overlap_circle(&self, center: Vec2, radius: f32, out: &mut Vec<ColliderId>);

    /// Closest point on the collider's surface to `point`.
    fn closest_surface_point(&self, collider: ColliderId, point: Vec2) -> Vec2;

    /// Collider centroid. Fallback reference for contact normals when the
    /// query point sits exactly on the surface.
    fn collider_center(&self, collider: ColliderId) -> Vec2;
}

/// The player's rigid body, owned by the host.
///
/// Mutated only through force application and the locomotion toggle; the
/// core never writes its position or velocity directly.
pub trait PlayerBody {
    fn position(&self) -> Vec2;
    fn velocity(&self) -> Vec2;
    fn mass(&self) -> f32;
    fn apply_force(&mut self, force: Vec2);

    /// Enable or disable the host's own locomotion controller. Default
    /// no-op for hosts that keep full control while grappling.
    fn set_locomotion_enabled(&mut self, _enabled: bool) {}
}
