//! Pull force model: hauls the player toward the anchored hook.

use glam::Vec2;

use crate::config::GrappleConfig;

/// Corrective force that hauls the player toward the hook.
///
/// The model targets a desired approach speed rather than writing velocity
/// directly, so it composes with the host's rigid-body integration:
///
/// - desired speed = `min(max_pull_speed, (distance - min_standoff) * approach_gain)`
/// - force = `dir * (desired - velocity·dir) * mass * responsiveness`
///
/// Returns zero when the player is within the stand-off distance, or when
/// the player already moves toward the hook at or above the desired speed
/// (the pull never brakes the player).
pub fn pull_force(
    player_pos: Vec2,
    player_vel: Vec2,
    mass: f32,
    hook_pos: Vec2,
    config: &GrappleConfig,
) -> Vec2 {
    let to_hook = hook_pos - player_pos;
    let distance = to_hook.length();
    if distance <= config.min_standoff {
        return Vec2::ZERO;
    }

    let dir = to_hook / distance;
    let desired = ((distance - config.min_standoff) * config.approach_gain)
        .min(config.max_pull_speed);
    let toward_hook = player_vel.dot(dir);
    let needed = desired - toward_hook;
    if needed <= 0.0 {
        return Vec2::ZERO;
    }

    dir * (needed * mass * config.responsiveness)
}
