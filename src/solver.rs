//! Iterative Verlet solver for the rope: integrate, constrain, collide.

use glam::Vec2;
use tracing::trace;

use crate::config::RopeConfig;
use crate::observer::StepObserver;
use crate::rope::Rope;
use crate::world::{ColliderId, CollisionWorld};

/// Squared length below which a direction is treated as degenerate.
const DEGENERATE_SQ: f32 = 1e-12;

/// Verlet-integrate every free segment. The two anchors (index 0 and the
/// last active index) are excluded; the constraint pass repositions them
/// explicitly so they always track the player and hook exactly.
pub fn integrate(rope: &mut Rope, config: &RopeConfig, dt: f32) {
    let count = rope.active();
    if count < 3 {
        return; // anchors only, nothing free to integrate
    }
    let accel = config.gravity * (dt * dt);
    let damping = config.damping;
    for seg in &mut rope.segments_mut()[1..count - 1] {
        let velocity = (seg.pos - seg.prev_pos) * damping;
        let new_pos = seg.pos + velocity + accel;
        seg.prev_pos = seg.pos;
        seg.pos = new_pos;
    }
}

/// One sequential constraint relaxation pass.
///
/// Pins segment 0 to the player and the last active segment to the hook,
/// then corrects each adjacent pair in ascending order, so later pairs see
/// the already-corrected positions of earlier ones. Pairs touching an
/// anchor move only their free endpoint, by the full correction; interior
/// pairs split the correction half and half. Anchors never move from a
/// correction, only from the pin step.
pub fn constrain(rope: &mut Rope, player: Vec2, hook: Vec2, config: &RopeConfig) {
    let count = rope.active();
    if count == 0 {
        return;
    }
    let rest = rope.segment_length();
    let stiffness = config.stiffness;
    let segments = rope.segments_mut();

    segments[0].pos = player;
    if count > 1 {
        segments[count - 1].pos = hook;
    }
    if count < 2 {
        return;
    }

    let last_pair = count - 2;
    for i in 0..count - 1 {
        let delta = segments[i + 1].pos - segments[i].pos;
        let dist = delta.length();
        if dist * dist < DEGENERATE_SQ {
            continue; // coincident pair, no correction direction
        }
        let correction = delta / dist * ((dist - rest) * stiffness);

        if i == 0 && i == last_pair {
            // both endpoints anchored
            continue;
        } else if i == 0 {
            segments[i + 1].pos -= correction;
        } else if i == last_pair {
            segments[i].pos += correction;
        } else {
            segments[i].pos += correction * 0.5;
            segments[i + 1].pos -= correction * 0.5;
        }
    }
}

/// Runs one fixed-timestep tick of rope relaxation.
///
/// Holds a reusable buffer for overlap queries so stepping is
/// allocation-free after warm-up.
pub struct RopeSolver {
    overlap_buf: Vec<ColliderId>,
}

impl RopeSolver {
    pub fn new() -> Self {
        RopeSolver {
            overlap_buf: Vec::with_capacity(8),
        }
    }

    /// Advance the rope one tick: Verlet-integrate the free segments, then
    /// run the constraint relaxation loop with a collision pass every
    /// `collision_interval` iterations.
    ///
    /// The collision pass does not need to converge within one tick; it
    /// biases the rope out of obstacles over several ticks.
    pub fn step<W: CollisionWorld, O: StepObserver>(
        &mut self,
        rope: &mut Rope,
        player: Vec2,
        hook: Vec2,
        dt: f32,
        config: &RopeConfig,
        world: &W,
        observer: &mut O,
    ) {
        if rope.is_empty() {
            return;
        }
        trace!(active = rope.active(), "rope step");

        integrate(rope, config, dt);
        observer.on_integrate();

        for i in 0..config.iterations {
            constrain(rope, player, hook, config);
            observer.on_constraint_iteration(i);

            if i % config.collision_interval == 0 {
                self.collide(rope, config, world);
                observer.on_collision_pass();
            }
        }

        observer.on_step_complete();
    }

    /// Push interior segments out of nearby solid colliders. Anchors are
    /// never touched by this pass.
    pub fn collide<W: CollisionWorld>(&mut self, rope: &mut Rope, config: &RopeConfig, world: &W) {
        let count = rope.active();
        if count < 3 {
            return;
        }
        let radius = config.probe_radius;
        for seg in &mut rope.segments_mut()[1..count - 1] {
            self.overlap_buf.clear();
            world.overlap_circle(seg.pos, radius, &mut self.overlap_buf);

            for &collider in &self.overlap_buf {
                let closest = world.closest_surface_point(collider, seg.pos);
                let dist = seg.pos.distance(closest);
                if dist >= radius {
                    continue;
                }

                let mut normal = seg.pos - closest;
                if normal.length_squared() < DEGENERATE_SQ {
                    // segment sits exactly on the surface point
                    normal = seg.pos - world.collider_center(collider);
                }
                let Some(dir) = normal.try_normalize() else {
                    continue;
                };
                seg.pos += dir * (radius - dist);
            }
        }
    }
}

impl Default for RopeSolver {
    fn default() -> Self {
        Self::new()
    }
}
