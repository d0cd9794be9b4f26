//! Grapple lifecycle: fire, extend, attach, pull, retract.

use glam::Vec2;
use tracing::debug;

use crate::config::GrappleConfig;
use crate::error::GrappleError;
use crate::hook::Hook;
use crate::observer::NoOpStepObserver;
use crate::pull::pull_force;
use crate::rope::Rope;
use crate::solver::RopeSolver;
use crate::world::{CollisionWorld, PlayerBody, SurfaceKind};

/// Lifecycle state of the grapple. Exactly one is active at a time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GrappleState {
    #[default]
    Idle,
    Extending,
    Attached,
    Pulling,
    Retracting,
}

/// Drives the hook, rope, and pull force through the grapple lifecycle.
///
/// The whole pipeline runs once per physics tick in [`fixed_step`]: hook
/// motion, state transition evaluation (guards in a fixed order), rope
/// integrate/constrain/collide, and pull-force application. Rendering
/// reads [`rope_positions`] after the tick; it never mutates rope state.
///
/// [`fixed_step`]: GrappleController::fixed_step
/// [`rope_positions`]: GrappleController::rope_positions
pub struct GrappleController {
    state: GrappleState,
    hook: Hook,
    rope: Rope,
    solver: RopeSolver,
    config: GrappleConfig,
    locomotion_suspended: bool,
}

impl GrappleController {
    /// Create a controller with the hook resting at the player.
    ///
    /// Invalid configuration values are fatal here; no controller is ever
    /// constructed from one.
    pub fn new(player_pos: Vec2, config: GrappleConfig) -> Result<Self, GrappleError> {
        config.validate()?;
        Ok(GrappleController {
            state: GrappleState::Idle,
            hook: Hook::new(player_pos, config.hook_speed),
            rope: Rope::new(config.rope.segment_length, config.rope.max_segments),
            solver: RopeSolver::new(),
            config,
            locomotion_suspended: false,
        })
    }

    pub fn state(&self) -> GrappleState {
        self.state
    }

    /// True while the hook is anchored (attached or pulling). Hosts use
    /// this to scale locomotion authority and gate jumps.
    pub fn is_grappling(&self) -> bool {
        matches!(self.state, GrappleState::Attached | GrappleState::Pulling)
    }

    pub fn hook(&self) -> &Hook {
        &self.hook
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    /// Rope geometry for the presentation step, player end first.
    pub fn rope_positions(&self) -> Vec<Vec2> {
        self.rope.positions()
    }

    pub fn config(&self) -> &GrappleConfig {
        &self.config
    }

    /// Cast the hook toward `aim`. Only honored while idle.
    ///
    /// The target is clamped to the maximum range from the player at fire
    /// time. A cast with no raycast hit along the path is a silent no-op,
    /// as is a degenerate zero-length aim direction.
    pub fn fire<W: CollisionWorld, B: PlayerBody>(&mut self, world: &W, body: &B, aim: Vec2) {
        if self.state != GrappleState::Idle {
            return;
        }
        let player = body.position();
        let to_aim = aim - player;
        let Some(dir) = to_aim.try_normalize() else {
            return;
        };
        let Some(hit) = world.raycast(player, dir, self.config.max_range) else {
            return; // nothing along the cast path to anchor to
        };

        let distance = to_aim.length().min(self.config.max_range);
        self.rope.clear();
        self.hook.detach();
        self.hook.snap_to(player);
        self.hook.set_target(player + dir * distance);
        debug!(hook_target = ?self.hook.target(), cast_hit = ?hit.point, "hook fired");
        self.transition(GrappleState::Extending);
    }

    /// Start hauling the player toward the hook. Only honored while
    /// attached.
    pub fn pull<B: PlayerBody>(&mut self, body: &mut B) {
        if self.state == GrappleState::Attached {
            self.begin_pull(body);
        }
    }

    /// Recall the hook. Honored in any non-idle state; acts as a release
    /// while pulling.
    pub fn retract<B: PlayerBody>(&mut self, body: &mut B) {
        if matches!(self.state, GrappleState::Idle | GrappleState::Retracting) {
            return;
        }
        self.begin_retract(body);
    }

    /// Deliver the hook's trigger/overlap report for this tick. Consumed
    /// by the next [`fixed_step`]; unknown kinds are grapple-invalid.
    ///
    /// [`fixed_step`]: GrappleController::fixed_step
    pub fn report_contact(&mut self, kind: SurfaceKind) {
        self.hook.report_contact(kind);
    }

    /// Run one physics tick of the whole grapple pipeline.
    pub fn fixed_step<W: CollisionWorld, B: PlayerBody>(
        &mut self,
        world: &W,
        body: &mut B,
        dt: f32,
    ) {
        let player = body.position();

        match self.state {
            GrappleState::Idle => {
                // hook trails the player so the next cast starts from it
                self.hook.snap_to(player);
            }
            GrappleState::Extending => {
                let arrived = self.hook.advance(dt, self.config.arrive_epsilon);
                self.rope.grow_toward(player, self.hook.position());

                match self.hook.take_contact() {
                    Some(kind) if kind.grapple_valid() => {
                        self.hook.attach();
                        debug!(point = ?self.hook.position(), "hook attached");
                        self.transition(GrappleState::Attached);
                    }
                    Some(kind) => {
                        debug!(?kind, "hook struck an invalid surface");
                        self.begin_retract(body);
                    }
                    None if arrived => {
                        // reached the cast point with nothing to anchor to
                        self.begin_retract(body);
                    }
                    None => {}
                }
            }
            GrappleState::Attached => {
                // guard evaluated every tick: rope ran out, start hauling
                let distance = player.distance(self.hook.position());
                if distance > self.config.max_swing_length {
                    debug!(distance, "swing length exceeded, auto-pull");
                    self.begin_pull(body);
                }
            }
            GrappleState::Pulling => {
                let hook_pos = self.hook.position();
                if player.distance(hook_pos) <= self.config.min_standoff {
                    debug!("pull reached stand-off distance");
                    self.end_pull(body);
                } else {
                    let force =
                        pull_force(player, body.velocity(), body.mass(), hook_pos, &self.config);
                    if force != Vec2::ZERO {
                        body.apply_force(force);
                    }
                    self.rope.shrink_toward(player, hook_pos);
                }
            }
            GrappleState::Retracting => {
                // the player keeps moving, so the recall target is live
                self.hook.set_target(player);
                let arrived = self.hook.advance(dt, self.config.arrive_epsilon);
                self.rope.shrink_toward(player, self.hook.position());

                if arrived {
                    self.rope.clear();
                    self.restore_locomotion(body);
                    self.transition(GrappleState::Idle);
                }
            }
        }

        if !self.rope.is_empty() {
            self.solver.step(
                &mut self.rope,
                body.position(),
                self.hook.position(),
                dt,
                &self.config.rope,
                world,
                &mut NoOpStepObserver,
            );
        }

        // stale contact reports never outlive the tick
        self.hook.take_contact();
    }

    fn transition(&mut self, next: GrappleState) {
        if self.state != next {
            debug!(from = ?self.state, to = ?next, "grapple state change");
            self.state = next;
        }
    }

    fn begin_pull<B: PlayerBody>(&mut self, body: &mut B) {
        if self.config.disable_locomotion_during_pull && !self.locomotion_suspended {
            body.set_locomotion_enabled(false);
            self.locomotion_suspended = true;
        }
        self.transition(GrappleState::Pulling);
    }

    fn end_pull<B: PlayerBody>(&mut self, body: &mut B) {
        self.restore_locomotion(body);
        self.transition(GrappleState::Attached);
    }

    fn begin_retract<B: PlayerBody>(&mut self, body: &mut B) {
        self.hook.detach();
        self.hook.set_target(body.position());
        self.restore_locomotion(body);
        self.transition(GrappleState::Retracting);
    }

    fn restore_locomotion<B: PlayerBody>(&mut self, body: &mut B) {
        if self.locomotion_suspended {
            body.set_locomotion_enabled(true);
            self.locomotion_suspended = false;
        }
    }
}
