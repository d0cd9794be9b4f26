//! Hook projectile: clamped move-toward travel and contact reports.

use glam::Vec2;

use crate::world::SurfaceKind;

/// The grappling hook projectile.
///
/// The hook flies at a fixed speed toward its target and never overshoots:
/// once the remaining distance is under one tick's travel it snaps exactly
/// onto the target. Contact reports delivered by the host are transient
/// and consumed within the same tick.
#[derive(Clone, Debug)]
pub struct Hook {
    pos: Vec2,
    target: Vec2,
    speed: f32,
    attached: bool,
    contact: Option<SurfaceKind>,
}

impl Hook {
    pub fn new(pos: Vec2, speed: f32) -> Self {
        Hook {
            pos,
            target: pos,
            speed,
            attached: false,
            contact: None,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    /// Teleport the hook, e.g. to trail the idle player.
    pub fn snap_to(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    pub fn attached(&self) -> bool {
        self.attached
    }

    pub(crate) fn attach(&mut self) {
        self.attached = true;
    }

    pub(crate) fn detach(&mut self) {
        self.attached = false;
    }

    /// Advance one tick toward the target. Returns true once the hook is
    /// within `epsilon` of the target.
    pub fn advance(&mut self, dt: f32, epsilon: f32) -> bool {
        let to_target = self.target - self.pos;
        let dist = to_target.length();
        let step = self.speed * dt;

        if dist <= step {
            self.pos = self.target;
        } else {
            self.pos += to_target / dist * step;
        }

        self.pos.distance(self.target) <= epsilon
    }

    /// Record a trigger/overlap report from the host. The first report of
    /// a tick wins; later ones in the same tick are ignored.
    pub fn report_contact(&mut self, kind: SurfaceKind) {
        self.contact.get_or_insert(kind);
    }

    /// Consume this tick's contact report, if any.
    pub fn take_contact(&mut self) -> Option<SurfaceKind> {
        self.contact.take()
    }
}
