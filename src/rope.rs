//! Rope state: a fixed-capacity chain of Verlet point masses.

use glam::Vec2;

/// Minimum active segment count while the rope exists. Keeps a visible
/// span between the anchors during retraction.
pub const MIN_ACTIVE_SEGMENTS: usize = 2;

/// One rope point mass — position-based dynamics with implicit velocity.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RopeSegment {
    pub pos: Vec2,
    pub prev_pos: Vec2,
}

impl RopeSegment {
    /// Spawn a segment at rest at `pos`.
    pub fn new(pos: Vec2) -> Self {
        RopeSegment { pos, prev_pos: pos }
    }

    /// Implicit per-tick velocity, `pos - prev_pos`.
    pub fn velocity_raw(&self) -> Vec2 {
        self.pos - self.prev_pos
    }
}

/// Ordered chain of segments between the player anchor (index 0) and the
/// hook anchor (last active index).
///
/// Storage is allocated once at `max_segments`; the active count grows
/// while the hook extends and shrinks while retracting or pulling, never
/// below [`MIN_ACTIVE_SEGMENTS`] while the rope exists. Only the grapple
/// controller adjusts the count; the solver mutates positions in place.
#[derive(Clone, Debug)]
pub struct Rope {
    segments: Vec<RopeSegment>,
    segment_length: f32,
    max_segments: usize,
}

impl Rope {
    pub fn new(segment_length: f32, max_segments: usize) -> Self {
        Rope {
            segments: Vec::with_capacity(max_segments),
            segment_length,
            max_segments,
        }
    }

    /// Number of active segments.
    pub fn active(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Rest length of one segment.
    pub fn segment_length(&self) -> f32 {
        self.segment_length
    }

    pub fn max_segments(&self) -> usize {
        self.max_segments
    }

    /// Drop every segment. Called when retraction completes or a new cast
    /// begins.
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Grow the active count toward what the player-to-hook span supports:
    /// `floor(distance / segment_length)`, capped at the maximum.
    ///
    /// The first segment spawns exactly at the player; each later segment
    /// spawns one rest length beyond the previous one, toward the hook.
    pub fn grow_toward(&mut self, player: Vec2, hook: Vec2) {
        let distance = player.distance(hook);
        let target = ((distance / self.segment_length) as usize).min(self.max_segments);

        while self.segments.len() < target {
            let spawn_pos = match self.segments.last() {
                None => player,
                Some(last) => {
                    let dir = (hook - last.pos).normalize_or_zero();
                    last.pos + dir * self.segment_length
                }
            };
            self.segments.push(RopeSegment::new(spawn_pos));
        }
    }

    /// Shrink the active count toward what the player-to-hook span
    /// supports, floored at [`MIN_ACTIVE_SEGMENTS`]. Segments are removed
    /// from the hook end.
    pub fn shrink_toward(&mut self, player: Vec2, hook: Vec2) {
        if self.segments.is_empty() {
            return;
        }
        let distance = player.distance(hook);
        let target = ((distance / self.segment_length) as usize).max(MIN_ACTIVE_SEGMENTS);

        while self.segments.len() > target && self.segments.len() > MIN_ACTIVE_SEGMENTS {
            self.segments.pop();
        }
    }

    /// Current segment positions, player end first. Refreshed view for the
    /// presentation step; rendering never mutates rope state.
    pub fn positions(&self) -> Vec<Vec2> {
        self.segments.iter().map(|s| s.pos).collect()
    }

    pub fn segments(&self) -> &[RopeSegment] {
        &self.segments
    }

    pub fn segments_mut(&mut self) -> &mut [RopeSegment] {
        &mut self.segments
    }
}
