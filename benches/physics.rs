//! Benchmarks for the rope solver and the full grapple cycle.

use criterion::{criterion_group, criterion_main, Criterion};
use glam::Vec2;
use hookline::{
    ColliderId, CollisionWorld, GrappleConfig, GrappleController, NoOpStepObserver, PlayerBody,
    RayHit, Rope, RopeConfig, RopeSolver, SurfaceKind,
};

struct WallWorld {
    x: f32,
}

impl CollisionWorld for WallWorld {
    fn raycast(&self, origin: Vec2, dir: Vec2, max_distance: f32) -> Option<RayHit> {
        if dir.x <= 0.0 {
            return None;
        }
        let t = (self.x - origin.x) / dir.x;
        if t < 0.0 || t > max_distance {
            return None;
        }
        Some(RayHit {
            point: origin + dir * t,
            kind: SurfaceKind::Grapple,
        })
    }
    fn overlap_circle(&self, _center: Vec2, _radius: f32, _out: &mut Vec<ColliderId>) {}
    fn closest_surface_point(&self, _collider: ColliderId, point: Vec2) -> Vec2 {
        point
    }
    fn collider_center(&self, _collider: ColliderId) -> Vec2 {
        Vec2::new(self.x, 0.0)
    }
}

struct BenchBody {
    pos: Vec2,
}

impl PlayerBody for BenchBody {
    fn position(&self) -> Vec2 {
        self.pos
    }
    fn velocity(&self) -> Vec2 {
        Vec2::ZERO
    }
    fn mass(&self) -> f32 {
        1.0
    }
    fn apply_force(&mut self, _force: Vec2) {}
}

fn bench_rope_step(c: &mut Criterion) {
    c.bench_function("rope_50_segments_60_steps", |b| {
        b.iter(|| {
            let mut rope = Rope::new(0.2, 50);
            rope.grow_toward(Vec2::ZERO, Vec2::new(10.5, 0.0));
            let config = RopeConfig::new().with_gravity(Vec2::new(0.0, -9.81));
            let mut solver = RopeSolver::new();
            for _ in 0..60 {
                solver.step(
                    &mut rope,
                    Vec2::ZERO,
                    Vec2::new(10.0, 0.0),
                    1.0 / 60.0,
                    &config,
                    &WallWorld { x: 100.0 },
                    &mut NoOpStepObserver,
                );
            }
            rope.positions()
        });
    });
}

fn bench_grapple_cycle(c: &mut Criterion) {
    c.bench_function("grapple_fire_attach_120_ticks", |b| {
        b.iter(|| {
            let world = WallWorld { x: 5.0 };
            let mut body = BenchBody { pos: Vec2::ZERO };
            let mut ctrl = GrappleController::new(body.pos, GrappleConfig::new()).unwrap();
            ctrl.fire(&world, &body, Vec2::new(5.0, 0.0));
            for _ in 0..120 {
                ctrl.fixed_step(&world, &mut body, 1.0 / 60.0);
                if ctrl.hook().position().x >= 5.0 - 1e-3 {
                    ctrl.report_contact(SurfaceKind::Grapple);
                }
            }
            ctrl.rope_positions()
        });
    });
}

criterion_group!(benches, bench_rope_step, bench_grapple_cycle);
criterion_main!(benches);
