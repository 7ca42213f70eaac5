//! The trail effect itself: one wandering emission point feeding a pooled
//! stream of fading particles, with periodic connecting line segments.

use glam::Vec2;

use crate::color::hsl_to_rgb;
use crate::config::TrailConfig;
use crate::motion::{Mover, Viewport};
use crate::pool::ParticlePool;
use crate::rng::Rng;
use crate::stage::{Drawable, LineDrawable, LineStyle, Stage};
use crate::wander::Wanderer;

/// Phase advance per spawn event, driving the lateral sine.
const PHASE_STEP: f32 = 0.01;

/// Complete simulation state for one trail instance.
///
/// All state lives here rather than in module globals, so multiple
/// independent trails can coexist and each one is unit-testable.
pub struct TrailEffect<St: Stage> {
    config: TrailConfig,
    viewport: Viewport,
    mover: Mover,
    last_spawn: Vec2,
    hue: Wanderer,
    pool: ParticlePool<St::Sprite, St::Line>,
    rng: Rng,
    /// Monotonic spawn-phase accumulator.
    phase: f32,
    /// Wraps at `particles_per_line`.
    line_counter: u32,
}

impl<St: Stage> TrailEffect<St> {
    pub fn new(config: TrailConfig, viewport: Viewport, seed: u64) -> Self {
        let mut rng = Rng::new(seed);
        let mover = Mover::spawn(viewport, config.speed, &mut rng);
        let last_spawn = mover.pos;
        let hue = Wanderer::new(config.hue, &mut rng);
        Self {
            config,
            viewport,
            mover,
            last_spawn,
            hue,
            pool: ParticlePool::new(),
            rng,
            phase: 0.0,
            line_counter: 0,
        }
    }

    /// The host canvas changed size; the bounce boundary follows it.
    pub fn resize(&mut self, stage: &mut St, width: f32, height: f32) {
        log::debug!("trail viewport resized to {}x{}", width, height);
        self.viewport = Viewport::new(width, height);
        stage.resize(width, height);
    }

    /// One simulation frame: integrate, age, then spawn along the path.
    pub fn update(&mut self, stage: &mut St, dt: f32) {
        self.mover.step(
            self.viewport,
            self.config.bounce_buffer,
            self.config.speed,
            dt,
        );

        self.pool.update(dt);

        // The hue drifts every frame, moving or not.
        let hue = self.hue.advance(dt, &mut self.rng);

        let to_emitter = self.mover.pos - self.last_spawn;
        let mut distance = to_emitter.length();
        // Stationary emitter: nothing to normalize, nothing to spawn.
        if distance == 0.0 {
            return;
        }
        let dir = to_emitter / distance;
        let perp = Vec2::new(dir.y, -dir.x);
        let spacing = self.config.spacing;

        while distance >= spacing {
            self.phase += PHASE_STEP;
            self.last_spawn += dir * spacing;

            let spread = (self.phase * self.config.spread_modifier).sin() * self.config.spread;

            self.line_counter += 1;
            let with_line = self.line_counter >= self.config.particles_per_line;
            if with_line {
                self.line_counter -= self.config.particles_per_line;
            }

            let offset = perp * spread;
            self.spawn_one(
                stage,
                self.last_spawn + offset,
                self.config.scale * 1.1,
                hsl_to_rgb(hue, 100.0, 50.0),
                with_line,
            );
            self.spawn_one(
                stage,
                self.last_spawn - offset,
                self.config.scale,
                hsl_to_rgb(hue, 100.0, 10.0),
                with_line,
            );

            distance -= spacing;
        }
    }

    fn spawn_one(&mut self, stage: &mut St, pos: Vec2, scale: f32, tint: u32, with_line: bool) {
        let mut p = self.pool.acquire(stage);
        p.time = 0.0;
        p.life = self.config.particle_life;

        p.sprite.set_position(pos);
        p.sprite.set_scale(scale);
        p.sprite.set_tint(tint);
        p.sprite.set_alpha(1.0);
        p.sprite.attach();

        if with_line {
            p.line.clear();
            p.line.set_style(LineStyle {
                width: self.config.line_width,
                color: self.config.line_color,
                alpha: self.config.line_alpha,
            });
            p.line.move_to(self.last_spawn);
            p.line.line_to(pos);
            p.line.set_alpha(1.0);
            p.line.attach();
        }

        self.pool.commit(p);
    }

    pub fn pool(&self) -> &ParticlePool<St::Sprite, St::Line> {
        &self.pool
    }

    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Current emission point, for hosts that want to follow it.
    pub fn emitter_pos(&self) -> Vec2 {
        self.mover.pos
    }

    #[cfg(test)]
    fn place(&mut self, pos: Vec2, vel: Vec2) {
        self.mover.pos = pos;
        self.mover.vel = vel;
        self.last_spawn = pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::mock::MockStage;

    fn effect(stage_size: f32) -> TrailEffect<MockStage> {
        let viewport = Viewport::new(stage_size, stage_size);
        TrailEffect::new(TrailConfig::default(), viewport, 42)
    }

    #[test]
    fn travel_of_seven_with_spacing_two_spawns_three_pairs() {
        let mut stage = MockStage::default();
        let mut fx = effect(1000.0);
        // Move exactly 7 px in one frame: distances 7, 5, 3 spawn, stop at 1.
        fx.place(Vec2::new(100.0, 100.0), Vec2::new(7.0, 0.0));
        fx.update(&mut stage, 1.0);
        assert_eq!(fx.pool().active_len(), 6); // 3 iterations, 2 particles each
        assert_eq!(fx.last_spawn, Vec2::new(106.0, 100.0));
    }

    #[test]
    fn stationary_emitter_spawns_nothing() {
        let mut stage = MockStage::default();
        let mut fx = effect(1000.0);
        fx.place(Vec2::new(500.0, 500.0), Vec2::ZERO);
        fx.update(&mut stage, 1.0 / 30.0);
        assert_eq!(fx.pool().active_len(), 0);
        assert!(fx.last_spawn.x.is_finite() && fx.last_spawn.y.is_finite());
    }

    #[test]
    fn spawn_points_advance_along_direction() {
        let mut stage = MockStage::default();
        let mut fx = effect(1000.0);
        fx.place(Vec2::new(100.0, 100.0), Vec2::new(0.0, 5.0));
        fx.update(&mut stage, 1.0);
        // Two spacing steps straight down.
        assert_eq!(fx.last_spawn, Vec2::new(100.0, 104.0));
    }

    #[test]
    fn particles_spawn_in_symmetric_pairs() {
        let mut stage = MockStage::default();
        let mut fx = effect(1000.0);
        fx.place(Vec2::new(100.0, 100.0), Vec2::new(2.0, 0.0));
        fx.update(&mut stage, 1.0);

        let pair: Vec<_> = fx.pool().iter_active().collect();
        assert_eq!(pair.len(), 2);
        let spawn = fx.last_spawn;
        let d0 = pair[0].sprite.pos - spawn;
        let d1 = pair[1].sprite.pos - spawn;
        // Mirrored across the spawn point, perpendicular to travel.
        assert!((d0 + d1).length() < 1e-4);
        assert!(d0.x.abs() < 1e-4);
        // Leading particle is the brighter, slightly larger one.
        assert!(pair[0].sprite.scale > pair[1].sprite.scale);
        assert_ne!(pair[0].sprite.tint, pair[1].sprite.tint);
    }

    #[test]
    fn every_sixth_spawn_event_gets_lines() {
        let mut stage = MockStage::default();
        let mut fx = effect(10_000.0);
        // 24 px of travel at spacing 2 = 12 spawn events = 2 line events.
        fx.place(Vec2::new(100.0, 100.0), Vec2::new(24.0, 0.0));
        fx.update(&mut stage, 1.0);

        assert_eq!(fx.pool().active_len(), 24);
        let with_lines = fx
            .pool()
            .iter_active()
            .filter(|p| p.line.attached)
            .count();
        assert_eq!(with_lines, 4); // 2 events, 2 particles each

        for p in fx.pool().iter_active().filter(|p| p.line.attached) {
            assert!(p.line.has_path);
            let style = p.line.style.expect("line event sets style");
            assert_eq!(style.width, 2.0);
            assert_eq!(style.color, 0xffffff);
            assert!((style.alpha - 0.3).abs() < 1e-6);
        }
    }

    #[test]
    fn line_connects_spawn_point_to_particle() {
        let mut stage = MockStage::default();
        let mut fx = effect(10_000.0);
        fx.place(Vec2::new(100.0, 100.0), Vec2::new(12.0, 0.0));
        fx.update(&mut stage, 1.0);

        for p in fx.pool().iter_active().filter(|p| p.line.attached) {
            assert_eq!(p.line.end, p.sprite.pos);
            // Start lies on the travel axis.
            assert!((p.line.start.y - 100.0).abs() < 1e-4);
        }
    }

    #[test]
    fn particles_fade_and_recycle_over_time() {
        let mut stage = MockStage::default();
        let mut fx = effect(1000.0);
        fx.place(Vec2::new(100.0, 100.0), Vec2::new(4.0, 0.0));
        fx.update(&mut stage, 1.0);
        let spawned = fx.pool().active_len();
        assert!(spawned > 0);

        // Stop moving and let them age out (life is 10 s).
        fx.place(fx.last_spawn, Vec2::ZERO);
        for _ in 0..20 {
            fx.update(&mut stage, 1.0);
        }
        assert_eq!(fx.pool().active_len(), 0);
        assert_eq!(fx.pool().free_len(), spawned);
        assert_eq!(fx.pool().allocated(), spawned);
    }

    #[test]
    fn recycled_sprites_are_reattached_on_respawn() {
        let mut stage = MockStage::default();
        let mut fx = effect(1000.0);
        fx.place(Vec2::new(100.0, 100.0), Vec2::new(4.0, 0.0));
        fx.update(&mut stage, 1.0);
        let created = stage.sprites_created;

        fx.place(fx.last_spawn, Vec2::ZERO);
        for _ in 0..20 {
            fx.update(&mut stage, 1.0);
        }

        fx.place(Vec2::new(200.0, 200.0), Vec2::new(4.0, 0.0));
        fx.update(&mut stage, 1.0);
        assert_eq!(stage.sprites_created, created, "handles must be reused");
        for p in fx.pool().iter_active() {
            assert!(p.sprite.attached);
            assert_eq!(p.sprite.alpha, 1.0);
        }
    }

    #[test]
    fn resize_updates_viewport_and_stage() {
        let mut stage = MockStage::default();
        let mut fx = effect(1000.0);
        fx.resize(&mut stage, 640.0, 480.0);
        assert_eq!(fx.viewport(), Viewport::new(640.0, 480.0));
        assert_eq!(stage.size, (640.0, 480.0));
    }
}
