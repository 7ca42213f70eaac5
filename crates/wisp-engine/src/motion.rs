//! Emission point motion: integration and padded-boundary bouncing.

use glam::Vec2;

use crate::rng::Rng;

/// Viewport dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// The wandering emission point: position plus velocity, bouncing inside a
/// viewport padded by `buffer` on every side.
#[derive(Debug, Clone)]
pub struct Mover {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Mover {
    /// Place the emission point at a random position inside the viewport,
    /// heading along a jittered diagonal at exactly `speed`.
    pub fn spawn(viewport: Viewport, speed: f32, rng: &mut Rng) -> Self {
        let pos = Vec2::new(
            rng.range_f32(0.0, viewport.width),
            rng.range_f32(0.0, viewport.height),
        );
        let degrees =
            rng.range_i32(0, 3) as f32 * 90.0 + 45.0 - rng.range_f32(-15.0, 15.0);
        let angle = degrees.to_radians();
        Self {
            pos,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
        }
    }

    /// Integrate one step and bounce off the padded viewport boundary.
    ///
    /// On crossing a boundary the position is clamped to it and the
    /// corresponding velocity component reflected inward; after any hit the
    /// velocity is rescaled to not exceed `speed_cap`. Returns whether a
    /// boundary was hit this step.
    pub fn step(&mut self, viewport: Viewport, buffer: f32, speed_cap: f32, dt: f32) -> bool {
        self.pos += self.vel * dt;

        let mut hit = false;

        if self.pos.x < -buffer {
            self.pos.x = -buffer;
            self.vel.x = self.vel.x.abs();
            hit = true;
        }
        if self.pos.x >= viewport.width + buffer {
            self.pos.x = viewport.width + buffer;
            self.vel.x = -self.vel.x.abs();
            hit = true;
        }
        if self.pos.y < -buffer {
            self.pos.y = -buffer;
            self.vel.y = self.vel.y.abs();
            hit = true;
        }
        if self.pos.y >= viewport.height + buffer {
            self.pos.y = viewport.height + buffer;
            self.vel.y = -self.vel.y.abs();
            hit = true;
        }

        if hit {
            let lsq = self.vel.length_squared();
            if lsq > speed_cap * speed_cap {
                self.vel *= speed_cap / lsq.sqrt();
            }
        }

        hit
    }
}
