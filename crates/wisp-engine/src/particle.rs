//! A single pooled trail particle.

use crate::stage::{Drawable, LineDrawable};

/// One particle: lifetime bookkeeping plus its owned display handles.
/// Particles are owned exclusively by the pool and recycled, never dropped.
#[derive(Debug, Clone)]
pub struct Particle<S, L> {
    /// Seconds to live.
    pub life: f32,
    /// Age in seconds. Never exceeds `life` while active.
    pub time: f32,
    pub sprite: S,
    pub line: L,
}

impl<S: Drawable, L: LineDrawable> Particle<S, L> {
    pub fn new(sprite: S, line: L) -> Self {
        Self {
            life: 0.0,
            time: 0.0,
            sprite,
            line,
        }
    }

    /// Age by `dt`. Returns false once the particle has outlived `life`.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.time += dt;
        self.time <= self.life
    }

    /// Linear fade: 1 at spawn, 0 at end of life.
    pub fn fade(&self) -> f32 {
        1.0 - self.time / self.life
    }
}
