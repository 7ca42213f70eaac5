//! Bounded self-reversing random-walk generator.

use crate::config::WandererConfig;
use crate::rng::Rng;

/// A bounded scalar that drifts over time.
///
/// The value moves by `velocity * dt`, clamped to `[min, max]` with a
/// velocity sign flip at either bound. Independently, every random interval
/// in `[min_time, max_time]` the velocity magnitude is redrawn and its sign
/// reversed. Used to drift the trail hue.
#[derive(Debug, Clone)]
pub struct Wanderer {
    bounds: WandererConfig,
    value: f32,
    vel: f32,
    time_left: f32,
}

impl Wanderer {
    pub fn new(bounds: WandererConfig, rng: &mut Rng) -> Self {
        let value = rng.range_f32(bounds.min, bounds.max);
        let vel = rng.range_f32(bounds.min_vel, bounds.max_vel) * rng.sign();
        let time_left = rng.range_f32(bounds.min_time, bounds.max_time);
        Self {
            bounds,
            value,
            vel,
            time_left,
        }
    }

    /// Advance by `dt` seconds and return the new value.
    pub fn advance(&mut self, dt: f32, rng: &mut Rng) -> f32 {
        self.time_left -= dt;
        self.value += self.vel * dt;

        if self.value < self.bounds.min {
            self.value = self.bounds.min;
            self.vel = -self.vel;
        } else if self.value > self.bounds.max {
            self.value = self.bounds.max;
            self.vel = -self.vel;
        }

        if self.time_left < 0.0 {
            self.time_left = rng.range_f32(self.bounds.min_time, self.bounds.max_time);
            self.vel = -self.vel.signum() * rng.range_f32(self.bounds.min_vel, self.bounds.max_vel);
        }

        self.value
    }

    pub fn value(&self) -> f32 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hue_bounds() -> WandererConfig {
        WandererConfig {
            min: 0.0,
            max: 360.0,
            min_vel: 10.0,
            max_vel: 100.0,
            min_time: 5.0,
            max_time: 20.0,
        }
    }

    #[test]
    fn value_stays_in_bounds() {
        let mut rng = Rng::new(42);
        let mut w = Wanderer::new(hue_bounds(), &mut rng);
        for _ in 0..10_000 {
            let v = w.advance(1.0 / 30.0, &mut rng);
            assert!((0.0..=360.0).contains(&v), "out of bounds: {}", v);
        }
    }

    #[test]
    fn large_single_step_is_clamped() {
        let mut rng = Rng::new(42);
        let mut w = Wanderer::new(hue_bounds(), &mut rng);
        // A step far larger than any frame would produce; an unclamped walk
        // would overshoot by thousands of degrees.
        let v = w.advance(100.0, &mut rng);
        assert!((0.0..=360.0).contains(&v), "out of bounds: {}", v);
    }

    #[test]
    fn boundary_hit_reverses_velocity() {
        let mut rng = Rng::new(1);
        let mut w = Wanderer::new(hue_bounds(), &mut rng);
        w.value = 359.0;
        w.vel = 100.0;
        w.time_left = 1000.0; // keep the timer out of the way
        w.advance(1.0, &mut rng);
        assert_eq!(w.value, 360.0);
        assert_eq!(w.vel, -100.0);
    }

    #[test]
    fn timeout_redraws_velocity_with_reversed_sign() {
        let mut rng = Rng::new(1);
        let mut w = Wanderer::new(hue_bounds(), &mut rng);
        w.value = 180.0;
        w.vel = 50.0;
        w.time_left = 0.001;
        w.advance(0.01, &mut rng);
        assert!(w.vel < 0.0, "sign should reverse, got {}", w.vel);
        assert!(w.vel.abs() >= 10.0 && w.vel.abs() <= 100.0);
        assert!(w.time_left >= 5.0 && w.time_left <= 20.0);
    }

    #[test]
    fn value_accessor_matches_last_advance() {
        let mut rng = Rng::new(9);
        let mut w = Wanderer::new(hue_bounds(), &mut rng);
        let v = w.advance(0.1, &mut rng);
        assert_eq!(v, w.value());
    }
}
