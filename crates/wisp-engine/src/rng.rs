//! Seedable pseudo-random number generator (xorshift64).
//! Deterministic, fast, no-std compatible.

/// Seedable pseudo-random number generator (xorshift64).
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Generate a random integer in [0, upper_bound). An empty range yields 0.
    pub fn next_int(&mut self, upper_bound: u32) -> u32 {
        if upper_bound == 0 {
            return 0;
        }
        (self.next_u64() % upper_bound as u64) as u32
    }

    /// Generate a random float in [0, 1).
    pub fn next_f32(&mut self) -> f32 {
        // Top 24 bits, the full precision of an f32 mantissa.
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Generate a random float in [min, max).
    pub fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        min + (max - min) * self.next_f32()
    }

    /// Generate a random integer in [min, max] (inclusive).
    pub fn range_i32(&mut self, min: i32, max: i32) -> i32 {
        min + self.next_int((max - min + 1) as u32) as i32
    }

    /// Randomly return -1.0 or 1.0.
    pub fn sign(&mut self) -> f32 {
        (self.range_i32(0, 1) * 2 - 1) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_deterministic() {
        let mut rng1 = Rng::new(42);
        let mut rng2 = Rng::new(42);
        for _ in 0..10 {
            assert_eq!(rng1.next_int(1000), rng2.next_int(1000));
        }
    }

    #[test]
    fn rng_zero_seed_handled() {
        let mut rng = Rng::new(0);
        // Should not panic or loop forever
        let _ = rng.next_int(100);
    }

    #[test]
    fn next_int_zero_bound_yields_zero() {
        let mut rng = Rng::new(42);
        assert_eq!(rng.next_int(0), 0);
    }

    #[test]
    fn next_f32_in_unit_interval() {
        let mut rng = Rng::new(7);
        for _ in 0..1000 {
            let v = rng.next_f32();
            assert!((0.0..1.0).contains(&v), "out of range: {}", v);
        }
    }

    #[test]
    fn range_f32_stays_in_range() {
        let mut rng = Rng::new(7);
        for _ in 0..1000 {
            let v = rng.range_f32(-20.0, 35.0);
            assert!((-20.0..35.0).contains(&v), "out of range: {}", v);
        }
    }

    #[test]
    fn range_i32_is_inclusive() {
        let mut rng = Rng::new(7);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let v = rng.range_i32(0, 3);
            assert!((0..=3).contains(&v));
            seen[v as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "all values should occur");
    }

    #[test]
    fn sign_is_unit() {
        let mut rng = Rng::new(7);
        for _ in 0..50 {
            let s = rng.sign();
            assert!(s == 1.0 || s == -1.0);
        }
    }
}
