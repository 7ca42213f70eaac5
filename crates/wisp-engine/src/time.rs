//! Frame rate cap over host animation-callback deltas.

/// Longest single simulation step, in seconds. Keeps a backgrounded tab from
/// producing one enormous catch-up step when the callback resumes.
const MAX_STEP: f32 = 0.25;

/// Accumulates host frame deltas and yields simulation steps at most at the
/// configured rate. A 60 Hz animation callback with a 30 FPS cap produces a
/// step every other frame, carrying the full elapsed time.
pub struct FrameClock {
    min_interval: f32,
    accumulator: f32,
}

impl FrameClock {
    pub fn new(max_fps: f32) -> Self {
        Self {
            min_interval: if max_fps > 0.0 { 1.0 / max_fps } else { 0.0 },
            accumulator: 0.0,
        }
    }

    /// Feed one host delta (seconds). Returns the simulation step to run, or
    /// `None` when the frame is due to be skipped. Non-finite and negative
    /// deltas are discarded.
    pub fn frame(&mut self, dt: f32) -> Option<f32> {
        if dt.is_finite() && dt > 0.0 {
            self.accumulator += dt;
        }
        if self.accumulator < self.min_interval || self.accumulator == 0.0 {
            return None;
        }
        let step = self.accumulator.min(MAX_STEP);
        self.accumulator = 0.0;
        Some(step)
    }
}
