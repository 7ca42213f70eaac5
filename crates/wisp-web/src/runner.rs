use wisp_engine::{
    BufferStage, FrameClock, RenderBuffer, TrailConfig, TrailEffect, Viewport,
};

/// Wires the trail effect to the browser loop.
///
/// Owns the effect, its buffer stage, and the flat render buffers the
/// JS renderer reads by pointer each frame.
pub struct EffectRunner {
    effect: TrailEffect<BufferStage>,
    stage: BufferStage,
    buffer: RenderBuffer,
    clock: FrameClock,
}

impl EffectRunner {
    pub fn new(config: TrailConfig, width: f32, height: f32, seed: u64) -> Self {
        let stage = BufferStage::new(width, height);
        let buffer = RenderBuffer::with_capacity(config.max_particles);
        let clock = FrameClock::new(config.max_fps);
        let effect = TrailEffect::new(config, Viewport::new(width, height), seed);
        Self {
            effect,
            stage,
            buffer,
            clock,
        }
    }

    /// Rebuild the runner with a new config, keeping the current viewport.
    pub fn reconfigure(&mut self, config: TrailConfig, seed: u64) {
        let viewport = self.effect.viewport();
        *self = Self::new(config, viewport.width, viewport.height, seed);
    }

    /// One animation frame. `dt` in seconds; frames beyond the FPS cap only
    /// accumulate time. The render buffers are rebuilt either way so the
    /// host always reads a consistent frame.
    pub fn tick(&mut self, dt: f32) {
        if let Some(step) = self.clock.frame(dt) {
            self.effect.update(&mut self.stage, step);
        }
        self.buffer.build(self.effect.pool().iter_active());
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.effect.resize(&mut self.stage, width, height);
    }

    // ---- Pointer accessors for typed-array views ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.buffer.instance_count()
    }

    pub fn line_vertices_ptr(&self) -> *const f32 {
        self.buffer.line_vertices_ptr()
    }

    pub fn line_vertex_count(&self) -> u32 {
        self.buffer.line_vertex_count()
    }

    pub fn max_particles(&self) -> u32 {
        self.effect.config().max_particles as u32
    }

    pub fn texture_path(&self) -> String {
        self.effect.config().sprite_texture.clone()
    }
}
