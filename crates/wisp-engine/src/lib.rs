pub mod color;
pub mod config;
pub mod motion;
pub mod particle;
pub mod pool;
pub mod render;
pub mod rng;
pub mod stage;
pub mod time;
pub mod trail;
pub mod wander;

// Re-export key types at crate root for convenience
pub use color::hsl_to_rgb;
pub use config::{TrailConfig, WandererConfig};
pub use motion::{Mover, Viewport};
pub use particle::Particle;
pub use pool::ParticlePool;
pub use render::{BufferStage, LineVertex, RenderBuffer, RenderInstance};
pub use rng::Rng;
pub use stage::{Drawable, LineDrawable, LineStyle, Stage};
pub use time::FrameClock;
pub use trail::TrailEffect;
pub use wander::Wanderer;
