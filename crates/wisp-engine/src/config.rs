use serde::{Deserialize, Serialize};

/// Bounds for a wanderer generator: value range, velocity magnitude range,
/// and how long a velocity lasts before being redrawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WandererConfig {
    pub min: f32,
    pub max: f32,
    pub min_vel: f32,
    pub max_vel: f32,
    pub min_time: f32,
    pub max_time: f32,
}

/// All tunables for the trail effect.
/// Defaults match the reference effect; a host page may override any subset
/// via JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// How far past the viewport edge the emission point may travel before
    /// bouncing, in pixels.
    pub bounce_buffer: f32,
    /// Emission point speed cap, pixels per second.
    pub speed: f32,
    /// Minimum distance between successive spawn points along the path.
    pub spacing: f32,
    /// Base sprite scale.
    pub scale: f32,
    /// Lateral sinusoidal displacement amplitude, in pixels.
    pub spread: f32,
    /// Frequency multiplier for the lateral sine.
    pub spread_modifier: f32,
    /// Particle lifetime in seconds.
    pub particle_life: f32,
    /// Every Nth spawn event gets connecting line segments.
    pub particles_per_line: u32,
    /// Connecting line width in pixels.
    pub line_width: f32,
    /// Connecting line tint, packed 0xRRGGBB.
    pub line_color: u32,
    /// Connecting line style alpha.
    pub line_alpha: f32,
    /// Hard cap on simultaneously displayed sprites.
    pub max_particles: usize,
    /// Simulation frame rate cap.
    pub max_fps: f32,
    /// Path to the shared circle sprite texture, resolved by the host.
    pub sprite_texture: String,
    /// Hue drift bounds, degrees.
    pub hue: WandererConfig,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            bounce_buffer: 20.0,
            speed: 200.0,
            spacing: 2.0,
            scale: 0.15,
            spread: 30.0,
            spread_modifier: 8.0,
            particle_life: 10.0,
            particles_per_line: 6,
            line_width: 2.0,
            line_color: 0xffffff,
            line_alpha: 0.3,
            max_particles: 10_000,
            max_fps: 30.0,
            sprite_texture: "sphere.png".into(),
            hue: WandererConfig {
                min: 0.0,
                max: 360.0,
                min_vel: 10.0,
                max_vel: 100.0,
                min_time: 5.0,
                max_time: 20.0,
            },
        }
    }
}

impl TrailConfig {
    /// Parse a config from a JSON string. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
