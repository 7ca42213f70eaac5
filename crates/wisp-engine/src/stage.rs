//! Display seam between the simulation core and the hosting renderer.
//!
//! The core never touches a rendering library; it drives these traits and
//! the host decides what a sprite or a line actually is. `BufferStage` in
//! `render.rs` is the pointer-sharing implementation used by the WASM
//! bridge; tests use plain mock types.

use glam::Vec2;

/// Line stroke style: width in pixels, packed 0xRRGGBB color, alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub width: f32,
    pub color: u32,
    pub alpha: f32,
}

/// A point sprite bound to the shared particle texture.
pub trait Drawable {
    fn set_position(&mut self, pos: Vec2);
    fn set_scale(&mut self, scale: f32);
    /// Packed 0xRRGGBB tint.
    fn set_tint(&mut self, tint: u32);
    fn set_alpha(&mut self, alpha: f32);
    /// Add to the host display list.
    fn attach(&mut self);
    /// Remove from the host display list. The handle stays valid for reuse.
    fn detach(&mut self);
}

/// A two-endpoint line path.
pub trait LineDrawable {
    /// Discard any previously drawn path.
    fn clear(&mut self);
    fn set_style(&mut self, style: LineStyle);
    fn move_to(&mut self, pos: Vec2);
    fn line_to(&mut self, pos: Vec2);
    fn set_alpha(&mut self, alpha: f32);
    fn attach(&mut self);
    fn detach(&mut self);
}

/// Factory for display handles, plus the resizable canvas surface.
pub trait Stage {
    type Sprite: Drawable;
    type Line: LineDrawable;

    /// Create a detached sprite handle bound to the shared texture.
    fn create_sprite(&mut self) -> Self::Sprite;
    /// Create a detached, empty line handle.
    fn create_line(&mut self) -> Self::Line;
    /// The host canvas changed size.
    fn resize(&mut self, width: f32, height: f32);
}
