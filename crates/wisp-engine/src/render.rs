//! Buffer-backed stage for pointer-sharing hosts.
//!
//! Display handles are plain structs; each frame the host rebuilds two flat
//! `f32` buffers from the active particles and reads them across the WASM
//! boundary: additive point-sprite instances, and triangle-list vertices for
//! the connecting lines.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::color::unpack_tint;
use crate::particle::Particle;
use crate::stage::{Drawable, LineDrawable, LineStyle, Stage};

/// Per-sprite instance data. 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct RenderInstance {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub alpha: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    _pad: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Line vertex: position plus straight RGBA. 6 floats per vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct LineVertex {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl LineVertex {
    pub const FLOATS: usize = 6;
}

/// Sprite handle for the buffer stage.
#[derive(Debug, Clone, Default)]
pub struct SpriteVisual {
    pub pos: Vec2,
    pub scale: f32,
    pub tint: u32,
    pub alpha: f32,
    pub attached: bool,
}

impl Drawable for SpriteVisual {
    fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
    }
    fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }
    fn set_tint(&mut self, tint: u32) {
        self.tint = tint;
    }
    fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
    }
    fn attach(&mut self) {
        self.attached = true;
    }
    fn detach(&mut self) {
        self.attached = false;
    }
}

/// Line handle for the buffer stage. Holds at most one two-endpoint path.
///
/// `alpha` is the display-object alpha (the fade); the stroke's own
/// `style.alpha` stays separate and the two composite multiplicatively when
/// the quad is emitted, so a faded line never exceeds its style alpha.
#[derive(Debug, Clone)]
pub struct LineVisual {
    pub start: Vec2,
    pub end: Vec2,
    pub style: LineStyle,
    pub alpha: f32,
    pub attached: bool,
    pub has_path: bool,
}

impl Default for LineVisual {
    fn default() -> Self {
        Self {
            start: Vec2::ZERO,
            end: Vec2::ZERO,
            style: LineStyle {
                width: 1.0,
                color: 0xffffff,
                alpha: 1.0,
            },
            alpha: 1.0,
            attached: false,
            has_path: false,
        }
    }
}

impl LineDrawable for LineVisual {
    fn clear(&mut self) {
        self.has_path = false;
    }
    fn set_style(&mut self, style: LineStyle) {
        self.style = style;
    }
    fn move_to(&mut self, pos: Vec2) {
        self.start = pos;
    }
    fn line_to(&mut self, pos: Vec2) {
        self.end = pos;
        self.has_path = true;
    }
    fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
    }
    fn attach(&mut self) {
        self.attached = true;
    }
    fn detach(&mut self) {
        self.attached = false;
    }
}

/// Stage whose handles render through [`RenderBuffer::build`].
#[derive(Debug, Default)]
pub struct BufferStage {
    pub width: f32,
    pub height: f32,
}

impl BufferStage {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Stage for BufferStage {
    type Sprite = SpriteVisual;
    type Line = LineVisual;

    fn create_sprite(&mut self) -> SpriteVisual {
        SpriteVisual::default()
    }

    fn create_line(&mut self) -> LineVisual {
        LineVisual::default()
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }
}

/// Expand one line segment into a 6-vertex quad (two triangles).
fn push_segment_quad(out: &mut Vec<LineVertex>, line: &LineVisual) {
    let d = line.end - line.start;
    let len = d.length().max(0.001);
    let perp = Vec2::new(-d.y, d.x) / len * (line.style.width * 0.5);

    let (r, g, b) = unpack_tint(line.style.color);
    let a = line.style.alpha * line.alpha;
    let v = |p: Vec2| LineVertex {
        x: p.x,
        y: p.y,
        r,
        g,
        b,
        a,
    };

    let (p0, p1) = (line.start, line.end);
    let (a0, a1) = (p0 + perp, p0 - perp);
    let (b0, b1) = (p1 + perp, p1 - perp);

    out.extend_from_slice(&[v(a0), v(a1), v(b0), v(b0), v(a1), v(b1)]);
}

/// Flat buffers read by the host each frame.
pub struct RenderBuffer {
    pub instances: Vec<RenderInstance>,
    pub line_vertices: Vec<LineVertex>,
    /// Hard cap on simultaneously displayed sprites.
    max_instances: usize,
}

impl RenderBuffer {
    pub fn with_capacity(max_instances: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max_instances.min(4096)),
            line_vertices: Vec::new(),
            max_instances,
        }
    }

    /// Rebuild both buffers from the active particles. Detached handles are
    /// skipped; sprites beyond the display cap are dropped.
    pub fn build<'a, I>(&mut self, particles: I)
    where
        I: Iterator<Item = &'a Particle<SpriteVisual, LineVisual>>,
    {
        self.instances.clear();
        self.line_vertices.clear();

        for p in particles {
            if p.sprite.attached && self.instances.len() < self.max_instances {
                let (r, g, b) = unpack_tint(p.sprite.tint);
                self.instances.push(RenderInstance {
                    x: p.sprite.pos.x,
                    y: p.sprite.pos.y,
                    scale: p.sprite.scale,
                    alpha: p.sprite.alpha,
                    r,
                    g,
                    b,
                    _pad: 0.0,
                });
            }
            if p.line.attached && p.line.has_path {
                push_segment_quad(&mut self.line_vertices, &p.line);
            }
        }
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn line_vertex_count(&self) -> u32 {
        self.line_vertices.len() as u32
    }

    /// Raw pointer for host-side typed-array views.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    pub fn line_vertices_ptr(&self) -> *const f32 {
        self.line_vertices.as_ptr() as *const f32
    }
}
