//! HSL color space conversion for particle tinting.
//! One shared circle texture, tinted per particle with a drifting hue.

/// Convert HSL to a packed 0xRRGGBB tint.
/// `h` in degrees [0, 360), `s` and `l` in percent [0, 100].
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> u32 {
    let s = s / 100.0;
    let l = l / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if (0.0..60.0).contains(&h) {
        (c, x, 0.0)
    } else if (60.0..120.0).contains(&h) {
        (x, c, 0.0)
    } else if (120.0..180.0).contains(&h) {
        (0.0, c, x)
    } else if (180.0..240.0).contains(&h) {
        (0.0, x, c)
    } else if (240.0..300.0).contains(&h) {
        (x, 0.0, c)
    } else if (300.0..360.0).contains(&h) {
        (c, 0.0, x)
    } else {
        (0.0, 0.0, 0.0)
    };

    let r = ((r + m) * 255.0).round() as u32;
    let g = ((g + m) * 255.0).round() as u32;
    let b = ((b + m) * 255.0).round() as u32;

    (r << 16) | (g << 8) | b
}

/// Unpack a 0xRRGGBB tint into normalized (r, g, b) channels.
pub fn unpack_tint(tint: u32) -> (f32, f32, f32) {
    let r = ((tint >> 16) & 0xff) as f32 / 255.0;
    let g = ((tint >> 8) & 0xff) as f32 / 255.0;
    let b = (tint & 0xff) as f32 / 255.0;
    (r, g, b)
}
