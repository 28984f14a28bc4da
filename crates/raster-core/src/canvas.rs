//! RGBA canvas blending primitives

use crate::Color;
use image::{Rgba, RgbaImage};

/// Blend a colored fragment into a destination pixel (src-over).
///
/// `coverage` is the fragment's own opacity in [0, 1]; the color's alpha
/// channel is applied on top of it. The destination stays opaque.
pub fn blend_pixel(dst: &mut Rgba<u8>, color: Color, coverage: f32) {
    let sa = coverage.clamp(0.0, 1.0) * (color.a as f32 / 255.0);
    if sa <= 0.0 {
        return;
    }
    let inv = 1.0 - sa;
    dst.0[0] = (color.r as f32 * sa + dst.0[0] as f32 * inv) as u8;
    dst.0[1] = (color.g as f32 * sa + dst.0[1] as f32 * inv) as u8;
    dst.0[2] = (color.b as f32 * sa + dst.0[2] as f32 * inv) as u8;
    dst.0[3] = 255;
}

/// Alpha-blend `over` onto `base` with its top-left corner at (x, y).
///
/// Pixels falling outside the base image are skipped.
pub fn overlay_alpha(base: &mut RgbaImage, over: &RgbaImage, x: i64, y: i64) {
    for oy in 0..over.height() {
        for ox in 0..over.width() {
            let bx = x + ox as i64;
            let by = y + oy as i64;
            if bx < 0 || by < 0 || bx >= base.width() as i64 || by >= base.height() as i64 {
                continue;
            }
            let p = over.get_pixel(ox, oy);
            if p.0[3] == 0 {
                continue;
            }
            let color = Color::rgba(p.0[0], p.0[1], p.0[2], p.0[3]);
            blend_pixel(base.get_pixel_mut(bx as u32, by as u32), color, 1.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_blend_replaces() {
        let mut dst = Rgba([0u8, 0, 0, 255]);
        blend_pixel(&mut dst, Color::WHITE, 1.0);
        assert_eq!(dst, Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn half_blend_mixes() {
        let mut dst = Rgba([0u8, 0, 0, 255]);
        blend_pixel(&mut dst, Color::WHITE, 0.5);
        assert_eq!(dst.0[0], 127);
        assert_eq!(dst.0[3], 255);
    }

    #[test]
    fn zero_coverage_is_noop() {
        let mut dst = Rgba([10u8, 20, 30, 255]);
        blend_pixel(&mut dst, Color::WHITE, 0.0);
        assert_eq!(dst, Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn color_alpha_dims_coverage() {
        let mut dst = Rgba([0u8, 0, 0, 255]);
        blend_pixel(&mut dst, Color::WHITE.with_alpha(128), 1.0);
        assert!(dst.0[0] > 120 && dst.0[0] < 135);
    }

    #[test]
    fn overlay_clips_out_of_bounds() {
        let mut base = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        let over = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255]));
        overlay_alpha(&mut base, &over, -2, -2);
        assert_eq!(*base.get_pixel(0, 0), Rgba([255, 255, 255, 255]));
        assert_eq!(*base.get_pixel(3, 3), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn transparent_pixels_skipped() {
        let mut base = RgbaImage::from_pixel(2, 2, Rgba([7, 7, 7, 255]));
        let over = RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 0]));
        overlay_alpha(&mut base, &over, 0, 0);
        assert_eq!(*base.get_pixel(1, 1), Rgba([7, 7, 7, 255]));
    }
}
