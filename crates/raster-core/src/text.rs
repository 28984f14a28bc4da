//! Raster text drawing

use crate::canvas::blend_pixel;
use crate::Color;
use ab_glyph::{point, Font, FontArc, Glyph, PxScale, ScaleFont};
use image::RgbaImage;

/// Horizontal text alignment relative to the anchor X coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Advance width of `text` at `px` pixels, without drawing.
pub fn text_width(font: &FontArc, px: f32, text: &str) -> f32 {
    let scaled = font.as_scaled(PxScale::from(px));
    text.chars()
        .map(|c| scaled.h_advance(scaled.glyph_id(c)))
        .sum()
}

/// Draw `text` onto the canvas with a top baseline.
///
/// The anchor (x, y) is the top of the text box; glyphs are positioned
/// at `y + ascent`, matching top-baseline layout. Alignment shifts the
/// start so the anchor is the left edge, center, or right edge of the
/// rendered run.
pub fn draw_text(
    canvas: &mut RgbaImage,
    font: &FontArc,
    px: f32,
    x: f32,
    y: f32,
    color: Color,
    text: &str,
    align: Align,
) {
    if text.is_empty() {
        return;
    }

    let scaled = font.as_scaled(PxScale::from(px));
    let width = text_width(font, px, text);
    let start_x = match align {
        Align::Left => x,
        Align::Center => x - width / 2.0,
        Align::Right => x - width,
    };
    let baseline_y = y + scaled.ascent();

    let mut caret = start_x;
    for c in text.chars() {
        let id = scaled.glyph_id(c);
        let glyph: Glyph = id.with_scale_and_position(PxScale::from(px), point(caret, baseline_y));
        caret += scaled.h_advance(id);

        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let cx = gx as i64 + bounds.min.x as i64;
                let cy = gy as i64 + bounds.min.y as i64;
                if cx < 0
                    || cy < 0
                    || cx >= canvas.width() as i64
                    || cy >= canvas.height() as i64
                {
                    return;
                }
                blend_pixel(
                    canvas.get_pixel_mut(cx as u32, cy as u32),
                    color,
                    coverage,
                );
            });
        }
    }
}
