//! Cover-fit photo placement

use crate::canvas::blend_pixel;
use crate::{ClipShape, Color};
use image::{imageops, imageops::FilterType, RgbaImage};

/// Placeholder frame fill
const PLACEHOLDER_FILL: Color = Color::rgb(0xE5, 0xE7, 0xEB);
/// Placeholder silhouette
const PLACEHOLDER_SILHOUETTE: Color = Color::rgb(0x9C, 0xA3, 0xAF);

/// A resolved square photo frame on the canvas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhotoFrame {
    /// Frame center X
    pub center_x: f32,
    /// Frame center Y
    pub center_y: f32,
    /// Side length of the square frame
    pub size: f32,
    /// Clip shape
    pub shape: ClipShape,
}

impl PhotoFrame {
    /// Corner radius used for the rounded-rectangle shape (8% of size).
    pub fn corner_radius(&self) -> f32 {
        self.size * 0.08
    }

    fn origin(&self) -> (i32, i32) {
        (
            (self.center_x - self.size / 2.0).round() as i32,
            (self.center_y - self.size / 2.0).round() as i32,
        )
    }
}

/// Compute the cover-fit draw size for a photo inside a square frame.
///
/// The photo fills the frame completely (cropping overflow, never
/// letterboxing): a landscape source is fitted by height, a portrait or
/// square source by width, then multiplied by the interactive `scale`.
pub fn cover_size(src_w: u32, src_h: u32, frame_size: f32, scale: f32) -> (f32, f32) {
    let aspect = src_w as f32 / src_h as f32;
    if aspect > 1.0 {
        let h = frame_size * scale;
        (h * aspect, h)
    } else {
        let w = frame_size * scale;
        (w, w / aspect)
    }
}

/// Draw a photo into a clipped frame with cover fit, zoom, and pan.
///
/// The photo is scaled to cover the frame, centered on the frame center,
/// shifted by (offset_x, offset_y), and clipped to the frame shape.
pub fn draw_cover_image(
    canvas: &mut RgbaImage,
    photo: &RgbaImage,
    frame: &PhotoFrame,
    scale: f32,
    offset_x: f32,
    offset_y: f32,
) {
    if photo.width() == 0 || photo.height() == 0 || frame.size <= 0.0 {
        return;
    }

    let (draw_w, draw_h) = cover_size(photo.width(), photo.height(), frame.size, scale);
    let draw_x = frame.center_x - draw_w / 2.0 + offset_x;
    let draw_y = frame.center_y - draw_h / 2.0 + offset_y;

    let resized = imageops::resize(
        photo,
        (draw_w.round() as u32).max(1),
        (draw_h.round() as u32).max(1),
        FilterType::Lanczos3,
    );

    let size = frame.size.round() as i32;
    let radius = frame.corner_radius().round() as i32;
    let (fx, fy) = frame.origin();

    for ly in 0..size {
        for lx in 0..size {
            if !frame.shape.contains(lx, ly, size, radius) {
                continue;
            }
            let cx = fx + lx;
            let cy = fy + ly;
            if cx < 0 || cy < 0 || cx >= canvas.width() as i32 || cy >= canvas.height() as i32 {
                continue;
            }
            let sx = (cx as f32 - draw_x).floor() as i32;
            let sy = (cy as f32 - draw_y).floor() as i32;
            if sx < 0 || sy < 0 || sx >= resized.width() as i32 || sy >= resized.height() as i32 {
                continue;
            }
            let p = resized.get_pixel(sx as u32, sy as u32);
            let color = Color::rgba(p.0[0], p.0[1], p.0[2], p.0[3]);
            blend_pixel(canvas.get_pixel_mut(cx as u32, cy as u32), color, 1.0);
        }
    }
}

/// Draw the "no photo yet" placeholder: a gray fill with a person
/// silhouette at half the frame size, clipped to the frame shape.
pub fn draw_placeholder(canvas: &mut RgbaImage, frame: &PhotoFrame) {
    let size = frame.size.round() as i32;
    let radius = frame.corner_radius().round() as i32;
    let (fx, fy) = frame.origin();
    let icon = frame.size * 0.5;
    let icon_x = frame.size / 2.0 - icon / 2.0;
    let icon_y = frame.size / 2.0 - icon / 2.0;

    for ly in 0..size {
        for lx in 0..size {
            if !frame.shape.contains(lx, ly, size, radius) {
                continue;
            }
            let cx = fx + lx;
            let cy = fy + ly;
            if cx < 0 || cy < 0 || cx >= canvas.width() as i32 || cy >= canvas.height() as i32 {
                continue;
            }
            let color = if silhouette_contains(lx as f32 - icon_x, ly as f32 - icon_y, icon) {
                PLACEHOLDER_SILHOUETTE
            } else {
                PLACEHOLDER_FILL
            };
            blend_pixel(canvas.get_pixel_mut(cx as u32, cy as u32), color, 1.0);
        }
    }
}

/// Person-silhouette hit test in icon-local coordinates.
///
/// Head: circle at (0.5, 0.33) with radius 0.167. Shoulders: the upper
/// half of an ellipse flattened at y = 0.83.
fn silhouette_contains(x: f32, y: f32, icon: f32) -> bool {
    if icon <= 0.0 || x < 0.0 || y < 0.0 || x > icon || y > icon {
        return false;
    }
    let nx = x / icon;
    let ny = y / icon;

    let hdx = nx - 0.5;
    let hdy = ny - 0.33;
    if hdx * hdx + hdy * hdy <= 0.167 * 0.167 {
        return true;
    }

    if ny <= 0.83 {
        let bdx = (nx - 0.5) / 0.33;
        let bdy = (ny - 0.83) / 0.27;
        if bdx * bdx + bdy * bdy <= 1.0 {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn cover_covers_frame_for_all_aspects() {
        // At scale 1 the draw rect must fully cover the frame bounding box.
        for (w, h) in [(100u32, 50u32), (50, 100), (64, 64), (1920, 1080), (3, 999)] {
            let (dw, dh) = cover_size(w, h, 200.0, 1.0);
            assert!(dw >= 200.0 - f32::EPSILON, "{w}x{h}: width {dw}");
            assert!(dh >= 200.0 - f32::EPSILON, "{w}x{h}: height {dh}");
        }
    }

    #[test]
    fn cover_preserves_aspect_ratio() {
        let (dw, dh) = cover_size(100, 50, 200.0, 1.0);
        assert!((dw / dh - 2.0).abs() < 1e-5);
        let (dw, dh) = cover_size(50, 100, 200.0, 1.0);
        assert!((dh / dw - 2.0).abs() < 1e-5);
    }

    #[test]
    fn cover_scales_with_zoom() {
        let (w1, h1) = cover_size(80, 80, 100.0, 1.0);
        let (w2, h2) = cover_size(80, 80, 100.0, 2.0);
        assert!((w2 - 2.0 * w1).abs() < 1e-4);
        assert!((h2 - 2.0 * h1).abs() < 1e-4);
    }

    #[test]
    fn draw_fills_square_frame_completely() {
        let mut canvas = RgbaImage::from_pixel(100, 100, Rgba([0, 0, 0, 255]));
        let photo = RgbaImage::from_pixel(40, 80, Rgba([200, 10, 10, 255]));
        let frame = PhotoFrame {
            center_x: 50.0,
            center_y: 50.0,
            size: 60.0,
            shape: ClipShape::Square,
        };
        draw_cover_image(&mut canvas, &photo, &frame, 1.0, 0.0, 0.0);

        // Every pixel inside the frame changed; pixels well outside did not.
        assert_eq!(*canvas.get_pixel(50, 50), Rgba([200, 10, 10, 255]));
        assert_eq!(*canvas.get_pixel(22, 22), Rgba([200, 10, 10, 255]));
        assert_eq!(*canvas.get_pixel(5, 5), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn circle_clip_leaves_corners_untouched() {
        let mut canvas = RgbaImage::from_pixel(100, 100, Rgba([0, 0, 0, 255]));
        let photo = RgbaImage::from_pixel(80, 80, Rgba([10, 200, 10, 255]));
        let frame = PhotoFrame {
            center_x: 50.0,
            center_y: 50.0,
            size: 60.0,
            shape: ClipShape::Circle,
        };
        draw_cover_image(&mut canvas, &photo, &frame, 1.0, 0.0, 0.0);

        assert_eq!(*canvas.get_pixel(50, 50), Rgba([10, 200, 10, 255]));
        // Frame corner (outside the circle) stays background.
        assert_eq!(*canvas.get_pixel(21, 21), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn pan_offset_shifts_visible_region() {
        let mut photo = RgbaImage::from_pixel(100, 100, Rgba([0, 0, 255, 255]));
        // left half red, right half blue
        for y in 0..100 {
            for x in 0..50 {
                photo.put_pixel(x, y, Rgba([255, 0, 0, 255]));
            }
        }
        let frame = PhotoFrame {
            center_x: 50.0,
            center_y: 50.0,
            size: 40.0,
            shape: ClipShape::Square,
        };

        let mut centered = RgbaImage::from_pixel(100, 100, Rgba([0, 0, 0, 255]));
        draw_cover_image(&mut centered, &photo, &frame, 1.0, 0.0, 0.0);
        // Shift the photo far to the right: the blue half moves out of view.
        let mut panned = RgbaImage::from_pixel(100, 100, Rgba([0, 0, 0, 255]));
        draw_cover_image(&mut panned, &photo, &frame, 1.0, 19.0, 0.0);

        assert_eq!(*centered.get_pixel(60, 50), Rgba([0, 0, 255, 255]));
        assert_eq!(*panned.get_pixel(60, 50), Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn placeholder_fills_frame_with_gray_and_silhouette() {
        let mut canvas = RgbaImage::from_pixel(120, 120, Rgba([0, 0, 0, 255]));
        let frame = PhotoFrame {
            center_x: 60.0,
            center_y: 60.0,
            size: 80.0,
            shape: ClipShape::Square,
        };
        draw_placeholder(&mut canvas, &frame);

        // Frame edge: light gray fill.
        assert_eq!(*canvas.get_pixel(22, 22), Rgba([0xE5, 0xE7, 0xEB, 255]));
        // Head center: darker silhouette (icon spans 40px starting at 40,40;
        // head center at 40 + 0.5*40, 40 + 0.33*40).
        assert_eq!(*canvas.get_pixel(60, 53), Rgba([0x9C, 0xA3, 0xAF, 255]));
        // Outside the frame untouched.
        assert_eq!(*canvas.get_pixel(5, 5), Rgba([0, 0, 0, 255]));
    }
}
