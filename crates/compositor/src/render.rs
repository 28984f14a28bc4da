//! The render orchestrator

use crate::{Compositor, FontRole};
use image::{imageops, imageops::FilterType, RgbaImage};
use raster_core::{draw_cover_image, draw_placeholder, draw_text, overlay_alpha, Align, Color};

/// Shown dimmed while the deputy-name field is empty.
pub const DEPUTY_NAME_PLACEHOLDER: &str = "АСАНОВ БЕРИК";
/// Shown dimmed while the responsible-name field is empty.
pub const RESPONSIBLE_NAME_PLACEHOLDER: &str = "Серикова Алия";
/// Shown dimmed while the phone field is empty.
pub const PHONE_PLACEHOLDER: &str = "+7 (700) 123-45-67";

const HEADER_CAPTION: &str = "Жауапты тұлға | Ответственное лицо";
const STATIC_CAPTION: &str = "Сіздің депутатыңыз | Ваш депутат";

const PLACEHOLDER_COLOR: Color = Color::rgba(255, 255, 255, 128);

/// Pick the drawn string and color for a field: the literal value at
/// full opacity, or the dimmed placeholder when the field is empty.
fn display<'a>(value: &'a str, placeholder: &'a str, color: Color) -> (&'a str, Color) {
    if value.is_empty() {
        (placeholder, PLACEHOLDER_COLOR)
    } else {
        (value, color)
    }
}

impl Compositor {
    /// Redraw the whole card from current state.
    ///
    /// Draw order is fixed: template, caption overlay and static
    /// caption, photo (or placeholder) clipped to the frame shape,
    /// deputy name, responsible header, responsible name, phone, QR.
    /// Pure with respect to state: repeated calls with unchanged inputs
    /// produce byte-identical rasters, and no I/O happens here.
    pub fn render(&self) -> RgbaImage {
        let mut canvas = self.assets.template.clone();
        let (w, h) = (canvas.width(), canvas.height());
        let frame = self.layout.photo.resolve(w, h);

        self.draw_caption(&mut canvas, frame.center_x);

        if let Some(photo) = &self.assets.photo {
            let (ox, oy) = self.state.offset();
            draw_cover_image(&mut canvas, photo, &frame, self.state.scale(), ox, oy);
        } else {
            draw_placeholder(&mut canvas, &frame);
        }

        self.draw_deputy_name(&mut canvas, frame.center_x);

        let header = self.layout.responsible.header.resolve(w, h);
        self.draw_field(
            &mut canvas,
            FontRole::Text,
            self.layout.responsible.header.weight.into(),
            header.px,
            header.x,
            header.y,
            self.layout.responsible.header.color,
            HEADER_CAPTION,
            Align::Left,
        );

        let name = self.layout.responsible.name.resolve(w, h);
        let (text, color) = display(
            &self.responsible_name,
            RESPONSIBLE_NAME_PLACEHOLDER,
            self.layout.responsible.name.color,
        );
        self.draw_field(
            &mut canvas,
            FontRole::Text,
            self.layout.responsible.name.weight.into(),
            name.px,
            name.x,
            name.y,
            color,
            text,
            Align::Left,
        );

        let phone = self.layout.responsible.phone.resolve(w, h);
        let (text, color) = display(
            &self.phone,
            PHONE_PLACEHOLDER,
            self.layout.responsible.phone.color,
        );
        self.draw_field(
            &mut canvas,
            FontRole::Text,
            self.layout.responsible.phone.weight.into(),
            phone.px,
            phone.x,
            phone.y,
            color,
            text,
            Align::Left,
        );

        if let Some(qr) = &self.assets.qr {
            let (x, y, size) = self.layout.qr.resolve(w, h);
            let scaled = imageops::resize(qr, size, size, FilterType::Nearest);
            overlay_alpha(&mut canvas, &scaled, x, y);
        }

        canvas
    }

    /// Caption overlay plus the static bilingual caption under it, both
    /// centered on the photo's center X. The caption belongs to the
    /// overlay: when the overlay is missing the whole feature is
    /// omitted, text included.
    fn draw_caption(&self, canvas: &mut RgbaImage, center_x: f32) {
        let cfg = &self.layout.caption;
        let Some(overlay) = &self.assets.overlay else {
            return;
        };

        let aspect = overlay.width() as f32 / overlay.height() as f32;
        let draw_w = cfg.overlay_width;
        let draw_h = draw_w / aspect;
        let scaled = imageops::resize(
            overlay,
            (draw_w.round() as u32).max(1),
            (draw_h.round() as u32).max(1),
            FilterType::Lanczos3,
        );
        overlay_alpha(
            canvas,
            &scaled,
            (center_x - draw_w / 2.0).round() as i64,
            cfg.overlay_y.round() as i64,
        );

        let px = (canvas.width() as f32 * cfg.font_size).round();
        self.draw_field(
            canvas,
            FontRole::Text,
            cfg.weight.into(),
            px,
            center_x,
            cfg.text_y,
            Color::WHITE,
            STATIC_CAPTION,
            Align::Center,
        );
    }

    /// Deputy name, split surname / given names when it has two or more
    /// tokens. The second line draws at 70% size, 1.2 primary sizes down.
    fn draw_deputy_name(&self, canvas: &mut RgbaImage, center_x: f32) {
        let cfg = &self.layout.deputy_name;
        let (y, px) = cfg.resolve(canvas.width(), canvas.height());
        let (text, color) = display(&self.deputy_name, DEPUTY_NAME_PLACEHOLDER, cfg.color);

        let lines = card_text::split_name(text);
        self.draw_field(
            canvas,
            FontRole::Display,
            cfg.weight.into(),
            px,
            center_x,
            y,
            color,
            &lines.primary,
            Align::Center,
        );
        if let Some(secondary) = &lines.secondary {
            self.draw_field(
                canvas,
                FontRole::Display,
                raster_core::FontWeight::Medium,
                (px * 0.7).round(),
                center_x,
                y + px * 1.2,
                color,
                secondary,
                Align::Center,
            );
        }
    }

    /// Draw one text run, skipping silently when the family has no
    /// loaded variant (fonts arrive asynchronously at startup).
    #[allow(clippy::too_many_arguments)]
    fn draw_field(
        &self,
        canvas: &mut RgbaImage,
        role: FontRole,
        weight: raster_core::FontWeight,
        px: f32,
        x: f32,
        y: f32,
        color: Color,
        text: &str,
        align: Align,
    ) {
        if let Some(font) = self.fonts.family(role).variant(weight) {
            draw_text(canvas, font, px, x, y, color, text, align);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_field_shows_dimmed_placeholder() {
        let (text, color) = display("", PHONE_PLACEHOLDER, Color::WHITE);
        assert_eq!(text, PHONE_PLACEHOLDER);
        assert_eq!(color, Color::rgba(255, 255, 255, 128));
    }

    #[test]
    fn filled_field_shows_value_at_full_opacity() {
        let navy = Color::rgb(0x00, 0x28, 0x55);
        let (text, color) = display("+7 (700) 555-44-33", PHONE_PLACEHOLDER, navy);
        assert_eq!(text, "+7 (700) 555-44-33");
        assert_eq!(color, navy);
    }
}
