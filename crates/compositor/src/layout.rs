//! Declarative card layout
//!
//! Every position and size is a fraction of the template's *native*
//! pixel dimensions, so the rendered raster is independent of how the
//! host happens to display it. Resolution is a pure computation of
//! (layout, template width, template height).

use raster_core::{ClipShape, Color, FontWeight, PhotoFrame};
use serde::{Deserialize, Serialize};

/// Clip shape of the photo frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrameShape {
    Circle,
    Square,
    #[default]
    RoundRect,
}

impl From<FrameShape> for ClipShape {
    fn from(shape: FrameShape) -> Self {
        match shape {
            FrameShape::Circle => ClipShape::Circle,
            FrameShape::Square => ClipShape::Square,
            FrameShape::RoundRect => ClipShape::RoundRect,
        }
    }
}

/// Font weight of a layout field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weight {
    #[default]
    Normal,
    Medium,
    Bold,
}

impl From<Weight> for FontWeight {
    fn from(weight: Weight) -> Self {
        match weight {
            Weight::Normal => FontWeight::Normal,
            Weight::Medium => FontWeight::Medium,
            Weight::Bold => FontWeight::Bold,
        }
    }
}

/// Photo frame placement: a square frame described by its center and
/// half-size, both fractions (half-size relative to template width).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhotoLayout {
    pub center_x: f32,
    pub center_y: f32,
    pub radius: f32,
    pub shape: FrameShape,
}

impl PhotoLayout {
    /// Resolve to a pixel frame on a template of the given dimensions.
    pub fn resolve(&self, width: u32, height: u32) -> PhotoFrame {
        PhotoFrame {
            center_x: width as f32 * self.center_x,
            center_y: height as f32 * self.center_y,
            size: width as f32 * self.radius * 2.0,
            shape: self.shape.into(),
        }
    }
}

impl Default for PhotoLayout {
    fn default() -> Self {
        Self {
            center_x: 0.35,
            center_y: 0.43,
            radius: 0.17,
            shape: FrameShape::RoundRect,
        }
    }
}

/// A resolved text anchor in template pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextAnchor {
    pub x: f32,
    pub y: f32,
    pub px: f32,
}

/// A left-aligned text field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextField {
    pub x: f32,
    pub y: f32,
    /// Font size as a fraction of template width
    pub font_size: f32,
    pub weight: Weight,
    #[serde(with = "hex_color")]
    pub color: Color,
}

impl TextField {
    pub fn resolve(&self, width: u32, height: u32) -> TextAnchor {
        TextAnchor {
            x: width as f32 * self.x,
            y: height as f32 * self.y,
            px: (width as f32 * self.font_size).round(),
        }
    }
}

/// The deputy display name, drawn centered on the photo's center X.
///
/// When the name splits into two lines, the second line is drawn at 70%
/// of the primary size, offset below by 1.2 times the primary size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NameLayout {
    pub y: f32,
    pub font_size: f32,
    pub weight: Weight,
    #[serde(with = "hex_color")]
    pub color: Color,
}

impl NameLayout {
    /// Resolve to (y, primary font px).
    pub fn resolve(&self, width: u32, height: u32) -> (f32, f32) {
        (
            height as f32 * self.y,
            (width as f32 * self.font_size).round(),
        )
    }
}

impl Default for NameLayout {
    fn default() -> Self {
        Self {
            y: 0.65,
            font_size: 0.06,
            weight: Weight::Bold,
            color: Color::WHITE,
        }
    }
}

/// Decorative caption overlay and the static bilingual caption under it.
///
/// The overlay image and the caption text are both centered on the
/// photo's center X; vertical placement is in template pixels (hand
/// calibrated against the artwork, not proportional).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaptionLayout {
    /// Overlay top edge, in template pixels
    pub overlay_y: f32,
    /// Overlay draw width, in template pixels (height follows aspect)
    pub overlay_width: f32,
    /// Caption text top edge, in template pixels
    pub text_y: f32,
    /// Caption font size as a fraction of template width
    pub font_size: f32,
    pub weight: Weight,
}

impl Default for CaptionLayout {
    fn default() -> Self {
        Self {
            overlay_y: 50.0,
            overlay_width: 600.0,
            text_y: 205.0,
            font_size: 0.025,
            weight: Weight::Normal,
        }
    }
}

/// The responsible-contact block: header caption, name, phone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResponsibleLayout {
    pub header: TextField,
    pub name: TextField,
    pub phone: TextField,
}

impl Default for ResponsibleLayout {
    fn default() -> Self {
        Self {
            header: TextField {
                x: 0.03,
                y: 0.86,
                font_size: 0.025,
                weight: Weight::Bold,
                color: Color::rgb(0x00, 0x28, 0x55),
            },
            name: TextField {
                x: 0.03,
                y: 0.90,
                font_size: 0.02,
                weight: Weight::Bold,
                color: Color::WHITE,
            },
            phone: TextField {
                x: 0.03,
                y: 0.94,
                font_size: 0.02,
                weight: Weight::Medium,
                color: Color::WHITE,
            },
        }
    }
}

/// QR code placement: top-left corner and side length, all fractions of
/// template width (y of height).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QrLayout {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

impl QrLayout {
    /// Resolve to (x, y, side) in template pixels.
    pub fn resolve(&self, width: u32, height: u32) -> (i64, i64, u32) {
        (
            (width as f32 * self.x).round() as i64,
            (height as f32 * self.y).round() as i64,
            (width as f32 * self.size).round().max(1.0) as u32,
        )
    }
}

impl Default for QrLayout {
    fn default() -> Self {
        Self {
            x: 0.695,
            y: 0.215,
            size: 0.18,
        }
    }
}

/// The complete declarative layout, calibrated for the stock template.
///
/// Serializable so the advanced-controls variant can round-trip it
/// through JSON and tweak individual fields live.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub photo: PhotoLayout,
    pub deputy_name: NameLayout,
    pub caption: CaptionLayout,
    pub responsible: ResponsibleLayout,
    pub qr: QrLayout,
}

impl LayoutConfig {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

mod hex_color {
    use raster_core::Color;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(color: &Color, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&color.to_hex())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Color, D::Error> {
        let raw = String::deserialize(d)?;
        Color::from_hex(&raw).map_err(D::Error::custom)
    }
}
