//! Color parsing and representation

use crate::{RasterError, Result};
use image::Rgba;

/// An RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` hex notation (leading `#` optional).
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.trim().trim_start_matches('#');
        let bad = || RasterError::InvalidColor(s.to_string());

        let byte = |i: usize| -> Result<u8> {
            u8::from_str_radix(hex.get(i..i + 2).ok_or_else(bad)?, 16).map_err(|_| bad())
        };

        match hex.len() {
            6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(bad()),
        }
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Hex representation (`#RRGGBB`, or `#RRGGBBAA` when not opaque).
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl From<Color> for Rgba<u8> {
    fn from(c: Color) -> Self {
        Rgba([c.r, c.g, c.b, c.a])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_rgb_hex() {
        assert_eq!(Color::from_hex("#C9A227").unwrap(), Color::rgb(201, 162, 39));
        assert_eq!(Color::from_hex("002855").unwrap(), Color::rgb(0, 40, 85));
    }

    #[test]
    fn parse_rgba_hex() {
        assert_eq!(
            Color::from_hex("#FFFFFF80").unwrap(),
            Color::rgba(255, 255, 255, 128)
        );
    }

    #[test]
    fn reject_invalid() {
        assert!(Color::from_hex("#FFF").is_err());
        assert!(Color::from_hex("not-a-color").is_err());
        assert!(Color::from_hex("").is_err());
    }

    #[test]
    fn hex_roundtrip() {
        for s in ["#FFFFFF", "#002855", "#C9A22780"] {
            assert_eq!(Color::from_hex(s).unwrap().to_hex(), s);
        }
    }
}
