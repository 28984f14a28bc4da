//! Raster Core - Low-level RGBA drawing
//!
//! This crate provides the pixel-level building blocks for card
//! compositing:
//! - Alpha-blended overlays onto an RGBA canvas
//! - Color parsing (hex notation)
//! - Font families with weight variants and raster text drawing
//! - Clip shapes (circle, square, rounded rectangle)
//! - Cover-fit photo placement with zoom and pan
//!
//! # Example
//!
//! ```ignore
//! use raster_core::{draw_text, Align, Color, FontFamilyBuilder, FontWeight};
//!
//! let family = FontFamilyBuilder::new()
//!     .regular(std::fs::read("Montserrat-Regular.ttf")?)
//!     .bold(std::fs::read("Montserrat-Bold.ttf")?)
//!     .build()?;
//! let font = family.variant(FontWeight::Bold);
//! draw_text(&mut canvas, font.unwrap(), 48.0, 100.0, 200.0,
//!           Color::from_hex("#FFFFFF")?, "АСАНОВ", Align::Center);
//! ```

mod canvas;
mod color;
mod fit;
mod font;
mod shape;
mod text;

pub use canvas::{blend_pixel, overlay_alpha};
pub use color::Color;
pub use fit::{cover_size, draw_cover_image, draw_placeholder, PhotoFrame};
pub use font::{FontFamily, FontFamilyBuilder, FontWeight};
pub use shape::ClipShape;
pub use text::{draw_text, text_width, Align};

use thiserror::Error;

/// Errors that can occur during raster operations
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("failed to parse font: {0}")]
    FontParse(String),
}

/// Result type for raster operations
pub type Result<T> = std::result::Result<T, RasterError>;
