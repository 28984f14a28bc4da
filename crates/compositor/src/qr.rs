//! QR raster generation

use image::{Luma, RgbaImage};
use qrcode::{EcLevel, QrCode};
use raster_core::Color;

/// Minimum QR raster side, module-aligned upward.
const QR_MIN_PIXELS: u32 = 300;

/// Dark module color (card navy).
const QR_DARK: Color = Color::rgb(0x00, 0x28, 0x55);

/// Render `url` as a QR raster: error correction level M, at least
/// [`QR_MIN_PIXELS`] on a side, navy modules on a white quiet zone.
pub fn generate(url: &str) -> Result<RgbaImage, qrcode::types::QrError> {
    let code = QrCode::with_error_correction_level(url.as_bytes(), EcLevel::M)?;
    let gray = code
        .render::<Luma<u8>>()
        .min_dimensions(QR_MIN_PIXELS, QR_MIN_PIXELS)
        .build();

    let mut rgba = RgbaImage::new(gray.width(), gray.height());
    for (x, y, pixel) in gray.enumerate_pixels() {
        let color = if pixel.0[0] == 0 { QR_DARK } else { Color::WHITE };
        rgba.put_pixel(x, y, color.into());
    }
    Ok(rgba)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_raster_meets_minimum_size() {
        let qr = generate("https://example.kz/deputy/42").unwrap();
        assert!(qr.width() >= QR_MIN_PIXELS);
        assert!(qr.height() >= QR_MIN_PIXELS);
    }

    #[test]
    fn raster_uses_fixed_two_color_palette() {
        let qr = generate("https://example.kz").unwrap();
        let navy: image::Rgba<u8> = QR_DARK.into();
        let white: image::Rgba<u8> = Color::WHITE.into();
        let mut seen_navy = false;
        for pixel in qr.pixels() {
            assert!(*pixel == navy || *pixel == white);
            seen_navy |= *pixel == navy;
        }
        assert!(seen_navy);
    }

    #[test]
    fn oversized_payload_fails() {
        let url = "x".repeat(5000);
        assert!(generate(&url).is_err());
    }
}
