//! Loaded bitmap assets

use crate::{CompositorError, Result};
use image::RgbaImage;

/// The bitmaps the compositor draws from.
///
/// Each asset is immutable once loaded and replaced wholesale; there is
/// no partial mutation and no persistence.
#[derive(Debug, Clone)]
pub struct Assets {
    /// Background template; defines the output dimensions.
    pub template: RgbaImage,
    /// Decorative caption overlay, absent when not shipped or undecodable.
    pub overlay: Option<RgbaImage>,
    /// User-uploaded photo.
    pub photo: Option<RgbaImage>,
    /// Generated QR raster.
    pub qr: Option<RgbaImage>,
}

impl Assets {
    pub fn new(template: RgbaImage) -> Self {
        Self {
            template,
            overlay: None,
            photo: None,
            qr: None,
        }
    }

    /// Decode the background template. Failure is fatal to the session.
    pub fn decode_template(bytes: &[u8]) -> Result<RgbaImage> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| CompositorError::Template(e.to_string()))?;
        Ok(img.to_rgba8())
    }

    /// Decode the decorative overlay; an undecodable overlay is dropped
    /// silently and the feature simply does not appear.
    pub fn decode_overlay(bytes: &[u8]) -> Option<RgbaImage> {
        match image::load_from_memory(bytes) {
            Ok(img) => Some(img.to_rgba8()),
            Err(e) => {
                tracing::warn!(error = %e, "overlay image dropped: decode failed");
                None
            }
        }
    }

    /// Decode an uploaded photo, rejecting anything that does not carry
    /// an image MIME type or fails to decode.
    pub fn decode_photo(bytes: &[u8], mime: &str) -> Result<RgbaImage> {
        if !mime.starts_with("image/") {
            return Err(CompositorError::InvalidUpload(format!(
                "unsupported file type: {mime}"
            )));
        }
        let img = image::load_from_memory(bytes)
            .map_err(|e| CompositorError::InvalidUpload(e.to_string()))?;
        Ok(img.to_rgba8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_image_mime_is_rejected() {
        let err = Assets::decode_photo(b"%PDF-1.4", "application/pdf");
        assert!(matches!(err, Err(CompositorError::InvalidUpload(_))));
    }

    #[test]
    fn undecodable_image_payload_is_rejected() {
        let err = Assets::decode_photo(b"not really pixels", "image/png");
        assert!(matches!(err, Err(CompositorError::InvalidUpload(_))));
    }

    #[test]
    fn broken_overlay_degrades_silently() {
        assert!(Assets::decode_overlay(b"garbage").is_none());
    }

    #[test]
    fn broken_template_is_fatal() {
        let err = Assets::decode_template(b"garbage");
        assert!(matches!(err, Err(CompositorError::Template(_))));
    }
}
