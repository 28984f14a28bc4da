//! Card Compositor
//!
//! Owns the declarative [`LayoutConfig`], the mutable
//! [`InteractionState`] (photo zoom and pan), the loaded [`Assets`],
//! and the current field values, and deterministically redraws the
//! whole card from them. Every mutating setter marks the compositor
//! dirty; the host checks [`Compositor::take_dirty`] before painting so
//! several synchronous mutations collapse into one render.
//!
//! # Example
//!
//! ```ignore
//! use compositor::Compositor;
//!
//! let mut card = Compositor::new(&std::fs::read("template.png")?)?;
//! card.set_deputy_name("Асанов Берик Нурланович");
//! card.set_qr_url("https://example.kz/deputy/42");
//! let raster = card.render();
//! ```

mod assets;
mod layout;
mod qr;
mod render;
mod state;

pub use assets::Assets;
pub use layout::{
    CaptionLayout, FrameShape, LayoutConfig, NameLayout, PhotoLayout, QrLayout, ResponsibleLayout,
    TextAnchor, TextField, Weight,
};
pub use render::{DEPUTY_NAME_PLACEHOLDER, PHONE_PLACEHOLDER, RESPONSIBLE_NAME_PLACEHOLDER};
pub use state::{InteractionState, MAX_SCALE, MIN_SCALE};

use image::{ImageFormat, RgbaImage};
use raster_core::{FontFamily, FontWeight};
use std::io::Cursor;
use thiserror::Error;

/// Errors surfaced by the compositor
#[derive(Debug, Error)]
pub enum CompositorError {
    /// The background template could not be decoded. Fatal: there is no
    /// fallback rendering without a template.
    #[error("failed to load template: {0}")]
    Template(String),

    /// An uploaded file was rejected; prior state is untouched.
    #[error("rejected upload: {0}")]
    InvalidUpload(String),

    /// Layout JSON from the advanced controls did not parse.
    #[error("invalid layout: {0}")]
    Layout(#[from] serde_json::Error),

    /// A font file could not be parsed.
    #[error(transparent)]
    Font(#[from] raster_core::RasterError),

    /// The rendered raster could not be encoded.
    #[error("failed to encode render output: {0}")]
    Encode(String),
}

/// Result type for compositor operations
pub type Result<T> = std::result::Result<T, CompositorError>;

/// Which font family a text field draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontRole {
    /// Serif display family for the deputy name
    Display,
    /// Sans family for captions, the responsible block, and the phone
    Text,
}

/// The two font families of the card, loaded per weight at startup.
#[derive(Debug, Clone, Default)]
pub struct FontSet {
    display: FontFamily,
    text: FontFamily,
}

impl FontSet {
    pub fn family(&self, role: FontRole) -> &FontFamily {
        match role {
            FontRole::Display => &self.display,
            FontRole::Text => &self.text,
        }
    }

    pub fn load(&mut self, role: FontRole, weight: FontWeight, data: Vec<u8>) -> Result<()> {
        let family = match role {
            FontRole::Display => &mut self.display,
            FontRole::Text => &mut self.text,
        };
        family.load_variant(weight, data)?;
        Ok(())
    }
}

/// The card compositor. See the crate docs.
pub struct Compositor {
    layout: LayoutConfig,
    state: InteractionState,
    assets: Assets,
    fonts: FontSet,
    deputy_name: String,
    responsible_name: String,
    phone: String,
    qr_seq: u64,
    dirty: bool,
}

impl Compositor {
    /// Build a compositor from encoded template bytes (PNG or JPEG).
    pub fn new(template_bytes: &[u8]) -> Result<Self> {
        Ok(Self::from_template(Assets::decode_template(template_bytes)?))
    }

    /// Build a compositor around an already-decoded template.
    pub fn from_template(template: RgbaImage) -> Self {
        Self {
            layout: LayoutConfig::default(),
            state: InteractionState::new(),
            assets: Assets::new(template),
            fonts: FontSet::default(),
            deputy_name: String::new(),
            responsible_name: String::new(),
            phone: String::new(),
            qr_seq: 0,
            dirty: true,
        }
    }

    /// Output width: the template's native pixel width.
    pub fn width(&self) -> u32 {
        self.assets.template.width()
    }

    /// Output height: the template's native pixel height.
    pub fn height(&self) -> u32 {
        self.assets.template.height()
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn set_layout(&mut self, layout: LayoutConfig) {
        self.layout = layout;
        self.dirty = true;
    }

    pub fn layout_json(&self) -> Result<String> {
        Ok(self.layout.to_json()?)
    }

    /// Replace the layout from advanced-controls JSON. Partial objects
    /// fall back to the calibrated defaults per field.
    pub fn set_layout_json(&mut self, json: &str) -> Result<()> {
        self.set_layout(LayoutConfig::from_json(json)?);
        Ok(())
    }

    /// Load the decorative caption overlay. A broken overlay is logged
    /// and skipped; the card renders without it.
    pub fn load_overlay(&mut self, bytes: &[u8]) {
        self.assets.overlay = Assets::decode_overlay(bytes);
        self.dirty = true;
    }

    pub fn load_font(&mut self, role: FontRole, weight: FontWeight, data: Vec<u8>) -> Result<()> {
        self.fonts.load(role, weight, data)?;
        self.dirty = true;
        Ok(())
    }

    pub fn fonts(&self) -> &FontSet {
        &self.fonts
    }

    pub fn deputy_name(&self) -> &str {
        &self.deputy_name
    }

    pub fn set_deputy_name(&mut self, name: &str) {
        self.deputy_name = name.trim().to_string();
        self.dirty = true;
    }

    pub fn set_responsible_name(&mut self, name: &str) {
        self.responsible_name = name.trim().to_string();
        self.dirty = true;
    }

    /// Store the phone field as the masked national format and return
    /// the masked value for the input box to display.
    pub fn set_phone(&mut self, raw: &str) -> &str {
        self.phone = card_text::format_phone(raw);
        self.dirty = true;
        &self.phone
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Load an uploaded photo. On success the photo transform resets to
    /// identity; on rejection nothing changes.
    pub fn load_photo(&mut self, bytes: &[u8], mime: &str) -> Result<()> {
        let photo = Assets::decode_photo(bytes, mime)?;
        self.assets.photo = Some(photo);
        self.state.reset();
        self.dirty = true;
        Ok(())
    }

    /// Restore the photo transform to scale 1, offset (0, 0).
    pub fn reset_photo(&mut self) {
        self.state.reset();
        self.dirty = true;
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Pointer down over the canvas. Gestures only have meaning while a
    /// photo is loaded; before that they are ignored.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        if self.assets.photo.is_none() {
            return;
        }
        self.state.begin_drag(x, y);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if self.state.drag_to(x, y) {
            self.dirty = true;
        }
    }

    pub fn pointer_up(&mut self) {
        self.state.end_drag();
        self.state.end_pinch();
    }

    pub fn wheel(&mut self, delta_y: f32) {
        if self.assets.photo.is_none() {
            return;
        }
        self.state.wheel_zoom(delta_y);
        self.dirty = true;
    }

    pub fn pinch(&mut self, dist: f32) {
        if self.assets.photo.is_none() {
            return;
        }
        self.state.pinch(dist);
        self.dirty = true;
    }

    /// Set the QR URL and regenerate the raster in place.
    ///
    /// An empty URL clears the QR. A generation failure is logged and
    /// leaves the previous raster (or none) displayed.
    pub fn set_qr_url(&mut self, url: &str) {
        let seq = self.request_qr(url);
        let url = url.trim();
        if url.is_empty() {
            return;
        }
        match qr::generate(url) {
            Ok(raster) => {
                self.apply_qr(seq, raster);
            }
            Err(e) => tracing::warn!(error = %e, "qr generation failed, keeping previous raster"),
        }
    }

    /// Open a QR request for a host that generates off the event loop.
    ///
    /// Returns the request sequence number to pass to [`apply_qr`];
    /// only the most recently opened request is accepted, so stale
    /// completions from rapid input are discarded deterministically.
    /// An empty URL clears the raster immediately.
    ///
    /// [`apply_qr`]: Compositor::apply_qr
    pub fn request_qr(&mut self, url: &str) -> u64 {
        self.qr_seq += 1;
        if url.trim().is_empty() {
            self.assets.qr = None;
            self.dirty = true;
        }
        self.qr_seq
    }

    /// Complete a QR request. Returns false when the request was
    /// superseded and the raster was discarded.
    pub fn apply_qr(&mut self, seq: u64, raster: RgbaImage) -> bool {
        if seq != self.qr_seq {
            tracing::debug!(seq, current = self.qr_seq, "discarding stale qr completion");
            return false;
        }
        self.assets.qr = Some(raster);
        self.dirty = true;
        true
    }

    pub fn assets(&self) -> &Assets {
        &self.assets
    }

    /// Whether a repaint is pending, clearing the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Encode the current render as PNG bytes.
    pub fn render_png(&self) -> Result<Vec<u8>> {
        let raster = self.render();
        let mut buf = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(raster)
            .write_to(&mut buf, ImageFormat::Png)
            .map_err(|e| CompositorError::Encode(e.to_string()))?;
        Ok(buf.into_inner())
    }
}
