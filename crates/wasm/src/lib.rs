//! WASM bindings for the depcard editor
//!
//! This crate exposes the card compositor to the browser UI:
//! - Template / overlay / font / photo loading
//! - Field setters (name, responsible contact, phone mask, QR URL)
//! - Pointer, wheel, and pinch gesture handling for the photo
//! - Rendering to PNG and packaging as a single-page PDF
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { CardEditor } from 'depcard-wasm';
//!
//! await init();
//!
//! const editor = new CardEditor(templateBytes);
//! editor.loadOverlay(overlayBytes);
//! editor.loadFont('display', 'bold', playfairBoldBytes);
//! editor.loadFont('text', 'normal', montserratBytes);
//!
//! editor.setDeputyName('Асанов Берик Нурланович');
//! phoneInput.value = editor.setPhone(phoneInput.value);
//! editor.setQrUrl('https://example.kz/deputy/42');
//!
//! if (editor.takeDirty()) {
//!   canvasCtx.drawImage(await decodePng(editor.renderPng()), 0, 0);
//! }
//!
//! download(editor.pdfFileName(), editor.exportPdf());
//! ```

use compositor::{Compositor, FontRole};
use raster_core::FontWeight;
use wasm_bindgen::prelude::*;

// Panic messages go to the browser console instead of "unreachable".
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn parse_role(role: &str) -> Result<FontRole, JsValue> {
    match role {
        "display" => Ok(FontRole::Display),
        "text" => Ok(FontRole::Text),
        other => Err(JsValue::from_str(&format!(
            "unknown font role '{other}' (expected 'display' or 'text')"
        ))),
    }
}

fn parse_weight(weight: &str) -> Result<FontWeight, JsValue> {
    match weight {
        "normal" => Ok(FontWeight::Normal),
        "medium" => Ok(FontWeight::Medium),
        "bold" => Ok(FontWeight::Bold),
        other => Err(JsValue::from_str(&format!(
            "unknown font weight '{other}' (expected 'normal', 'medium' or 'bold')"
        ))),
    }
}

/// The card editor: one instance per page session.
#[wasm_bindgen]
pub struct CardEditor {
    inner: Compositor,
}

#[wasm_bindgen]
impl CardEditor {
    /// Create an editor from encoded template bytes (PNG or JPEG).
    ///
    /// Fails when the template cannot be decoded; the page shows a
    /// blocking notice in that case, there is no fallback rendering.
    #[wasm_bindgen(constructor)]
    pub fn new(template_bytes: &[u8]) -> Result<CardEditor, JsValue> {
        let inner = Compositor::new(template_bytes).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(CardEditor { inner })
    }

    /// Output width in template pixels.
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Output height in template pixels.
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Load the decorative caption overlay. A broken overlay only logs;
    /// the card renders without it.
    #[wasm_bindgen(js_name = loadOverlay)]
    pub fn load_overlay(&mut self, bytes: &[u8]) {
        self.inner.load_overlay(bytes);
        if self.inner.assets().overlay.is_none() {
            web_sys::console::warn_1(&"caption overlay could not be decoded, skipping".into());
        }
    }

    /// Load one font variant.
    ///
    /// @param role - 'display' (deputy name) or 'text' (everything else)
    /// @param weight - 'normal', 'medium' or 'bold'
    /// @param data - TTF/OTF bytes (Uint8Array)
    #[wasm_bindgen(js_name = loadFont)]
    pub fn load_font(&mut self, role: &str, weight: &str, data: &[u8]) -> Result<(), JsValue> {
        self.inner
            .load_font(parse_role(role)?, parse_weight(weight)?, data.to_vec())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = setDeputyName)]
    pub fn set_deputy_name(&mut self, name: &str) {
        self.inner.set_deputy_name(name);
    }

    #[wasm_bindgen(js_name = setResponsibleName)]
    pub fn set_responsible_name(&mut self, name: &str) {
        self.inner.set_responsible_name(name);
    }

    /// Apply the national phone mask and return the masked value for
    /// the input box to display.
    #[wasm_bindgen(js_name = setPhone)]
    pub fn set_phone(&mut self, raw: &str) -> String {
        self.inner.set_phone(raw).to_string()
    }

    /// Set the QR URL and regenerate the raster. Empty clears the QR;
    /// a generation failure keeps the previous raster.
    #[wasm_bindgen(js_name = setQrUrl)]
    pub fn set_qr_url(&mut self, url: &str) {
        self.inner.set_qr_url(url);
    }

    /// Load an uploaded photo, resetting zoom and pan.
    ///
    /// Rejects non-image uploads with an error message for the notice
    /// modal; prior photo and transform stay untouched.
    #[wasm_bindgen(js_name = loadPhoto)]
    pub fn load_photo(&mut self, bytes: &[u8], mime: &str) -> Result<(), JsValue> {
        self.inner
            .load_photo(bytes, mime)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Restore the photo transform to scale 1, offset (0, 0).
    #[wasm_bindgen(js_name = resetPhoto)]
    pub fn reset_photo(&mut self) {
        self.inner.reset_photo();
    }

    /// Pointer down over the canvas, in template pixel coordinates.
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.inner.pointer_down(x, y);
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.inner.pointer_move(x, y);
    }

    /// Pointer up or leave: closes the drag and pinch sessions.
    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self) {
        self.inner.pointer_up();
    }

    /// Wheel zoom; pass the event's deltaY.
    pub fn wheel(&mut self, delta_y: f32) {
        self.inner.wheel(delta_y);
    }

    /// Pinch zoom; pass the current two-finger distance in template
    /// pixels. The first sample of a gesture only primes the reference.
    pub fn pinch(&mut self, dist: f32) {
        self.inner.pinch(dist);
    }

    /// Whether a repaint is pending, clearing the flag. Lets the host
    /// batch several synchronous mutations into one paint.
    #[wasm_bindgen(js_name = takeDirty)]
    pub fn take_dirty(&mut self) -> bool {
        self.inner.take_dirty()
    }

    /// Render the card and encode it as PNG bytes.
    #[wasm_bindgen(js_name = renderPng)]
    pub fn render_png(&self) -> Result<js_sys::Uint8Array, JsValue> {
        let png = self
            .inner
            .render_png()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(js_sys::Uint8Array::from(&png[..]))
    }

    /// Package the current render as a single-page PDF.
    #[wasm_bindgen(js_name = exportPdf)]
    pub fn export_pdf(&self) -> Result<js_sys::Uint8Array, JsValue> {
        let raster = self.inner.render();
        let pdf = pdf_export::export_pdf(&raster, pdf_export::PAGE_WIDTH_MM)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(js_sys::Uint8Array::from(&pdf[..]))
    }

    /// Download file name for the exported PDF, derived from the
    /// deputy-name field.
    #[wasm_bindgen(js_name = pdfFileName)]
    pub fn pdf_file_name(&self) -> String {
        pdf_export::export_file_name(self.inner.deputy_name())
    }

    /// Current layout as a plain object, for the advanced controls.
    pub fn layout(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.inner.layout()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Replace the layout from an advanced-controls object. Missing
    /// fields fall back to the calibrated defaults.
    #[wasm_bindgen(js_name = setLayout)]
    pub fn set_layout(&mut self, layout: JsValue) -> Result<(), JsValue> {
        let layout: compositor::LayoutConfig = serde_wasm_bindgen::from_value(layout)?;
        self.inner.set_layout(layout);
        Ok(())
    }

    /// Current layout as pretty-printed JSON, for the editable textarea
    /// variant of the advanced controls.
    #[wasm_bindgen(js_name = layoutJson)]
    pub fn layout_json(&self) -> Result<String, JsValue> {
        self.inner
            .layout_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Replace the layout from JSON text.
    #[wasm_bindgen(js_name = setLayoutJson)]
    pub fn set_layout_json(&mut self, json: &str) -> Result<(), JsValue> {
        self.inner
            .set_layout_json(json)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
