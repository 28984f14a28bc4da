//! Single-page PDF packaging
//!
//! Wraps a rendered card raster in a one-page PDF: fixed physical page
//! width, height proportional to the raster's aspect ratio, the raster
//! embedded full-bleed as a FlateDecode RGB image XObject.
//!
//! # Example
//!
//! ```ignore
//! let pdf = pdf_export::export_pdf(&raster, pdf_export::PAGE_WIDTH_MM)?;
//! std::fs::write(pdf_export::export_file_name("Асанов Берик"), pdf)?;
//! ```

mod raster;

pub use raster::RasterXObject;

use image::RgbaImage;
use lopdf::{dictionary, Document, Object, Stream};
use thiserror::Error;

/// Errors surfaced by the exporter
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing to export: empty raster")]
    EmptyRaster,

    #[error("failed to compress raster: {0}")]
    Compress(#[from] std::io::Error),

    #[error("failed to write PDF: {0}")]
    Save(String),
}

/// Result type for export operations
pub type Result<T> = std::result::Result<T, ExportError>;

/// Physical page width of the exported card.
pub const PAGE_WIDTH_MM: f64 = 148.0;

const POINTS_PER_MM: f64 = 72.0 / 25.4;

/// Convert millimetres to PDF points.
pub fn mm_to_pt(mm: f64) -> f64 {
    mm * POINTS_PER_MM
}

/// Package the rendered raster as a single-page PDF.
///
/// The page is `page_width_mm` wide; its height follows the raster's
/// aspect ratio, so the card keeps its proportions in print.
pub fn export_pdf(card: &RgbaImage, page_width_mm: f64) -> Result<Vec<u8>> {
    if card.width() == 0 || card.height() == 0 {
        return Err(ExportError::EmptyRaster);
    }

    let page_w = mm_to_pt(page_width_mm);
    let page_h = page_w * (card.height() as f64 / card.width() as f64);

    let xobject = RasterXObject::from_rgba(card)?;

    let mut doc = Document::with_version("1.5");
    let image_id = doc.add_object(Object::Stream(xobject.to_stream()));

    let pages_id = doc.add_object(Object::Dictionary(dictionary! {
        "Type" => "Pages",
        "Count" => 1,
        "Kids" => vec![],
    }));

    let contents_id = doc.add_object(Object::Stream(Stream::new(
        dictionary! {},
        raster::full_bleed_operators("Im1", page_w, page_h),
    )));

    let page_id = doc.add_object(Object::Dictionary(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), page_w.into(), page_h.into()],
        "Resources" => dictionary! {
            "XObject" => dictionary! { "Im1" => image_id },
        },
        "Contents" => contents_id,
    }));

    if let Ok(pages) = doc.get_object_mut(pages_id).and_then(Object::as_dict_mut) {
        pages.set("Kids", Object::Array(vec![page_id.into()]));
    }

    let catalog_id = doc.add_object(Object::Dictionary(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    }));
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| ExportError::Save(e.to_string()))?;
    Ok(buffer)
}

/// Download file name for the exported card: a hyphenated, lower-cased
/// slug of the deputy name, or a fixed default when the field is empty.
pub fn export_file_name(deputy_name: &str) -> String {
    format!("id-card-{}.pdf", card_text::slugify(deputy_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use pretty_assertions::assert_eq;

    fn media_box(pdf: &[u8]) -> (f64, f64) {
        let doc = Document::load_mem(pdf).unwrap();
        let page_id = *doc.get_pages().get(&1).unwrap();
        let page = doc.get_object(page_id).unwrap().as_dict().unwrap();
        let mb = page.get(b"MediaBox").unwrap().as_array().unwrap();
        (mb[2].as_f32().unwrap() as f64, mb[3].as_f32().unwrap() as f64)
    }

    #[test]
    fn page_height_is_proportional_to_raster() {
        let card = RgbaImage::from_pixel(400, 300, Rgba([255, 255, 255, 255]));
        let pdf = export_pdf(&card, PAGE_WIDTH_MM).unwrap();

        let (w, h) = media_box(&pdf);
        let expected_w = mm_to_pt(PAGE_WIDTH_MM);
        assert!((w - expected_w).abs() < 0.01, "width {w}");
        assert!((h - expected_w * 300.0 / 400.0).abs() < 0.01, "height {h}");
    }

    #[test]
    fn exported_document_has_one_page_with_the_image() {
        let card = RgbaImage::from_pixel(16, 16, Rgba([0, 40, 85, 255]));
        let pdf = export_pdf(&card, PAGE_WIDTH_MM).unwrap();

        let doc = Document::load_mem(&pdf).unwrap();
        let pages = doc.get_pages();
        assert_eq!(pages.len(), 1);

        let page = doc.get_object(pages[&1]).unwrap().as_dict().unwrap();
        let resources = page.get(b"Resources").unwrap().as_dict().unwrap();
        let xobjects = resources.get(b"XObject").unwrap().as_dict().unwrap();
        assert!(xobjects.has(b"Im1"));
    }

    #[test]
    fn empty_raster_is_rejected() {
        let card = RgbaImage::new(0, 0);
        assert!(matches!(
            export_pdf(&card, PAGE_WIDTH_MM),
            Err(ExportError::EmptyRaster)
        ));
    }

    #[test]
    fn file_name_is_a_slug_of_the_deputy_name() {
        assert_eq!(
            export_file_name("Асанов Берик Нурланович"),
            "id-card-асанов-берик-нурланович.pdf"
        );
        assert_eq!(export_file_name("Madonna"), "id-card-madonna.pdf");
        assert_eq!(export_file_name("   "), "id-card-open-deputy.pdf");
        assert_eq!(export_file_name(""), "id-card-open-deputy.pdf");
    }
}
