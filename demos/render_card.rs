//! Card demo - renders a deputy card from local assets
//!
//! This example shows:
//! - Building a compositor from a template image
//! - Loading the caption overlay and font families
//! - Setting the card fields (name splitting, phone mask, QR)
//! - Rendering to PNG and packaging as a single-page PDF
//!
//! Run with: cargo run --example render_card -p compositor
//!
//! Expects assets/template.png; the overlay and fonts are optional and
//! skipped when missing.

use compositor::{Compositor, FontRole};
use raster_core::FontWeight;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all("output")?;

    let mut card = Compositor::new(&std::fs::read("assets/template.png")?)?;

    if let Ok(overlay) = std::fs::read("assets/nadpis.png") {
        card.load_overlay(&overlay);
    }

    for (role, weight, path) in [
        (FontRole::Display, FontWeight::Bold, "fonts/PlayfairDisplay-Bold.ttf"),
        (FontRole::Display, FontWeight::Medium, "fonts/PlayfairDisplay-Medium.ttf"),
        (FontRole::Text, FontWeight::Normal, "fonts/Montserrat-Regular.ttf"),
        (FontRole::Text, FontWeight::Medium, "fonts/Montserrat-Medium.ttf"),
        (FontRole::Text, FontWeight::Bold, "fonts/Montserrat-Bold.ttf"),
    ] {
        match std::fs::read(path) {
            Ok(data) => card.load_font(role, weight, data)?,
            Err(_) => eprintln!("skipping missing font {path}"),
        }
    }

    card.set_deputy_name("Асанов Берик Нурланович");
    card.set_responsible_name("Серикова Алия");
    let masked = card.set_phone("87001234567").to_string();
    println!("phone field shows: {masked}");
    card.set_qr_url("https://example.kz/deputy/42");

    if let Ok(photo) = std::fs::read("assets/photo.jpg") {
        card.load_photo(&photo, "image/jpeg")?;
        card.wheel(-1.0);
    }

    std::fs::write("output/card.png", card.render_png()?)?;

    let pdf = pdf_export::export_pdf(&card.render(), pdf_export::PAGE_WIDTH_MM)?;
    let file_name = pdf_export::export_file_name(card.deputy_name());
    std::fs::write(format!("output/{file_name}"), pdf)?;

    println!(
        "wrote output/card.png and output/{file_name} ({}x{} template)",
        card.width(),
        card.height()
    );
    Ok(())
}
