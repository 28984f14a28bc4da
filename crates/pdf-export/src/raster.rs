//! Raster image XObject for PDF embedding

use crate::Result;
use image::RgbaImage;
use lopdf::{Dictionary, Object, Stream};
use std::io::Write;

/// A rendered card raster prepared for PDF embedding: RGB samples with
/// alpha pre-blended over white, FlateDecode compressed.
#[derive(Debug, Clone)]
pub struct RasterXObject {
    pub width: u32,
    pub height: u32,
    data: Vec<u8>,
}

impl RasterXObject {
    pub fn from_rgba(raster: &RgbaImage) -> Result<Self> {
        let mut rgb = Vec::with_capacity((raster.width() * raster.height() * 3) as usize);
        for pixel in raster.pixels() {
            let alpha = pixel[3] as f32 / 255.0;
            for channel in 0..3 {
                rgb.push((pixel[channel] as f32 * alpha + 255.0 * (1.0 - alpha)) as u8);
            }
        }

        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(&rgb)?;
        let data = encoder.finish()?;

        Ok(Self {
            width: raster.width(),
            height: raster.height(),
            data,
        })
    }

    /// Convert to a lopdf image stream.
    pub fn to_stream(&self) -> Stream {
        let mut dict = Dictionary::new();
        dict.set("Type", Object::Name(b"XObject".to_vec()));
        dict.set("Subtype", Object::Name(b"Image".to_vec()));
        dict.set("Width", self.width as i64);
        dict.set("Height", self.height as i64);
        dict.set("ColorSpace", Object::Name(b"DeviceRGB".to_vec()));
        dict.set("BitsPerComponent", 8i64);
        dict.set("Filter", Object::Name(b"FlateDecode".to_vec()));
        dict.set("Length", self.data.len() as i64);

        Stream::new(dict, self.data.clone())
    }
}

/// Operators drawing the image full-bleed at the page origin.
pub fn full_bleed_operators(image_name: &str, width: f64, height: f64) -> Vec<u8> {
    format!("q\n{width} 0 0 {height} 0 0 cm\n/{image_name} Do\nQ\n").into_bytes()
}
