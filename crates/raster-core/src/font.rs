//! Font families with weight variants

use crate::{RasterError, Result};
use ab_glyph::FontArc;

/// Font weight requested by a layout field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Medium,
    Bold,
}

/// A font family with optional weight variants.
///
/// Variant lookup falls back toward regular: a missing bold uses medium,
/// a missing medium uses regular.
#[derive(Debug, Clone, Default)]
pub struct FontFamily {
    /// Regular variant (required for the family to be usable)
    pub regular: Option<FontArc>,
    /// Medium variant
    pub medium: Option<FontArc>,
    /// Bold variant
    pub bold: Option<FontArc>,
}

impl FontFamily {
    /// Get the font for the given weight, falling back toward regular.
    ///
    /// Returns `None` only when the family has no variants at all.
    pub fn variant(&self, weight: FontWeight) -> Option<&FontArc> {
        match weight {
            FontWeight::Bold => self
                .bold
                .as_ref()
                .or(self.medium.as_ref())
                .or(self.regular.as_ref()),
            FontWeight::Medium => self.medium.as_ref().or(self.regular.as_ref()),
            FontWeight::Normal => self.regular.as_ref(),
        }
    }

    /// Whether any variant is loaded.
    pub fn is_loaded(&self) -> bool {
        self.regular.is_some() || self.medium.is_some() || self.bold.is_some()
    }

    /// Load a variant from TTF/OTF bytes, replacing any existing one.
    pub fn load_variant(&mut self, weight: FontWeight, data: Vec<u8>) -> Result<()> {
        let font =
            FontArc::try_from_vec(data).map_err(|e| RasterError::FontParse(e.to_string()))?;
        match weight {
            FontWeight::Normal => self.regular = Some(font),
            FontWeight::Medium => self.medium = Some(font),
            FontWeight::Bold => self.bold = Some(font),
        }
        Ok(())
    }
}

/// Builder for [`FontFamily`]
pub struct FontFamilyBuilder {
    regular: Option<Vec<u8>>,
    medium: Option<Vec<u8>>,
    bold: Option<Vec<u8>>,
}

impl FontFamilyBuilder {
    pub fn new() -> Self {
        Self {
            regular: None,
            medium: None,
            bold: None,
        }
    }

    pub fn regular(mut self, ttf_data: Vec<u8>) -> Self {
        self.regular = Some(ttf_data);
        self
    }

    pub fn medium(mut self, ttf_data: Vec<u8>) -> Self {
        self.medium = Some(ttf_data);
        self
    }

    pub fn bold(mut self, ttf_data: Vec<u8>) -> Self {
        self.bold = Some(ttf_data);
        self
    }

    pub fn build(self) -> Result<FontFamily> {
        let mut family = FontFamily::default();
        if let Some(data) = self.regular {
            family.load_variant(FontWeight::Normal, data)?;
        }
        if let Some(data) = self.medium {
            family.load_variant(FontWeight::Medium, data)?;
        }
        if let Some(data) = self.bold {
            family.load_variant(FontWeight::Bold, data)?;
        }
        Ok(family)
    }
}

impl Default for FontFamilyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
