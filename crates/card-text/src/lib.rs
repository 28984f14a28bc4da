//! Text processing for deputy cards
//!
//! This crate provides:
//! - Phone number masking to the fixed national pattern `+7 (XXX) XXX-XX-XX`
//! - The two-line name splitting heuristic (surname line + given-names line)
//! - File-name slugs for the exported PDF
//!
//! Everything here is a pure function of its string input, so the render
//! path and the input handlers can share one implementation.

mod name;
mod phone;
mod slug;

pub use name::{split_name, NameLines};
pub use phone::format_phone;
pub use slug::{slugify, DEFAULT_SLUG};
