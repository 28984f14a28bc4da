//! File-name slugs for exported documents

/// Fallback slug used when the name field is empty.
pub const DEFAULT_SLUG: &str = "open-deputy";

/// Turn a display name into a file-name slug.
///
/// Whitespace runs become single hyphens and the result is lower-cased.
/// An empty or whitespace-only name yields [`DEFAULT_SLUG`].
pub fn slugify(name: &str) -> String {
    let tokens: Vec<String> = name
        .split_whitespace()
        .map(|t| t.to_lowercase())
        .collect();

    if tokens.is_empty() {
        DEFAULT_SLUG.to_string()
    } else {
        tokens.join("-")
    }
}
