//! Deterministic storage filename derivation.
//!
//! The derived name is a pure function of (original filename, variant), which
//! is what makes re-uploads overwrite instead of duplicate: the same input
//! name always lands on the same storage key for a given owner.

use mobilia_core::models::ImageVariant;

/// Compute the storage filename for an uploaded image and a size variant.
///
/// The final extension is stripped, every character outside ASCII
/// alphanumerics becomes its own `-` (consecutive punctuation is not
/// collapsed), the remainder is lowercased, and `-{variant}.jpg` is appended.
/// The output is always `.jpg` since every variant is re-encoded as JPEG.
pub fn derive_filename(original_name: &str, variant: ImageVariant) -> String {
    let stem = match original_name.rfind('.') {
        Some(idx) => &original_name[..idx],
        None => original_name,
    };

    let sanitized: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();

    format!("{}-{}.jpg", sanitized, variant.as_str())
}
