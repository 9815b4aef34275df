//! Shared path for the endpoints that store one chosen rendition.

use mobilia_core::models::{Bucket, ImageVariant};
use mobilia_processing::{derive_filename, UploadValidator, VariantGenerator};
use mobilia_storage::keys::object_key;

use crate::error::HttpAppError;
use crate::state::AppState;
use crate::utils::upload::UploadForm;

/// Validate, generate the variant set, and store the chosen rendition under
/// the owner's deterministic key. Returns the public URL.
pub(crate) async fn store_single_variant(
    state: &AppState,
    form: &UploadForm,
    bucket: Bucket,
    variant: ImageVariant,
) -> Result<String, HttpAppError> {
    UploadValidator::new(state.limits.max_image_bytes).validate_size(form.data.len())?;

    let variants = VariantGenerator::generate(&form.data)?;

    let key = object_key(form.owner_id, &derive_filename(&form.filename, variant));
    let url = state
        .storage
        .upload(bucket, &key, "image/jpeg", variants.get(variant).to_vec())
        .await?;

    Ok(url)
}
