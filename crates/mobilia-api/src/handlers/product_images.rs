//! Multi-variant product image upload.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use mobilia_core::models::{Bucket, ImageVariant, ProductImageUrls, ProductUploadResponse};
use mobilia_processing::{derive_filename, UploadValidator, VariantGenerator};
use mobilia_storage::keys::object_key;

use crate::auth::SessionContext;
use crate::error::HttpAppError;
use crate::state::AppState;
use crate::utils::upload::extract_upload_form;

/// Upload one product image and store all three renditions.
///
/// The three storage writes run as independent concurrent operations; the
/// request fails if any of them fails, but writes that already completed are
/// left in place (no compensating rollback).
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_product_images"))]
pub async fn upload_product_images(
    State(state): State<Arc<AppState>>,
    _session: SessionContext,
    multipart: Multipart,
) -> Result<Json<ProductUploadResponse>, HttpAppError> {
    let form = extract_upload_form(multipart, "productId", "product")
        .await
        .map_err(HttpAppError::from)?;

    UploadValidator::new(state.limits.max_image_bytes).validate_size(form.data.len())?;

    let variants = VariantGenerator::generate(&form.data)?;

    let upload = |variant: ImageVariant| {
        let key = object_key(form.owner_id, &derive_filename(&form.filename, variant));
        let data = variants.get(variant).to_vec();
        let storage = state.storage.clone();
        async move {
            storage
                .upload(Bucket::ProductImages, &key, "image/jpeg", data)
                .await
        }
    };

    let (thumbnail, medium, original) = futures::join!(
        upload(ImageVariant::Thumbnail),
        upload(ImageVariant::Medium),
        upload(ImageVariant::Original)
    );

    let urls = ProductImageUrls {
        thumbnail: thumbnail.map_err(HttpAppError::from)?,
        medium: medium.map_err(HttpAppError::from)?,
        original: original.map_err(HttpAppError::from)?,
    };

    Ok(Json(ProductUploadResponse {
        success: true,
        urls,
    }))
}
