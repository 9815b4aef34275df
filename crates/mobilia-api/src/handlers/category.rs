//! Category image upload with replace semantics.
//!
//! Categories hold a single image reference, so a new upload first deletes
//! the previously stored object. That deletion is best-effort: a failure is
//! logged and the upload proceeds regardless.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use mobilia_core::models::{Bucket, ImageVariant, SingleUploadResponse};
use mobilia_storage::parse_object_url;

use crate::auth::SessionContext;
use crate::error::HttpAppError;
use crate::handlers::single_variant::store_single_variant;
use crate::state::AppState;
use crate::utils::upload::extract_upload_form;

#[tracing::instrument(skip(state, multipart), fields(operation = "upload_category_image"))]
pub async fn upload_category_image(
    State(state): State<Arc<AppState>>,
    _session: SessionContext,
    multipart: Multipart,
) -> Result<Json<SingleUploadResponse>, HttpAppError> {
    let form = extract_upload_form(multipart, "categoryId", "category")
        .await
        .map_err(HttpAppError::from)?;

    delete_previous_image(&state, form.owner_id).await;

    let url =
        store_single_variant(&state, &form, Bucket::CategoryImages, ImageVariant::Medium).await?;

    Ok(Json(SingleUploadResponse { success: true, url }))
}

/// Best-effort removal of the category's current image object. Never blocks
/// the replacement upload.
async fn delete_previous_image(state: &AppState, category_id: uuid::Uuid) {
    let old_url = match state.categories.image_url(category_id).await {
        Ok(Some(url)) => url,
        Ok(None) => return,
        Err(e) => {
            tracing::warn!(
                error = %e,
                category_id = %category_id,
                "Failed to look up existing category image; continuing with upload"
            );
            return;
        }
    };

    let old_key = match parse_object_url(&old_url, Bucket::CategoryImages) {
        Ok(key) => key,
        Err(e) => {
            tracing::warn!(
                error = %e,
                category_id = %category_id,
                "Stored category image URL is not parseable; skipping delete"
            );
            return;
        }
    };

    if let Err(e) = state
        .storage
        .delete(Bucket::CategoryImages, &old_key)
        .await
    {
        tracing::warn!(
            error = %e,
            category_id = %category_id,
            key = %old_key,
            "Failed to delete replaced category image; continuing with upload"
        );
    }
}
