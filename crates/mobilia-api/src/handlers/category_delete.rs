//! Standalone category image deletion.
//!
//! Unlike the replace flow, storage and database errors here propagate to
//! the caller: the client asked for the deletion explicitly and needs to
//! know it did not happen.

use std::sync::Arc;

use axum::{extract::State, Json};
use mobilia_core::models::{Bucket, DeleteImageRequest, DeleteResponse};
use mobilia_storage::parse_object_url;

use crate::auth::SessionContext;
use crate::error::{HttpAppError, ValidatedJson};
use crate::state::AppState;

#[tracing::instrument(skip(state, req), fields(operation = "delete_category_image"))]
pub async fn delete_category_image(
    State(state): State<Arc<AppState>>,
    _session: SessionContext,
    ValidatedJson(req): ValidatedJson<DeleteImageRequest>,
) -> Result<Json<DeleteResponse>, HttpAppError> {
    let key = parse_object_url(&req.image_url, Bucket::CategoryImages)
        .map_err(|_| HttpAppError(mobilia_core::AppError::InvalidInput(
            "Invalid image URL".to_string(),
        )))?;

    state
        .storage
        .delete(Bucket::CategoryImages, &key)
        .await
        .map_err(HttpAppError::from)?;

    state
        .categories
        .clear_image_url(req.category_id)
        .await
        .map_err(HttpAppError::from)?;

    Ok(Json(DeleteResponse { success: true }))
}
