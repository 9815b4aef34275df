//! Room hero image upload. Rooms render full-width, so the large rendition
//! is stored.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use mobilia_core::models::{Bucket, ImageVariant, SingleUploadResponse};

use crate::auth::SessionContext;
use crate::error::HttpAppError;
use crate::handlers::single_variant::store_single_variant;
use crate::state::AppState;
use crate::utils::upload::extract_upload_form;

#[tracing::instrument(skip(state, multipart), fields(operation = "upload_room_image"))]
pub async fn upload_room_image(
    State(state): State<Arc<AppState>>,
    _session: SessionContext,
    multipart: Multipart,
) -> Result<Json<SingleUploadResponse>, HttpAppError> {
    let form = extract_upload_form(multipart, "roomId", "room")
        .await
        .map_err(HttpAppError::from)?;

    let url =
        store_single_variant(&state, &form, Bucket::RoomImages, ImageVariant::Original).await?;

    Ok(Json(SingleUploadResponse { success: true, url }))
}
