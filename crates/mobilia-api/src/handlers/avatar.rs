//! User avatar upload. Stores the thumbnail rendition only.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use mobilia_core::models::{Bucket, ImageVariant, SingleUploadResponse};
use mobilia_core::AppError;

use crate::auth::SessionContext;
use crate::error::HttpAppError;
use crate::handlers::single_variant::store_single_variant;
use crate::state::AppState;
use crate::utils::upload::extract_upload_form;

/// Upload an avatar for the authenticated user.
///
/// The only endpoint with an ownership check beyond session auth: a user may
/// only replace their own avatar.
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_avatar", user_id = %session.user_id))]
pub async fn upload_avatar(
    State(state): State<Arc<AppState>>,
    session: SessionContext,
    multipart: Multipart,
) -> Result<Json<SingleUploadResponse>, HttpAppError> {
    let form = extract_upload_form(multipart, "userId", "user")
        .await
        .map_err(HttpAppError::from)?;

    if session.user_id != form.owner_id {
        return Err(HttpAppError(AppError::Forbidden("Forbidden".to_string())));
    }

    let url = store_single_variant(&state, &form, Bucket::Avatars, ImageVariant::Thumbnail).await?;

    Ok(Json(SingleUploadResponse { success: true, url }))
}
