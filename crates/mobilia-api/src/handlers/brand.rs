//! Brand logo upload. Logos are small; the thumbnail rendition is stored.

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

#[tracing::instrument(skip(state, multipart), fields(operation = "upload_brand_logo"))]
pub async fn upload_brand_logo(
    State(state): State<Arc<AppState>>,
    _session: SessionContext,
    multipart: Multipart,
) -> Result<Json<SingleUploadResponse>, HttpAppError> {
    let form = extract_upload_form(multipart, "brandId", "brand")
        .await
        .map_err(HttpAppError::from)?;

    let url =
        store_single_variant(&state, &form, Bucket::BrandLogos, ImageVariant::Thumbnail).await?;

    Ok(Json(SingleUploadResponse { success: true, url }))
}
