//! PDF datasheet upload.
//!
//! Bypasses the image pipeline entirely: the raw buffer is stored as-is
//! under a timestamped filename, so successive datasheet uploads for the
//! same product never overwrite each other.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use chrono::Utc;
use mobilia_core::models::{Bucket, DatasheetUploadResponse};
use mobilia_core::AppError;
use mobilia_processing::UploadValidator;
use mobilia_storage::keys::object_key;

use crate::auth::SessionContext;
use crate::error::HttpAppError;
use crate::state::AppState;
use crate::utils::upload::extract_upload_form;

#[tracing::instrument(skip(state, multipart), fields(operation = "upload_datasheet"))]
pub async fn upload_datasheet(
    State(state): State<Arc<AppState>>,
    _session: SessionContext,
    multipart: Multipart,
) -> Result<Json<DatasheetUploadResponse>, HttpAppError> {
    let form = extract_upload_form(multipart, "productId", "product")
        .await
        .map_err(HttpAppError::from)?;

    if UploadValidator::validate_content_type(&form.content_type, "application/pdf").is_err() {
        return Err(HttpAppError(AppError::InvalidInput(
            "Only PDF files are allowed".to_string(),
        )));
    }

    let max = state.limits.max_datasheet_bytes;
    if form.data.is_empty() {
        return Err(HttpAppError(AppError::InvalidInput(
            "File is empty".to_string(),
        )));
    }
    if form.data.len() > max {
        return Err(HttpAppError(AppError::InvalidInput(format!(
            "File size must be less than {}MB",
            max / 1024 / 1024
        ))));
    }

    let stored_name = format!(
        "{}-datasheet-{}.pdf",
        form.owner_id,
        Utc::now().timestamp_millis()
    );
    let key = object_key(form.owner_id, &stored_name);

    let url = state
        .storage
        .upload(Bucket::ProductDatasheets, &key, "application/pdf", form.data)
        .await
        .map_err(HttpAppError::from)?;

    Ok(Json(DatasheetUploadResponse {
        success: true,
        url,
        file_name: form.filename,
    }))
}
