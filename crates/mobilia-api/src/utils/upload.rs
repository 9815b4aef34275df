//! Common utilities for file upload handlers

use axum::extract::Multipart;
use mobilia_core::AppError;
use uuid::Uuid;

/// One parsed upload form: the file plus the owning-entity id.
#[derive(Debug)]
pub struct UploadForm {
    pub data: Vec<u8>,
    pub filename: String,
    pub content_type: String,
    pub owner_id: Uuid,
}

/// Extract the `file` field and the owner id field from a multipart form.
///
/// `owner_field` is the form field name (e.g. "productId"), `owner_label`
/// the human word used in error messages (e.g. "product"). Exactly one file
/// field is accepted; multiple file fields are rejected.
pub async fn extract_upload_form(
    mut multipart: Multipart,
    owner_field: &str,
    owner_label: &str,
) -> Result<UploadForm, AppError> {
    let mut file_data: Option<Vec<u8>> = None;
    let mut filename: Option<String> = None;
    let mut content_type: Option<String> = None;
    let mut owner_id: Option<Uuid> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        if field_name == "file" {
            if file_data.is_some() {
                return Err(AppError::InvalidInput(
                    "Multiple file fields are not allowed; send exactly one field named 'file'"
                        .to_string(),
                ));
            }
            filename = field.file_name().map(|s: &str| s.to_string());
            content_type = field.content_type().map(|s: &str| s.to_string());

            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::InvalidInput(format!("Failed to read file data: {}", e)))?;

            file_data = Some(data.to_vec());
        } else if field_name == owner_field {
            let raw = field
                .text()
                .await
                .map_err(|e| AppError::InvalidInput(format!("Failed to read form field: {}", e)))?;

            let id = raw.trim().parse::<Uuid>().map_err(|_| {
                AppError::InvalidInput(format!("Invalid {} ID", owner_label))
            })?;
            owner_id = Some(id);
        }
    }

    let data = file_data.ok_or_else(|| AppError::InvalidInput("No file provided".to_string()))?;
    let owner_id = owner_id
        .ok_or_else(|| AppError::InvalidInput(format!("No {} ID provided", owner_label)))?;

    Ok(UploadForm {
        data,
        filename: filename.unwrap_or_else(|| "unknown".to_string()),
        content_type: content_type.unwrap_or_else(|| "application/octet-stream".to_string()),
        owner_id,
    })
}
