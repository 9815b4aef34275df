//! Request/response schemas for the upload endpoints.
//!
//! Every endpoint answers an explicit schema validated at the boundary rather
//! than an ad-hoc JSON object.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Public URLs of the three renditions of a product image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductImageUrls {
    pub thumbnail: String,
    pub medium: String,
    pub original: String,
}

/// Response for the multi-variant product image upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUploadResponse {
    pub success: bool,
    pub urls: ProductImageUrls,
}

/// Response for single-variant uploads (avatar, brand logo, category, room).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingleUploadResponse {
    pub success: bool,
    pub url: String,
}

/// Response for the PDF datasheet upload. `fileName` echoes the client's
/// original filename; the stored name is timestamp-derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasheetUploadResponse {
    pub success: bool,
    pub url: String,
    pub file_name: String,
}

/// Body of the category image delete endpoint. Field names are camelCase on
/// the wire, matching the dashboard client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteImageRequest {
    pub category_id: Uuid,
    pub image_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}
