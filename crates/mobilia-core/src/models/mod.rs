mod bucket;
mod responses;
mod variant;

pub use bucket::Bucket;
pub use responses::{
    DatasheetUploadResponse, DeleteImageRequest, DeleteResponse, ProductImageUrls,
    ProductUploadResponse, SingleUploadResponse,
};
pub use variant::ImageVariant;
