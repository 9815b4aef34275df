//! Shared key generation and URL parsing for storage backends.
//!
//! Key format: `{owner_id}/{filename}`. Public URLs contain `/{bucket}/`
//! followed by the key; `parse_object_url` inverts that.

use crate::traits::{StorageError, StorageResult};
use mobilia_core::models::Bucket;
use uuid::Uuid;

/// Generate the storage key for an owner and derived filename.
///
/// All backends must use this format; the owner id namespaces every object so
/// uploads for different entities can never collide.
pub fn object_key(owner_id: Uuid, filename: &str) -> String {
    format!("{}/{}", owner_id, filename)
}

/// Recover the storage key from a previously issued public URL.
///
/// Locates the `/{bucket}/` marker in the URL and treats everything after it
/// (minus any query or fragment) as the key. Fails if the marker is absent,
/// which covers malformed and foreign URLs alike.
pub fn parse_object_url(url: &str, bucket: Bucket) -> StorageResult<String> {
    let path = url
        .split(['?', '#'])
        .next()
        .unwrap_or(url);

    let marker = format!("/{}/", bucket.as_str());
    let key = path
        .split_once(&marker)
        .map(|(_, rest)| rest)
        .ok_or_else(|| {
            StorageError::InvalidUrl(format!(
                "URL does not contain the '{}' bucket: {}",
                bucket.as_str(),
                url
            ))
        })?;

    if key.is_empty() {
        return Err(StorageError::InvalidUrl(format!(
            "URL has an empty object key: {}",
            url
        )));
    }

    validate_key(key)?;
    Ok(key.to_string())
}

/// Reject keys that could escape the bucket (path traversal, absolute paths).
pub fn validate_key(key: &str) -> StorageResult<()> {
    if key.contains("..") || key.starts_with('/') || key.contains('\\') {
        return Err(StorageError::InvalidKey(
            "Storage key contains invalid characters".to_string(),
        ));
    }
    Ok(())
}
