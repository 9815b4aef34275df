//! Test doubles for the storage and category seams.

use async_trait::async_trait;
use mobilia_core::models::Bucket;
use mobilia_core::{AppError, StorageBackend};
use mobilia_db::CategoryStore;
use mobilia_storage::{Storage, StorageError, StorageResult};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// In-memory category image references.
#[derive(Default)]
pub struct InMemoryCategoryStore {
    images: Mutex<HashMap<Uuid, String>>,
}

impl InMemoryCategoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_image_url(&self, category_id: Uuid, url: &str) {
        self.images
            .lock()
            .unwrap()
            .insert(category_id, url.to_string());
    }

    pub fn get_image_url(&self, category_id: Uuid) -> Option<String> {
        self.images.lock().unwrap().get(&category_id).cloned()
    }
}

#[async_trait]
impl CategoryStore for InMemoryCategoryStore {
    async fn image_url(&self, category_id: Uuid) -> Result<Option<String>, AppError> {
        Ok(self.images.lock().unwrap().get(&category_id).cloned())
    }

    async fn clear_image_url(&self, category_id: Uuid) -> Result<(), AppError> {
        self.images.lock().unwrap().remove(&category_id);
        Ok(())
    }
}

/// Storage wrapper that injects failures for selected operations, delegating
/// everything else to the wrapped backend.
pub struct FailingStorage {
    inner: Arc<dyn Storage>,
    fail_upload_key_containing: Option<String>,
    fail_deletes: bool,
}

impl FailingStorage {
    /// Fail uploads whose key contains the given substring.
    pub fn failing_uploads(inner: Arc<dyn Storage>, key_substring: &str) -> Self {
        Self {
            inner,
            fail_upload_key_containing: Some(key_substring.to_string()),
            fail_deletes: false,
        }
    }

    /// Fail every delete.
    pub fn failing_deletes(inner: Arc<dyn Storage>) -> Self {
        Self {
            inner,
            fail_upload_key_containing: None,
            fail_deletes: true,
        }
    }
}

#[async_trait]
impl Storage for FailingStorage {
    async fn upload(
        &self,
        bucket: Bucket,
        key: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> StorageResult<String> {
        if let Some(needle) = &self.fail_upload_key_containing {
            if key.contains(needle) {
                return Err(StorageError::UploadFailed(format!(
                    "Injected upload failure for key {}",
                    key
                )));
            }
        }
        self.inner.upload(bucket, key, content_type, data).await
    }

    async fn download(&self, bucket: Bucket, key: &str) -> StorageResult<Vec<u8>> {
        self.inner.download(bucket, key).await
    }

    async fn delete(&self, bucket: Bucket, key: &str) -> StorageResult<()> {
        if self.fail_deletes {
            return Err(StorageError::DeleteFailed(format!(
                "Injected delete failure for key {}",
                key
            )));
        }
        self.inner.delete(bucket, key).await
    }

    async fn exists(&self, bucket: Bucket, key: &str) -> StorageResult<bool> {
        self.inner.exists(bucket, key).await
    }

    fn backend_type(&self) -> StorageBackend {
        self.inner.backend_type()
    }
}
