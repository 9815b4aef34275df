use crate::keys::validate_key;
use crate::traits::{Storage, StorageError, StorageResult};
use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use mobilia_core::models::Bucket;
use object_store::aws::{AmazonS3, AmazonS3Builder};
use object_store::path::Path;
use object_store::{Error as ObjectStoreError, ObjectStoreExt, PutPayload};
use std::collections::HashMap;

/// S3 storage implementation.
///
/// Each entity kind lives in its own bucket, so one `AmazonS3` client is
/// built per bucket up front. Credentials come from the ambient AWS
/// environment; region and optional custom endpoint are explicit.
#[derive(Clone)]
pub struct S3Storage {
    stores: HashMap<Bucket, AmazonS3>,
    region: String,
    endpoint_url: Option<String>, // Custom endpoint for S3-compatible providers
}

impl S3Storage {
    /// Create a new S3Storage instance
    ///
    /// # Arguments
    /// * `region` - AWS region (or region identifier for S3-compatible providers)
    /// * `endpoint_url` - Optional custom endpoint URL for S3-compatible providers
    ///   (e.g., "http://localhost:9000" for MinIO)
    pub fn new(region: String, endpoint_url: Option<String>) -> StorageResult<Self> {
        let mut stores = HashMap::new();

        for bucket in Bucket::ALL {
            let mut builder = AmazonS3Builder::from_env()
                .with_region(region.clone())
                .with_bucket_name(bucket.as_str());

            if let Some(ref endpoint) = endpoint_url {
                let allow_http = endpoint.starts_with("http://");
                builder = builder
                    .with_endpoint(endpoint.clone())
                    .with_allow_http(allow_http);
            }

            let store = builder
                .build()
                .map_err(|e| StorageError::ConfigError(e.to_string()))?;
            stores.insert(bucket, store);
        }

        Ok(S3Storage {
            stores,
            region,
            endpoint_url,
        })
    }

    fn store(&self, bucket: Bucket) -> &AmazonS3 {
        // Every Bucket variant is inserted in new(); the map is total.
        &self.stores[&bucket]
    }

    /// Generate the public URL for an object.
    ///
    /// For AWS S3, uses the standard virtual-hosted format. For S3-compatible
    /// providers, path-style `{endpoint}/{bucket}/{key}` for compatibility.
    /// Both layouts keep `/{bucket}/` parseable for later deletion.
    fn generate_url(&self, bucket: Bucket, key: &str) -> String {
        if let Some(ref endpoint) = self.endpoint_url {
            format!(
                "{}/{}/{}",
                endpoint.trim_end_matches('/'),
                bucket.as_str(),
                key
            )
        } else {
            format!(
                "https://{}.s3.{}.amazonaws.com/{}",
                bucket.as_str(),
                self.region,
                key
            )
        }
    }
}

#[async_trait]
impl Storage for S3Storage {
    async fn upload(
        &self,
        bucket: Bucket,
        key: &str,
        _content_type: &str,
        data: Vec<u8>,
    ) -> StorageResult<String> {
        validate_key(key)?;
        let size = data.len() as u64;
        let location = Path::from(key);
        let start = std::time::Instant::now();

        // Default put mode is overwrite, which gives the upsert semantics the
        // derived-filename scheme relies on.
        self.store(bucket)
            .put(&location, PutPayload::from(Bytes::from(data)))
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %bucket,
                    key = %key,
                    size_bytes = size,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "S3 upload failed"
                );
                StorageError::UploadFailed(e.to_string())
            })?;

        let url = self.generate_url(bucket, key);

        tracing::info!(
            bucket = %bucket,
            key = %key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 upload successful"
        );

        Ok(url)
    }

    async fn download(&self, bucket: Bucket, key: &str) -> StorageResult<Vec<u8>> {
        validate_key(key)?;
        let location = Path::from(key);

        let result = self
            .store(bucket)
            .get(&location)
            .await
            .map_err(|e| match e {
                ObjectStoreError::NotFound { .. } => StorageError::NotFound(key.to_string()),
                other => StorageError::DownloadFailed(other.to_string()),
            })?;

        let data = result
            .bytes()
            .await
            .map_err(|e| StorageError::DownloadFailed(e.to_string()))?;

        Ok(data.to_vec())
    }

    async fn delete(&self, bucket: Bucket, key: &str) -> StorageResult<()> {
        validate_key(key)?;
        let location = Path::from(key);

        match self.store(bucket).delete(&location).await {
            Ok(()) => {}
            // S3 deletes are idempotent; a missing object is not an error.
            Err(ObjectStoreError::NotFound { .. }) => {}
            Err(e) => {
                tracing::error!(error = %e, bucket = %bucket, key = %key, "S3 delete failed");
                return Err(StorageError::DeleteFailed(e.to_string()));
            }
        }

        tracing::info!(bucket = %bucket, key = %key, "S3 delete successful");
        Ok(())
    }

    async fn exists(&self, bucket: Bucket, key: &str) -> StorageResult<bool> {
        validate_key(key)?;
        let location = Path::from(key);

        match self.store(bucket).head(&location).await {
            Ok(_) => Ok(true),
            Err(ObjectStoreError::NotFound { .. }) => Ok(false),
            Err(e) => Err(StorageError::BackendError(e.to_string())),
        }
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }
}
