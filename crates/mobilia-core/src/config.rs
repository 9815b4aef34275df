//! Configuration module
//!
//! Environment-driven configuration for the API binary. `.env` files are
//! honored via dotenvy; every setting has a sensible default except the
//! session secret and (for the s3 backend) the region.

use std::env;
use std::str::FromStr;

use crate::storage_types::StorageBackend;

const DEFAULT_SERVER_PORT: u16 = 3000;
const DEFAULT_MAX_IMAGE_SIZE_BYTES: usize = 25 * 1024 * 1024;
const DEFAULT_MAX_DATASHEET_SIZE_BYTES: usize = 10 * 1024 * 1024;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    /// HS256 secret for validating session tokens issued by the auth provider.
    pub session_jwt_secret: String,
    pub database_url: String,
    pub storage_backend: StorageBackend,
    pub s3_region: Option<String>,
    /// Custom endpoint for S3-compatible providers (MinIO, DigitalOcean Spaces, etc.)
    pub s3_endpoint: Option<String>,
    pub local_storage_path: Option<String>,
    pub local_storage_base_url: Option<String>,
    pub max_image_size_bytes: usize,
    pub max_datasheet_size_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let session_jwt_secret = env::var("SESSION_JWT_SECRET")
            .map_err(|_| anyhow::anyhow!("SESSION_JWT_SECRET must be set"))?;

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;

        let storage_backend = env::var("STORAGE_BACKEND")
            .map(|s| StorageBackend::from_str(&s))
            .unwrap_or(Ok(StorageBackend::S3))
            .map_err(|e| anyhow::anyhow!(e))?;

        Ok(Config {
            server_port: env_parse("SERVER_PORT", DEFAULT_SERVER_PORT)?,
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            cors_origins: env_list("CORS_ORIGINS"),
            session_jwt_secret,
            database_url,
            storage_backend,
            s3_region: env::var("S3_REGION").ok(),
            s3_endpoint: env::var("S3_ENDPOINT").ok(),
            local_storage_path: env::var("LOCAL_STORAGE_PATH").ok(),
            local_storage_base_url: env::var("LOCAL_STORAGE_BASE_URL").ok(),
            max_image_size_bytes: env_parse("MAX_IMAGE_SIZE_BYTES", DEFAULT_MAX_IMAGE_SIZE_BYTES)?,
            max_datasheet_size_bytes: env_parse(
                "MAX_DATASHEET_SIZE_BYTES",
                DEFAULT_MAX_DATASHEET_SIZE_BYTES,
            )?,
        })
    }

    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    /// Ceiling for the request body limit layer: the largest configured upload.
    pub fn max_body_bytes(&self) -> usize {
        self.max_image_size_bytes.max(self.max_datasheet_size_bytes)
    }
}

fn env_parse<T: FromStr>(key: &str, default: T) -> Result<T, anyhow::Error>
where
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Invalid {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}

fn env_list(key: &str) -> Vec<String> {
    env::var(key)
        .unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
