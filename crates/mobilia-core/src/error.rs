//! Error types module
//!
//! All errors surfaced by the service are unified under the `AppError` enum,
//! which carries enough metadata to render an HTTP response (status code) and
//! to pick a log severity at the request boundary.
//!
//! The `Database` variant and `From<sqlx::Error>` are gated behind the `sqlx`
//! feature so the processing and storage crates can depend on this crate
//! without pulling in a database driver.

#[cfg(feature = "sqlx")]
use sqlx::Error as SqlxError;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Expected client errors (validation, bad input)
    Debug,
    /// Recoverable or suspicious conditions (auth failures)
    Warn,
    /// Unexpected failures (storage, database)
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[cfg(feature = "sqlx")]
    #[error("Database error: {0}")]
    Database(#[source] SqlxError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Image processing error: {0}")]
    ImageProcessing(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("File too large: {0}")]
    PayloadTooLarge(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error: {message}")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    /// HTTP status code this error maps to.
    pub fn http_status_code(&self) -> u16 {
        match self {
            AppError::InvalidInput(_) | AppError::ImageProcessing(_) => 400,
            AppError::Unauthorized(_) => 401,
            AppError::Forbidden(_) => 403,
            AppError::NotFound(_) => 404,
            AppError::PayloadTooLarge(_) => 413,
            #[cfg(feature = "sqlx")]
            AppError::Database(_) => 500,
            AppError::Storage(_) | AppError::Internal(_) | AppError::InternalWithSource { .. } => {
                500
            }
        }
    }

    /// Short classification string for structured logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            #[cfg(feature = "sqlx")]
            AppError::Database(_) => "database",
            AppError::Storage(_) => "storage",
            AppError::ImageProcessing(_) => "image_processing",
            AppError::InvalidInput(_) => "invalid_input",
            AppError::NotFound(_) => "not_found",
            AppError::PayloadTooLarge(_) => "payload_too_large",
            AppError::Unauthorized(_) => "unauthorized",
            AppError::Forbidden(_) => "forbidden",
            AppError::Internal(_) | AppError::InternalWithSource { .. } => "internal",
        }
    }

    /// Severity to log this error at.
    pub fn log_level(&self) -> LogLevel {
        match self {
            AppError::InvalidInput(_)
            | AppError::ImageProcessing(_)
            | AppError::NotFound(_)
            | AppError::PayloadTooLarge(_) => LogLevel::Debug,
            AppError::Unauthorized(_) | AppError::Forbidden(_) => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }

    /// Message safe to return to the client.
    ///
    /// Server-side failures are collapsed to a generic message; client-caused
    /// errors echo the specific reason.
    pub fn client_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg)
            | AppError::ImageProcessing(msg)
            | AppError::NotFound(msg)
            | AppError::PayloadTooLarge(msg)
            | AppError::Unauthorized(msg)
            | AppError::Forbidden(msg) => msg.clone(),
            #[cfg(feature = "sqlx")]
            AppError::Database(_) => "Internal server error".to_string(),
            AppError::Storage(_) | AppError::Internal(_) | AppError::InternalWithSource { .. } => {
                "Internal server error".to_string()
            }
        }
    }
}

#[cfg(feature = "sqlx")]
impl From<SqlxError> for AppError {
    fn from(err: SqlxError) -> Self {
        AppError::Database(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        }
    }
}
