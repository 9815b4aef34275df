/// Upload payload validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("File too large: {size} bytes (max: {max} bytes)")]
    FileTooLarge { size: usize, max: usize },

    #[error("Invalid content type: {content_type} (expected: {expected})")]
    InvalidContentType {
        content_type: String,
        expected: String,
    },

    #[error("Empty file")]
    EmptyFile,
}

/// Payload validator applied before any decode or storage write.
pub struct UploadValidator {
    max_file_size: usize,
}

impl UploadValidator {
    pub fn new(max_file_size: usize) -> Self {
        Self { max_file_size }
    }

    pub fn validate_size(&self, size: usize) -> Result<(), ValidationError> {
        if size == 0 {
            return Err(ValidationError::EmptyFile);
        }

        if size > self.max_file_size {
            return Err(ValidationError::FileTooLarge {
                size,
                max: self.max_file_size,
            });
        }

        Ok(())
    }

    /// Check the declared content type against a single expected MIME type.
    /// Parameters are stripped before comparison ("application/pdf; x=y"
    /// matches "application/pdf").
    pub fn validate_content_type(
        content_type: &str,
        expected: &str,
    ) -> Result<(), ValidationError> {
        let normalized = content_type
            .split(';')
            .next()
            .map(|s| s.trim())
            .unwrap_or(content_type)
            .to_lowercase();

        if normalized != expected.to_lowercase() {
            return Err(ValidationError::InvalidContentType {
                content_type: content_type.to_string(),
                expected: expected.to_string(),
            });
        }

        Ok(())
    }
}
