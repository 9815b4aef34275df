//! Image processing for the mobilia media service.
//!
//! Turns one uploaded raster image into the three fixed JPEG renditions,
//! derives the deterministic storage filenames, and validates upload payloads
//! before any storage write happens.

pub mod filename;
pub mod validator;
pub mod variant;

pub use filename::derive_filename;
pub use validator::{UploadValidator, ValidationError};
pub use variant::{ImageVariantSet, ProcessingError, VariantGenerator};
