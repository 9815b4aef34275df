//! Storage abstraction and backends for the mobilia media service.
//!
//! # Key format
//!
//! Objects live at `{owner_id}/{derived_filename}` inside a bucket chosen by
//! the owning entity kind (see `mobilia_core::models::Bucket`). Public URLs
//! always contain `/{bucket}/` as a marker segment followed by the key, so a
//! previously issued URL can be parsed back into a storage key for deletion.
//!
//! Keys must not contain `..` or a leading `/`. Key generation and URL
//! parsing are centralized in the `keys` module so all backends stay
//! consistent.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

pub use factory::create_storage;
pub use keys::{object_key, parse_object_url};
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
pub use mobilia_core::StorageBackend;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
