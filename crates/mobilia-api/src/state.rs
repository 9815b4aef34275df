//! Application state.
//!
//! The storage backend and the category repository are injected as trait
//! objects so integration tests can swap in a tempdir-backed local store and
//! an in-memory category double.

use mobilia_core::Config;
use mobilia_db::CategoryStore;
use mobilia_storage::Storage;
use std::sync::Arc;

/// Upload size ceilings, split out of `Config` so tests can construct state
/// without touching the environment.
#[derive(Clone, Copy, Debug)]
pub struct UploadLimits {
    pub max_image_bytes: usize,
    pub max_datasheet_bytes: usize,
}

impl UploadLimits {
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_image_bytes: config.max_image_size_bytes,
            max_datasheet_bytes: config.max_datasheet_size_bytes,
        }
    }
}

/// Main application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub categories: Arc<dyn CategoryStore>,
    pub limits: UploadLimits,
}

const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AppState>()
};
