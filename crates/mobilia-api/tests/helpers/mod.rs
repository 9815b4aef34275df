//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p mobilia-api --test uploads_test`
//! or `cargo test -p mobilia-api`. All tests run against tempdir-backed
//! local storage and an in-memory category store; no external services.

#![allow(dead_code)]

pub mod auth;
pub mod fixtures;
pub mod storage;

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use mobilia_api::auth::AuthState;
use mobilia_api::setup::routes;
use mobilia_api::state::{AppState, UploadLimits};
use mobilia_storage::{LocalStorage, Storage};
use std::sync::Arc;
use tempfile::TempDir;
use uuid::Uuid;

use storage::InMemoryCategoryStore;

pub const TEST_BASE_URL: &str = "http://localhost:3000/storage";

const TEST_MAX_IMAGE_BYTES: usize = 25 * 1024 * 1024;
const TEST_MAX_DATASHEET_BYTES: usize = 10 * 1024 * 1024;

/// Test application: server plus direct handles on the backing stores so
/// tests can seed and inspect state behind the API.
pub struct TestApp {
    pub server: TestServer,
    /// The underlying local store, bypassing any failure-injecting wrapper
    /// the router was built with.
    pub storage: Arc<dyn Storage>,
    pub categories: Arc<InMemoryCategoryStore>,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

/// Setup a test app backed by tempdir local storage.
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(|storage| storage).await
}

/// Setup a test app, letting the caller wrap the storage backend the router
/// sees (e.g. to inject failures). `TestApp::storage` always holds the
/// unwrapped local store.
pub async fn setup_test_app_with<F>(wrap: F) -> TestApp
where
    F: FnOnce(Arc<dyn Storage>) -> Arc<dyn Storage>,
{
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let local: Arc<dyn Storage> = Arc::new(
        LocalStorage::new(temp_dir.path(), TEST_BASE_URL.to_string())
            .await
            .expect("Failed to create local storage"),
    );

    let categories = Arc::new(InMemoryCategoryStore::new());

    let state = Arc::new(AppState {
        storage: wrap(local.clone()),
        categories: categories.clone(),
        limits: UploadLimits {
            max_image_bytes: TEST_MAX_IMAGE_BYTES,
            max_datasheet_bytes: TEST_MAX_DATASHEET_BYTES,
        },
    });

    let auth_state = Arc::new(AuthState::new(auth::TEST_SESSION_SECRET));

    let router = routes::build_router(state, auth_state, &[], TEST_MAX_IMAGE_BYTES)
        .expect("Failed to build router");

    TestApp {
        server: TestServer::new(router).expect("Failed to start test server"),
        storage: local,
        categories,
        _temp_dir: temp_dir,
    }
}

/// Multipart form with a `file` part and the owning-entity id field.
pub fn upload_form(
    owner_field: &str,
    owner_id: Uuid,
    filename: &str,
    mime: &str,
    data: Vec<u8>,
) -> MultipartForm {
    let part = Part::bytes(bytes::Bytes::from(data))
        .file_name(filename)
        .mime_type(mime);
    MultipartForm::new()
        .add_part("file", part)
        .add_text(owner_field, owner_id.to_string())
}
