//! Route configuration and setup.

use crate::auth::{session_middleware, AuthState};
use crate::handlers::{
    delete_category_image, health, upload_avatar, upload_brand_logo, upload_category_image,
    upload_datasheet, upload_product_images, upload_room_image,
};
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Assemble the application router.
///
/// `/health` is public; everything under `/api` goes through the session
/// middleware. The body limit layers are sized to the largest configured
/// upload so oversize-by-policy payloads still reach the handler that owns
/// the specific error message.
pub fn build_router(
    state: Arc<AppState>,
    auth_state: Arc<AuthState>,
    cors_origins: &[String],
    max_body_bytes: usize,
) -> Result<Router, anyhow::Error> {
    let cors = setup_cors(cors_origins)?;

    let public_routes = Router::new().route("/health", get(health));

    let protected_routes = Router::new()
        .route("/api/upload", post(upload_product_images))
        .route("/api/upload-avatar", post(upload_avatar))
        .route("/api/upload-brand", post(upload_brand_logo))
        .route("/api/upload-category", post(upload_category_image))
        .route("/api/upload-room", post(upload_room_image))
        .route("/api/upload-datasheet", post(upload_datasheet))
        .route("/api/delete-category-image", post(delete_category_image))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            session_middleware,
        ));

    let app = public_routes
        .merge(protected_routes)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

fn setup_cors(origins: &[String]) -> Result<CorsLayer, anyhow::Error> {
    if origins.is_empty() {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any));
    }

    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|e| anyhow::anyhow!("Invalid CORS origin '{}': {}", origin, e))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any))
}
