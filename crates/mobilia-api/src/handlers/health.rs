use axum::Json;

/// Liveness check; public, no session required.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
