use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// GET /health
///
/// Liveness check: status plus crate version.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
