//! Health check endpoint.

use axum::{http::StatusCode, response::Html};

const HEALTH_PAGE: &str = r#"<html><body style="font-family: Arial; text-align: center;"><h1 style="color: green;">Server is healthy</h1></body></html>"#;

/// GET /health - Liveness check.
///
/// Returns 200 with a fixed HTML page. Does not touch the store or the cache.
#[axum::debug_handler]
pub async fn health() -> (StatusCode, Html<&'static str>) {
    (StatusCode::OK, Html(HEALTH_PAGE))
}
