//! Liveness endpoint. Answers locally; never proxied.

use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;

pub const HEALTH_PATH: &str = "/_status";

const HEALTH_BODY: &str = r#"{"status": "ok"}"#;

pub async fn health_check() -> impl IntoResponse {
    ([(CONTENT_TYPE, "application/json")], HEALTH_BODY)
}
