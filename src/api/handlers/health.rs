/*
 * Responsibility
 * - GET /health (liveness, 認証なし)
 * - AI adapter の有無には依存しない (プロセスが生きていれば 200)
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}
