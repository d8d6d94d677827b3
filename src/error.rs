/*
 * Responsibility
 * - アプリ共通の AppError 定義
 * - IntoResponse 実装 (HTTP status / JSON error body)
 * - AI adapter / 認証 / validation error を統一的に変換
 *
 * Body は常に `{"error": "<message>"}` の形
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::ai::AiError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request")]
    InvalidRequest,
    #[error("Unauthorized")]
    Unauthorized,
    #[error("AI service unavailable")]
    AiUnavailable,
    #[error("AI error: {0}")]
    Ai(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::AiUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Ai(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<AiError> for AppError {
    fn from(e: AiError) -> Self {
        match e {
            // 未初期化は起動時に検出済みのはずだが、念のため 503 に寄せる
            AiError::NotConfigured(_) => AppError::AiUnavailable,
            other => AppError::Ai(other.to_string()),
        }
    }
}
