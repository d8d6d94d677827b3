//! AI Client Adapter.
//!
//! Handler は `TextGenerator` trait だけを知っていて、Gemini などの実装は
//! 起動時に一度だけ組み立てて `AppState` 経由で注入する。

pub mod factory;
pub mod gemini;

use async_trait::async_trait;
use thiserror::Error;

pub use factory::build_ai_client;
pub use gemini::GeminiClient;

/// Adapter-level errors.
///
/// Not:
/// - Transient/permanent の区別はしない。呼び出し側はすべて同じ扱い (retry なし)。
#[derive(Debug, Error)]
pub enum AiError {
    #[error("AI client not configured: missing {0}")]
    NotConfigured(&'static str),

    #[error("failed to build AI client: {0}")]
    Init(String),

    #[error("request to AI service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("AI service returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("prompt blocked by AI service: {0}")]
    Blocked(String),

    #[error("AI service returned no text")]
    EmptyResponse,
}

/// Text completion: prompt を渡し、返ってきた text をそのまま返す。
///
/// 呼び出し側の future が drop されれば外向きのリクエストも中断される
/// (client 切断 / timeout 時に leak しない)。
#[async_trait]
pub trait TextGenerator: Send + Sync {
    // Backend name (for logging).
    fn backend_name(&self) -> &'static str;

    async fn generate(&self, prompt: &str) -> Result<String, AiError>;
}
