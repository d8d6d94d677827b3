/// Factory: build the AI adapter from application `Config`.
///
/// 失敗しても起動は止めない。None のまま AppState に入れ、guess handler が 503 を返す。
use std::{sync::Arc, time::Duration};

use crate::config::Config;
use crate::services::ai::{GeminiClient, TextGenerator};

pub fn build_ai_client(config: &Config) -> Option<Arc<dyn TextGenerator>> {
    let Some(api_key) = config.gemini_api_key.as_deref() else {
        tracing::warn!("GEMINI_API_KEY is not set; AI service unavailable");
        return None;
    };

    match GeminiClient::new(
        api_key,
        &config.gemini_model,
        &config.gemini_api_base_url,
        Duration::from_secs(config.ai_timeout_seconds),
    ) {
        Ok(client) => {
            tracing::info!(model = %client.model(), "AI client initialized");
            Some(Arc::new(client))
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to initialize AI client");
            None
        }
    }
}
