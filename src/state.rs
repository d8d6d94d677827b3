/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - auth: AccessVerifier (Bearer 検証), ai: TextGenerator (未初期化なら None)
 * - 起動時に一度だけ組み立てて handler に明示的に渡す (グローバル変数は使わない)
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::fmt;
use std::sync::Arc;

use crate::services::{ai::TextGenerator, auth::AccessVerifier};

#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<dyn AccessVerifier>,
    pub ai: Option<Arc<dyn TextGenerator>>,
}

impl AppState {
    pub fn new(auth: Arc<dyn AccessVerifier>, ai: Option<Arc<dyn TextGenerator>>) -> Self {
        Self { auth, ai }
    }

    pub fn ai_available(&self) -> bool {
        self.ai.is_some()
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("ai_available", &self.ai_available())
            .finish_non_exhaustive()
    }
}
