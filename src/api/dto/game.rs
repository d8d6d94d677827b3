/*
 * Responsibility
 * - /api/game 配下の request/response DTO
 * - 受け取った guess は保存しない (response を返したら捨てる)
 */
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct GuessRequest {
    pub guess: String,
}

impl GuessRequest {
    // 空文字だけ弾く。空白のみの guess はそのまま AI に渡す
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.guess.is_empty() {
            return Err("guess is required");
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

// field 順はそのまま JSON の順になる
#[derive(Debug, Serialize)]
pub struct GuessResponse {
    pub message: &'static str,
    pub ai_response: String,
}
