/*
 * Responsibility
 * - POST /api/game/start, POST /api/game/guess
 * - どちらも stateless。start と guess の間にセッションは無い
 * - guess は AI adapter の返答を検証・正規化せずにそのまま返す
 */
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::{
    api::{
        dto::game::{GuessRequest, GuessResponse, MessageResponse},
        extractors::AuthCtxExtractor,
    },
    error::AppError,
    state::AppState,
};

pub async fn start_game(AuthCtxExtractor(auth): AuthCtxExtractor) -> Json<MessageResponse> {
    // TODO: create a game session here once session storage exists
    tracing::info!(user_id = %auth.user_id, "game started");

    Json(MessageResponse {
        message: "Game started",
    })
}

pub async fn submit_guess(
    State(state): State<AppState>,
    AuthCtxExtractor(auth): AuthCtxExtractor,
    payload: Result<Json<GuessRequest>, JsonRejection>,
) -> Result<Json<GuessResponse>, AppError> {
    // body を見る前に fail fast
    let ai = state.ai.as_ref().ok_or_else(|| {
        tracing::warn!(user_id = %auth.user_id, "guess rejected: AI adapter not initialized");
        AppError::AiUnavailable
    })?;

    let Json(req) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "invalid guess body");
        AppError::InvalidRequest
    })?;
    req.validate().map_err(|_| AppError::InvalidRequest)?;

    let prompt = guess_prompt(&req.guess);

    let ai_response = ai.generate(&prompt).await.map_err(|err| {
        tracing::warn!(
            user_id = %auth.user_id,
            backend = ai.backend_name(),
            error = %err,
            "AI call failed"
        );
        AppError::from(err)
    })?;

    tracing::debug!(user_id = %auth.user_id, "guess answered");

    Ok(Json(GuessResponse {
        message: "Guess received",
        ai_response,
    }))
}

fn guess_prompt(guess: &str) -> String {
    format!("User guessed: {guess}. Reply strictly with 'Yes' or 'No'.")
}
