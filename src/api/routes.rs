/*
 * Responsibility
 * - /api 配下の URL 構造を定義
 * - game 系はすべて Auth Gate の内側 (handler は AuthCtx がある前提で書く)
 */
use axum::{Router, routing::post};

use crate::api::handlers::game::{start_game, submit_guess};
use crate::middleware::auth::access;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let game = Router::new()
        .route("/game/start", post(start_game))
        .route("/game/guess", post(submit_guess));

    access::apply(game, state)
}
