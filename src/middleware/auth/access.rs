//! Auth Gate: Bearer トークン検証 → AuthCtx を extensions に入れる
//!
//! - `Authorization: Bearer <token>` を受け取り、`AccessVerifier` で検証する。
//! - 失敗時は 401 を返し、handler は呼ばれない。
//! - 状態は持たない (request ごとに独立)。

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::api::extractors::AuthCtx;
use crate::error::AppError;
use crate::state::AppState;

/// `/api/*` に認証を掛けるための middleware を適用する。
///
/// 例：
/// ```ignore
/// let game = middleware::auth::access::apply(game, state.clone());
/// app = app.nest("/api", game);
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let Some(token) = bearer_token(req.headers()) else {
        tracing::debug!("missing or malformed bearer credential");
        return Err(AppError::Unauthorized);
    };

    let verified = match state.auth.verify(token) {
        Ok(verified) => verified,
        Err(err) => {
            tracing::warn!(error = %err, "access token verification failed");
            return Err(AppError::Unauthorized);
        }
    };

    let auth_ctx = AuthCtx::new(verified.user_id, verified.session_id);

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(auth_ctx);

    Ok(next.run(req).await)
}

// scheme は大文字小文字を区別しない (RFC 7235)
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
