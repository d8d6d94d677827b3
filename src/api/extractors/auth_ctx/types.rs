/*
 * Responsibility
 * - Handler から見える「認証済みコンテキスト」の型
 * - middleware が検証して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - トークン検証ロジックは middleware/services 側の責務
 */

/// 認証済みのリクエストに付与されるコンテキスト
///
/// - `user_id` は identity provider の subject (`sub`)
/// - `session_id` は provider のセッション ID (`sid`)。ログ相関用で必須ではない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthCtx {
    pub user_id: String,
    pub session_id: Option<String>,
}

impl AuthCtx {
    pub fn new(user_id: impl Into<String>, session_id: Option<String>) -> Self {
        Self {
            user_id: user_id.into(),
            session_id,
        }
    }
}
