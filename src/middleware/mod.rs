/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth::access (Auth Gate) は /api グループだけ、それ以外は Router 全体に掛ける
 */
pub mod auth;
pub mod cors;
pub mod http;
pub mod security_headers;
