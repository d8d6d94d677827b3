/*
 * Responsibility
 * - 外部サービスとの境界 (identity provider, 生成 AI)
 * - handler からは trait 越しにだけ使う
 */
pub mod ai;
pub mod auth;
