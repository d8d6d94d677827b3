/*
 * Responsibility
 * - HTTP surface の公開ポイント (routes() の re-export など)
 * - /health は公開、/api 配下は Auth Gate の内側
 */
pub mod dto;
pub mod extractors;
pub mod handlers;
mod routes;

pub use routes::routes;
