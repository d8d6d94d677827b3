/*
 * Responsibility
 * - Bearer トークンの検証 (署名 / exp / iss / aud / azp)
 * - 検証済みの主体 (VerifiedAccessToken) を middleware に返す
 * - 認可 (Authorization) はここでは扱わない
 */
pub mod access_jwt;
pub mod factory;

pub use access_jwt::{AccessJwtError, AccessVerifier, AuthService, VerifiedAccessToken};
pub use factory::build_auth_service;
