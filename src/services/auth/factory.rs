/// Factory: build `AuthService` from application `Config`.
use std::sync::Arc;

use anyhow::{Result, anyhow};

use crate::config::Config;
use crate::services::auth::AuthService;

pub fn build_auth_service(config: &Config) -> Result<Arc<AuthService>> {
    let auth = AuthService::new(
        &config.auth_jwt_public_key_pem,
        config.auth_jwt_algorithm,
        config.auth_issuer.as_deref(),
        config.auth_audience.as_deref(),
        config.auth_authorized_parties.clone(),
        config.access_token_leeway_seconds,
    )
    .map_err(|e| anyhow!("failed to build auth service: {e}"))?;

    Ok(Arc::new(auth))
}
