/*
 * Responsibility
 * - 環境変数や設定の読み込み (PORT, CORS 許可、Auth 設定、Gemini 設定など)
 * - 設定値のバリデーション (不足なら起動失敗)
 * - 起動時に一度だけ読む (hot reload なし)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

use jsonwebtoken::Algorithm;
use url::Url;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash-lite";
pub const DEFAULT_GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()))
    }

    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone)]
pub struct Config {
    pub addr: SocketAddr,

    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,

    pub request_timeout_seconds: u64,
    pub request_body_limit_bytes: usize,

    // None のとき AI adapter は未初期化のまま起動する (guess は 503)
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_api_base_url: Url,
    pub ai_timeout_seconds: u64,

    pub auth_jwt_public_key_pem: String,
    pub auth_jwt_algorithm: Algorithm,
    pub auth_issuer: Option<String>,
    pub auth_audience: Option<String>,
    pub auth_authorized_parties: Vec<String>,
    pub access_token_leeway_seconds: u64,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // API key は出さない
        f.debug_struct("Config")
            .field("addr", &self.addr)
            .field("app_env", &self.app_env)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("request_timeout_seconds", &self.request_timeout_seconds)
            .field("request_body_limit_bytes", &self.request_body_limit_bytes)
            .field("gemini_api_key", &self.gemini_api_key.as_ref().map(|_| "***"))
            .field("gemini_model", &self.gemini_model)
            .field("gemini_api_base_url", &self.gemini_api_base_url.as_str())
            .field("ai_timeout_seconds", &self.ai_timeout_seconds)
            .field("auth_jwt_algorithm", &self.auth_jwt_algorithm)
            .field("auth_issuer", &self.auth_issuer)
            .field("auth_audience", &self.auth_audience)
            .field("auth_authorized_parties", &self.auth_authorized_parties)
            .field("access_token_leeway_seconds", &self.access_token_leeway_seconds)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port = parse_port(env_opt("PORT").as_deref());

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::from_env();

        let cors_allowed_origins = parse_list(&env_opt("CORS_ALLOWED_ORIGINS").unwrap_or_default());

        let request_timeout_seconds = env_opt("REQUEST_TIMEOUT_SECONDS")
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(30);

        let request_body_limit_bytes = env_opt("REQUEST_BODY_LIMIT_BYTES")
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(1024 * 1024);

        let gemini_api_key = env_opt("GEMINI_API_KEY");

        let gemini_model =
            env_opt("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());

        let gemini_api_base_url = parse_base_url(
            env_opt("GEMINI_API_BASE_URL")
                .as_deref()
                .unwrap_or(DEFAULT_GEMINI_API_BASE_URL),
        )?;

        let ai_timeout_seconds = env_opt("AI_TIMEOUT_SECONDS")
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(20);
        check_timeouts(ai_timeout_seconds, request_timeout_seconds)?;

        let auth_jwt_public_key_pem = env_opt("AUTH_JWT_PUBLIC_KEY_PEM")
            .ok_or(ConfigError::Missing("AUTH_JWT_PUBLIC_KEY_PEM"))?
            .replace("\\n", "\n");

        let auth_jwt_algorithm =
            parse_algorithm(env_opt("AUTH_JWT_ALGORITHM").as_deref().unwrap_or("RS256"))?;

        let auth_issuer = env_opt("AUTH_ISSUER");
        let auth_audience = env_opt("AUTH_AUDIENCE");
        let auth_authorized_parties =
            parse_list(&env_opt("AUTH_AUTHORIZED_PARTIES").unwrap_or_default());

        let access_token_leeway_seconds = env_opt("ACCESS_TOKEN_LEEWAY_SECONDS")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(60);

        Ok(Self {
            addr,
            app_env,
            cors_allowed_origins,
            request_timeout_seconds,
            request_body_limit_bytes,
            gemini_api_key,
            gemini_model,
            gemini_api_base_url,
            ai_timeout_seconds,
            auth_jwt_public_key_pem,
            auth_jwt_algorithm,
            auth_issuer,
            auth_audience,
            auth_authorized_parties,
            access_token_leeway_seconds,
        })
    }
}

// 空文字は未設定扱い
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_port(raw: Option<&str>) -> u16 {
    raw.and_then(|s| s.parse().ok()).unwrap_or(DEFAULT_PORT)
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|_| ConfigError::Invalid("GEMINI_API_BASE_URL"))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Invalid("GEMINI_API_BASE_URL"));
    }
    Ok(url)
}

// AI 側が先に切れないと、遅い provider が 500 ではなく 408 になる
fn check_timeouts(ai_seconds: u64, request_seconds: u64) -> Result<(), ConfigError> {
    if ai_seconds >= request_seconds {
        return Err(ConfigError::Invalid("AI_TIMEOUT_SECONDS"));
    }
    Ok(())
}

/// Asymmetric algorithms only: the API verifies tokens it never signs.
fn parse_algorithm(raw: &str) -> Result<Algorithm, ConfigError> {
    let algorithm =
        Algorithm::from_str(raw.trim()).map_err(|_| ConfigError::Invalid("AUTH_JWT_ALGORITHM"))?;

    match algorithm {
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => {
            Err(ConfigError::Invalid("AUTH_JWT_ALGORITHM"))
        }
        other => Ok(other),
    }
}
