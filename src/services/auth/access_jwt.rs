use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use std::{error::Error as StdError, fmt};

// Errors returned by access-token verification + strict claim validation.
#[derive(Debug)]
pub enum AccessJwtError {
    Jwt(jsonwebtoken::errors::Error),
    EmptyClaim(&'static str),
    UnauthorizedParty(String),
}

impl fmt::Display for AccessJwtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jwt(e) => write!(f, "jwt verification failed: {}", e),
            Self::EmptyClaim(name) => write!(f, "empty '{}' claim", name),
            Self::UnauthorizedParty(azp) => write!(f, "unauthorized party '{}'", azp),
        }
    }
}

impl StdError for AccessJwtError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Jwt(e) => Some(e),
            _ => None,
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AccessJwtError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        Self::Jwt(e)
    }
}

/// Session token claims issued by the identity provider.
///
/// NOTE:
/// - `iss` / `aud` / `exp` / `nbf` are checked by `jsonwebtoken::Validation` against the raw
///   payload, so they are only kept here when the app reads them.
/// - `azp` (authorized party) is the origin the token was minted for.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessTokenClaims {
    pub sub: String,

    #[serde(default)]
    pub azp: Option<String>,
    #[serde(default)]
    pub sid: Option<String>,
}

/// AuthService が返す「検証済み・アプリ側で使う型」
///
/// - `user_id` は identity provider の `sub` をそのまま使う (形式は provider 依存)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedAccessToken {
    pub user_id: String,
    pub session_id: Option<String>,
}

/// Auth Gate が依存する capability。
///
/// 実装を差し替えれば別の identity provider にも対応できる。
pub trait AccessVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<VerifiedAccessToken, AccessJwtError>;
}

/// Asymmetric access-token verifier (RS*/PS*/ES*/EdDSA).
///
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct AuthService {
    decoding_key: DecodingKey,
    validation: Validation,
    authorized_parties: Vec<String>,
}

impl fmt::Debug for AuthService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print key material
        f.debug_struct("AuthService")
            .field("validation", &self.validation)
            .field("authorized_parties", &self.authorized_parties)
            .finish()
    }
}

impl AuthService {
    pub fn new(
        public_key_pem: &str,
        algorithm: Algorithm,
        issuer: Option<&str>,
        audience: Option<&str>,
        authorized_parties: Vec<String>,
        leeway_seconds: u64,
    ) -> Result<Self, String> {
        let decoding_key = decoding_key_for(algorithm, public_key_pem)
            .map_err(|e| format!("invalid {:?} public key pem: {}", algorithm, e))?;

        let mut validation = Validation::new(algorithm);
        validation.leeway = leeway_seconds;
        validation.validate_nbf = true;

        if let Some(issuer) = issuer {
            validation.set_issuer(&[issuer]);
        }
        match audience {
            Some(audience) => validation.set_audience(&[audience]),
            // Session tokens usually carry no `aud`; only check it when configured.
            None => validation.validate_aud = false,
        }

        Ok(Self {
            decoding_key,
            validation,
            authorized_parties,
        })
    }

    // Verify and decode a JWT access token.
    pub fn decode(&self, token: &str) -> Result<AccessTokenClaims, jsonwebtoken::errors::Error> {
        let data =
            jsonwebtoken::decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)?;

        Ok(data.claims)
    }

    /// Verify + strict claim validation.
    ///
    /// `jsonwebtoken::Validation` already checks:
    /// - signature
    /// - `exp` (required) and `nbf`, with leeway
    /// - `iss` and `aud` when configured
    ///
    /// This method additionally checks:
    /// - `sub` is present *and not empty*
    /// - `azp`, when present, is one of the configured authorized parties
    pub fn verify_strict(&self, token: &str) -> Result<AccessTokenClaims, AccessJwtError> {
        let claims = self.decode(token)?;

        if claims.sub.trim().is_empty() {
            return Err(AccessJwtError::EmptyClaim("sub"));
        }

        if let Some(azp) = &claims.azp
            && !self.authorized_parties.is_empty()
            && !self.authorized_parties.iter().any(|p| p == azp)
        {
            return Err(AccessJwtError::UnauthorizedParty(azp.clone()));
        }

        Ok(claims)
    }
}

impl AccessVerifier for AuthService {
    fn verify(&self, token: &str) -> Result<VerifiedAccessToken, AccessJwtError> {
        let claims = self.verify_strict(token)?;

        Ok(VerifiedAccessToken {
            user_id: claims.sub,
            session_id: claims.sid,
        })
    }
}

fn decoding_key_for(
    algorithm: Algorithm,
    pem: &str,
) -> Result<DecodingKey, jsonwebtoken::errors::Error> {
    match algorithm {
        Algorithm::ES256 | Algorithm::ES384 => DecodingKey::from_ec_pem(pem.as_bytes()),
        Algorithm::EdDSA => DecodingKey::from_ed_pem(pem.as_bytes()),
        // RS*/PS*. HS* は config 側で弾いている
        _ => DecodingKey::from_rsa_pem(pem.as_bytes()),
    }
}
