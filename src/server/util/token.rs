//! HS256 access tokens.
//!
//! Tokens are compact JWTs signed with HMAC-SHA256 carrying the user id as the `sub`
//! claim and an expiry instant as `exp`. They are stateless: a token stays valid until
//! its expiry regardless of what happens to the user afterwards.

use std::sync::Arc;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::server::{error::auth::AuthError, model::principal::Principal};

type HmacSha256 = Hmac<Sha256>;

const ALGORITHM: &str = "HS256";

/// How long an issued token stays valid.
pub const TOKEN_TTL_HOURS: i64 = 24;

#[derive(Serialize, Deserialize)]
struct Header {
    alg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    typ: Option<String>,
}

#[derive(Serialize, Deserialize)]
struct Claims {
    #[serde(default)]
    sub: Option<serde_json::Value>,
    #[serde(default)]
    exp: Option<i64>,
}

/// Token signed for a user together with its expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Issues and verifies access tokens with one shared secret.
#[derive(Clone)]
pub struct TokenCodec {
    secret: Arc<[u8]>,
    ttl: Duration,
}

impl TokenCodec {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: Arc::from(secret.as_ref()),
            ttl: Duration::hours(TOKEN_TTL_HOURS),
        }
    }

    pub fn issue(&self, principal: Principal) -> Result<IssuedToken, AuthError> {
        self.issue_at(principal, Utc::now())
    }

    /// Signs a token for `principal` as if issued at `issued_at`.
    ///
    /// # Returns
    /// - `Ok(IssuedToken)` - Compact token expiring one validity window after `issued_at`
    /// - `Err(AuthError::Signing)` - Header or claims could not be serialized, or the
    ///   secret was rejected by the MAC
    pub fn issue_at(
        &self,
        principal: Principal,
        issued_at: DateTime<Utc>,
    ) -> Result<IssuedToken, AuthError> {
        let expires_at = issued_at + self.ttl;

        let header = Header {
            alg: ALGORITHM.to_string(),
            typ: Some("JWT".to_string()),
        };
        let claims = Claims {
            sub: Some(serde_json::Value::String(principal.to_string())),
            exp: Some(expires_at.timestamp()),
        };

        let header = serde_json::to_vec(&header).map_err(|e| AuthError::Signing(e.to_string()))?;
        let claims = serde_json::to_vec(&claims).map_err(|e| AuthError::Signing(e.to_string()))?;

        let signing_input = format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(header),
            URL_SAFE_NO_PAD.encode(claims)
        );

        let mut mac = self.mac().map_err(|_| AuthError::Signing("invalid secret".to_string()))?;
        mac.update(signing_input.as_bytes());
        let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

        Ok(IssuedToken {
            token: format!("{}.{}", signing_input, signature),
            // Whole seconds, matching the `exp` claim
            expires_at: DateTime::from_timestamp(expires_at.timestamp(), 0).unwrap_or(expires_at),
        })
    }

    pub fn verify(&self, token: &str) -> Result<Principal, AuthError> {
        self.verify_at(token, Utc::now())
    }

    /// Verifies `token` against the clock reading `now`.
    ///
    /// Checks the signature first, then the expiry and finally the subject, so a forged
    /// token is always reported as invalid rather than expired.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Principal, AuthError> {
        let (signing_input, signature) = token.rsplit_once('.').ok_or(AuthError::InvalidToken)?;
        let (header, claims) = signing_input
            .split_once('.')
            .ok_or(AuthError::InvalidToken)?;

        let header: Header = decode_segment(header)?;
        if header.alg != ALGORITHM {
            return Err(AuthError::InvalidToken);
        }

        let signature = URL_SAFE_NO_PAD
            .decode(signature)
            .map_err(|_| AuthError::InvalidToken)?;
        let mut mac = self.mac()?;
        mac.update(signing_input.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| AuthError::InvalidToken)?;

        let claims: Claims = decode_segment(claims)?;

        let exp = claims.exp.ok_or(AuthError::InvalidToken)?;
        if now.timestamp() >= exp {
            let expired_at = DateTime::from_timestamp(exp, 0).unwrap_or(now);
            return Err(AuthError::TokenExpired(expired_at));
        }

        match claims.sub {
            Some(serde_json::Value::String(sub)) => {
                sub.parse().map_err(|_| AuthError::MalformedSubject)
            }
            _ => Err(AuthError::MalformedSubject),
        }
    }

    fn mac(&self) -> Result<HmacSha256, AuthError> {
        HmacSha256::new_from_slice(&self.secret).map_err(|_| AuthError::InvalidToken)
    }
}

fn decode_segment<T: for<'de> Deserialize<'de>>(segment: &str) -> Result<T, AuthError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|_| AuthError::InvalidToken)?;

    serde_json::from_slice(&bytes).map_err(|_| AuthError::InvalidToken)
}
