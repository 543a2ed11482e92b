use chrono::{DateTime, Utc};
use thiserror::Error;

/// Failures of token issuance and verification.
///
/// Every verification failure is reported to the client as an unauthorized error. The
/// variants only exist so that the server log can tell the causes apart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The request did not carry a `token` header, or the header was blank.
    #[error("Request does not carry an access token")]
    MissingToken,

    /// The token is not a well-formed HS256 token or its signature does not match.
    #[error("Access token is malformed or its signature is invalid")]
    InvalidToken,

    /// The token's expiry instant has been reached.
    #[error("Access token expired at {0}")]
    TokenExpired(DateTime<Utc>),

    /// The token verified but its subject claim is absent or not an integer user id.
    #[error("Access token subject is missing or is not a user id")]
    MalformedSubject,

    /// A token could not be signed while signing in.
    ///
    /// Results in a 500 Internal Server Error as it indicates a broken signing key.
    #[error("Failed to sign access token: {0}")]
    Signing(String),
}
