use crate::server::{
    error::auth::AuthError, model::principal::Principal, util::token::TokenCodec,
};

/// Name of the header carrying the access token.
pub const TOKEN_HEADER: &str = "token";

/// Resolves the access token of a request into the calling principal.
///
/// Guards every operation except the health check and sign-in. Controllers call
/// [`AuthGuard::authenticate`] after validation and hand the resulting principal to the
/// service explicitly.
pub struct AuthGuard<'a> {
    tokens: &'a TokenCodec,
}

impl<'a> AuthGuard<'a> {
    pub fn new(tokens: &'a TokenCodec) -> Self {
        Self { tokens }
    }

    /// Verifies the token taken from the `token` header.
    ///
    /// # Arguments
    /// - `token` - Header value, `None` when the header is absent
    ///
    /// # Returns
    /// - `Ok(Principal)` - Token is signed with the server secret, unexpired and names a user
    /// - `Err(AuthError)` - Token is missing, blank, invalid, expired or has a malformed
    ///   subject
    pub fn authenticate(&self, token: Option<&str>) -> Result<Principal, AuthError> {
        let result = token
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingToken)
            .and_then(|token| self.tokens.verify(token));

        if let Err(err) = &result {
            tracing::warn!("Rejected access token: {}", err);
        }

        result
    }
}
