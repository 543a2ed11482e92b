use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::account::AccountError,
    model::{account::SignInParams, principal::Principal},
    util::{
        password::digest_password,
        token::{IssuedToken, TokenCodec},
    },
};

pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenCodec,
}

impl<'a> AccountService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenCodec) -> Self {
        Self { db, tokens }
    }

    /// Checks credentials and issues an access token for the matching user.
    ///
    /// # Arguments
    /// - `params` - Username and plaintext password
    ///
    /// # Returns
    /// - `Ok(IssuedToken)` - Token valid for 24 hours
    /// - `Err(AccountError::InvalidCredentials)` - No active user matches
    /// - `Err(AccountError::Database)` - Credential lookup failed
    /// - `Err(AccountError::Token)` - Token could not be signed
    pub async fn sign_in(&self, params: SignInParams) -> Result<IssuedToken, AccountError> {
        let repo = UserRepository::new(self.db);

        let digest = digest_password(&params.password);
        let Some(user) = repo.find_by_credentials(&params.username, &digest).await? else {
            return Err(AccountError::InvalidCredentials(params.username));
        };

        let issued = self.tokens.issue(Principal::new(user.id))?;

        tracing::info!(user_id = user.id, username = %user.username, "User signed in");

        Ok(issued)
    }
}
