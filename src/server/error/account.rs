use sea_orm::DbErr;
use thiserror::Error;

use crate::server::error::auth::AuthError;

#[derive(Error, Debug)]
pub enum AccountError {
    /// No active, non-deleted user matches the username and password digest.
    ///
    /// Results in a 400 Bad Request with the invalid credentials message.
    #[error("No active user matches username '{0}' and the supplied password")]
    InvalidCredentials(String),

    /// Token for a verified user could not be issued.
    #[error(transparent)]
    Token(#[from] AuthError),

    /// Credential lookup failed at the store.
    ///
    /// Results in a 400 Bad Request with the default bad request message.
    #[error(transparent)]
    Database(#[from] DbErr),
}
