//! User data repository.
//!
//! Users are only read here. Sign-in matches on username and password digest and ignores
//! accounts that are inactive or soft-deleted.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::server::model::user::User;

/// Repository providing read access to user accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds an active, non-deleted user by username and password digest.
    ///
    /// # Arguments
    /// - `username` - Exact username
    /// - `password_digest` - Lowercase hex digest of the submitted password
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Credentials match an active account
    /// - `Ok(None)` - No active account matches
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_credentials(
        &self,
        username: &str,
        password_digest: &str,
    ) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .filter(entity::user::Column::Password.eq(password_digest))
            .filter(entity::user::Column::IsActive.eq(true))
            .filter(entity::user::Column::IsDeleted.eq(false))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }
}
