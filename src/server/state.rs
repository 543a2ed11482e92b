//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into every handler through axum's
//! state extraction. Nothing in it changes after startup.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{localization::Catalog, util::token::TokenCodec};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: the database connection is a pool handle, the catalog
/// is reference-counted and the token codec shares its secret.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Message catalogs used to localize error messages.
    pub catalog: Arc<Catalog>,

    /// Issues tokens on sign-in and verifies them on every reservation request.
    pub tokens: TokenCodec,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `catalog` - Loaded message catalogs
    /// - `tokens` - Token codec holding the signing secret
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, catalog: Catalog, tokens: TokenCodec) -> Self {
        Self {
            db,
            catalog: Arc::new(catalog),
            tokens,
        }
    }
}
