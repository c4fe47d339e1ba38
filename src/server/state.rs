//! Application state shared across all request handlers.
//!
//! `AppState` is built once at startup and cloned into every handler through
//! Axum's state extraction. It carries the database connection pool and the token
//! service holding the signing secret, so neither lives in a process-wide global.

use sea_orm::DatabaseConnection;

use crate::server::service::auth::token::TokenService;

/// Application state containing shared resources and dependencies.
///
/// Both fields are cheap to clone: `DatabaseConnection` is a pool handle and
/// `TokenService` keeps its keys behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues and verifies bearer tokens.
    pub tokens: TokenService,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Token service configured with the signing secret and lifetime
    pub fn new(db: DatabaseConnection, tokens: TokenService) -> Self {
        Self { db, tokens }
    }
}
