//! Application state container shared across Axum route handlers.
//!
//! Holds the database handle opened by `main`. It is cloned into every handler
//! through Axum's `State<T>` extractor; cloning is cheap because
//! `DatabaseConnection` is a pooled handle.

use sea_orm::DatabaseConnection;

/// Central application state shared across the server.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
}

impl AppState {
    /// Creates a new `AppState` around an already opened database connection.
    ///
    /// A `DatabaseConnection::Disconnected` handle is accepted: the server still
    /// starts and every store call fails individually.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns a shared reference to the internal `DatabaseConnection`.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Returns a cloned copy of the database connection.
    ///
    /// Useful for spawned tasks that require ownership.
    pub fn db_clone(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
