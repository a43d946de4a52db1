//! Application state shared across request handlers.

use sea_orm::DatabaseConnection;

/// State handed to every axum handler.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the durable store.
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
