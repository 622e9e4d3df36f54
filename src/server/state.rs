//! Application state shared across web request handlers.

use sea_orm::DatabaseConnection;

/// Shared state for the read-only web API.
///
/// `DatabaseConnection` is a pool handle, so clones share connections.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
