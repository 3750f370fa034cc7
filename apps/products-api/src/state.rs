//! Application state management

use database::postgres::DatabaseConnection;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// Process-wide connection pool, created once at start-up
    pub db: DatabaseConnection,
}
