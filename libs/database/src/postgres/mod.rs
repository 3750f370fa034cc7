//! PostgreSQL connection pool and helpers
//!
//! Provides pool construction (with start-up retry), shutdown and health checks.

mod config;
mod connector;
mod health;

pub use config::PostgresConfig;
pub use connector::{close, connect, connect_from_config, connect_from_config_with_retry};
pub use health::{HealthStatus, check_health, check_health_detailed};

// Re-export SeaORM types for convenience
pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
