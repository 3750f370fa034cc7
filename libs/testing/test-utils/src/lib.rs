//! Shared test utilities for domain testing
//!
//! - `TestDatabase`: PostgreSQL container with the workspace schema applied (feature: "postgres")
//! - `SeedProduct`: a row to insert before a scenario runs (always available)
//!
//! # Features
//!
//! - `postgres` (default): Enables PostgreSQL test infrastructure
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{SeedProduct, TestDatabase};
//!
//! #[tokio::test]
//! #[ignore] // Requires Docker
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     db.seed_products(&[SeedProduct::new("Kupa", 100.0, 0.0, "RBD")]).await;
//!
//!     // Use db.connection() to create your repository
//! }
//! ```

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// A product row inserted directly into the table, bypassing the repository
#[derive(Debug, Clone, PartialEq)]
pub struct SeedProduct {
    pub name: String,
    pub price: f32,
    pub discount: f32,
    pub store: String,
}

impl SeedProduct {
    pub fn new(name: &str, price: f32, discount: f32, store: &str) -> Self {
        Self {
            name: name.to_string(),
            price,
            discount,
            store: store.to_string(),
        }
    }
}

/// Four rows used by the store-filter and update scenarios; inserted into an
/// empty table they get ids 1 to 4 in this order.
pub fn default_seed() -> Vec<SeedProduct> {
    vec![
        SeedProduct::new("AirFryer", 3000.0, 22.0, "ABC TECH"),
        SeedProduct::new("Ütü", 1500.0, 10.0, "ABC TECH"),
        SeedProduct::new("Çamaşır Makinesi", 10000.0, 15.0, "ABC TECH"),
        SeedProduct::new("Lambader", 2000.0, 0.0, "Dekorasyon Sarayı"),
    ]
}
