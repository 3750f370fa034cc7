//! API routes module

pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Create all API routes (nested under `/api` by the server)
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/v1/products", products::router(state))
}
