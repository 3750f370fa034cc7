//! Products API - REST server over PostgreSQL

use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::common::RetryConfig;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        url = %config.postgres.redacted_url(),
        "Connecting to PostgreSQL"
    );

    let db = database::postgres::connect_from_config_with_retry(
        config.postgres.clone(),
        Some(RetryConfig::new().with_max_retries(5)),
    )
    .await?;

    let state = AppState {
        config: config.clone(),
        db,
    };

    let api_routes = api::routes(&state);
    let app = create_router::<openapi::ApiDoc>(api_routes, &state.config.server)?
        .merge(health_router(state.config.app))
        .merge(api::health::ready_router(state.db.clone()));

    info!(
        "Starting {} v{} on {}",
        state.config.app.name,
        state.config.app.version,
        state.config.server.address()
    );

    let db = state.db.clone();
    create_production_app(app, &state.config.server, async move {
        info!("Shutting down: closing PostgreSQL pool");
        if let Err(e) = database::postgres::close(db).await {
            tracing::error!(error = %e, "Failed to close PostgreSQL pool");
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
