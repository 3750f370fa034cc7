use super::shutdown::shutdown_signal;
use crate::errors::handlers::not_found;
use crate::http::{create_cors_layer, security_headers};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Creates a configured Axum router with common middleware and documentation.
///
/// This function sets up:
/// - Swagger UI at `/swagger-ui`, serving `/api-docs/openapi.json`
/// - API routes nested under `/api`
/// - Request tracing, security headers and response compression
/// - CORS, only when `cors_allowed_origins` is non-empty
/// - 404 fallback handler with the standard error body
///
/// Health endpoints (`/health`, `/ready`) are merged in by the app.
///
/// # Errors
/// Returns `InvalidInput` if a configured CORS origin is not a valid header value.
///
/// # Example
/// ```ignore
/// let api_routes = Router::new().nest("/v1/products", products_router);
/// let router = create_router::<ApiDoc>(api_routes, &config)?;
/// ```
pub fn create_router<T>(apis: Router, server_config: &ServerConfig) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    let mut router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .nest("/api", apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers));

    if server_config.cors_allowed_origins.is_empty() {
        info!("CORS_ALLOWED_ORIGIN not set, CORS layer disabled");
    } else {
        info!(
            origins = %server_config.cors_allowed_origins.join(","),
            "CORS configured"
        );
        router = router.layer(create_cors_layer(&server_config.cors_allowed_origins)?);
    }

    Ok(router.layer(CompressionLayer::new()))
}

/// Serve `router` until SIGINT/SIGTERM, then run `cleanup`.
///
/// Once a signal arrives the listener stops accepting and in-flight requests
/// are drained. Only after the server has stopped does `cleanup` (closing the
/// database pool) run, bounded by `server_config.shutdown_timeout`.
///
/// # Errors
/// Returns an error if the listener fails to bind or the server fails while running.
///
/// # Example
/// ```ignore
/// let cleanup = async move {
///     database::postgres::close(db).await.ok();
/// };
///
/// create_production_app(router, &config, cleanup).await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()>,
{
    let listener = TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    serve_then_cleanup(
        listener,
        router,
        shutdown_signal(),
        cleanup,
        server_config.shutdown_timeout,
    )
    .await
}

async fn serve_then_cleanup<S, F>(
    listener: TcpListener,
    router: Router,
    signal: S,
    cleanup: F,
    shutdown_timeout: Duration,
) -> io::Result<()>
where
    S: Future<Output = ()> + Send + 'static,
    F: Future<Output = ()>,
{
    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(signal)
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed successfully"),
        Err(_) => {
            tracing::warn!(
                "Cleanup exceeded timeout of {:?}, forcing shutdown",
                shutdown_timeout
            );
        }
    }

    serve_result
}
