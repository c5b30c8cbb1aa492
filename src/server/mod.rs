//! HTTP boundary around the itinerary resolver.
//!
//! # Endpoints
//!
//! - `POST /calculate` - Resolves a list of flights into one itinerary
//! - `GET /health` - Returns 200 if the server is running

use std::future::Future;
use std::time::Duration;

use axum::error_handling::HandleErrorLayer;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::{BoxError, Router};
use tokio::net::TcpListener;
use tower::timeout::TimeoutLayer;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::validate_socket_addr;

pub mod calculate;
pub mod error;
pub mod extract;
pub mod health;

pub use calculate::{calculate_handler, method_not_allowed};
pub use error::ApiError;
pub use extract::ValidatedJson;
pub use health::health_handler;

/// Builds the axum Router with all endpoints.
pub fn build_router(request_timeout: Duration, max_body_bytes: usize) -> Router {
    Router::new()
        .route(
            "/calculate",
            post(calculate_handler).fallback(method_not_allowed),
        )
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .layer(TimeoutLayer::new(request_timeout)),
        )
        .layer(TraceLayer::new_for_http())
}

/// Turns middleware failures into the same JSON error body as handler errors.
async fn handle_middleware_error(err: BoxError) -> ApiError {
    if err.is::<tower::timeout::error::Elapsed>() {
        ApiError::Timeout
    } else {
        ApiError::Internal(err.to_string())
    }
}

/// Binds the configured address and serves until Ctrl-C or SIGTERM.
pub async fn serve<C: ConfigProvider>(config: &C) -> Result<()> {
    let addr = validate_socket_addr("server.addr", config.listen_addr())?;
    let listener = TcpListener::bind(addr).await?;
    serve_on(listener, config, shutdown_signal()).await
}

/// Serves on an already bound listener until `shutdown` resolves.
pub async fn serve_on<C, F>(listener: TcpListener, config: &C, shutdown: F) -> Result<()>
where
    C: ConfigProvider,
    F: Future<Output = ()> + Send + 'static,
{
    let router = build_router(config.request_timeout(), config.max_body_bytes());

    info!("✈️  Serving flight itineraries at {}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("Server has been shut down");

    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Starting graceful shutdown...");
}
