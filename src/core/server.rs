//! Server Implementation
//!
//! HTTP server startup and routing assembly.

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};

use crate::core::{Config, ServerState};
use crate::utils::AppError;

/// HTTP request access log middleware
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build the Axum router (without state)
///
/// API routers are merged first; `/` and `/static` are plain file services
/// over the configured front-end directory.
pub fn build_app(config: &Config) -> Router<ServerState> {
    let frontend = PathBuf::from(&config.frontend_dir);

    Router::<ServerState>::new()
        .merge(crate::api::health::router())
        .merge(crate::api::productos::router())
        .merge(crate::api::cliente::router())
        .route_service("/", ServeFile::new(frontend.join("index.html")))
        .nest_service("/static", ServeDir::new(frontend.join("static")))
}

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    /// Create server with initialized state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    pub async fn run(&self) -> Result<(), AppError> {
        let app = build_app(&self.config)
            .with_state(self.state.clone())
            // Cross-origin: any origin/method/header, credentials allowed
            .layer(CorsLayer::very_permissive())
            .layer(CompressionLayer::new())
            // HTTP access log middleware
            .layer(middleware::from_fn(log_request));

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        tracing::info!(
            "Starting HTTP server on {} ({})",
            addr,
            self.config.environment
        );

        let handle = axum_server::Handle::new();

        // Graceful shutdown on ctrl-c
        let handle_clone = handle.clone();
        tokio::spawn(async move {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
            handle_clone.graceful_shutdown(Some(std::time::Duration::from_secs(10)));
        });

        axum_server::bind(addr)
            .handle(handle)
            .serve(app.into_make_service())
            .await
            .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

        Ok(())
    }
}
