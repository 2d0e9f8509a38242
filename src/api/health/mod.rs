//! Health check route
//!
//! | path | method | auth |
//! |------|--------|------|
//! | /health | GET | none |
//!
//! ```json
//! { "status": "healthy", "version": "0.1.0", "database": "ok" }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    /// Document-store round-trip result (ok | error)
    database: &'static str,
}

/// GET /health - liveness plus a store round-trip
pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let database = match state.db.query("RETURN 1").await {
        Ok(_) => "ok",
        Err(e) => {
            tracing::error!(error = %e, "Health check: store unreachable");
            "error"
        }
    };

    Json(HealthResponse {
        status: if database == "ok" {
            "healthy"
        } else {
            "degraded"
        },
        version: env!("CARGO_PKG_VERSION"),
        database,
    })
}
