//! Customer-facing API

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub use handler::PurchaseRequest;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/cliente/productos/", get(handler::list_available))
        .route("/cliente/comprar/", post(handler::purchase))
}
