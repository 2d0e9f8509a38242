//! Admin product API

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    // Nesting alone maps the inner "/" route to "/admin/productos" only; the
    // documented collection path has a trailing slash, so route it explicitly.
    Router::new()
        .nest("/admin/productos", productos_routes())
        .route(
            "/admin/productos/",
            get(handler::list).post(handler::create),
        )
}

fn productos_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
