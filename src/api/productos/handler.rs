//! Admin product handlers
//!
//! Full CRUD over the `productos` collection. Payload validation runs before
//! any store access; a rejected payload never reaches the database.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::{Product, ProductCreate, ProductUpdate};
use crate::db::repository::ProductRepository;
use crate::utils::validation::{
    MAX_DESCRIPTION_LEN, MAX_NAME_LEN, validate_optional_text, validate_price,
    validate_required_text, validate_stock_quantity, validate_text,
};
use crate::utils::{AppError, AppResult};

const MSG_NOT_FOUND: &str = "Producto no encontrado";

/// GET /admin/productos/ - full catalog, capped at 100
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Product>>> {
    let repo = ProductRepository::new(state.db.clone());
    let products = repo.find_all().await?;

    tracing::info!(count = products.len(), "Product list fetched");
    Ok(Json(products))
}

/// GET /admin/productos/{id} - single product
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let repo = ProductRepository::new(state.db.clone());
    let product = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(MSG_NOT_FOUND))?;

    tracing::info!(id = %id, "Product fetched");
    Ok(Json(product))
}

/// POST /admin/productos/ - create a product
///
/// A client-supplied `id` is discarded by the payload shape itself; the store
/// assigns a fresh identifier.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<Json<Product>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_text(&payload.description, "description", MAX_DESCRIPTION_LEN)?;
    validate_price(payload.price)?;
    validate_stock_quantity(payload.stock_quantity)?;

    let repo = ProductRepository::new(state.db.clone());
    let product = repo.create(payload).await?;

    let id = product.id.as_ref().map(|t| t.to_raw()).unwrap_or_default();
    tracing::info!(id = %id, "Product created");
    Ok(Json(product))
}

/// PUT /admin/productos/{id} - sparse update
///
/// Only fields present in the body are applied; omitted fields keep their
/// stored value. Present fields are re-validated with the same rules as
/// create.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ProductUpdate>,
) -> AppResult<Json<Product>> {
    if let Some(ref name) = payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.description, "description", MAX_DESCRIPTION_LEN)?;
    if let Some(price) = payload.price {
        validate_price(price)?;
    }
    if let Some(quantity) = payload.stock_quantity {
        validate_stock_quantity(quantity)?;
    }

    let repo = ProductRepository::new(state.db.clone());
    let product = repo
        .update(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found(MSG_NOT_FOUND))?;

    tracing::info!(id = %id, "Product updated");
    Ok(Json(product))
}

/// Delete confirmation body
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub detail: String,
}

/// DELETE /admin/productos/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let repo = ProductRepository::new(state.db.clone());
    if !repo.delete(&id).await? {
        return Err(AppError::not_found(MSG_NOT_FOUND));
    }

    tracing::info!(id = %id, "Product deleted");
    Ok(Json(DeleteResponse {
        detail: "Producto eliminado exitosamente".to_string(),
    }))
}
