//! Customer handlers: available catalog and purchase

use axum::{Json, extract::State};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::Product;
use crate::db::repository::ProductRepository;
use crate::utils::validation::validate_purchase_quantity;
use crate::utils::{AppError, AppResult};

const MSG_NOT_FOUND: &str = "Producto no encontrado";
const MSG_INSUFFICIENT_STOCK: &str = "Stock insuficiente";

/// POST /cliente/comprar/ request body
#[derive(Debug, Deserialize)]
pub struct PurchaseRequest {
    pub producto_id: String,
    pub cantidad: i64,
}

/// GET /cliente/productos/ - in-stock products only, capped at 100
pub async fn list_available(State(state): State<ServerState>) -> AppResult<Json<Vec<Product>>> {
    let repo = ProductRepository::new(state.db.clone());
    let products = repo.find_available().await?;

    tracing::info!(count = products.len(), "Available product list fetched");
    Ok(Json(products))
}

/// POST /cliente/comprar/ - purchase a quantity of one product
///
/// The stock-sufficiency guard and the decrement run as a single conditional
/// store update, so concurrent purchases cannot drive the stock negative. The
/// initial read only serves to distinguish a missing product (404) from
/// insufficient stock (400) in the response.
pub async fn purchase(
    State(state): State<ServerState>,
    Json(payload): Json<PurchaseRequest>,
) -> AppResult<Json<Product>> {
    validate_purchase_quantity(payload.cantidad)?;

    let repo = ProductRepository::new(state.db.clone());

    let product = repo
        .find_by_id(&payload.producto_id)
        .await?
        .ok_or_else(|| AppError::not_found(MSG_NOT_FOUND))?;

    if product.stock_quantity < payload.cantidad {
        return Err(AppError::insufficient_stock(MSG_INSUFFICIENT_STOCK));
    }

    match repo
        .decrement_stock(&payload.producto_id, payload.cantidad)
        .await?
    {
        Some(updated) => {
            tracing::info!(
                id = %payload.producto_id,
                cantidad = payload.cantidad,
                "Purchase completed"
            );
            Ok(Json(updated))
        }
        // Lost the race: another purchase drained the stock between the read
        // above and the guarded decrement.
        None => Err(AppError::insufficient_stock(MSG_INSUFFICIENT_STOCK)),
    }
}
