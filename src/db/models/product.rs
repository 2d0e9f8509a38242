//! Product Model

use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use super::serde_thing;

pub type ProductId = Thing;

/// Product document as stored in the `productos` collection.
///
/// `id` is assigned by the store on creation and rendered in JSON as the
/// string `"productos:<key>"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(
        default,
        with = "serde_thing::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<ProductId>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub stock_quantity: i64,
}

/// Create payload.
///
/// Carries no `id` field: a client-supplied id is silently dropped during
/// deserialization and the store assigns a fresh one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub stock_quantity: i64,
}

/// Sparse update payload: only fields present in the JSON body are applied,
/// omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock_quantity: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_id_serializes_as_string() {
        let product = Product {
            id: Some(Thing::from(("productos".to_string(), "abc123".to_string()))),
            name: "Camiseta".into(),
            description: "Algodón".into(),
            price: 19.99,
            stock_quantity: 5,
        };
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], "productos:abc123");
    }

    #[test]
    fn create_payload_drops_supplied_id() {
        let payload: ProductCreate = serde_json::from_value(serde_json::json!({
            "id": "productos:hacked",
            "name": "Camiseta",
            "description": "",
            "price": 10.0,
            "stock_quantity": 3
        }))
        .unwrap();
        assert_eq!(payload.name, "Camiseta");
        // The payload shape has no id field at all; nothing to assert beyond
        // successful deserialization.
    }

    #[test]
    fn update_payload_defaults_to_all_none() {
        let patch: ProductUpdate = serde_json::from_value(serde_json::json!({
            "price": 9.99
        }))
        .unwrap();
        assert_eq!(patch.price, Some(9.99));
        assert!(patch.name.is_none());
        assert!(patch.description.is_none());
        assert!(patch.stock_quantity.is_none());
    }
}
