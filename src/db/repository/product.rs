//! Product Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use surrealdb::sql::Thing;

use super::{BaseRepository, RepoError, RepoResult, parse_record_key};
use crate::db::models::{Product, ProductCreate, ProductUpdate};

const PRODUCT_TABLE: &str = "productos";

// =============================================================================
// Product Repository
// =============================================================================

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Fetch up to 100 products in store-native order.
    pub async fn find_all(&self) -> RepoResult<Vec<Product>> {
        let products: Vec<Product> = self
            .base
            .db()
            .query("SELECT * FROM productos LIMIT 100")
            .await?
            .take(0)?;
        Ok(products)
    }

    /// Fetch up to 100 products with stock available.
    pub async fn find_available(&self) -> RepoResult<Vec<Product>> {
        let products: Vec<Product> = self
            .base
            .db()
            .query("SELECT * FROM productos WHERE stock_quantity > 0 LIMIT 100")
            .await?
            .take(0)?;
        Ok(products)
    }

    /// Find product by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Product>> {
        let key = parse_record_key(PRODUCT_TABLE, id)?;
        let product: Option<Product> = self.base.db().select((PRODUCT_TABLE, key)).await?;
        Ok(product)
    }

    /// Insert a new product; the store assigns the record id.
    pub async fn create(&self, data: ProductCreate) -> RepoResult<Product> {
        let created: Option<Product> = self.base.db().create(PRODUCT_TABLE).content(data).await?;
        created.ok_or_else(|| RepoError::Database("Create returned no record".to_string()))
    }

    /// Apply a sparse patch. Returns `None` when no record matches.
    ///
    /// Only fields present in the patch end up in the SET clause, so omitted
    /// fields are left untouched in the stored document.
    pub async fn update(&self, id: &str, data: ProductUpdate) -> RepoResult<Option<Product>> {
        let key = parse_record_key(PRODUCT_TABLE, id)?;
        let thing = Thing::from((PRODUCT_TABLE.to_string(), key));

        // Build dynamic SET clauses with proper type bindings
        let mut set_parts: Vec<&str> = Vec::new();

        if data.name.is_some() {
            set_parts.push("name = $name");
        }
        if data.description.is_some() {
            set_parts.push("description = $description");
        }
        if data.price.is_some() {
            set_parts.push("price = $price");
        }
        if data.stock_quantity.is_some() {
            set_parts.push("stock_quantity = $stock_quantity");
        }

        if set_parts.is_empty() {
            // An empty patch is just a read
            return self.find_by_id(id).await;
        }

        let query_str = format!("UPDATE $thing SET {} RETURN AFTER", set_parts.join(", "));

        let mut query = self.base.db().query(query_str).bind(("thing", thing));

        if let Some(v) = data.name {
            query = query.bind(("name", v));
        }
        if let Some(v) = data.description {
            query = query.bind(("description", v));
        }
        if let Some(v) = data.price {
            query = query.bind(("price", v));
        }
        if let Some(v) = data.stock_quantity {
            query = query.bind(("stock_quantity", v));
        }

        let mut result = query.await?;
        let products: Vec<Product> = result.take(0)?;
        Ok(products.into_iter().next())
    }

    /// Remove a product. Returns `true` when a record was deleted.
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let key = parse_record_key(PRODUCT_TABLE, id)?;
        let deleted: Option<Product> = self.base.db().delete((PRODUCT_TABLE, key)).await?;
        Ok(deleted.is_some())
    }

    /// Conditionally decrement stock in a single atomic store update.
    ///
    /// The sufficiency guard and the decrement run as one statement, so two
    /// concurrent purchases can never drive `stock_quantity` below zero.
    /// Returns `None` when the record is missing or the remaining stock is
    /// insufficient; the caller distinguishes the two with a separate read.
    pub async fn decrement_stock(&self, id: &str, quantity: i64) -> RepoResult<Option<Product>> {
        let key = parse_record_key(PRODUCT_TABLE, id)?;
        let thing = Thing::from((PRODUCT_TABLE.to_string(), key));

        let mut result = self
            .base
            .db()
            .query(
                "UPDATE $thing SET stock_quantity -= $qty \
                 WHERE stock_quantity >= $qty RETURN AFTER",
            )
            .bind(("thing", thing))
            .bind(("qty", quantity))
            .await?;

        let products: Vec<Product> = result.take(0)?;
        Ok(products.into_iter().next())
    }
}
