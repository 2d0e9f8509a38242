//! Repository Module
//!
//! CRUD operations over the `productos` collection.

pub mod product;

pub use product::ProductRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

/// Normalize a client-supplied record id to a bare key.
///
/// Accepts both the full `"table:key"` form and the bare key. An empty key or
/// an id addressing a different table is a validation error, not a store
/// error.
pub fn parse_record_key(table: &str, id: &str) -> RepoResult<String> {
    let key = match id.split_once(':') {
        Some((tb, key)) if tb == table => key,
        Some((tb, _)) => {
            return Err(RepoError::Validation(format!(
                "invalid id '{id}': expected table '{table}', got '{tb}'"
            )));
        }
        None => id,
    };

    if key.is_empty() {
        return Err(RepoError::Validation(format!(
            "invalid id '{id}': empty record key"
        )));
    }

    Ok(key.to_string())
}
