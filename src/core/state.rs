use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// Shared server state
///
/// Holds the configuration and the single long-lived document-store handle.
/// The handle is established once at startup and injected into every handler
/// through axum state; nothing here is a process global. Cloning is cheap
/// (the SurrealDB handle is internally reference counted).
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration (immutable after startup)
    pub config: Config,
    /// Embedded document store (SurrealDB)
    pub db: Surreal<Db>,
}

impl ServerState {
    pub fn new(config: Config, db: Surreal<Db>) -> Self {
        Self { config, db }
    }

    /// Open the document store and build the state.
    ///
    /// Fails fast when the store cannot be opened; the server does not start
    /// without a working database connection.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db_service = DbService::new(&config.db_path).await?;
        Ok(Self::new(config.clone(), db_service.db))
    }
}
