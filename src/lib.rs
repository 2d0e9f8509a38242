//! Tienda Catalog Server - product catalog CRUD and purchase service
//!
//! A small HTTP service over a single document collection (`productos`),
//! serving two audiences:
//!
//! - **admin** (`/admin/productos/...`): full CRUD over products
//! - **cliente** (`/cliente/...`): in-stock listing and purchasing
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── core/          # Config, state, HTTP server
//! ├── api/           # Routers and handlers
//! ├── db/            # Embedded SurrealDB, models, repositories
//! └── utils/         # Errors, logging, validation
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Prepare the process environment: load `.env` and initialize logging.
pub fn setup_environment() {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
}
