/// Server configuration
///
/// # Environment variables
///
/// Every item can be overridden through the environment:
///
/// | env var | default | meaning |
/// |---------|---------|---------|
/// | HTTP_PORT | 8000 | HTTP listen port |
/// | DB_PATH | data/tienda.db | directory of the embedded document store |
/// | FRONTEND_DIR | frontend | static asset root (index.html + static/) |
/// | ENVIRONMENT | development | development \| staging \| production |
///
/// # Example
///
/// ```ignore
/// DB_PATH=/data/tienda HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API listen port
    pub http_port: u16,
    /// Path of the embedded SurrealDB store
    pub db_path: String,
    /// Directory holding the front-end assets
    pub frontend_dir: String,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            db_path: std::env::var("DB_PATH").unwrap_or_else(|_| "data/tienda.db".into()),
            frontend_dir: std::env::var("FRONTEND_DIR").unwrap_or_else(|_| "frontend".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
