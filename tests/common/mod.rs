//! Shared helpers for HTTP-level integration tests
//!
//! Each test builds the real router over a throwaway RocksDB store and drives
//! it in-process with `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use tienda_server::core::server::build_app;
use tienda_server::{Config, ServerState};

/// Build the application router backed by a temporary store.
///
/// The `TempDir` must be kept alive for the duration of the test.
pub async fn test_app() -> (Router, TempDir) {
    let tmp = tempfile::tempdir().expect("failed to create tempdir");
    let config = Config {
        http_port: 0,
        db_path: tmp.path().join("tienda.db").to_string_lossy().into_owned(),
        frontend_dir: tmp.path().join("frontend").to_string_lossy().into_owned(),
        environment: "test".into(),
    };
    let state = ServerState::initialize(&config)
        .await
        .expect("failed to initialize server state");
    (build_app(&config).with_state(state), tmp)
}

/// Send one request and decode the JSON response body (Null when empty).
pub async fn send(
    app: &Router,
    method: &str,
    path: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(path);
    let request = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

/// Create a product through the admin API and return its response body.
pub async fn create_product(app: &Router, name: &str, price: f64, stock: i64) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/admin/productos/",
        Some(json!({
            "name": name,
            "description": format!("{name} de prueba"),
            "price": price,
            "stock_quantity": stock
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create failed: {body}");
    body
}

/// Extract the assigned record id from a product body.
pub fn product_id(body: &Value) -> String {
    body["id"].as_str().expect("product body without id").to_string()
}
