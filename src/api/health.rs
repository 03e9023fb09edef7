//! Liveness probe for the short-lived callback server, handy for checking
//! that the redirect port is actually reachable while `auth` waits.

use axum::response::Json;
use serde_json::{Value, json};

pub async fn health() -> Json<Value> {
    Json(json!({
        "service": env!("CARGO_PKG_NAME"),
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
