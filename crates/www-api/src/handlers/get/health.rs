// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Liveness probe
//!

use axum::Json;
use serde_json::{Value, json};

/// Handle a health check
pub async fn handle_get_health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
