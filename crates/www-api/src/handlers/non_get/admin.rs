// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Administrative escape hatches
//!

use crate::ApiError;
use axum::Json;
use axum::extract::State;
use log::warn;
use resource_planner_crud::clear_db;
use serde_json::{Value, json};
use sqlx::{Pool, Sqlite};
use std::sync::Arc;

/// Handle a request to delete everything: assignments, projects, clients and
/// people
pub async fn handle_post_clear_all(
    State(pool): State<Arc<Pool<Sqlite>>>,
) -> Result<Json<Value>, ApiError> {
    let mut transaction = pool.begin().await?;
    clear_db(&mut transaction).await?;
    transaction.commit().await?;
    warn!("Cleared the whole database");
    Ok(Json(json!({ "success": true })))
}
