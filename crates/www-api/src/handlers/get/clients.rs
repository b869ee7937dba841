// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Web API for listing clients
//!

use crate::ApiError;
use axum::Json;
use axum::extract::State;
use resource_planner_core::Client;
use resource_planner_crud::FetchAll;
use sqlx::{Pool, Sqlite};
use std::sync::Arc;

/// Handle a request to list every client
pub async fn handle_get_clients(
    State(pool): State<Arc<Pool<Sqlite>>>,
) -> Result<Json<Vec<Client>>, ApiError> {
    let mut transaction = pool.begin().await?;
    let clients = Vec::<Client>::fetch_all(&mut transaction).await?;
    Ok(Json(clients))
}
