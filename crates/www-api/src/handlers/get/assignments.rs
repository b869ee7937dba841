// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Web API for listing assignment segments
//!

use crate::ApiError;
use axum::Json;
use axum::extract::State;
use resource_planner_core::Assignment;
use resource_planner_crud::FetchAll;
use sqlx::{Pool, Sqlite};
use std::sync::Arc;

/// Handle a request to list every assignment segment
pub async fn handle_get_assignments(
    State(pool): State<Arc<Pool<Sqlite>>>,
) -> Result<Json<Vec<Assignment>>, ApiError> {
    let mut transaction = pool.begin().await?;
    let assignments = Vec::<Assignment>::fetch_all(&mut transaction).await?;
    Ok(Json(assignments))
}
