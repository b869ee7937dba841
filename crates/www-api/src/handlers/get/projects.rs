// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Web API for listing projects
//!

use crate::ApiError;
use axum::Json;
use axum::extract::State;
use resource_planner_core::Project;
use resource_planner_crud::FetchAll;
use sqlx::{Pool, Sqlite};
use std::sync::Arc;

/// Handle a request to list every project
pub async fn handle_get_projects(
    State(pool): State<Arc<Pool<Sqlite>>>,
) -> Result<Json<Vec<Project>>, ApiError> {
    let mut transaction = pool.begin().await?;
    let projects = Vec::<Project>::fetch_all(&mut transaction).await?;
    Ok(Json(projects))
}
