// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Web API for a single project
//!

use crate::{ApiError, helpers::*};
use axum::Json;
use axum::extract::{Path, State};
use log::info;
use resource_planner_core::{HasId, PlannerId, Project};
use resource_planner_crud::DeleteById;
use sqlx::{Pool, Sqlite};
use std::sync::Arc;

/// Handle a request to create a project
pub async fn handle_put_project(
    State(pool): State<Arc<Pool<Sqlite>>>,
    Json(mut payload): Json<Project>,
) -> Result<Json<Project>, ApiError> {
    let mut transaction = pool.begin().await?;

    payload.clear_id();
    let result = save_new(&mut transaction, payload).await?;
    transaction.commit().await?;
    Ok(result)
}

/// Handle a request to update a project
pub async fn handle_patch_project(
    State(pool): State<Arc<Pool<Sqlite>>>,
    Json(payload): Json<Project>,
) -> Result<Json<Project>, ApiError> {
    let mut transaction = pool.begin().await?;
    let result = patch(&mut transaction, payload).await?;
    transaction.commit().await?;
    Ok(result)
}

/// Handle a request to delete a project along with its assignment segments
pub async fn handle_delete_project(
    State(pool): State<Arc<Pool<Sqlite>>>,
    Path(id): Path<PlannerId>,
) -> Result<Json<()>, ApiError> {
    let mut transaction = pool.begin().await?;
    Project::delete_by_id(&mut transaction, &id).await?;
    transaction.commit().await?;
    info!("Deleted project {id}");
    Ok(Json(()))
}
