// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Web API for a single client
//!

use crate::{ApiError, helpers::*};
use axum::Json;
use axum::extract::{Path, State};
use log::info;
use resource_planner_core::{Client, HasId, PlannerId};
use resource_planner_crud::DeleteById;
use sqlx::{Pool, Sqlite};
use std::sync::Arc;

/// Handle a request to create a client
pub async fn handle_put_client(
    State(pool): State<Arc<Pool<Sqlite>>>,
    Json(mut payload): Json<Client>,
) -> Result<Json<Client>, ApiError> {
    let mut transaction = pool.begin().await?;

    payload.clear_id();
    let result = save_new(&mut transaction, payload).await?;
    transaction.commit().await?;
    Ok(result)
}

/// Handle a request to update a client
pub async fn handle_patch_client(
    State(pool): State<Arc<Pool<Sqlite>>>,
    Json(payload): Json<Client>,
) -> Result<Json<Client>, ApiError> {
    let mut transaction = pool.begin().await?;
    let result = patch(&mut transaction, payload).await?;
    transaction.commit().await?;
    Ok(result)
}

/// Handle a request to delete a client.  The client's projects, and their
/// assignment segments, are removed with it.
pub async fn handle_delete_client(
    State(pool): State<Arc<Pool<Sqlite>>>,
    Path(id): Path<PlannerId>,
) -> Result<Json<()>, ApiError> {
    let mut transaction = pool.begin().await?;
    Client::delete_by_id(&mut transaction, &id).await?;
    transaction.commit().await?;
    info!("Deleted client {id}");
    Ok(Json(()))
}
