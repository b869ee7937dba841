// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Web API for a single person
//!

use crate::{ApiError, helpers::*};
use axum::Json;
use axum::extract::{Path, State};
use log::info;
use resource_planner_core::{HasId, Person, PlannerId};
use resource_planner_crud::DeleteById;
use sqlx::{Pool, Sqlite};
use std::sync::Arc;

/// Handle a request to create a person
pub async fn handle_put_person(
    State(pool): State<Arc<Pool<Sqlite>>>,
    Json(mut payload): Json<Person>,
) -> Result<Json<Person>, ApiError> {
    let mut transaction = pool.begin().await?;

    payload.clear_id();
    let result = save_new(&mut transaction, payload).await?;
    transaction.commit().await?;
    if let Some(id) = result.0.id() {
        info!("Created person {id}");
    }
    Ok(result)
}

/// Handle a request to update a person
pub async fn handle_patch_person(
    State(pool): State<Arc<Pool<Sqlite>>>,
    Json(payload): Json<Person>,
) -> Result<Json<Person>, ApiError> {
    let mut transaction = pool.begin().await?;
    let result = patch(&mut transaction, payload).await?;
    transaction.commit().await?;
    Ok(result)
}

/// Handle a request to delete a person (their assignment segments go too)
pub async fn handle_delete_person(
    State(pool): State<Arc<Pool<Sqlite>>>,
    Path(id): Path<PlannerId>,
) -> Result<Json<()>, ApiError> {
    let mut transaction = pool.begin().await?;
    Person::delete_by_id(&mut transaction, &id).await?;
    transaction.commit().await?;
    info!("Deleted person {id}");
    Ok(Json(()))
}
