// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Web API for listing people
//!

use crate::ApiError;
use axum::Json;
use axum::extract::State;
use resource_planner_core::Person;
use resource_planner_crud::FetchAll;
use sqlx::{Pool, Sqlite};
use std::sync::Arc;

/// Handle a request to list every person
pub async fn handle_get_people(
    State(pool): State<Arc<Pool<Sqlite>>>,
) -> Result<Json<Vec<Person>>, ApiError> {
    let mut transaction = pool.begin().await?;
    let people = Vec::<Person>::fetch_all(&mut transaction).await?;
    Ok(Json(people))
}
