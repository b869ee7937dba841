// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Generic helpers
//!

use crate::ApiError;
use axum::Json;
use resource_planner_core::HasId;
use resource_planner_crud::{Create, Update};
use serde::Serialize;
use sqlx::{Sqlite, Transaction};

#[derive(Serialize)]
pub struct ErrorMsg {
    pub error_msg: String,
}

/// Create `thing_to_create` and echo it back with its new ID set
pub async fn save_new<T: Create + HasId>(
    transaction: &mut Transaction<'_, Sqlite>,
    mut thing_to_create: T,
) -> Result<Json<T>, ApiError> {
    thing_to_create.create(transaction).await?;
    Ok(Json(thing_to_create))
}

/// Update `thing_to_patch` in place and echo it back
pub async fn patch<T: Update + HasId>(
    transaction: &mut Transaction<'_, Sqlite>,
    mut thing_to_patch: T,
) -> Result<Json<T>, ApiError> {
    if thing_to_patch.id().is_none() {
        return Err(ApiError::bad_request("An ID is required when updating"));
    }
    thing_to_patch.update(transaction).await?;
    Ok(Json(thing_to_patch))
}
