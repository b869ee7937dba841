// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Web API for assignment segments
//!
//! Creation is the one place the month splitter runs: a PUT payload spanning
//! several months is persisted as several independent segments and the client
//! gets them all back.  PATCH edits exactly the segment named by its ID and
//! never re-splits.
//!

use crate::{ApiError, helpers::patch};
use axum::Json;
use axum::extract::{Path, State};
use log::info;
use resource_planner_core::{Assignment, HasId, Percentage, PlannerId};
use resource_planner_crud::{DeleteById, create_segments};
use sqlx::{Pool, Sqlite};
use std::sync::Arc;

/// Handle a request to create an assignment.  The payload's range is split
/// into per-month segments and each one is persisted as its own record.
pub async fn handle_put_assignment(
    State(pool): State<Arc<Pool<Sqlite>>>,
    Json(payload): Json<Assignment>,
) -> Result<Json<Vec<Assignment>>, ApiError> {
    enforce_manual_percentage(&payload)?;

    let mut transaction = pool.begin().await?;
    let segments = create_segments(&mut transaction, &payload).await?;
    transaction.commit().await?;

    info!("Created {} assignment segment(s)", segments.len());
    Ok(Json(segments))
}

/// Handle a request to update one stored segment in place (no re-split)
pub async fn handle_patch_assignment(
    State(pool): State<Arc<Pool<Sqlite>>>,
    Json(payload): Json<Assignment>,
) -> Result<Json<Assignment>, ApiError> {
    enforce_manual_percentage(&payload)?;

    let mut transaction = pool.begin().await?;
    let result = patch(&mut transaction, payload).await?;
    transaction.commit().await?;
    Ok(result)
}

/// Handle a request to delete one segment
pub async fn handle_delete_assignment(
    State(pool): State<Arc<Pool<Sqlite>>>,
    Path(id): Path<PlannerId>,
) -> Result<Json<()>, ApiError> {
    let mut transaction = pool.begin().await?;
    Assignment::delete_by_id(&mut transaction, &id).await?;
    transaction.commit().await?;
    info!("Deleted assignment segment {id}");
    Ok(Json(()))
}

/// Manually entered assignments are bounded at 100%; only the bulk-upload
/// path may carry more (up to 200, for historical imports)
fn enforce_manual_percentage(assignment: &Assignment) -> Result<(), ApiError> {
    Percentage::new(assignment.percentage().value() as i64)
        .map(|_| ())
        .map_err(ApiError::bad_request)
}
