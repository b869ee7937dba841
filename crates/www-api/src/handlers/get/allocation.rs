// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Web API for the pre-submit allocation check
//!
//! The assignment form calls this before saving.  A total over 100 comes back
//! as a warning string, never as an error status: over-allocating somebody is
//! the planner's to flag and the user's to decide.
//!

use crate::{ApiError, queries::AllocationCheckQueryParams};
use axum::Json;
use axum::extract::{Query, State};
use resource_planner_core::{
    AllocationLevel, DateRange, Percentage, find_overlapping, total_allocation,
};
use resource_planner_crud::fetch_assignments_for_person;
use serde::Serialize;
use sqlx::{Pool, Sqlite};
use std::sync::Arc;

/// What the form gets back for a candidate assignment
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationCheck {
    /// How many existing segments intersect the candidate dates
    pub overlapping_count: usize,

    /// Total allocation over the candidate dates, the candidate included
    pub total: u32,

    /// Heat-map band for the total
    pub level: AllocationLevel,

    /// Set when the total exceeds 100
    pub warning: Option<String>,
}

/// Handle a request to check a candidate assignment against a person's
/// existing segments
pub async fn handle_get_allocation_check(
    State(pool): State<Arc<Pool<Sqlite>>>,
    Query(params): Query<AllocationCheckQueryParams>,
) -> Result<Json<AllocationCheck>, ApiError> {
    // Manual entry is bounded at 100 even though stored rows may carry more
    let percentage = Percentage::new(params.percentage).map_err(ApiError::bad_request)?;
    let candidate =
        DateRange::from(params.start, params.end).map_err(ApiError::bad_request)?;

    let mut transaction = pool.begin().await?;
    let segments = fetch_assignments_for_person(&mut transaction, &params.person_id).await?;

    let overlapping = find_overlapping(&segments, params.person_id, &candidate, params.exclude_id);
    let total = total_allocation(&overlapping, percentage);
    let level = AllocationLevel::classify(total);

    let warning = (total > 100)
        .then(|| format!("This person will be over-allocated ({total}%) during this period"));

    Ok(Json(AllocationCheck {
        overlapping_count: overlapping.len(),
        total,
        level,
        warning,
    }))
}
