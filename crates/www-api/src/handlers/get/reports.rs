// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Web API for the reporting views
//!
//! Both reports re-derive their figures from the stored segments on every
//! request; nothing here is cached.  Spreadsheet export happens client-side
//! from this JSON.
//!

use crate::{ApiError, MAX_REPORT_MONTHS, queries::TeamReportQueryParams};
use axum::Json;
use axum::extract::{Query, State};
use resource_planner_core::{
    AllocationLevel, Assignment, DEFAULT_ANCHOR_YEAR, HasId, Period, Person, Project,
    ProjectDistribution, project_distribution, total_for_period,
};
use resource_planner_crud::FetchAll;
use serde::Serialize;
use sqlx::{Pool, Sqlite};
use std::sync::Arc;

/// One (person, month) cell of the team report
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationCell {
    pub period_offset: i32,

    /// Column header, e.g. `Feb 2026`
    pub label: String,

    pub total: u32,

    pub level: AllocationLevel,
}

/// One row of the team report: a person and their month-by-month totals
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamAllocationRow {
    pub person: Person,
    pub cells: Vec<AllocationCell>,
}

/// One row of the project report
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDistributionRow {
    pub project: Project,

    #[serde(flatten)]
    pub distribution: ProjectDistribution,
}

/// Handle a request for the team allocation report: per person, per month
/// totals with their heat-map bands
pub async fn handle_get_team_report(
    State(pool): State<Arc<Pool<Sqlite>>>,
    Query(params): Query<TeamReportQueryParams>,
) -> Result<Json<Vec<TeamAllocationRow>>, ApiError> {
    let months = params.months.min(MAX_REPORT_MONTHS);

    let mut periods = Vec::with_capacity(months as usize);
    for index in 0..months as i32 {
        let period = Period::from_offset(params.offset + index, DEFAULT_ANCHOR_YEAR)
            .map_err(ApiError::bad_request)?;
        periods.push(period);
    }

    let mut transaction = pool.begin().await?;
    let people = Vec::<Person>::fetch_all(&mut transaction).await?;
    let segments = Vec::<Assignment>::fetch_all(&mut transaction).await?;

    let rows = people
        .into_iter()
        .filter_map(|person| {
            let person_id = person.id()?;
            let cells = periods
                .iter()
                .map(|period| {
                    let total = total_for_period(&segments, person_id, period);
                    AllocationCell {
                        period_offset: period.offset(),
                        label: period.label(),
                        total,
                        level: AllocationLevel::classify(total),
                    }
                })
                .collect();
            Some(TeamAllocationRow { person, cells })
        })
        .collect();

    Ok(Json(rows))
}

/// Handle a request for the project distribution report: distinct people and
/// average allocation per project
pub async fn handle_get_project_report(
    State(pool): State<Arc<Pool<Sqlite>>>,
) -> Result<Json<Vec<ProjectDistributionRow>>, ApiError> {
    let mut transaction = pool.begin().await?;
    let projects = Vec::<Project>::fetch_all(&mut transaction).await?;
    let segments = Vec::<Assignment>::fetch_all(&mut transaction).await?;

    let rows = projects
        .into_iter()
        .filter_map(|project| {
            let project_id = project.id()?;
            let distribution = project_distribution(&segments, project_id);
            Some(ProjectDistributionRow {
                project,
                distribution,
            })
        })
        .collect();

    Ok(Json(rows))
}
