// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! All GET requests
//!

use axum::{Router, routing::get};
use sqlx::{Pool, Sqlite};
use std::sync::Arc;

mod allocation;
mod assignments;
mod clients;
mod health;
mod people;
mod projects;
mod reports;

///
pub fn router() -> Result<Router<Arc<Pool<Sqlite>>>, sqlx::Error> {
    // GET request routes for API v1
    #[rustfmt::skip]
    let apiv1 = Router::new()
        .route("/people",           get(people::handle_get_people))
        .route("/clients",          get(clients::handle_get_clients))
        .route("/projects",         get(projects::handle_get_projects))
        .route("/assignments",      get(assignments::handle_get_assignments))
        .route("/allocation-check", get(allocation::handle_get_allocation_check))
        .route("/reports/team",     get(reports::handle_get_team_report))
        .route("/reports/projects", get(reports::handle_get_project_report))
        .route("/health",           get(health::handle_get_health));

    Ok(apiv1)
}
