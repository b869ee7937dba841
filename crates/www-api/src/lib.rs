// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider resource-planner project*
//!
//! This crate provides the web API the timeline frontend talks to: CRUD for
//! people, clients, projects and assignment segments, the allocation-check
//! used by the assignment form, the team and project reports, and the bulk
//! upload endpoints the spreadsheet importer posts to.  It may be hosted
//! centrally or run locally against a private database file.
//!

mod consts;
mod error;
mod handlers;
mod helpers;
mod queries;

use consts::*;
use error::*;

use axum::Router;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::Path;
use std::{str::FromStr, sync::Arc};
use tower_http::{services::ServeDir, trace::TraceLayer};

/// API access mode (read-only or read-write)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiAccessMode {
    Read,
    ReadWrite,
}

/// Set up and serve the API.  `static_dir`, if given, is served as the
/// frontend fallback (the built timeline app).
pub async fn prepare_api_router(
    db_url: &str,
    access_mode: ApiAccessMode,
    static_dir: Option<&Path>,
) -> Result<Router, sqlx::Error> {
    // Create connection options (whether the database is read-only or not)
    let connect_options =
        SqliteConnectOptions::from_str(db_url)?.read_only(access_mode == ApiAccessMode::Read);

    // Create a pool with those options
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(connect_options)
        .await?;

    // Get the router
    let apiv1 = handlers::router(access_mode)?;

    // Add the state
    let apiv1 = apiv1.with_state(Arc::new(pool));

    // Add URL path prefix
    let mut api = Router::new().nest("/api/v1", apiv1);

    // Serve the frontend, when there is one to serve
    if let Some(static_dir) = static_dir {
        api = api.fallback_service(ServeDir::new(static_dir));
    }

    // Return the router
    Ok(api.layer(TraceLayer::new_for_http()))
}
