// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! All non-GET requests
//!

use axum::{
    Router,
    routing::{delete, post, put},
};
use sqlx::{Pool, Sqlite};
use std::sync::Arc;

mod admin;
mod assignment;
mod bulk;
mod client;
mod person;
mod project;

///
pub fn router() -> Result<Router<Arc<Pool<Sqlite>>>, sqlx::Error> {
    // Non-GET request routes for API v1
    #[rustfmt::skip]
    let apiv1 = Router::new()
        .route("/person",           put(person::handle_put_person).patch(person::handle_patch_person))
        .route("/person/{id}",      delete(person::handle_delete_person))
        .route("/client",           put(client::handle_put_client).patch(client::handle_patch_client))
        .route("/client/{id}",      delete(client::handle_delete_client))
        .route("/project",          put(project::handle_put_project).patch(project::handle_patch_project))
        .route("/project/{id}",     delete(project::handle_delete_project))
        .route("/assignment",       put(assignment::handle_put_assignment).patch(assignment::handle_patch_assignment))
        .route("/assignment/{id}",  delete(assignment::handle_delete_assignment))
        .route("/bulk/people",      post(bulk::handle_post_bulk_people))
        .route("/bulk/clients",     post(bulk::handle_post_bulk_clients))
        .route("/bulk/projects",    post(bulk::handle_post_bulk_projects))
        .route("/bulk/assignments", post(bulk::handle_post_bulk_assignments))
        .route("/clear-all",        post(admin::handle_post_clear_all));

    Ok(apiv1)
}
