// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Web API for bulk uploads
//!
//! The spreadsheet importer parses CSV/XLSX client-side and posts plain JSON
//! rows here.  Rows may name people, clients and projects instead of carrying
//! IDs; names are resolved case-insensitively against the directory.
//! Assignment rows are upserted on (person, project, start, end) so
//! re-importing the same sheet updates percentages instead of duplicating
//! segments.  Imported percentages may run up to 200; that has always been
//! the import bound and rows inside it must keep loading.
//!

use crate::ApiError;
use axum::Json;
use axum::extract::State;
use log::info;
use resource_planner_core::{
    Assignment, CalendarDate, Client, HasId, Name, Percentage, Person, PlannerId, Project,
};
use resource_planner_crud::{
    Create, Update, client_id_from_name, find_matching_assignment, person_id_from_name,
    project_id_from_name_and_client,
};
use serde::{Deserialize, Serialize};
use sqlx::{Pool, Sqlite, Transaction};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct BulkPeoplePayload {
    pub people: Vec<Person>,
}

#[derive(Deserialize)]
pub struct BulkClientsPayload {
    pub clients: Vec<Client>,
}

#[derive(Deserialize)]
pub struct BulkProjectsPayload {
    pub projects: Vec<BulkProjectRow>,
}

/// A project row: either a client ID or a client name must be present
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkProjectRow {
    pub name: Name,

    #[serde(default)]
    pub client_id: Option<PlannerId>,

    #[serde(default)]
    pub client_name: Option<String>,
}

#[derive(Deserialize)]
pub struct BulkAssignmentsPayload {
    pub assignments: Vec<BulkAssignmentRow>,
}

/// An assignment row: person and project can arrive as IDs or as names (a
/// project name needs its client's name to disambiguate)
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkAssignmentRow {
    #[serde(default)]
    pub person_id: Option<PlannerId>,

    #[serde(default)]
    pub person_name: Option<String>,

    #[serde(default)]
    pub project_id: Option<PlannerId>,

    #[serde(default)]
    pub project_name: Option<String>,

    #[serde(default)]
    pub client_name: Option<String>,

    pub start_date: CalendarDate,

    pub end_date: CalendarDate,

    /// Defaults to 100 when the column is blank
    #[serde(default)]
    pub percentage: Option<i64>,
}

/// What every bulk endpoint responds with
#[derive(Serialize)]
pub struct BulkAdded<T> {
    pub added: Vec<T>,
}

/// Handle a bulk upload of people
pub async fn handle_post_bulk_people(
    State(pool): State<Arc<Pool<Sqlite>>>,
    Json(payload): Json<BulkPeoplePayload>,
) -> Result<Json<BulkAdded<Person>>, ApiError> {
    let mut transaction = pool.begin().await?;

    let mut added = Vec::with_capacity(payload.people.len());
    for mut person in payload.people {
        person.clear_id();
        person.create(&mut transaction).await?;
        added.push(person);
    }

    transaction.commit().await?;
    info!("Bulk uploaded {} people", added.len());
    Ok(Json(BulkAdded { added }))
}

/// Handle a bulk upload of clients
pub async fn handle_post_bulk_clients(
    State(pool): State<Arc<Pool<Sqlite>>>,
    Json(payload): Json<BulkClientsPayload>,
) -> Result<Json<BulkAdded<Client>>, ApiError> {
    let mut transaction = pool.begin().await?;

    let mut added = Vec::with_capacity(payload.clients.len());
    for mut client in payload.clients {
        client.clear_id();
        client.create(&mut transaction).await?;
        added.push(client);
    }

    transaction.commit().await?;
    info!("Bulk uploaded {} clients", added.len());
    Ok(Json(BulkAdded { added }))
}

/// Handle a bulk upload of projects, resolving client names to IDs
pub async fn handle_post_bulk_projects(
    State(pool): State<Arc<Pool<Sqlite>>>,
    Json(payload): Json<BulkProjectsPayload>,
) -> Result<Json<BulkAdded<Project>>, ApiError> {
    let mut transaction = pool.begin().await?;

    let mut added = Vec::with_capacity(payload.projects.len());
    for row in payload.projects {
        let client_id = resolve_client(&mut transaction, row.client_id, &row.client_name).await?;

        let mut project = Project::new(None, row.name, client_id);
        project.create(&mut transaction).await?;
        added.push(project);
    }

    transaction.commit().await?;
    info!("Bulk uploaded {} projects", added.len());
    Ok(Json(BulkAdded { added }))
}

/// Handle a bulk upload of assignments.  Rows are stored exactly as given
/// (import sheets are already one row per month); a row matching an existing
/// segment on (person, project, start, end) updates it instead of adding a
/// duplicate.
pub async fn handle_post_bulk_assignments(
    State(pool): State<Arc<Pool<Sqlite>>>,
    Json(payload): Json<BulkAssignmentsPayload>,
) -> Result<Json<BulkAdded<Assignment>>, ApiError> {
    let mut transaction = pool.begin().await?;

    let mut added = Vec::with_capacity(payload.assignments.len());
    for row in payload.assignments {
        let person_id = resolve_person(&mut transaction, row.person_id, &row.person_name).await?;
        let project_id = resolve_project(
            &mut transaction,
            row.project_id,
            &row.project_name,
            &row.client_name,
        )
        .await?;

        let percentage =
            Percentage::imported(row.percentage.unwrap_or(100)).map_err(ApiError::bad_request)?;

        let mut assignment = Assignment::from(
            None,
            person_id,
            project_id,
            row.start_date,
            row.end_date,
            percentage,
        )
        .map_err(ApiError::bad_request)?;

        match find_matching_assignment(
            &mut transaction,
            &person_id,
            &project_id,
            &assignment.range(),
        )
        .await?
        {
            Some(existing_id) => {
                assignment.set_id(existing_id);
                assignment.update(&mut transaction).await?;
            }
            None => assignment.create(&mut transaction).await?,
        }

        added.push(assignment);
    }

    transaction.commit().await?;
    info!("Bulk uploaded {} assignments", added.len());
    Ok(Json(BulkAdded { added }))
}

/// Turn a person reference (ID or name) into an ID
async fn resolve_person(
    transaction: &mut Transaction<'_, Sqlite>,
    person_id: Option<PlannerId>,
    person_name: &Option<String>,
) -> Result<PlannerId, ApiError> {
    if let Some(person_id) = person_id {
        return Ok(person_id);
    }

    let Some(person_name) = clean_name(person_name) else {
        return Err(ApiError::bad_request(
            "Assignment requires personId or personName",
        ));
    };
    match person_id_from_name(transaction, &person_name).await? {
        Some(person_id) => Ok(person_id),
        None => Err(ApiError::bad_request(format!(
            "Person not found: {person_name}"
        ))),
    }
}

/// Turn a client reference (ID or name) into an ID
async fn resolve_client(
    transaction: &mut Transaction<'_, Sqlite>,
    client_id: Option<PlannerId>,
    client_name: &Option<String>,
) -> Result<PlannerId, ApiError> {
    if let Some(client_id) = client_id {
        return Ok(client_id);
    }

    let Some(client_name) = clean_name(client_name) else {
        return Err(ApiError::bad_request(
            "Project requires clientId or clientName",
        ));
    };
    match client_id_from_name(transaction, &client_name).await? {
        Some(client_id) => Ok(client_id),
        None => Err(ApiError::bad_request(format!(
            "Client not found: {client_name}"
        ))),
    }
}

/// Turn a project reference (ID, or name plus client name) into an ID
async fn resolve_project(
    transaction: &mut Transaction<'_, Sqlite>,
    project_id: Option<PlannerId>,
    project_name: &Option<String>,
    client_name: &Option<String>,
) -> Result<PlannerId, ApiError> {
    if let Some(project_id) = project_id {
        return Ok(project_id);
    }

    let (Some(project_name), Some(client_name)) = (clean_name(project_name), clean_name(client_name))
    else {
        return Err(ApiError::bad_request(
            "Assignment requires projectId or projectName with clientName",
        ));
    };

    let Some(client_id) = client_id_from_name(transaction, &client_name).await? else {
        return Err(ApiError::bad_request(format!(
            "Client not found: {client_name}"
        )));
    };

    match project_id_from_name_and_client(transaction, &project_name, &client_id).await? {
        Some(project_id) => Ok(project_id),
        None => Err(ApiError::bad_request(format!(
            "Project not found: {project_name} (client: {client_name})"
        ))),
    }
}

/// Trimmed, non-empty version of an optional name column
fn clean_name(value: &Option<String>) -> Option<String> {
    let trimmed = value.as_deref()?.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
