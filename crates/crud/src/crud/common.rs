// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! CRUD traits and errors
//!

use async_trait::async_trait;
use resource_planner_core::{Name, PlannerId};
use sqlx::{Sqlite, Transaction};
use thiserror::Error;

/// Implementing types can fetch all instances
#[async_trait]
pub trait FetchAll: Sized + Send {
    async fn fetch_all(transaction: &mut Transaction<'_, Sqlite>) -> Result<Self, CrudError>;
}

/// Implementing types can be fetched using their [`PlannerId`]
#[allow(async_fn_in_trait)]
pub trait FetchById: Sized {
    /// Fetch the thing using its [`PlannerId`]
    async fn fetch_by_id(
        transaction: &mut Transaction<'_, Sqlite>,
        id: &PlannerId,
    ) -> Result<Self, CrudError>;
}

/// Implementing types can be deleted using their [`PlannerId`].  Deleting a
/// row that is not in the database is not an error.
#[allow(async_fn_in_trait)]
pub trait DeleteById {
    /// Delete the thing using its [`PlannerId`]
    async fn delete_by_id(
        transaction: &mut Transaction<'_, Sqlite>,
        id: &PlannerId,
    ) -> Result<(), CrudError>;
}

/// Implementing types can be created in the database
#[allow(async_fn_in_trait)]
pub trait Create {
    /// Create the data in the database.  An unset ID is assigned first.
    async fn create(&mut self, transaction: &mut Transaction<'_, Sqlite>) -> Result<(), CrudError>;
}

/// Implementing types can be updated in the database
#[allow(async_fn_in_trait)]
pub trait Update {
    async fn update(&mut self, transaction: &mut Transaction<'_, Sqlite>) -> Result<(), CrudError>;
}

/// All errors that could occur when running CRUD operations
#[derive(Debug, Error, Clone, Hash, PartialEq, Eq)]
pub enum CrudError {
    #[error("The ID field is not set")]
    IdNotSet,

    #[error("The ID is not in the database")]
    IdNotInDb,

    #[error("The name is not in the database")]
    NameNotInDb,

    #[error("The person's name ('{0}') is already in use")]
    PersonNameAlreadyInUse(Name),

    #[error("The client's name ('{0}') is already in use")]
    ClientNameAlreadyInUse(Name),

    #[error("The project's name ('{0}') is already in use for that client")]
    ProjectNameAlreadyInUse(Name),

    #[error("Not unique in the database: {0}")]
    NotUniqueInDb(String),

    #[error("A stored date could not be parsed")]
    Date,

    #[error("A stored assignment is invalid")]
    Assignment,

    #[error("SQLx database error: {0}")]
    SqlxDbError(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("JSON error: {0}")]
    Json(String),
}

impl From<sqlx::Error> for CrudError {
    fn from(value: sqlx::Error) -> Self {
        if let Some(db_err) = value.as_database_error() {
            if db_err.is_unique_violation() {
                return CrudError::NotUniqueInDb(db_err.message().to_string());
            }
        }

        Self::SqlxDbError(value.to_string())
    }
}

impl From<std::io::Error> for CrudError {
    fn from(value: std::io::Error) -> Self {
        CrudError::Io(value.to_string())
    }
}

impl From<serde_json::Error> for CrudError {
    fn from(value: serde_json::Error) -> Self {
        CrudError::Json(value.to_string())
    }
}
