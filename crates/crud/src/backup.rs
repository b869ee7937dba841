// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Backup & restore the whole planner database to & from JSON
//!
//! One JSON file per table (`people.json`, `clients.json`, `projects.json`,
//! `assignments.json`).  Restoring clears the database first and then merges
//! the files back in; merging updates rows whose IDs already exist and
//! creates the rest, so a restore into a half-populated database is safe.
//!

use crate::crud::{Create, CrudError, FetchAll, Update};
use log::warn;
use resource_planner_core::{Assignment, Client, HasId, Person, Project};
use serde::Serialize;
use serde::de::DeserializeOwned;
use sqlx::{Sqlite, Transaction};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when backing up or restoring planner databases
#[derive(Debug, Error)]
pub enum BackupRestoreError {
    /// A CRUD error occurred
    #[error(transparent)]
    CrudError(#[from] CrudError),

    /// An error occurred when working with the backup dir or files
    #[error(transparent)]
    StdIo(#[from] std::io::Error),

    /// A database error occurred in this module (database errors elsewhere
    /// will be returned as a `CrudError`)
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    /// A JSON error occurred (most likely when reading a JSON file)
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

/// Backup the database to JSON files in `backup_dir_path`
pub async fn backup(
    transaction: &mut Transaction<'_, Sqlite>,
    backup_dir_path: PathBuf,
) -> Result<(), BackupRestoreError> {
    backup_collection::<Person>(transaction, &backup_dir_path, "people.json").await?;
    backup_collection::<Client>(transaction, &backup_dir_path, "clients.json").await?;
    backup_collection::<Project>(transaction, &backup_dir_path, "projects.json").await?;
    backup_collection::<Assignment>(transaction, &backup_dir_path, "assignments.json").await?;
    Ok(())
}

/// Restore the database from JSON files in `restore_dir_path`.  The existing
/// contents are cleared first.
pub async fn restore(
    transaction: &mut Transaction<'_, Sqlite>,
    restore_dir_path: PathBuf,
) -> Result<(), BackupRestoreError> {
    clear_db(transaction).await?;

    // People and clients before projects, projects before assignments
    merge_collection::<Person>(transaction, &restore_dir_path, "people.json").await?;
    merge_collection::<Client>(transaction, &restore_dir_path, "clients.json").await?;
    merge_collection::<Project>(transaction, &restore_dir_path, "projects.json").await?;
    merge_collection::<Assignment>(transaction, &restore_dir_path, "assignments.json").await?;
    Ok(())
}

/// Clear the database
pub async fn clear_db(transaction: &mut Transaction<'_, Sqlite>) -> Result<(), BackupRestoreError> {
    // Order matters because of the FOREIGN KEY relationships
    for table in ["assignments", "projects", "clients", "people"] {
        sqlx::query(&format!("DELETE FROM {table}"))
            .execute(&mut **transaction)
            .await?;
    }
    Ok(())
}

/// Fetch one table and write it to a JSON file
async fn backup_collection<T>(
    transaction: &mut Transaction<'_, Sqlite>,
    backup_dir: &Path,
    file_name: &str,
) -> Result<(), BackupRestoreError>
where
    Vec<T>: FetchAll,
    T: Serialize,
{
    let collection = Vec::<T>::fetch_all(transaction).await?;
    let json = serde_json::to_string_pretty(&collection)?;
    create_and_write_to_file(&backup_dir.join(file_name), json)?;
    Ok(())
}

/// Merge one JSON file into its table.
///
/// Every row to be merged in must have an ID, else an error is returned.  If
/// the ID is already in the database the existing row is replaced by the
/// incoming one, otherwise the incoming row is inserted.
async fn merge_collection<T>(
    transaction: &mut Transaction<'_, Sqlite>,
    backup_dir: &Path,
    file_name: &str,
) -> Result<(), BackupRestoreError>
where
    T: DeserializeOwned + HasId + Create + Update,
{
    let path = backup_dir.join(file_name);
    if !path.exists() {
        warn!("Nothing to restore: {path:?} is missing");
        return Ok(());
    }

    let reader = BufReader::new(File::open(&path)?);
    let collection: Vec<T> = serde_json::from_reader(reader)?;

    for mut item in collection {
        if item.id().is_none() {
            return Err(CrudError::IdNotSet.into());
        }

        // Replace the row if the ID already exists, insert it otherwise
        match item.update(transaction).await {
            Ok(()) => (),
            Err(CrudError::IdNotInDb) => item.create(transaction).await?,
            Err(error) => return Err(error.into()),
        }
    }
    Ok(())
}

/// Write a string to file at some path
fn create_and_write_to_file(path: &Path, content: String) -> Result<(), BackupRestoreError> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
