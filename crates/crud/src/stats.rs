// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Stats
//!

use crate::CrudError;
use sqlx::Row;
use sqlx::Sqlite;
use sqlx::Transaction;

/// Each variant maps to a table in the database
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum Table {
    /// Represents the `people` table
    People,

    /// Represents the `clients` table
    Clients,

    /// Represents the `projects` table
    Projects,

    /// Represents the `assignments` table
    Assignments,
}

/// Holds database row counts
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct DatabaseRowCount {
    /// The number of rows in the `people` table
    pub people: i64,

    /// The number of rows in the `clients` table
    pub clients: i64,

    /// The number of rows in the `projects` table
    pub projects: i64,

    /// The number of rows in the `assignments` table
    pub assignments: i64,
}

impl DatabaseRowCount {
    /// Fetch the row count for all tables in the database
    pub async fn all(transaction: &mut Transaction<'_, Sqlite>) -> Result<Self, CrudError> {
        Ok(Self {
            people: Self::table(transaction, Table::People).await?,
            clients: Self::table(transaction, Table::Clients).await?,
            projects: Self::table(transaction, Table::Projects).await?,
            assignments: Self::table(transaction, Table::Assignments).await?,
        })
    }

    /// Get the row count for a specific table in the database
    pub async fn table(
        transaction: &mut Transaction<'_, Sqlite>,
        table_name: Table,
    ) -> Result<i64, CrudError> {
        let table_name = match table_name {
            Table::People => "people",
            Table::Clients => "clients",
            Table::Projects => "projects",
            Table::Assignments => "assignments",
        };

        let row = sqlx::query(&format!("SELECT COUNT(*) AS row_count FROM {table_name}"))
            .fetch_one(&mut **transaction)
            .await?;
        Ok(row.get("row_count"))
    }
}
