// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! All CRUD functionality for individual [`Person`]s
//!

use crate::crud::assignment::delete_assignments_for_person;
use crate::crud::common::*;
use async_trait::async_trait;
use resource_planner_core::{HasId, Name, Person, PlannerId, Role};
use sqlx::{Row, Sqlite, Transaction};

impl Create for Person {
    /// Create a [`Person`] in the database
    async fn create(&mut self, transaction: &mut Transaction<'_, Sqlite>) -> Result<(), CrudError> {
        if self.id().is_none() {
            self.set_id(PlannerId::new());
        }

        let person_id = self.id().ok_or(CrudError::IdNotSet)?;
        let person_name = self.name().clone();

        sqlx::query(
            r#"
                INSERT INTO people (id, name, role)
                VALUES (?, ?, ?)
            "#,
        )
        .bind(person_id)
        .bind(self.name())
        .bind(self.role())
        .execute(&mut **transaction)
        .await
        .map_err(|error| {
            if let Some(db_err) = error.as_database_error() {
                if db_err.is_unique_violation() {
                    return CrudError::PersonNameAlreadyInUse(person_name.clone());
                }
            }
            error.into()
        })?;

        Ok(())
    }
}

impl FetchById for Person {
    async fn fetch_by_id(
        transaction: &mut Transaction<'_, Sqlite>,
        id: &PlannerId,
    ) -> Result<Person, CrudError> {
        let row = sqlx::query(
            r#"
                SELECT id, name, role
                FROM people
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&mut **transaction)
        .await?
        .ok_or(CrudError::IdNotInDb)?;

        Ok(Person::new(
            Some(row.get::<PlannerId, _>("id")),
            row.get::<Name, _>("name"),
            row.get::<Role, _>("role"),
        ))
    }
}

#[async_trait]
impl FetchAll for Vec<Person> {
    async fn fetch_all(transaction: &mut Transaction<'_, Sqlite>) -> Result<Self, CrudError> {
        Ok(sqlx::query(
            r#"
                SELECT id, name, role
                FROM people
                ORDER BY name
            "#,
        )
        .fetch_all(&mut **transaction)
        .await?
        .into_iter()
        .map(|row| {
            Person::new(
                Some(row.get::<PlannerId, _>("id")),
                row.get::<Name, _>("name"),
                row.get::<Role, _>("role"),
            )
        })
        .collect())
    }
}

impl Update for Person {
    /// Update a Person
    async fn update(&mut self, transaction: &mut Transaction<'_, Sqlite>) -> Result<(), CrudError> {
        let person_id = self.id().ok_or(CrudError::IdNotSet)?;
        let person_name = self.name().clone();

        let result = sqlx::query(
            r#"
                UPDATE people
                SET name = ?, role = ?
                WHERE id = ?
            "#,
        )
        .bind(self.name())
        .bind(self.role())
        .bind(person_id)
        .execute(&mut **transaction)
        .await
        .map_err(|error| {
            if let Some(db_err) = error.as_database_error() {
                if db_err.is_unique_violation() {
                    return CrudError::PersonNameAlreadyInUse(person_name.clone());
                }
            }
            error.into()
        })?;

        if result.rows_affected() != 1 {
            return Err(CrudError::IdNotInDb);
        }

        Ok(())
    }
}

impl DeleteById for Person {
    /// Delete a person and, with them, all of their assignment segments
    async fn delete_by_id(
        transaction: &mut Transaction<'_, Sqlite>,
        id: &PlannerId,
    ) -> Result<(), CrudError> {
        // Assignments first
        delete_assignments_for_person(transaction, id).await?;

        sqlx::query(
            r#"
                DELETE FROM people
                WHERE id = ?
            "#,
        )
        .bind(id)
        .execute(&mut **transaction)
        .await?;

        Ok(())
    }
}

/// Check if the [`PlannerId`] is a person ID in the database
pub async fn is_person_id_in_db(
    transaction: &mut Transaction<'_, Sqlite>,
    possible_person_id: &PlannerId,
) -> Result<bool, CrudError> {
    Ok(sqlx::query(
        r#"
            SELECT COUNT(id) AS count
            FROM people
            WHERE id = ?
        "#,
    )
    .bind(possible_person_id)
    .fetch_one(&mut **transaction)
    .await?
    .get::<i64, _>("count")
        > 0)
}

/// Fetch the person's ID from the database using their name
/// (case-insensitive, as the bulk-upload path matches names)
pub async fn person_id_from_name(
    transaction: &mut Transaction<'_, Sqlite>,
    name: &str,
) -> Result<Option<PlannerId>, CrudError> {
    Ok(sqlx::query(
        r#"
            SELECT id
            FROM people
            WHERE LOWER(name) = LOWER(?)
        "#,
    )
    .bind(name)
    .fetch_optional(&mut **transaction)
    .await?
    .map(|row| row.get::<PlannerId, _>("id")))
}
