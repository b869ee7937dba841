// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! All CRUD functionality for individual [`Client`]s
//!

use crate::crud::assignment::delete_assignments_for_project;
use crate::crud::common::*;
use async_trait::async_trait;
use resource_planner_core::{Client, HasId, Name, PlannerId};
use sqlx::{Row, Sqlite, Transaction};

impl Create for Client {
    /// Create a [`Client`] in the database
    async fn create(&mut self, transaction: &mut Transaction<'_, Sqlite>) -> Result<(), CrudError> {
        if self.id().is_none() {
            self.set_id(PlannerId::new());
        }

        let client_id = self.id().ok_or(CrudError::IdNotSet)?;
        let client_name = self.name().clone();

        sqlx::query(
            r#"
                INSERT INTO clients (id, name)
                VALUES (?, ?)
            "#,
        )
        .bind(client_id)
        .bind(self.name())
        .execute(&mut **transaction)
        .await
        .map_err(|error| {
            if let Some(db_err) = error.as_database_error() {
                if db_err.is_unique_violation() {
                    return CrudError::ClientNameAlreadyInUse(client_name.clone());
                }
            }
            error.into()
        })?;

        Ok(())
    }
}

impl FetchById for Client {
    async fn fetch_by_id(
        transaction: &mut Transaction<'_, Sqlite>,
        id: &PlannerId,
    ) -> Result<Client, CrudError> {
        let row = sqlx::query(
            r#"
                SELECT id, name
                FROM clients
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&mut **transaction)
        .await?
        .ok_or(CrudError::IdNotInDb)?;

        Ok(Client::new(
            Some(row.get::<PlannerId, _>("id")),
            row.get::<Name, _>("name"),
        ))
    }
}

#[async_trait]
impl FetchAll for Vec<Client> {
    async fn fetch_all(transaction: &mut Transaction<'_, Sqlite>) -> Result<Self, CrudError> {
        Ok(sqlx::query(
            r#"
                SELECT id, name
                FROM clients
                ORDER BY name
            "#,
        )
        .fetch_all(&mut **transaction)
        .await?
        .into_iter()
        .map(|row| {
            Client::new(
                Some(row.get::<PlannerId, _>("id")),
                row.get::<Name, _>("name"),
            )
        })
        .collect())
    }
}

impl Update for Client {
    async fn update(&mut self, transaction: &mut Transaction<'_, Sqlite>) -> Result<(), CrudError> {
        let client_id = self.id().ok_or(CrudError::IdNotSet)?;
        let client_name = self.name().clone();

        let result = sqlx::query(
            r#"
                UPDATE clients
                SET name = ?
                WHERE id = ?
            "#,
        )
        .bind(self.name())
        .bind(client_id)
        .execute(&mut **transaction)
        .await
        .map_err(|error| {
            if let Some(db_err) = error.as_database_error() {
                if db_err.is_unique_violation() {
                    return CrudError::ClientNameAlreadyInUse(client_name.clone());
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

impl DeleteById for Client {
    /// Delete a client and, transitively, its projects and their assignment
    /// segments
    async fn delete_by_id(
        transaction: &mut Transaction<'_, Sqlite>,
        id: &PlannerId,
    ) -> Result<(), CrudError> {
        // Collect the client's project IDs before removing anything
        let project_ids: Vec<PlannerId> = sqlx::query(
            r#"
                SELECT id
                FROM projects
                WHERE client_id = ?
            "#,
        )
        .bind(id)
        .fetch_all(&mut **transaction)
        .await?
        .into_iter()
        .map(|row| row.get::<PlannerId, _>("id"))
        .collect();

        // Assignments, then projects, then the client itself
        for project_id in &project_ids {
            delete_assignments_for_project(transaction, project_id).await?;
        }

        sqlx::query(
            r#"
                DELETE FROM projects
                WHERE client_id = ?
            "#,
        )
        .bind(id)
        .execute(&mut **transaction)
        .await?;

        sqlx::query(
            r#"
                DELETE FROM clients
                WHERE id = ?
            "#,
        )
        .bind(id)
        .execute(&mut **transaction)
        .await?;

        Ok(())
    }
}

/// Fetch the client's ID from the database using its name (case-insensitive,
/// as the bulk-upload path matches names)
pub async fn client_id_from_name(
    transaction: &mut Transaction<'_, Sqlite>,
    name: &str,
) -> Result<Option<PlannerId>, CrudError> {
    Ok(sqlx::query(
        r#"
            SELECT id
            FROM clients
            WHERE LOWER(name) = LOWER(?)
        "#,
    )
    .bind(name)
    .fetch_optional(&mut **transaction)
    .await?
    .map(|row| row.get::<PlannerId, _>("id")))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::DatabaseRowCount;
    use crate::test::*;
    use sqlx::Pool;

    #[sqlx::test]
    async fn create_and_fetch(pool: Pool<Sqlite>) {
        let mut transaction = pool.begin().await.unwrap();

        let mut client = valid_client();
        assert!(client.create(&mut transaction).await.is_ok());

        let fetched = Client::fetch_by_id(&mut transaction, &client.id().unwrap())
            .await
            .unwrap();
        assert_eq!(fetched, client);

        let id = client_id_from_name(&mut transaction, "acme corp")
            .await
            .unwrap();
        assert_eq!(id, client.id());
    }

    #[sqlx::test]
    async fn name_already_exists(pool: Pool<Sqlite>) {
        let mut transaction = pool.begin().await.unwrap();

        let mut client = valid_client();
        client.create(&mut transaction).await.unwrap();

        let mut duplicate = client.clone();
        duplicate.clear_id();
        assert!(matches!(
            duplicate.create(&mut transaction).await,
            Err(CrudError::ClientNameAlreadyInUse(_))
        ));
    }

    #[sqlx::test]
    async fn update_name(pool: Pool<Sqlite>) {
        let mut transaction = pool.begin().await.unwrap();

        let mut client = valid_client();
        client.create(&mut transaction).await.unwrap();

        client.set_name(Name::from("Globex").unwrap());
        assert!(client.update(&mut transaction).await.is_ok());

        let fetched = Client::fetch_by_id(&mut transaction, &client.id().unwrap())
            .await
            .unwrap();
        assert_eq!(fetched.name().as_str(), "Globex");
    }

    // Deleting a client takes its projects and their assignments with it
    #[sqlx::test]
    async fn delete_cascades_to_projects_and_assignments(pool: Pool<Sqlite>) {
        let mut transaction = pool.begin().await.unwrap();

        let (person, client, project) = seed_directory(&mut transaction).await;
        let mut segment = valid_assignment(&person, &project, "2026-02-01", "2026-02-28", 50);
        segment.create(&mut transaction).await.unwrap();

        Client::delete_by_id(&mut transaction, &client.id().unwrap())
            .await
            .unwrap();

        let row_counts = DatabaseRowCount::all(&mut transaction).await.unwrap();
        assert_eq!(row_counts.clients, 0);
        assert_eq!(row_counts.projects, 0);
        assert_eq!(row_counts.assignments, 0);

        // The person is untouched
        assert_eq!(row_counts.people, 1);
    }
}
