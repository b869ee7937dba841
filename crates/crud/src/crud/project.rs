// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! All CRUD functionality for individual [`Project`]s
//!

use crate::crud::assignment::delete_assignments_for_project;
use crate::crud::common::*;
use async_trait::async_trait;
use resource_planner_core::{HasId, Name, PlannerId, Project};
use sqlx::{Row, Sqlite, Transaction};

impl Create for Project {
    /// Create a [`Project`] in the database
    async fn create(&mut self, transaction: &mut Transaction<'_, Sqlite>) -> Result<(), CrudError> {
        if self.id().is_none() {
            self.set_id(PlannerId::new());
        }

        let project_id = self.id().ok_or(CrudError::IdNotSet)?;
        let project_name = self.name().clone();

        sqlx::query(
            r#"
                INSERT INTO projects (id, name, client_id)
                VALUES (?, ?, ?)
            "#,
        )
        .bind(project_id)
        .bind(self.name())
        .bind(self.client_id())
        .execute(&mut **transaction)
        .await
        .map_err(|error| {
            if let Some(db_err) = error.as_database_error() {
                if db_err.is_unique_violation() {
                    return CrudError::ProjectNameAlreadyInUse(project_name.clone());
                }
            }
            error.into()
        })?;

        Ok(())
    }
}

impl FetchById for Project {
    async fn fetch_by_id(
        transaction: &mut Transaction<'_, Sqlite>,
        id: &PlannerId,
    ) -> Result<Project, CrudError> {
        let row = sqlx::query(
            r#"
                SELECT id, name, client_id
                FROM projects
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&mut **transaction)
        .await?
        .ok_or(CrudError::IdNotInDb)?;

        Ok(Project::new(
            Some(row.get::<PlannerId, _>("id")),
            row.get::<Name, _>("name"),
            row.get::<PlannerId, _>("client_id"),
        ))
    }
}

#[async_trait]
impl FetchAll for Vec<Project> {
    async fn fetch_all(transaction: &mut Transaction<'_, Sqlite>) -> Result<Self, CrudError> {
        Ok(sqlx::query(
            r#"
                SELECT id, name, client_id
                FROM projects
                ORDER BY name
            "#,
        )
        .fetch_all(&mut **transaction)
        .await?
        .into_iter()
        .map(|row| {
            Project::new(
                Some(row.get::<PlannerId, _>("id")),
                row.get::<Name, _>("name"),
                row.get::<PlannerId, _>("client_id"),
            )
        })
        .collect())
    }
}

impl Update for Project {
    async fn update(&mut self, transaction: &mut Transaction<'_, Sqlite>) -> Result<(), CrudError> {
        let project_id = self.id().ok_or(CrudError::IdNotSet)?;
        let project_name = self.name().clone();

        let result = sqlx::query(
            r#"
                UPDATE projects
                SET name = ?, client_id = ?
                WHERE id = ?
            "#,
        )
        .bind(self.name())
        .bind(self.client_id())
        .bind(project_id)
        .execute(&mut **transaction)
        .await
        .map_err(|error| {
            if let Some(db_err) = error.as_database_error() {
                if db_err.is_unique_violation() {
                    return CrudError::ProjectNameAlreadyInUse(project_name.clone());
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

impl DeleteById for Project {
    /// Delete a project and its assignment segments
    async fn delete_by_id(
        transaction: &mut Transaction<'_, Sqlite>,
        id: &PlannerId,
    ) -> Result<(), CrudError> {
        // Assignments first
        delete_assignments_for_project(transaction, id).await?;

        sqlx::query(
            r#"
                DELETE FROM projects
                WHERE id = ?
            "#,
        )
        .bind(id)
        .execute(&mut **transaction)
        .await?;

        Ok(())
    }
}

/// Fetch a project's ID using its name and owning client (case-insensitive
/// name match; project names are only unique per client)
pub async fn project_id_from_name_and_client(
    transaction: &mut Transaction<'_, Sqlite>,
    name: &str,
    client_id: &PlannerId,
) -> Result<Option<PlannerId>, CrudError> {
    Ok(sqlx::query(
        r#"
            SELECT id
            FROM projects
            WHERE LOWER(name) = LOWER(?) AND client_id = ?
        "#,
    )
    .bind(name)
    .bind(client_id)
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
    async fn create_fetch_update(pool: Pool<Sqlite>) {
        let mut transaction = pool.begin().await.unwrap();

        let (_person, client, mut project) = seed_directory(&mut transaction).await;

        let fetched = Project::fetch_by_id(&mut transaction, &project.id().unwrap())
            .await
            .unwrap();
        assert_eq!(fetched, project);

        project.set_name(Name::from("Phase Two").unwrap());
        assert!(project.update(&mut transaction).await.is_ok());

        let id = project_id_from_name_and_client(
            &mut transaction,
            "phase two",
            &client.id().unwrap(),
        )
        .await
        .unwrap();
        assert_eq!(id, project.id());
    }

    // The same project name is allowed under different clients but not twice
    // under one
    #[sqlx::test]
    async fn name_unique_per_client(pool: Pool<Sqlite>) {
        let mut transaction = pool.begin().await.unwrap();

        let (_person, client, project) = seed_directory(&mut transaction).await;

        let mut duplicate = Project::new(
            None,
            project.name().clone(),
            client.id().unwrap(),
        );
        assert!(matches!(
            duplicate.create(&mut transaction).await,
            Err(CrudError::ProjectNameAlreadyInUse(_))
        ));

        let mut other_client = valid_other_client();
        other_client.create(&mut transaction).await.unwrap();
        let mut same_name_other_client = Project::new(
            None,
            project.name().clone(),
            other_client.id().unwrap(),
        );
        assert!(
            same_name_other_client
                .create(&mut transaction)
                .await
                .is_ok()
        );
    }

    #[sqlx::test]
    async fn delete_cascades_to_assignments(pool: Pool<Sqlite>) {
        let mut transaction = pool.begin().await.unwrap();

        let (person, _client, project) = seed_directory(&mut transaction).await;
        let mut segment = valid_assignment(&person, &project, "2026-02-01", "2026-02-28", 50);
        segment.create(&mut transaction).await.unwrap();

        Project::delete_by_id(&mut transaction, &project.id().unwrap())
            .await
            .unwrap();

        let row_counts = DatabaseRowCount::all(&mut transaction).await.unwrap();
        assert_eq!(row_counts.projects, 0);
        assert_eq!(row_counts.assignments, 0);
        assert_eq!(row_counts.people, 1);
        assert_eq!(row_counts.clients, 1);
    }
}
