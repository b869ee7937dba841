// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! All CRUD functionality for individual [`Assignment`] segments
//!
//! A new user-entered assignment goes through [`create_segments`], which
//! splits it into one record per calendar month before anything is written.
//! Updates touch exactly one stored segment and never re-split.
//!

use crate::crud::common::*;
use async_trait::async_trait;
use log::info;
use resource_planner_core::{
    Assignment, CalendarDate, DateRange, HasId, Percentage, PlannerId, split_by_month,
};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, Sqlite, Transaction};

impl Create for Assignment {
    /// Create a single [`Assignment`] segment in the database.  Callers
    /// persisting fresh user input almost always want [`create_segments`]
    /// instead.
    async fn create(&mut self, transaction: &mut Transaction<'_, Sqlite>) -> Result<(), CrudError> {
        if self.id().is_none() {
            self.set_id(PlannerId::new());
        }

        let assignment_id = self.id().ok_or(CrudError::IdNotSet)?;

        sqlx::query(
            r#"
                INSERT INTO assignments
                (
                    id,
                    person_id,
                    project_id,
                    start_date,
                    end_date,
                    percentage
                )
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(assignment_id)
        .bind(self.person_id())
        .bind(self.project_id())
        .bind(self.start_date().to_string())
        .bind(self.end_date().to_string())
        .bind(self.percentage())
        .execute(&mut **transaction)
        .await?;

        Ok(())
    }
}

impl FetchById for Assignment {
    async fn fetch_by_id(
        transaction: &mut Transaction<'_, Sqlite>,
        id: &PlannerId,
    ) -> Result<Assignment, CrudError> {
        let row = sqlx::query(
            r#"
                SELECT id, person_id, project_id, start_date, end_date, percentage
                FROM assignments
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&mut **transaction)
        .await?
        .ok_or(CrudError::IdNotInDb)?;

        assignment_from_row(&row)
    }
}

#[async_trait]
impl FetchAll for Vec<Assignment> {
    async fn fetch_all(transaction: &mut Transaction<'_, Sqlite>) -> Result<Self, CrudError> {
        sqlx::query(
            r#"
                SELECT id, person_id, project_id, start_date, end_date, percentage
                FROM assignments
                ORDER BY start_date
            "#,
        )
        .fetch_all(&mut **transaction)
        .await?
        .iter()
        .map(assignment_from_row)
        .collect()
    }
}

impl Update for Assignment {
    /// Update one stored segment in place.  Editing never re-splits: the
    /// caller's dates are written as-is.
    async fn update(&mut self, transaction: &mut Transaction<'_, Sqlite>) -> Result<(), CrudError> {
        let assignment_id = self.id().ok_or(CrudError::IdNotSet)?;

        let result = sqlx::query(
            r#"
                UPDATE assignments
                SET
                    person_id = ?,
                    project_id = ?,
                    start_date = ?,
                    end_date = ?,
                    percentage = ?
                WHERE id = ?
            "#,
        )
        .bind(self.person_id())
        .bind(self.project_id())
        .bind(self.start_date().to_string())
        .bind(self.end_date().to_string())
        .bind(self.percentage())
        .bind(assignment_id)
        .execute(&mut **transaction)
        .await?;

        if result.rows_affected() != 1 {
            return Err(CrudError::IdNotInDb);
        }

        Ok(())
    }
}

impl DeleteById for Assignment {
    async fn delete_by_id(
        transaction: &mut Transaction<'_, Sqlite>,
        id: &PlannerId,
    ) -> Result<(), CrudError> {
        sqlx::query(
            r#"
                DELETE FROM assignments
                WHERE id = ?
            "#,
        )
        .bind(id)
        .execute(&mut **transaction)
        .await?;

        Ok(())
    }
}

/// Split a new assignment into per-month segments and persist each one as an
/// independent record.  Returns the created segments, IDs set, in
/// chronological order.
pub async fn create_segments(
    transaction: &mut Transaction<'_, Sqlite>,
    assignment: &Assignment,
) -> Result<Vec<Assignment>, CrudError> {
    let mut segments = split_by_month(assignment);
    for segment in &mut segments {
        segment.create(transaction).await?;
    }
    info!(
        "Created {} segment(s) for person {}",
        segments.len(),
        assignment.person_id()
    );
    Ok(segments)
}

/// Fetch all assignment segments for one person (the overlap engine's input)
pub async fn fetch_assignments_for_person(
    transaction: &mut Transaction<'_, Sqlite>,
    person_id: &PlannerId,
) -> Result<Vec<Assignment>, CrudError> {
    sqlx::query(
        r#"
            SELECT id, person_id, project_id, start_date, end_date, percentage
            FROM assignments
            WHERE person_id = ?
            ORDER BY start_date
        "#,
    )
    .bind(person_id)
    .fetch_all(&mut **transaction)
    .await?
    .iter()
    .map(assignment_from_row)
    .collect()
}

/// Find a stored segment with exactly this person, project and date range.
/// The bulk-upload path uses this as its upsert key: a match is updated
/// rather than duplicated.
pub async fn find_matching_assignment(
    transaction: &mut Transaction<'_, Sqlite>,
    person_id: &PlannerId,
    project_id: &PlannerId,
    range: &DateRange,
) -> Result<Option<PlannerId>, CrudError> {
    Ok(sqlx::query(
        r#"
            SELECT id
            FROM assignments
            WHERE person_id = ?
              AND project_id = ?
              AND start_date = ?
              AND end_date = ?
        "#,
    )
    .bind(person_id)
    .bind(project_id)
    .bind(range.start().to_string())
    .bind(range.end().to_string())
    .fetch_optional(&mut **transaction)
    .await?
    .map(|row| row.get::<PlannerId, _>("id")))
}

/// Delete all of a person's assignment segments
pub(crate) async fn delete_assignments_for_person(
    transaction: &mut Transaction<'_, Sqlite>,
    person_id: &PlannerId,
) -> Result<(), CrudError> {
    sqlx::query(
        r#"
            DELETE FROM assignments
            WHERE person_id = ?
        "#,
    )
    .bind(person_id)
    .execute(&mut **transaction)
    .await?;
    Ok(())
}

/// Delete all of a project's assignment segments
pub(crate) async fn delete_assignments_for_project(
    transaction: &mut Transaction<'_, Sqlite>,
    project_id: &PlannerId,
) -> Result<(), CrudError> {
    sqlx::query(
        r#"
            DELETE FROM assignments
            WHERE project_id = ?
        "#,
    )
    .bind(project_id)
    .execute(&mut **transaction)
    .await?;
    Ok(())
}

/// Rebuild an [`Assignment`] from a database row.  The stored dates go back
/// through the strict parser; a row that fails it is corrupt.
fn assignment_from_row(row: &SqliteRow) -> Result<Assignment, CrudError> {
    let start_date = CalendarDate::parse(&row.get::<String, _>("start_date"))
        .map_err(|_| CrudError::Date)?;
    let end_date =
        CalendarDate::parse(&row.get::<String, _>("end_date")).map_err(|_| CrudError::Date)?;

    Assignment::from(
        Some(row.get::<PlannerId, _>("id")),
        row.get::<PlannerId, _>("person_id"),
        row.get::<PlannerId, _>("project_id"),
        start_date,
        end_date,
        row.get::<Percentage, _>("percentage"),
    )
    .map_err(|_| CrudError::Assignment)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::DatabaseRowCount;
    use crate::test::*;
    use resource_planner_core::{AllocationLevel, find_overlapping, total_allocation};
    use sqlx::Pool;

    mod create {
        use super::*;

        #[sqlx::test]
        async fn single_segment(pool: Pool<Sqlite>) {
            let mut transaction = pool.begin().await.unwrap();

            let (person, _client, project) = seed_directory(&mut transaction).await;
            let mut segment = valid_assignment(&person, &project, "2026-02-01", "2026-02-28", 50);
            assert!(segment.create(&mut transaction).await.is_ok());
            assert!(segment.id().is_some());

            let row_counts = DatabaseRowCount::all(&mut transaction).await.unwrap();
            assert_eq!(row_counts.assignments, 1);
        }

        // A multi-month assignment is stored as one row per month touched
        #[sqlx::test]
        async fn splits_into_month_segments(pool: Pool<Sqlite>) {
            let mut transaction = pool.begin().await.unwrap();

            let (person, _client, project) = seed_directory(&mut transaction).await;
            let assignment =
                valid_assignment(&person, &project, "2026-01-15", "2026-03-20", 50);

            let segments = create_segments(&mut transaction, &assignment).await.unwrap();
            assert_eq!(segments.len(), 3);
            assert_eq!(segments[0].end_date().to_string(), "2026-01-31");
            assert_eq!(segments[1].start_date().to_string(), "2026-02-01");
            assert_eq!(segments[2].end_date().to_string(), "2026-03-20");
            for segment in &segments {
                assert!(segment.id().is_some());
            }

            let row_counts = DatabaseRowCount::all(&mut transaction).await.unwrap();
            assert_eq!(row_counts.assignments, 3);
        }
    }

    mod fetch {
        use super::*;

        #[sqlx::test]
        async fn round_trips_through_storage(pool: Pool<Sqlite>) {
            let mut transaction = pool.begin().await.unwrap();

            let (person, _client, project) = seed_directory(&mut transaction).await;
            let mut segment = valid_assignment(&person, &project, "2026-02-10", "2026-02-20", 60);
            segment.create(&mut transaction).await.unwrap();

            let fetched = Assignment::fetch_by_id(&mut transaction, &segment.id().unwrap())
                .await
                .unwrap();
            assert_eq!(fetched, segment);
        }

        #[sqlx::test]
        async fn for_person_only(pool: Pool<Sqlite>) {
            let mut transaction = pool.begin().await.unwrap();

            let (person, _client, project) = seed_directory(&mut transaction).await;
            let mut other_person = valid_other_person();
            other_person.create(&mut transaction).await.unwrap();

            let mut mine = valid_assignment(&person, &project, "2026-02-01", "2026-02-28", 50);
            mine.create(&mut transaction).await.unwrap();
            let mut theirs =
                valid_assignment(&other_person, &project, "2026-02-01", "2026-02-28", 80);
            theirs.create(&mut transaction).await.unwrap();

            let fetched =
                fetch_assignments_for_person(&mut transaction, &person.id().unwrap())
                    .await
                    .unwrap();
            assert_eq!(fetched.len(), 1);
            assert_eq!(fetched[0], mine);
        }
    }

    mod update {
        use super::*;

        #[sqlx::test]
        async fn edits_one_segment_without_resplitting(pool: Pool<Sqlite>) {
            let mut transaction = pool.begin().await.unwrap();

            let (person, _client, project) = seed_directory(&mut transaction).await;
            let assignment =
                valid_assignment(&person, &project, "2026-01-15", "2026-03-20", 50);
            let segments = create_segments(&mut transaction, &assignment).await.unwrap();

            // Change one segment's percentage
            let mut edited = valid_assignment(&person, &project, "2026-02-01", "2026-02-28", 80);
            edited.set_id(segments[1].id().unwrap());
            edited.update(&mut transaction).await.unwrap();

            // Still 3 rows, and only the edited one changed
            let all = Vec::<Assignment>::fetch_all(&mut transaction).await.unwrap();
            assert_eq!(all.len(), 3);
            assert_eq!(all[0], segments[0]);
            assert_eq!(all[1].percentage().value(), 80);
            assert_eq!(all[2], segments[2]);
        }

        #[sqlx::test]
        async fn id_not_set(pool: Pool<Sqlite>) {
            let mut transaction = pool.begin().await.unwrap();

            let (person, _client, project) = seed_directory(&mut transaction).await;
            let mut segment = valid_assignment(&person, &project, "2026-02-01", "2026-02-28", 50);
            assert_eq!(
                segment.update(&mut transaction).await,
                Err(CrudError::IdNotSet)
            );
        }
    }

    mod delete {
        use super::*;

        #[sqlx::test]
        async fn removes_one_segment(pool: Pool<Sqlite>) {
            let mut transaction = pool.begin().await.unwrap();

            let (person, _client, project) = seed_directory(&mut transaction).await;
            let assignment =
                valid_assignment(&person, &project, "2026-01-15", "2026-03-20", 50);
            let segments = create_segments(&mut transaction, &assignment).await.unwrap();

            Assignment::delete_by_id(&mut transaction, &segments[0].id().unwrap())
                .await
                .unwrap();

            let row_counts = DatabaseRowCount::all(&mut transaction).await.unwrap();
            assert_eq!(row_counts.assignments, 2);
        }
    }

    mod upsert {
        use super::*;

        #[sqlx::test]
        async fn matches_on_person_project_and_dates(pool: Pool<Sqlite>) {
            let mut transaction = pool.begin().await.unwrap();

            let (person, _client, project) = seed_directory(&mut transaction).await;
            let mut segment = valid_assignment(&person, &project, "2026-02-01", "2026-02-28", 50);
            segment.create(&mut transaction).await.unwrap();

            let found = find_matching_assignment(
                &mut transaction,
                &person.id().unwrap(),
                &project.id().unwrap(),
                &segment.range(),
            )
            .await
            .unwrap();
            assert_eq!(found, segment.id());

            // A different range is not a match
            let other = valid_assignment(&person, &project, "2026-02-01", "2026-02-27", 50);
            let found = find_matching_assignment(
                &mut transaction,
                &person.id().unwrap(),
                &project.id().unwrap(),
                &other.range(),
            )
            .await
            .unwrap();
            assert!(found.is_none());
        }
    }

    // The full warning path: an existing February segment at 50%, a candidate
    // at 60%, and the planner reports 110 / over without blocking anything.
    #[sqlx::test]
    async fn over_allocation_is_reported_not_blocked(pool: Pool<Sqlite>) {
        let mut transaction = pool.begin().await.unwrap();

        let (person, _client, project) = seed_directory(&mut transaction).await;
        let mut existing = valid_assignment(&person, &project, "2026-02-01", "2026-02-28", 50);
        existing.create(&mut transaction).await.unwrap();

        let candidate = valid_assignment(&person, &project, "2026-02-10", "2026-02-20", 60);

        let person_id = person.id().unwrap();
        let stored = fetch_assignments_for_person(&mut transaction, &person_id)
            .await
            .unwrap();
        let overlapping = find_overlapping(&stored, person_id, &candidate.range(), None);
        let total = total_allocation(&overlapping, candidate.percentage());

        assert_eq!(total, 110);
        assert_eq!(AllocationLevel::classify(total), AllocationLevel::Over);

        // The save still goes through
        let created = create_segments(&mut transaction, &candidate).await.unwrap();
        assert_eq!(created.len(), 1);

        let row_counts = DatabaseRowCount::all(&mut transaction).await.unwrap();
        assert_eq!(row_counts.assignments, 2);
    }
}
