// SPDX-License-Identifier: MIT

//!
//! The assignment type
//!
//! An assignment commits a percentage of a person's time to a project over a
//! closed date range.  Once persisted, every stored assignment covers at most
//! one calendar month (see the month splitter); multi-month user input is
//! split before it is saved.
//!

use crate::{CalendarDate, DateRange, HasId, Percentage, PlannerId, RangeError};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors that can arise in relation to an [`Assignment`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssignmentError {
    /// The end date is earlier than the start date
    #[error(transparent)]
    Range(#[from] RangeError),
}

/// A time commitment of one person to one project
#[derive(Serialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// The assignment's ID (`None` until persisted)
    id: Option<PlannerId>,

    /// The person whose time is committed
    person_id: PlannerId,

    /// The project the time is committed to
    project_id: PlannerId,

    /// First committed day
    start_date: CalendarDate,

    /// Last committed day (inclusive)
    end_date: CalendarDate,

    /// How much of the person's time is committed
    percentage: Percentage,
}

impl Assignment {
    /// Create a valid [`Assignment`] if it is possible to do so with the
    /// values passed in.  No partial values escape: an end date before the
    /// start date fails here and nothing is produced.
    pub fn from(
        id: Option<PlannerId>,
        person_id: PlannerId,
        project_id: PlannerId,
        start_date: CalendarDate,
        end_date: CalendarDate,
        percentage: Percentage,
    ) -> Result<Assignment, AssignmentError> {
        // Surface the range check's error rather than reimplementing it
        DateRange::from(start_date, end_date)?;

        Ok(Assignment {
            id,
            person_id,
            project_id,
            start_date,
            end_date,
            percentage,
        })
    }

    /// Get the person the assignment commits time for
    pub fn person_id(&self) -> PlannerId {
        self.person_id
    }

    /// Get the project the assignment commits time to
    pub fn project_id(&self) -> PlannerId {
        self.project_id
    }

    /// Get the assignment's start date
    pub fn start_date(&self) -> CalendarDate {
        self.start_date
    }

    /// Get the assignment's end date
    pub fn end_date(&self) -> CalendarDate {
        self.end_date
    }

    /// Get the assignment's percentage
    pub fn percentage(&self) -> Percentage {
        self.percentage
    }

    /// The assignment's dates as a closed [`DateRange`]
    pub fn range(&self) -> DateRange {
        DateRange::from_ordered(self.start_date, self.end_date)
    }

    /// A copy of this assignment covering only `range`, with no ID.  Used by
    /// the month splitter: each per-month segment is persisted as an
    /// independent record with its own ID.
    pub fn segment_for(&self, range: DateRange) -> Assignment {
        Assignment {
            id: None,
            person_id: self.person_id,
            project_id: self.project_id,
            start_date: range.start(),
            end_date: range.end(),
            percentage: self.percentage,
        }
    }
}

impl HasId for Assignment {
    fn id(&self) -> Option<PlannerId> {
        self.id
    }

    fn set_id(&mut self, id: PlannerId) {
        self.id = Some(id);
    }

    fn clear_id(&mut self) {
        self.id = None;
    }
}

/// Used only by the custom deserialiser (to make it simpler)
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAssignment {
    #[serde(default)]
    id: Option<PlannerId>,
    person_id: PlannerId,
    project_id: PlannerId,
    start_date: CalendarDate,
    end_date: CalendarDate,
    percentage: Percentage,
}

impl<'de> Deserialize<'de> for Assignment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawAssignment::deserialize(deserializer)?;
        Assignment::from(
            raw.id,
            raw.person_id,
            raw.project_id,
            raw.start_date,
            raw.end_date,
            raw.percentage,
        )
        .map_err(serde::de::Error::custom)
    }
}
