// SPDX-License-Identifier: MIT

//!
//! Closed date intervals
//!

use crate::CalendarDate;
use serde::Serialize;
use thiserror::Error;

/// Errors that can arise in relation to a [`DateRange`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// The end date is earlier than the start date
    #[error("End date `{end}` is before start date `{start}`")]
    EndBeforeStart {
        start: CalendarDate,
        end: CalendarDate,
    },
}

/// A closed interval of calendar days: both the start and the end day belong
/// to the range.  `start <= end` always holds.
#[derive(Serialize, PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct DateRange {
    start: CalendarDate,
    end: CalendarDate,
}

impl DateRange {
    /// Create a new [`DateRange`] if the result will be valid
    pub fn from(start: CalendarDate, end: CalendarDate) -> Result<DateRange, RangeError> {
        if end < start {
            return Err(RangeError::EndBeforeStart { start, end });
        }
        Ok(DateRange { start, end })
    }

    /// Internal constructor for endpoints already known to be ordered
    pub(crate) fn from_ordered(start: CalendarDate, end: CalendarDate) -> DateRange {
        debug_assert!(start <= end);
        DateRange { start, end }
    }

    /// Get the range's start date
    pub fn start(&self) -> CalendarDate {
        self.start
    }

    /// Get the range's end date
    pub fn end(&self) -> CalendarDate {
        self.end
    }

    /// Whether the two ranges share at least one day.  The boundaries are
    /// inclusive: a range ending on the day another starts overlaps it.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        !(self.end < other.start || self.start > other.end)
    }

    /// Whether the day falls inside the range (boundaries included)
    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// The intersection of the two ranges, or `None` if they are disjoint
    pub fn clamp_to(&self, other: &DateRange) -> Option<DateRange> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start <= end).then(|| DateRange { start, end })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn range(start: &str, end: &str) -> DateRange {
        DateRange::from(
            CalendarDate::parse(start).unwrap(),
            CalendarDate::parse(end).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn from() {
        let start = CalendarDate::parse("2026-02-10").unwrap();
        let end = CalendarDate::parse("2026-02-01").unwrap();

        // End before start
        assert!(DateRange::from(start, end).is_err());

        // Single-day ranges are fine
        assert!(DateRange::from(start, start).is_ok());
    }

    #[test]
    fn overlaps_is_boundary_inclusive() {
        // Sharing exactly one day counts as an overlap, in both directions
        let first = range("2026-01-01", "2026-01-15");
        let second = range("2026-01-15", "2026-01-31");
        assert!(first.overlaps(&second));
        assert!(second.overlaps(&first));

        // One day apart does not
        let third = range("2026-01-16", "2026-01-31");
        assert!(!first.overlaps(&third));
        assert!(!third.overlaps(&first));

        // Containment is an overlap
        let outer = range("2026-01-01", "2026-03-31");
        let inner = range("2026-02-10", "2026-02-20");
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn clamp_to() {
        let assignment = range("2026-01-15", "2026-03-20");
        let february = range("2026-02-01", "2026-02-28");
        let june = range("2026-06-01", "2026-06-30");

        // Fully covered month
        assert_eq!(assignment.clamp_to(&february), Some(february));

        // Partially covered month
        let january = range("2026-01-01", "2026-01-31");
        assert_eq!(
            assignment.clamp_to(&january),
            Some(range("2026-01-15", "2026-01-31"))
        );

        // Disjoint
        assert_eq!(assignment.clamp_to(&june), None);
    }
}
