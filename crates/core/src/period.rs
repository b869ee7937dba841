// SPDX-License-Identifier: MIT

//!
//! Calendar-month periods
//!
//! The timeline and the reports address months by an integer offset from
//! January of an anchor year: offset 0 is January of the anchor year, offset
//! 1 is February, offset -1 is December of the year before.  Adjacent periods
//! are contiguous: no day belongs to two periods and no day is skipped.  The
//! month splitter and the allocation aggregator both rely on that.
//!

use crate::{CalendarDate, DateError, DateRange, Month, Year};
use serde::Serialize;

/// The anchor year the planner counts month offsets from (offset 0 is January
/// of this year)
pub const DEFAULT_ANCHOR_YEAR: i32 = 2026;

/// One calendar month, addressed by offset from an anchor year
#[derive(Serialize, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub struct Period {
    offset: i32,
    year: Year,
    month: Month,
}

impl Period {
    /// The period `offset` months after January of `anchor_year`.  Negative
    /// offsets address months before the anchor: offset -1 from 2026 is
    /// December 2025, not December 2026.
    pub fn from_offset(offset: i32, anchor_year: i32) -> Result<Period, DateError> {
        let year = anchor_year as i64 + (offset as i64).div_euclid(12);
        let month = (offset as i64).rem_euclid(12) + 1;
        Ok(Period {
            offset,
            year: Year::try_from(year)?,
            month: Month::try_from(month)?,
        })
    }

    /// The period that contains the given date
    pub fn containing(date: &CalendarDate, anchor_year: i32) -> Period {
        Period {
            offset: Period::offset_for_date(date, anchor_year),
            year: date.year(),
            month: date.month(),
        }
    }

    /// The offset of the month containing `date`, counted from January of
    /// `anchor_year`.  Inverse of [`Period::from_offset`] at month
    /// granularity.
    pub fn offset_for_date(date: &CalendarDate, anchor_year: i32) -> i32 {
        (date.year().value() - anchor_year) * 12 + (date.month().value() as i32 - 1)
    }

    /// Get the period's offset
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Get the period's year
    pub fn year(&self) -> Year {
        self.year
    }

    /// Get the period's month
    pub fn month(&self) -> Month {
        self.month
    }

    /// The first day of the month
    pub fn start_date(&self) -> CalendarDate {
        CalendarDate::from_valid(self.year, self.month, 1)
    }

    /// The last day of the month (28, 29, 30 or 31, leap-year aware)
    pub fn end_date(&self) -> CalendarDate {
        CalendarDate::from_valid(self.year, self.month, self.month.days_in(self.year))
    }

    /// The month as a closed [`DateRange`]
    pub fn range(&self) -> DateRange {
        DateRange::from_ordered(self.start_date(), self.end_date())
    }

    /// Human label for column headers, e.g. `Jan 2026`
    pub fn label(&self) -> String {
        format!("{} {}", self.month.short_name(), self.year)
    }

    /// The period immediately after this one
    pub fn next(&self) -> Result<Period, DateError> {
        let anchor_year = self.year.value() - (self.offset.div_euclid(12));
        Period::from_offset(self.offset + 1, anchor_year)
    }
}
