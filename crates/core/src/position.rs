// SPDX-License-Identifier: MIT

//!
//! Partial-month positioning
//!
//! Maps a segment's dates onto a month column as percentage offset and width,
//! so a card for Jan 15–31 starts roughly halfway across the January cell.
//! Purely presentational: the minimum-width floor below changes what is
//! rendered, never what is stored.
//!

use crate::{DateRange, Period};
use serde::Serialize;

/// Narrowest a rendered segment may be, as a percentage of its month column.
/// A 1-day segment in a 31-day month would otherwise be ~3% wide and
/// unclickable.
pub const MIN_WIDTH_PERCENT: f64 = 15.0;

/// Where a segment sits inside its month column.  `offset_percent` and
/// `width_percent` are both in `[0, 100]` and their sum never exceeds 100.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SegmentPosition {
    pub offset_percent: f64,
    pub width_percent: f64,
}

/// Compute the position of `range` within `period`'s month column, or `None`
/// if the range does not touch that month at all.
pub fn position_in_period(range: &DateRange, period: &Period) -> Option<SegmentPosition> {
    let clamped = range.clamp_to(&period.range())?;

    let days_in_month = period.end_date().day().value() as f64;
    let start_day = clamped.start().day().value();
    let end_day = clamped.end().day().value();
    let days_covered = (end_day - start_day + 1) as f64;

    let mut offset_percent = (start_day as f64 - 1.0) / days_in_month * 100.0;
    let mut width_percent = days_covered / days_in_month * 100.0;

    if width_percent < MIN_WIDTH_PERCENT {
        width_percent = MIN_WIDTH_PERCENT;
        // Keep the widened block inside its row
        if offset_percent + width_percent > 100.0 {
            offset_percent = 100.0 - width_percent;
        }
    }

    Some(SegmentPosition {
        offset_percent,
        width_percent,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{CalendarDate, DEFAULT_ANCHOR_YEAR};

    fn range(start: &str, end: &str) -> DateRange {
        DateRange::from(
            CalendarDate::parse(start).unwrap(),
            CalendarDate::parse(end).unwrap(),
        )
        .unwrap()
    }

    fn month(offset: i32) -> Period {
        Period::from_offset(offset, DEFAULT_ANCHOR_YEAR).unwrap()
    }

    #[test]
    fn full_month() {
        let january = month(0);
        let position = position_in_period(&range("2026-01-01", "2026-01-31"), &january).unwrap();
        assert_eq!(position.offset_percent, 0.0);
        assert_eq!(position.width_percent, 100.0);
    }

    #[test]
    fn second_half_of_month() {
        // Jan 16–31 of a 31-day month: offset 15/31, width 16/31
        let january = month(0);
        let position = position_in_period(&range("2026-01-16", "2026-01-31"), &january).unwrap();
        assert!((position.offset_percent - 15.0 / 31.0 * 100.0).abs() < 1e-9);
        assert!((position.width_percent - 16.0 / 31.0 * 100.0).abs() < 1e-9);
        assert!(position.offset_percent + position.width_percent <= 100.0 + 1e-9);
    }

    #[test]
    fn multi_month_range_is_clamped() {
        // Only the February slice of a Jan–Mar assignment lands in February
        let february = month(1);
        let position = position_in_period(&range("2026-01-15", "2026-03-20"), &february).unwrap();
        assert_eq!(position.offset_percent, 0.0);
        assert_eq!(position.width_percent, 100.0);
    }

    #[test]
    fn one_day_gets_the_minimum_width() {
        // 1 day of a 30-day month would be ~3.3% wide
        let june = month(5);
        let position = position_in_period(&range("2026-06-10", "2026-06-10"), &june).unwrap();
        assert_eq!(position.width_percent, MIN_WIDTH_PERCENT);
    }

    #[test]
    fn floor_never_overflows_the_row() {
        // Wherever a 1-day segment falls, offset + width stays inside 100
        let june = month(5);
        for day in 1..=30 {
            let date = CalendarDate::from(2026, 6, day).unwrap();
            let position =
                position_in_period(&DateRange::from(date, date).unwrap(), &june).unwrap();
            assert!(
                position.offset_percent + position.width_percent <= 100.0 + 1e-9,
                "overflow on day {day}"
            );
            assert!(position.offset_percent >= 0.0);
        }

        // The last day of the month forces the shift
        let position = position_in_period(&range("2026-06-30", "2026-06-30"), &june).unwrap();
        assert_eq!(position.width_percent, MIN_WIDTH_PERCENT);
        assert_eq!(position.offset_percent, 100.0 - MIN_WIDTH_PERCENT);
    }

    #[test]
    fn disjoint_range_has_no_position() {
        let june = month(5);
        assert!(position_in_period(&range("2026-01-01", "2026-01-31"), &june).is_none());
    }
}
