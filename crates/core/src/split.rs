// SPDX-License-Identifier: MIT

//!
//! The month splitter
//!
//! A user-entered assignment can span any number of months, but the timeline
//! stores and filters per-month records.  `split_by_month` decomposes an
//! assignment into one segment per calendar month it touches, each clamped to
//! that month's boundaries.  The segments are contiguous and their union is
//! exactly the input range: no gap, no overlap, no day counted twice.
//!
//! Splitting happens once, when a new assignment is created.  Editing an
//! existing segment never re-splits it.
//!

use crate::{Assignment, DEFAULT_ANCHOR_YEAR, Period};

/// Split an assignment into one segment per calendar month it touches,
/// ordered chronologically.  Always returns at least one segment; an
/// assignment contained in a single month comes back as one segment equal to
/// the input (with the ID cleared, since segments are persisted as new
/// records).
pub fn split_by_month(assignment: &Assignment) -> Vec<Assignment> {
    let range = assignment.range();
    let mut period = Period::containing(&range.start(), DEFAULT_ANCHOR_YEAR);
    let last = Period::containing(&range.end(), DEFAULT_ANCHOR_YEAR);

    let mut segments = Vec::new();
    loop {
        if let Some(clamped) = range.clamp_to(&period.range()) {
            segments.push(assignment.segment_for(clamped));
        }
        if period >= last {
            break;
        }
        match period.next() {
            Ok(next) => period = next,
            // Unreachable while `last` is a valid period, but ending the walk
            // is the only sensible response
            Err(_) => break,
        }
    }
    segments
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::HasId;
    use crate::assignment::test::assignment;

    #[test]
    fn multi_month_split() {
        let input = assignment("2026-01-15", "2026-03-20", 50);
        let segments = split_by_month(&input);

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].start_date().to_string(), "2026-01-15");
        assert_eq!(segments[0].end_date().to_string(), "2026-01-31");
        assert_eq!(segments[1].start_date().to_string(), "2026-02-01");
        assert_eq!(segments[1].end_date().to_string(), "2026-02-28");
        assert_eq!(segments[2].start_date().to_string(), "2026-03-01");
        assert_eq!(segments[2].end_date().to_string(), "2026-03-20");

        for segment in &segments {
            assert!(segment.id().is_none());
            assert_eq!(segment.percentage().value(), 50);
            assert_eq!(segment.person_id(), input.person_id());
            assert_eq!(segment.project_id(), input.project_id());
        }
    }

    #[test]
    fn single_month_identity() {
        let input = assignment("2026-02-10", "2026-02-20", 75);
        let segments = split_by_month(&input);

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].start_date(), input.start_date());
        assert_eq!(segments[0].end_date(), input.end_date());
        assert_eq!(segments[0].percentage(), input.percentage());
    }

    #[test]
    fn single_day() {
        let input = assignment("2026-06-30", "2026-06-30", 100);
        let segments = split_by_month(&input);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].start_date(), segments[0].end_date());
    }

    // The round-trip property: segments reconstruct the input range exactly,
    // with no gap, no overlap and no duplicated day.
    #[test]
    fn segments_reconstruct_the_range() {
        let cases = [
            ("2026-01-15", "2026-03-20"),
            ("2026-01-01", "2026-12-31"),
            ("2025-11-05", "2026-02-14"),
            ("2024-01-31", "2024-03-01"),
            ("2024-02-29", "2024-02-29"),
        ];

        for (start, end) in cases {
            let input = assignment(start, end, 40);
            let segments = split_by_month(&input);

            assert!(!segments.is_empty());
            assert_eq!(segments.first().unwrap().start_date(), input.start_date());
            assert_eq!(segments.last().unwrap().end_date(), input.end_date());

            for pair in segments.windows(2) {
                // Chronological, and each segment's end is the day before the
                // next segment's start
                assert!(pair[0].end_date() < pair[1].start_date());
                assert_eq!(
                    pair[0].end_date().next_day().unwrap(),
                    pair[1].start_date()
                );
            }

            for segment in &segments {
                // A segment never crosses a month boundary
                assert_eq!(
                    segment.start_date().month(),
                    segment.end_date().month()
                );
                assert_eq!(segment.start_date().year(), segment.end_date().year());
                assert!(segment.start_date() <= segment.end_date());
            }
        }
    }

    #[test]
    fn segment_count_is_months_touched() {
        // Two days, but they straddle a month boundary
        let input = assignment("2026-01-31", "2026-02-01", 100);
        assert_eq!(split_by_month(&input).len(), 2);

        // Full calendar year
        let input = assignment("2026-01-01", "2026-12-31", 20);
        assert_eq!(split_by_month(&input).len(), 12);

        // Year rollover
        let input = assignment("2025-12-15", "2026-01-15", 20);
        assert_eq!(split_by_month(&input).len(), 2);
    }
}
