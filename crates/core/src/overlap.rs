// SPDX-License-Identifier: MIT

//!
//! The overlap engine
//!
//! Before an assignment is saved, the form asks how committed the person
//! already is over the candidate dates.  This module finds the person's
//! segments that intersect the candidate range and sums the percentages.  A
//! total over 100 is a warning for the caller to surface; it is never an
//! error and never blocks the save.
//!

use crate::{Assignment, DateRange, HasId, Percentage, PlannerId};

/// All of `segments` belonging to `person_id` whose dates intersect
/// `candidate` (closed intervals, boundary days included).  `exclude` skips
/// one segment by ID: when an existing segment is being edited it must not
/// count against itself.
pub fn find_overlapping<'a>(
    segments: &'a [Assignment],
    person_id: PlannerId,
    candidate: &DateRange,
    exclude: Option<PlannerId>,
) -> Vec<&'a Assignment> {
    segments
        .iter()
        .filter(|segment| segment.person_id() == person_id)
        .filter(|segment| !(exclude.is_some() && segment.id() == exclude))
        .filter(|segment| segment.range().overlaps(candidate))
        .collect()
}

/// The person's total allocation over the candidate range: the sum of every
/// overlapping segment's percentage plus the candidate's own
pub fn total_allocation(overlapping: &[&Assignment], candidate: Percentage) -> u32 {
    overlapping
        .iter()
        .map(|segment| segment.percentage().value() as u32)
        .sum::<u32>()
        + candidate.value() as u32
}
