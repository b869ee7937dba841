// SPDX-License-Identifier: MIT

//!
//! The allocation aggregator
//!
//! Totals are always re-derived from the stored segments; nothing caches
//! them.  A cell's heat-map colour and a person's over-allocation badge both
//! come from [`AllocationLevel::classify`] over the same boundary-inclusive
//! overlap test the rest of the planner uses.
//!

use crate::{Assignment, PlannerId, Period};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Heat-map severity band for an aggregated allocation total
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AllocationLevel {
    Low,
    Medium,
    High,
    Over,
}

impl AllocationLevel {
    /// Classify a total percentage.  The boundaries are exact: 30 is still
    /// `Low`, 70 is still `Medium`, 100 is still `High`.
    pub fn classify(total: u32) -> AllocationLevel {
        if total > 100 {
            AllocationLevel::Over
        } else if total > 70 {
            AllocationLevel::High
        } else if total > 30 {
            AllocationLevel::Medium
        } else {
            AllocationLevel::Low
        }
    }
}

/// The person's total allocation for one period: the sum of `percentage` over
/// every segment of theirs whose dates intersect the period's month
pub fn total_for_period(segments: &[Assignment], person_id: PlannerId, period: &Period) -> u32 {
    let month = period.range();
    segments
        .iter()
        .filter(|segment| segment.person_id() == person_id)
        .filter(|segment| segment.range().overlaps(&month))
        .map(|segment| segment.percentage().value() as u32)
        .sum()
}

/// Reporting figures for one project
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDistribution {
    /// How many distinct people have at least one segment on the project
    pub people_count: usize,

    /// Sum of all segment percentages on the project
    pub total_allocation: u32,

    /// `total_allocation / people_count`, or 0 when nobody is assigned
    pub avg_allocation: f64,
}

/// Distinct-person count and average allocation per person for one project,
/// across all of its segments
pub fn project_distribution(segments: &[Assignment], project_id: PlannerId) -> ProjectDistribution {
    let mut people = BTreeSet::new();
    let mut total_allocation: u32 = 0;

    for segment in segments
        .iter()
        .filter(|segment| segment.project_id() == project_id)
    {
        people.insert(segment.person_id());
        total_allocation += segment.percentage().value() as u32;
    }

    let avg_allocation = if people.is_empty() {
        0.0
    } else {
        total_allocation as f64 / people.len() as f64
    };

    ProjectDistribution {
        people_count: people.len(),
        total_allocation,
        avg_allocation,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{CalendarDate, DEFAULT_ANCHOR_YEAR, Percentage, assignment::test::assignment};

    fn segment(
        person_id: PlannerId,
        project_id: PlannerId,
        start: &str,
        end: &str,
        percentage: i64,
    ) -> Assignment {
        Assignment::from(
            Some(PlannerId::new()),
            person_id,
            project_id,
            CalendarDate::parse(start).unwrap(),
            CalendarDate::parse(end).unwrap(),
            Percentage::imported(percentage).unwrap(),
        )
        .unwrap()
    }

    // The band boundaries are exact and off-by-one matters: 30 is Low, 70 is
    // Medium, 100 is High.
    #[test]
    fn classification_boundaries() {
        assert_eq!(AllocationLevel::classify(0), AllocationLevel::Low);
        assert_eq!(AllocationLevel::classify(30), AllocationLevel::Low);
        assert_eq!(AllocationLevel::classify(31), AllocationLevel::Medium);
        assert_eq!(AllocationLevel::classify(70), AllocationLevel::Medium);
        assert_eq!(AllocationLevel::classify(71), AllocationLevel::High);
        assert_eq!(AllocationLevel::classify(100), AllocationLevel::High);
        assert_eq!(AllocationLevel::classify(101), AllocationLevel::Over);
        assert_eq!(AllocationLevel::classify(180), AllocationLevel::Over);
    }

    #[test]
    fn classification_serialises_lowercase() {
        assert_eq!(
            serde_json::to_string(&AllocationLevel::Over).unwrap(),
            r#""over""#
        );
    }

    #[test]
    fn totals_are_per_person_and_per_period() {
        let person = PlannerId::new();
        let project = PlannerId::new();
        let segments = vec![
            segment(person, project, "2026-02-01", "2026-02-28", 50),
            segment(person, project, "2026-02-10", "2026-02-20", 60),
            segment(person, project, "2026-03-01", "2026-03-31", 40),
            // Somebody else's February
            assignment("2026-02-01", "2026-02-28", 90),
        ];

        let february = Period::from_offset(1, DEFAULT_ANCHOR_YEAR).unwrap();
        let march = Period::from_offset(2, DEFAULT_ANCHOR_YEAR).unwrap();
        let june = Period::from_offset(5, DEFAULT_ANCHOR_YEAR).unwrap();

        assert_eq!(total_for_period(&segments, person, &february), 110);
        assert_eq!(total_for_period(&segments, person, &march), 40);
        assert_eq!(total_for_period(&segments, person, &june), 0);
    }

    #[test]
    fn totals_use_the_inclusive_overlap_test() {
        let person = PlannerId::new();
        let project = PlannerId::new();
        // Ends on the first day of February
        let segments = vec![segment(person, project, "2026-01-15", "2026-02-01", 80)];

        let february = Period::from_offset(1, DEFAULT_ANCHOR_YEAR).unwrap();
        assert_eq!(total_for_period(&segments, person, &february), 80);
    }

    #[test]
    fn project_distribution_counts_distinct_people() {
        let project = PlannerId::new();
        let ada = PlannerId::new();
        let grace = PlannerId::new();
        let segments = vec![
            segment(ada, project, "2026-01-01", "2026-01-31", 50),
            segment(ada, project, "2026-02-01", "2026-02-28", 50),
            segment(grace, project, "2026-01-01", "2026-01-31", 80),
            // Different project entirely
            assignment("2026-01-01", "2026-01-31", 100),
        ];

        let distribution = project_distribution(&segments, project);
        assert_eq!(distribution.people_count, 2);
        assert_eq!(distribution.total_allocation, 180);
        assert!((distribution.avg_allocation - 90.0).abs() < 1e-9);
    }

    #[test]
    fn project_distribution_with_no_people() {
        let distribution = project_distribution(&[], PlannerId::new());
        assert_eq!(distribution.people_count, 0);
        assert_eq!(distribution.total_allocation, 0);
        assert_eq!(distribution.avg_allocation, 0.0);
    }
}
