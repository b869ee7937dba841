// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! All query parameter structs
//!

use crate::DEFAULT_REPORT_MONTHS;
use resource_planner_core::{CalendarDate, PlannerId};
use serde::Deserialize;

/// Query parameters for the allocation check the assignment form runs before
/// submit.  The percentage arrives as a raw integer because the manual-entry
/// bound (1..=100) is applied by the handler, not the type.
#[derive(Deserialize)]
pub struct AllocationCheckQueryParams {
    #[serde(rename = "person-id")]
    pub person_id: PlannerId,

    pub start: CalendarDate,

    pub end: CalendarDate,

    pub percentage: i64,

    /// Segment to leave out of the total (set when editing that segment)
    #[serde(rename = "exclude-id", default)]
    pub exclude_id: Option<PlannerId>,
}

/// Query parameters used by the team report: which month to start at and how
/// many months to cover
#[derive(Deserialize)]
pub struct TeamReportQueryParams {
    #[serde(default)]
    pub offset: i32,

    #[serde(default = "default_report_months")]
    pub months: u32,
}

fn default_report_months() -> u32 {
    DEFAULT_REPORT_MONTHS
}

impl Default for TeamReportQueryParams {
    fn default() -> Self {
        TeamReportQueryParams {
            offset: 0,
            months: DEFAULT_REPORT_MONTHS,
        }
    }
}
