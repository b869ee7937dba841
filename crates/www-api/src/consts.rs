// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Web API consts
//!

/// How many month columns a report covers when the query doesn't say
pub const DEFAULT_REPORT_MONTHS: u32 = 6;

/// Hard ceiling on report width (the frontend never asks for more than 12)
pub const MAX_REPORT_MONTHS: u32 = 24;
