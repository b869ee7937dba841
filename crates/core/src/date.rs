// SPDX-License-Identifier: MIT

//!
//! The resource planner calendar date type
//!
//! A [`CalendarDate`] is a plain year/month/day value with no time-of-day and
//! no timezone attached.  Every date that crosses a module boundary is one of
//! these, serialized as `YYYY-MM-DD`.  Never construct planner dates through a
//! timezone-aware date-time type: near midnight that can shift the calendar
//! day and misplace an assignment by one day.
//!

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use thiserror::Error;

/// The minimum year allowed in the planner
pub const MIN_YEAR: i64 = 1900;

/// The maximum year allowed in the planner
pub const MAX_YEAR: i64 = 9999;

/// Errors that can arise in relation to a [`CalendarDate`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The day number is not allowed (must be 1 <= day <= 31)
    #[error("Day `{0}` is not allowed")]
    InvalidDay(i64),

    /// The month number is not allowed (must be 1 <= month <= 12)
    #[error("Month `{0}` is not allowed")]
    InvalidMonth(i64),

    /// The year is not allowed (must be [`MIN_YEAR`] <= year <= [`MAX_YEAR`])
    #[error("Year `{0}` is not allowed")]
    InvalidYear(i64),

    /// The day does not exist in that month (e.g. Feb 30)
    #[error("Day `{day}` does not exist in month `{month}` of year `{year}`")]
    DayOutOfRange { year: i64, month: i64, day: i64 },

    /// The string is not a strict `YYYY-MM-DD` date
    #[error("`{0}` is not a valid YYYY-MM-DD date")]
    InvalidFormat(String),
}

/// The planner day type
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub struct Day(u8);

/// The planner month type
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub struct Month(u8);

/// The planner year type
///
/// The minimum year allowed is [`MIN_YEAR`].  The maximum year allowed is
/// [`MAX_YEAR`]
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub struct Year(i32);

impl Day {
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Month {
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Number of days in this month of the given year (leap-year aware)
    pub fn days_in(&self, year: Year) -> u8 {
        match self.0 {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 => {
                if year.is_leap() {
                    29
                } else {
                    28
                }
            }
            _ => unreachable!("Month value must be 1 <= x <= 12"),
        }
    }

    /// Abbreviated English month name, e.g. `Jan`
    pub fn short_name(&self) -> &'static str {
        match self.0 {
            1 => "Jan",
            2 => "Feb",
            3 => "Mar",
            4 => "Apr",
            5 => "May",
            6 => "Jun",
            7 => "Jul",
            8 => "Aug",
            9 => "Sep",
            10 => "Oct",
            11 => "Nov",
            12 => "Dec",
            _ => unreachable!("Month value must be 1 <= x <= 12"),
        }
    }
}

impl Year {
    pub fn value(&self) -> i32 {
        self.0
    }

    /// Whether the year is a leap year (divisible by 4 and either not
    /// divisible by 100 or divisible by 400)
    pub fn is_leap(&self) -> bool {
        self.0 % 4 == 0 && (self.0 % 100 != 0 || self.0 % 400 == 0)
    }
}

impl TryFrom<i64> for Day {
    type Error = DateError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (1..=31).contains(&value) {
            Ok(Day(value as u8))
        } else {
            Err(DateError::InvalidDay(value))
        }
    }
}

impl TryFrom<i64> for Month {
    type Error = DateError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (1..=12).contains(&value) {
            Ok(Month(value as u8))
        } else {
            Err(DateError::InvalidMonth(value))
        }
    }
}

impl TryFrom<i64> for Year {
    type Error = DateError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (MIN_YEAR..=MAX_YEAR).contains(&value) {
            Ok(Year(value as i32))
        } else {
            Err(DateError::InvalidYear(value))
        }
    }
}

/// The resource planner date type
///
/// All three fields are always set and the combination is always a real
/// calendar day.  Ordering is purely calendrical: year, then month, then day.
#[derive(Serialize, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
#[serde(into = "String")]
pub struct CalendarDate {
    year: Year,
    month: Month,
    day: Day,
}

impl CalendarDate {
    /// Create a new [`CalendarDate`] if the result will be a real calendar day
    pub fn from(year: i64, month: i64, day: i64) -> Result<CalendarDate, DateError> {
        let year = Year::try_from(year)?;
        let month = Month::try_from(month)?;
        let day = Day::try_from(day)?;

        if day.value() > month.days_in(year) {
            return Err(DateError::DayOutOfRange {
                year: year.value() as i64,
                month: month.value() as i64,
                day: day.value() as i64,
            });
        }

        Ok(CalendarDate { year, month, day })
    }

    /// Parse a strict `YYYY-MM-DD` string.  The three components are read as
    /// plain calendar values.  Anything else, including an out-of-range day
    /// for that month, is an [`DateError::InvalidFormat`]-class error.
    pub fn parse(input: &str) -> Result<CalendarDate, DateError> {
        let invalid = || DateError::InvalidFormat(input.to_string());

        let mut parts = input.split('-');
        let (Some(year), Some(month), Some(day), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        if year.len() != 4 || month.len() != 2 || day.len() != 2 {
            return Err(invalid());
        }
        for part in [year, month, day] {
            if !part.bytes().all(|byte| byte.is_ascii_digit()) {
                return Err(invalid());
            }
        }

        let year: i64 = year.parse().map_err(|_| invalid())?;
        let month: i64 = month.parse().map_err(|_| invalid())?;
        let day: i64 = day.parse().map_err(|_| invalid())?;

        CalendarDate::from(year, month, day)
    }

    /// Internal constructor for component values already known to be a real
    /// calendar day (e.g. day 1, or the month's own length)
    pub(crate) fn from_valid(year: Year, month: Month, day: u8) -> CalendarDate {
        debug_assert!(day >= 1 && day <= month.days_in(year));
        CalendarDate {
            year,
            month,
            day: Day(day),
        }
    }

    /// Get the [`CalendarDate`]'s day
    pub fn day(&self) -> Day {
        self.day
    }

    /// Get the [`CalendarDate`]'s month
    pub fn month(&self) -> Month {
        self.month
    }

    /// Get the [`CalendarDate`]'s year
    pub fn year(&self) -> Year {
        self.year
    }

    /// The day after this one, rolling over month and year boundaries
    pub fn next_day(&self) -> Result<CalendarDate, DateError> {
        if self.day.value() < self.month.days_in(self.year) {
            Ok(CalendarDate {
                day: Day(self.day.value() + 1),
                ..*self
            })
        } else if self.month.value() < 12 {
            Ok(CalendarDate {
                year: self.year,
                month: Month(self.month.value() + 1),
                day: Day(1),
            })
        } else {
            let year = Year::try_from(self.year.value() as i64 + 1)?;
            Ok(CalendarDate {
                year,
                month: Month(1),
                day: Day(1),
            })
        }
    }
}

// `YYYY-MM-DD`, zero padded.  Lossless round-trip with `parse`.
impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year.value(),
            self.month.value(),
            self.day.value()
        )
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_string()
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        CalendarDate::parse(&string).map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Day {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Day::try_from(value).map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Month::try_from(value).map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Year {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Year::try_from(value).map_err(serde::de::Error::custom)
    }
}
