// SPDX-License-Identifier: MIT

//!
//! The allocation percentage type
//!
//! Two bounds exist on purpose.  Manual entry through the assignment form is
//! capped at 100%, but the bulk-upload path has always accepted rows up to
//! 200% so that historical over-commitments can be imported and show up as
//! warnings instead of being rejected at the door.  The asymmetry is observed
//! behavior and is kept, not resolved.
//!

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Upper bound for manually entered percentages
pub const MAX_MANUAL_PERCENTAGE: i64 = 100;

/// Upper bound for imported percentages
pub const MAX_IMPORT_PERCENTAGE: i64 = 200;

/// Errors that can arise in relation to a [`Percentage`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PercentageError {
    /// Outside the manual-entry bound
    #[error("Percentage `{0}` must be between 1 and {MAX_MANUAL_PERCENTAGE}")]
    OutOfManualRange(i64),

    /// Outside the import bound
    #[error("Percentage `{0}` must be between 0 and {MAX_IMPORT_PERCENTAGE}")]
    OutOfImportRange(i64),
}

/// The percentage of a person's time committed to a project over a date range
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
pub struct Percentage(u8);

impl Percentage {
    /// Create a percentage under the manual-entry bound (1 to 100)
    pub fn new(value: i64) -> Result<Self, PercentageError> {
        if (1..=MAX_MANUAL_PERCENTAGE).contains(&value) {
            Ok(Percentage(value as u8))
        } else {
            Err(PercentageError::OutOfManualRange(value))
        }
    }

    /// Create a percentage under the import bound (0 to 200)
    pub fn imported(value: i64) -> Result<Self, PercentageError> {
        if (0..=MAX_IMPORT_PERCENTAGE).contains(&value) {
            Ok(Percentage(value as u8))
        } else {
            Err(PercentageError::OutOfImportRange(value))
        }
    }

    /// Get the underlying value
    pub fn value(&self) -> u8 {
        self.0
    }
}

// Deserialization uses the import bound: rows that were legal when they were
// written must keep loading.  The manual-entry bound belongs to the form
// validation layer.
impl<'de> Deserialize<'de> for Percentage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Percentage::imported(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn manual_bound() {
        assert!(Percentage::new(0).is_err());
        assert!(Percentage::new(101).is_err());
        assert!(Percentage::new(-5).is_err());
        assert_eq!(Percentage::new(1).unwrap().value(), 1);
        assert_eq!(Percentage::new(100).unwrap().value(), 100);
    }

    #[test]
    fn import_bound() {
        assert_eq!(Percentage::imported(0).unwrap().value(), 0);
        assert_eq!(Percentage::imported(150).unwrap().value(), 150);
        assert_eq!(Percentage::imported(200).unwrap().value(), 200);
        assert!(Percentage::imported(201).is_err());
        assert!(Percentage::imported(-1).is_err());
    }

    #[test]
    fn deserialization_accepts_imported_values() {
        let percentage: Percentage = serde_json::from_str("150").unwrap();
        assert_eq!(percentage.value(), 150);
        assert!(serde_json::from_str::<Percentage>("250").is_err());
    }
}
