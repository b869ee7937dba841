// SPDX-License-Identifier: MIT

//!
//! The planner name type
//!

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// The longest name the planner accepts (directory imports have produced some
/// surprisingly long ones, but a whole pasted row is always a mistake)
pub const MAX_NAME_LEN: usize = 200;

/// Errors that can arise in relation to a [`Name`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("Name cannot be empty")]
    Empty,

    #[error("Name cannot be longer than {MAX_NAME_LEN} characters")]
    TooLong,
}

/// The name of a person, client or project.  Any string is allowed apart from
/// one which is empty once trimmed of leading and trailing whitespace, or one
/// longer than [`MAX_NAME_LEN`] characters.
#[derive(derive_more::Display, Serialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
pub struct Name(String);

impl Name {
    /// Create and initialise a new name if it will be valid
    pub fn from<S: ToString>(name: S) -> Result<Self, NameError> {
        let name = name.to_string();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            Err(NameError::Empty)
        } else if trimmed.chars().count() > MAX_NAME_LEN {
            Err(NameError::TooLong)
        } else {
            Ok(Name(trimmed.to_string()))
        }
    }

    /// Get the underlying `&str`
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        Name::from(string).map_err(serde::de::Error::custom)
    }
}
