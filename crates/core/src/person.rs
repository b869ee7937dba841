// SPDX-License-Identifier: MIT

//!
//! The team member type
//!

use crate::{HasId, Name, PlannerId};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors that can arise in relation to a [`Role`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoleError {
    #[error("Role cannot be empty")]
    Empty,
}

/// A person's role in the team, e.g. `Engineer` or `Designer`.  Free text,
/// but not empty once trimmed.
#[derive(derive_more::Display, Serialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
pub struct Role(String);

impl Role {
    /// Create and initialise a new role if it will be valid
    pub fn from<S: ToString>(role: S) -> Result<Self, RoleError> {
        let role = role.to_string();
        if role.trim().is_empty() {
            Err(RoleError::Empty)
        } else {
            Ok(Role(role.trim().to_string()))
        }
    }

    /// Get the underlying `&str`
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        Role::from(string).map_err(serde::de::Error::custom)
    }
}

/// A member of the team that assignments allocate time for
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Person {
    /// The person's ID (`None` until persisted)
    #[serde(default)]
    id: Option<PlannerId>,

    /// The person's name
    name: Name,

    /// The person's role
    role: Role,
}

impl Person {
    /// Create a new [`Person`]
    pub fn new(id: Option<PlannerId>, name: Name, role: Role) -> Person {
        Person { id, name, role }
    }

    /// Get the person's name
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Set the person's name
    pub fn set_name(&mut self, name: Name) {
        self.name = name;
    }

    /// Get the person's role
    pub fn role(&self) -> &Role {
        &self.role
    }

    /// Set the person's role
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }
}

impl HasId for Person {
    fn id(&self) -> Option<PlannerId> {
        self.id
    }

    fn set_id(&mut self, id: PlannerId) {
        self.id = Some(id);
    }

    fn clear_id(&mut self) {
        self.id = None;
    }
}
