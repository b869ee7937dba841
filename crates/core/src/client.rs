// SPDX-License-Identifier: MIT

//!
//! The client type
//!

use crate::{HasId, Name, PlannerId};
use serde::{Deserialize, Serialize};

/// A client that projects belong to
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Client {
    /// The client's ID (`None` until persisted)
    #[serde(default)]
    id: Option<PlannerId>,

    /// The client's name
    name: Name,
}

impl Client {
    /// Create a new [`Client`]
    pub fn new(id: Option<PlannerId>, name: Name) -> Client {
        Client { id, name }
    }

    /// Get the client's name
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Set the client's name
    pub fn set_name(&mut self, name: Name) {
        self.name = name;
    }
}

impl HasId for Client {
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
