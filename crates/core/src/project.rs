// SPDX-License-Identifier: MIT

//!
//! The project type
//!

use crate::{HasId, Name, PlannerId};
use serde::{Deserialize, Serialize};

/// A project, belonging to a client, that people are assigned to
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// The project's ID (`None` until persisted)
    #[serde(default)]
    id: Option<PlannerId>,

    /// The project's name
    name: Name,

    /// The ID of the client the project belongs to
    client_id: PlannerId,
}

impl Project {
    /// Create a new [`Project`]
    pub fn new(id: Option<PlannerId>, name: Name, client_id: PlannerId) -> Project {
        Project {
            id,
            name,
            client_id,
        }
    }

    /// Get the project's name
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Set the project's name
    pub fn set_name(&mut self, name: Name) {
        self.name = name;
    }

    /// Get the ID of the client the project belongs to
    pub fn client_id(&self) -> PlannerId {
        self.client_id
    }

    /// Move the project to another client
    pub fn set_client_id(&mut self, client_id: PlannerId) {
        self.client_id = client_id;
    }
}

impl HasId for Project {
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
