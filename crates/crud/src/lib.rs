// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider resource-planner project*
//!
//! This library crate is responsible for all database interactions and
//! management for the resource-planner project.  It does the following:
//!
//! - Enables CRUD (Create, Read, Update, Delete) operations on people,
//!   clients, projects and assignment segments
//! - Splits new assignments into per-month segments before persisting them
//! - Cascades deletes the way the directory expects (a person takes their
//!   assignments with them; a client takes its projects and their
//!   assignments)
//! - Provides name lookups for the bulk-upload path
//! - Provides helpers to get table row counts
//! - Enables JSON backup & restore of the whole database
//!
//! This crate makes use of the basic resource-planner `core` crate for
//! primitive types, and is itself used by the `www-api` crate and the CLI
//! binaries.
//!

mod backup;
mod crud;
mod db;
mod stats;

pub use backup::*;
pub use crud::*;
pub use db::*;
pub use stats::*;

#[cfg(test)]
pub mod test {
    use crate::Create;
    use resource_planner_core::{
        Assignment, CalendarDate, Client, HasId, Name, Percentage, Person, Project, Role,
    };
    use sqlx::{Sqlite, Transaction};

    pub fn valid_person() -> Person {
        Person::new(
            None,
            Name::from("Ada Lovelace").unwrap(),
            Role::from("Engineer").unwrap(),
        )
    }

    pub fn valid_other_person() -> Person {
        Person::new(
            None,
            Name::from("Grace Hopper").unwrap(),
            Role::from("Engineer").unwrap(),
        )
    }

    pub fn valid_people() -> Vec<Person> {
        vec![
            valid_person(),
            valid_other_person(),
            Person::new(
                None,
                Name::from("Katherine Johnson").unwrap(),
                Role::from("Analyst").unwrap(),
            ),
        ]
    }

    pub fn valid_client() -> Client {
        Client::new(None, Name::from("Acme Corp").unwrap())
    }

    pub fn valid_other_client() -> Client {
        Client::new(None, Name::from("Globex").unwrap())
    }

    pub fn valid_assignment(
        person: &Person,
        project: &Project,
        start: &str,
        end: &str,
        percentage: i64,
    ) -> Assignment {
        Assignment::from(
            None,
            person.id().unwrap(),
            project.id().unwrap(),
            CalendarDate::parse(start).unwrap(),
            CalendarDate::parse(end).unwrap(),
            Percentage::imported(percentage).unwrap(),
        )
        .unwrap()
    }

    /// Create one person, one client and one project, ready for assignments
    pub async fn seed_directory(
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> (Person, Client, Project) {
        let mut person = valid_person();
        person.create(transaction).await.unwrap();

        let mut client = valid_client();
        client.create(transaction).await.unwrap();

        let mut project = Project::new(
            None,
            Name::from("Website Redesign").unwrap(),
            client.id().unwrap(),
        );
        project.create(transaction).await.unwrap();

        (person, client, project)
    }
}
