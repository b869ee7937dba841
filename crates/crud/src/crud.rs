// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! CRUD people, clients, projects and assignment segments
//!

mod assignment;
mod client;
mod common;
mod person;
mod project;

pub use assignment::*;
pub use client::*;
pub use common::*;
pub use person::*;
pub use project::*;
