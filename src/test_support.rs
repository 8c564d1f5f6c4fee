//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::api::types::Project;
use crate::core::state::App;

pub fn project(id: &str, name: &str) -> Project {
    Project {
        id: id.to_string(),
        name: name.to_string(),
    }
}

pub fn sample_projects() -> Vec<Project> {
    vec![
        project("1", "Inbox"),
        project("2", "Work"),
        project("3", "Personal"),
    ]
}

/// An `App` in the `Ready` phase with the sample project list loaded.
pub fn ready_app() -> App {
    let mut app = App::new();
    app.load_projects(sample_projects());
    app
}
