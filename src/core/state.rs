//! # Application State
//!
//! The mutable root owned by the run loop. This module contains domain
//! state only - presentation lives in the `tui` module.
//!
//! ```text
//! App
//! ├── phase: Phase               // lifecycle state machine
//! ├── projects: Vec<Project>     // snapshot from the last sync
//! ├── cursor: usize              // highlighted project index
//! └── error: Option<String>      // recorded fatal error, shown on exit
//! ```
//!
//! State changes only happen through `update(app, action)` in action.rs,
//! so every transition is observable and testable in one place.

use crate::api::types::Project;

/// Lifecycle phase of the application.
///
/// `Stopped` is terminal: no action leaves it, and the run loop exits
/// at the start of the next tick once it is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Init,
    LoadingData,
    Ready,
    Running,
    Stopped,
}

pub struct App {
    pub phase: Phase,
    /// Replaced wholesale on each load, never mutated in place.
    pub projects: Vec<Project>,
    /// Invariant: `cursor < projects.len()` whenever the list is non-empty;
    /// stays 0 when it is empty.
    pub cursor: usize,
    /// Set only on fatal terminal, event, or sync errors.
    pub error: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self {
            phase: Phase::Init,
            projects: Vec::new(),
            cursor: 0,
            error: None,
        }
    }

    /// Stores a fresh project snapshot, resets the cursor, and moves to `Ready`.
    pub fn load_projects(&mut self, projects: Vec<Project>) {
        self.projects = projects;
        self.cursor = 0;
        self.phase = Phase::Ready;
    }

    pub fn selected(&self) -> Option<&Project> {
        self.projects.get(self.cursor)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
