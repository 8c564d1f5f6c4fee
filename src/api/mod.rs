//! # Tracker API
//!
//! Blocking HTTP client for the remote task-tracker service. The rest of
//! the application only sees the synced [`types::Project`] and
//! [`types::Task`] snapshots held in the client's store.

pub mod client;
pub mod types;

pub use client::{ClientError, TrackerClient};
pub use types::{Project, Task};
