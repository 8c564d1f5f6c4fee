//! # Core Application Logic
//!
//! UI-agnostic state for Taskdeck. It knows nothing about ratatui or
//! the tracker's wire format.
//!
//! ```text
//! App + Action  →  update()  →  mutated App
//! ```
//!
//! ## Modules
//!
//! - [`state`]: the `App` struct and `Phase` lifecycle enum
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`config`]: settings resolution (defaults → file → env → CLI)

pub mod action;
pub mod config;
pub mod state;
