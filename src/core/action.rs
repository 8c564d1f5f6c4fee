//! # Actions
//!
//! Everything that can happen in Taskdeck becomes an `Action`.
//! User presses PageDown? That's `Action::NextProject`.
//! The terminal backend reports an error? That's `Action::Fail(message)`.
//!
//! The `update()` function applies an action to the current state.
//! No I/O happens here, which keeps every transition testable:
//! build an `App`, apply actions, assert on the fields.

use crate::core::state::{App, Phase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Stop the application (Escape or Ctrl-C).
    Quit,
    /// Move the selection cursor down one project, wrapping at the end.
    NextProject,
    /// Move the selection cursor up one project, wrapping at the start.
    PrevProject,
    /// Record a fatal runtime error and stop.
    Fail(String),
}

/// Applies `action` to `app`. The only place that mutates core state.
pub fn update(app: &mut App, action: Action) {
    match action {
        Action::Quit => app.phase = Phase::Stopped,
        Action::Fail(message) => {
            app.error = Some(message);
            app.phase = Phase::Stopped;
        }
        Action::NextProject => {
            let count = app.projects.len();
            if count > 0 {
                app.cursor = (app.cursor + 1) % count;
            }
        }
        Action::PrevProject => {
            let count = app.projects.len();
            if count > 0 {
                app.cursor = (app.cursor + count - 1) % count;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ready_app, sample_projects};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_next_wraps_around() {
        let mut app = ready_app();
        update(&mut app, Action::NextProject);
        update(&mut app, Action::NextProject);
        assert_eq!(app.cursor, 2);
        assert_eq!(app.selected().unwrap().name, "Personal");

        update(&mut app, Action::NextProject);
        assert_eq!(app.cursor, 0);
        assert_eq!(app.selected().unwrap().name, "Inbox");
    }

    #[test]
    fn test_prev_wraps_around() {
        let mut app = ready_app();
        update(&mut app, Action::PrevProject);
        assert_eq!(app.cursor, 2);
        assert_eq!(app.selected().unwrap().name, "Personal");
    }

    #[test]
    fn test_next_applied_n_times_is_identity() {
        let mut app = ready_app();
        let count = app.projects.len();
        for start in 0..count {
            app.cursor = start;
            for _ in 0..count {
                update(&mut app, Action::NextProject);
            }
            assert_eq!(app.cursor, start);
        }
    }

    #[test]
    fn test_prev_applied_n_times_is_identity() {
        let mut app = ready_app();
        let count = app.projects.len();
        for start in 0..count {
            app.cursor = start;
            for _ in 0..count {
                update(&mut app, Action::PrevProject);
            }
            assert_eq!(app.cursor, start);
        }
    }

    #[test]
    fn test_next_then_prev_restores_cursor() {
        let mut app = ready_app();
        for start in 0..app.projects.len() {
            app.cursor = start;
            update(&mut app, Action::NextProject);
            update(&mut app, Action::PrevProject);
            assert_eq!(app.cursor, start);

            update(&mut app, Action::PrevProject);
            update(&mut app, Action::NextProject);
            assert_eq!(app.cursor, start);
        }
    }

    #[test]
    fn test_paging_with_no_projects_stays_at_zero() {
        let mut app = App::new();
        app.phase = Phase::Ready;
        update(&mut app, Action::NextProject);
        assert_eq!(app.cursor, 0);
        update(&mut app, Action::PrevProject);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_quit_stops_from_any_phase() {
        for phase in [
            Phase::Init,
            Phase::LoadingData,
            Phase::Ready,
            Phase::Running,
            Phase::Stopped,
        ] {
            let mut app = App::new();
            app.phase = phase;
            update(&mut app, Action::Quit);
            assert_eq!(app.phase, Phase::Stopped);
        }
    }

    #[test]
    fn test_fail_records_message_and_stops() {
        let mut app = App::new();
        app.load_projects(sample_projects());
        update(&mut app, Action::Fail("connection reset".to_string()));
        assert_eq!(app.phase, Phase::Stopped);
        assert_eq!(app.error.as_deref(), Some("connection reset"));
    }

    #[test]
    fn test_fail_is_idempotent_once_stopped() {
        let mut app = App::new();
        update(&mut app, Action::Fail("first".to_string()));
        update(&mut app, Action::Quit);
        assert_eq!(app.phase, Phase::Stopped);
        assert_eq!(app.error.as_deref(), Some("first"));
    }
}
