use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// TUI-specific input events, already reduced to what the app reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// Escape or Ctrl-C.
    Quit,
    /// PageDown.
    NextProject,
    /// PageUp.
    PrevProject,
    /// Terminal was resized; the next redraw picks up the new size.
    Resize,
    /// The terminal backend's event source failed.
    Fail(String),
}

/// A blocking source of [`TuiEvent`]s.
///
/// Production uses [`CrosstermEvents`]; tests substitute a scripted fake
/// so the producer and run loop work without a real terminal.
pub trait EventSource: Send {
    /// Blocks until the next relevant event.
    fn next(&mut self) -> TuiEvent;
}

/// Reads from the real terminal via `crossterm::event::read`.
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next(&mut self) -> TuiEvent {
        loop {
            match event::read() {
                Ok(raw) => {
                    if let Some(event) = translate(&raw) {
                        return event;
                    }
                }
                Err(err) => return TuiEvent::Fail(err.to_string()),
            }
        }
    }
}

/// Maps a raw crossterm event to a [`TuiEvent`].
///
/// Unrecognized keys map to `None` and are silently dropped.
pub fn translate(raw: &Event) -> Option<TuiEvent> {
    match raw {
        Event::Key(key) if key.kind != KeyEventKind::Release => {
            log::debug!("Key event: {:?} with modifiers {:?}", key.code, key.modifiers);
            match (key.modifiers, key.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
                (_, KeyCode::Esc) => Some(TuiEvent::Quit),
                (_, KeyCode::PageDown) => Some(TuiEvent::NextProject),
                (_, KeyCode::PageUp) => Some(TuiEvent::PrevProject),
                _ => None,
            }
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}
