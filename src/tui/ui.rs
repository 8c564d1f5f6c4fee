use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use unicode_width::UnicodeWidthStr;

use crate::core::state::{App, Phase};

const MARKER: &str = "> ";
const LOADING_LABEL: &str = "Loading...";
/// Columns between column 0 and the divider when no names are drawn:
/// marker width plus a two-column gutter.
const DIVIDER_GUTTER: u16 = 4;
/// Row of the first project entry, leaving a blank line under the header.
const FIRST_PROJECT_ROW: u16 = 2;

/// Paints the whole screen from the current state. Read-only on `app`;
/// ratatui clears the frame before this runs and flushes once after.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    if area.width == 0 || area.height == 0 {
        return;
    }
    let buf = frame.buffer_mut();

    // Header bar: full width, inverted.
    let header_style = Style::new().fg(Color::Black).bg(Color::White);
    buf.set_style(Rect::new(area.x, area.y, area.width, 1), header_style);
    buf.set_string(area.x, area.y, "Projects", header_style);

    // While loading, only the header and the loading label are shown.
    if app.phase == Phase::LoadingData {
        let x = area.width.saturating_sub(LOADING_LABEL.width() as u16);
        buf.set_string(area.x + x, area.y, LOADING_LABEL, header_style);
        return;
    }

    for (index, project) in app.projects.iter().enumerate() {
        let y = FIRST_PROJECT_ROW + index as u16;
        if y >= area.height {
            break;
        }
        if index == app.cursor {
            let line = format!("{MARKER}{}", project.name);
            let selected = Style::new().add_modifier(Modifier::REVERSED);
            buf.set_string(area.x, area.y + y, line, selected);
        } else {
            buf.set_string(
                area.x + MARKER.width() as u16,
                area.y + y,
                &project.name,
                Style::new(),
            );
        }
    }

    // Vertical divider just right of the longest name.
    let widest = app
        .projects
        .iter()
        .map(|p| p.name.width())
        .max()
        .unwrap_or(0) as u16;
    let divider_x = widest + DIVIDER_GUTTER;
    if divider_x < area.width {
        let divider = Style::new().bg(Color::White);
        buf.set_style(
            Rect::new(area.x + divider_x, area.y, 1, area.height),
            divider,
        );
    }
}
