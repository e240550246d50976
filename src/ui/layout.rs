//! Layout helpers — split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Fixed minimum width of the trigger button, in cells.
const BUTTON_MIN_WIDTH: u16 = 28;

/// Primary screen layout: headings, wheel, result line, trigger, status bar.
pub struct AppLayout {
    pub heading_area: Rect,
    pub subtitle_area: Rect,
    /// Square (in pixels) region the wheel is drawn into.
    pub wheel_area: Rect,
    pub result_area: Rect,
    pub button_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // heading
                Constraint::Length(1), // subtitle
                Constraint::Length(1),
                Constraint::Min(4),    // wheel (takes all remaining space)
                Constraint::Length(1),
                Constraint::Length(1), // result line
                Constraint::Length(1),
                Constraint::Length(3), // trigger button
                Constraint::Length(1), // status / hint bar
            ])
            .split(area);

        Self {
            heading_area: chunks[0],
            subtitle_area: chunks[1],
            wheel_area: square_pixels(chunks[3]),
            result_area: chunks[5],
            button_area: centered_width(BUTTON_MIN_WIDTH, chunks[7]),
            status_area: chunks[8],
        }
    }
}

/// Largest centred region whose half-block pixels form a square: terminal
/// cells are roughly twice as tall as wide, so width = 2 × height.
fn square_pixels(area: Rect) -> Rect {
    let height = area.height.min(area.width / 2);
    let width = height * 2;
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

fn centered_width(width: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    Rect::new(x, area.y, w, area.height)
}
