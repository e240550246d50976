//! Popup overlay announcing where the wheel landed.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::core::catalog::Entry;
use crate::ui::theme::Theme;

/// Modal result popup.  Everything behind it is inert until dismissed.
pub struct ResultPopup<'a> {
    pub entry: &'a Entry,
    pub title: &'a str,
    pub intro: &'a str,
    pub hint: &'a str,
}

impl<'a> Widget for ResultPopup<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let name = format!("{}!", self.entry.label);
        let content_width = [self.intro, name.as_str(), self.hint]
            .iter()
            .map(|s| s.chars().count())
            .max()
            .unwrap_or(0) as u16;
        let popup = centered_fixed((content_width + 6).max(30), 9, area);
        Clear.render(popup, buf);

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .title_style(Theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Theme::rgb(self.entry.color)));

        let inner = block.inner(popup);
        block.render(popup, buf);

        let lines = vec![
            Line::raw(""),
            Line::raw(self.intro),
            Line::raw(""),
            Line::from(Span::styled(
                name,
                Theme::result_style(self.entry.color).add_modifier(Modifier::BOLD),
            )),
            Line::raw(""),
            Line::from(Span::styled(self.hint, Theme::hint_style())),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

// ───────────────────────────────────────── helpers ───────────

/// Create a centered rectangle with fixed dimensions, clamped to the available area.
fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}
