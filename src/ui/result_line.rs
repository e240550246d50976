//! The inline text under the wheel: prompt, animation frames, the landed
//! team or an error.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::app::view::{InlineText, TextKind};
use crate::ui::theme::Theme;

pub struct ResultLine<'a> {
    pub text: &'a InlineText,
}

impl<'a> ResultLine<'a> {
    /// A landed team reads `🏀 label 🏀` in the team's colour.
    fn line(&self) -> Line<'a> {
        let text = self.text;
        match (text.kind, text.color) {
            (TextKind::Result, Some(color)) => Line::from(Span::styled(
                format!("🏀 {} 🏀", text.text),
                Theme::result_style(color),
            )),
            (TextKind::Error, _) => Line::from(Span::styled(text.text.as_str(), Theme::error_style())),
            _ => Line::from(Span::styled(text.text.as_str(), Theme::status_text_style())),
        }
    }
}

impl<'a> Widget for ResultLine<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line())
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
