//! The spin trigger, drawn as a bordered button.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::app::view::Trigger;
use crate::ui::theme::Theme;

pub struct TriggerButton {
    pub trigger: Trigger,
}

impl Widget for TriggerButton {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = if self.trigger.enabled {
            Theme::button_style()
        } else {
            Theme::button_disabled_style()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(style)
            .style(style);

        Paragraph::new(self.trigger.label)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(trigger: Trigger) -> Buffer {
        let area = Rect::new(0, 0, 28, 3);
        let mut buf = Buffer::empty(area);
        TriggerButton { trigger }.render(area, &mut buf);
        buf
    }

    fn middle_row(buf: &Buffer) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, 1u16)].symbol().to_string())
            .collect()
    }

    #[test]
    fn shows_label_centred() {
        let buf = render(Trigger::ready("Spin"));
        let row = middle_row(&buf);
        assert!(row.contains("Spin"), "{row:?}");
        assert_eq!(buf[(14u16, 1u16)].style().bg, Theme::button_style().bg);
    }

    #[test]
    fn disabled_trigger_is_greyed_out() {
        let buf = render(Trigger::busy("Spinning..."));
        assert!(middle_row(&buf).contains("Spinning..."));
        assert_eq!(buf[(14u16, 1u16)].style().bg, Theme::button_disabled_style().bg);
    }
}
