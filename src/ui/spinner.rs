//! Busy badge drawn in the wheel's top-right corner while a spin animates.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::core::wheel::Phase;

const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Shows `⠹ 7/20` for `Phase::Spinning`; renders nothing in any other phase.
pub struct SpinIndicator {
    pub phase: Phase,
    pub total_steps: u32,
    /// UI tick counter; picks the braille frame.
    pub tick: u64,
}

impl SpinIndicator {
    fn label(&self) -> Option<String> {
        let Phase::Spinning { step } = self.phase else {
            return None;
        };
        let frame = FRAMES[(self.tick % FRAMES.len() as u64) as usize];
        Some(format!(" {frame} {}/{} ", step.min(self.total_steps), self.total_steps))
    }
}

impl Widget for SpinIndicator {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(label) = self.label() else { return };
        let width = label.chars().count() as u16;
        if area.height == 0 || area.width < width {
            return;
        }

        let style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let x = area.right() - width;
        buf.set_line(x, area.y, &Line::from(Span::styled(label, style)), width);
    }
}
