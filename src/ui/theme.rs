//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

use crate::core::catalog::Rgb;

/// Every style the terminal view uses, in one place.
pub struct Theme;

impl Theme {
    pub fn rgb(c: Rgb) -> Color {
        Color::Rgb(c.r, c.g, c.b)
    }

    // ── headings ───────────────────────────────────────────────
    pub fn heading_style() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn subtitle_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    // ── result line ────────────────────────────────────────────
    pub fn status_text_style() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    /// Result text in the team's colour.  Very dark team colours vanish on a
    /// dark terminal, so the text sits on a light background.
    pub fn result_style(color: Rgb) -> Style {
        Style::default()
            .fg(Self::rgb(color))
            .bg(Color::Rgb(0xF0, 0xF0, 0xF0))
            .add_modifier(Modifier::BOLD)
    }

    pub fn error_style() -> Style {
        Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD)
    }

    // ── trigger ────────────────────────────────────────────────
    pub fn button_style() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Color::Rgb(0x4C, 0xAF, 0x50))
            .add_modifier(Modifier::BOLD)
    }

    pub fn button_disabled_style() -> Style {
        Style::default().fg(Color::Gray).bg(Color::DarkGray)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn title_style() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }
}
