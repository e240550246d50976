//! A wheel of NBA teams in the terminal.
//!
//! Press Space (or click the button) to spin; the wheel lands on a random
//! team and a popup announces it.

mod app;
mod config;
mod core;
mod ui;

use std::io::{self, stderr};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Alignment,
    widgets::Paragraph,
    Frame, Terminal,
};
use tokio::sync::mpsc;

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    spin::SpinMessage,
    state::AppState,
};
use crate::config::WheelConfig;
use crate::core::catalog::Catalog;
use crate::ui::{
    button::TriggerButton, layout::AppLayout, popup::ResultPopup, result_line::ResultLine,
    spinner::SpinIndicator, theme::Theme, wheel_widget::WheelWidget,
};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Spin a wheel of NBA teams")]
struct Cli {
    /// Seed the team picker for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,
}

// ───────────────────────────────────────── drawing ──────────

fn draw(frame: &mut Frame, state: &mut AppState) {
    let layout = AppLayout::from_area(frame.area());
    let labels = &state.config.labels;

    frame.render_widget(
        Paragraph::new(labels.heading)
            .style(Theme::heading_style())
            .alignment(Alignment::Center),
        layout.heading_area,
    );
    frame.render_widget(
        Paragraph::new(labels.subtitle)
            .style(Theme::subtitle_style())
            .alignment(Alignment::Center),
        layout.subtitle_area,
    );

    frame.render_widget(
        WheelWidget {
            commands: &state.screen.commands,
            geometry: &state.config.geometry,
        },
        layout.wheel_area,
    );
    frame.render_widget(
        SpinIndicator {
            phase: state.controller.wheel().phase(),
            total_steps: state.config.animation.steps,
            tick: state.tick,
        },
        layout.wheel_area,
    );

    frame.render_widget(
        ResultLine {
            text: &state.screen.text,
        },
        layout.result_area,
    );

    frame.render_widget(
        TriggerButton {
            trigger: state.screen.trigger,
        },
        layout.button_area,
    );
    state.trigger_area = layout.button_area;

    let hint = state.keys.status_bar_hint();
    frame.render_widget(
        Paragraph::new(hint).style(Theme::status_bar_style()),
        layout.status_area,
    );
    if let Some(summary) = state.session_summary() {
        frame.render_widget(
            Paragraph::new(summary)
                .style(Theme::status_bar_style())
                .alignment(Alignment::Right),
            layout.status_area,
        );
    }

    if let Some(ref popup) = state.screen.popup {
        let hint = state.keys.dismiss_hint();
        frame.render_widget(
            ResultPopup {
                entry: &popup.entry,
                title: labels.result_title,
                intro: labels.result_intro,
                hint: &hint,
            },
            frame.area(),
        );
    }
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only in debug builds / when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = WheelConfig {
        seed: cli.seed,
        ..WheelConfig::default()
    };
    let catalog = Arc::new(Catalog::nba());
    tracing::info!(teams = catalog.len(), seed = ?config.seed, "starting wheel");

    let (spin_tx, mut spin_rx) = mpsc::unbounded_channel::<SpinMessage>();
    let mut state = AppState::new(catalog, config, spin_tx);

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(
        stderr_handle,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle(state.config.labels.window_title)
    )?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    let mut events = spawn_event_reader(Duration::from_millis(100));

    // ── event loop ────────────────────────────────────────────
    loop {
        terminal.draw(|frame| draw(frame, &mut state))?;

        tokio::select! {
            biased;

            Some(event) = events.recv() => {
                match event {
                    AppEvent::Key(k) => handler::handle_key(&mut state, k),
                    AppEvent::Mouse(m) => handler::handle_mouse(&mut state, m),
                    AppEvent::Resize => {}
                    AppEvent::Tick => state.tick = state.tick.wrapping_add(1),
                }
            }

            Some((generation, update)) = spin_rx.recv() => {
                handler::apply_spin_update(&mut state, generation, update);
                // Drain everything currently queued before redrawing.
                while let Ok((generation, update)) = spin_rx.try_recv() {
                    handler::apply_spin_update(&mut state, generation, update);
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    // ── teardown ──────────────────────────────────────────────
    // Dropping the state drops any pending acknowledgement, which ends a
    // spin that is still waiting on the popup.
    drop(state);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
