//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use std::sync::Arc;

use ratatui::layout::Rect;
use tokio::sync::mpsc;

use super::spin::{SpinController, SpinMessage};
use super::view::{Acknowledgement, InlineText, Trigger, WheelView};
use crate::config::{KeyMap, WheelConfig};
use crate::core::catalog::{Catalog, Entry};
use crate::core::render::{render_wheel, DrawCommand};

/// The result popup while it is on screen.
#[derive(Debug)]
pub struct ResultPopup {
    pub entry: Entry,
    pub ack: Acknowledgement,
}

/// Everything the terminal shows, as driven by the spin controller.
#[derive(Debug)]
pub struct WheelScreen {
    /// Draw commands for the wheel; the catalog is fixed so this is built once.
    pub commands: Vec<DrawCommand>,
    pub text: InlineText,
    pub trigger: Trigger,
    pub popup: Option<ResultPopup>,
}

impl WheelScreen {
    pub fn new(catalog: &Catalog, config: &WheelConfig) -> Self {
        Self {
            commands: render_wheel(catalog.entries(), &config.geometry, &config.palette),
            text: InlineText::status(config.labels.prompt),
            trigger: Trigger::ready(config.labels.trigger_initial),
            popup: None,
        }
    }

    /// Close the popup, letting the running spin finish.
    pub fn dismiss(&mut self) -> bool {
        match self.popup.take() {
            Some(popup) => {
                tracing::debug!(team = %popup.entry.label, "result acknowledged");
                popup.ack.dismiss();
                true
            }
            None => false,
        }
    }
}

impl WheelView for WheelScreen {
    fn show_text(&mut self, text: InlineText) {
        self.text = text;
    }

    fn set_trigger(&mut self, trigger: Trigger) {
        self.trigger = trigger;
    }

    fn present(&mut self, entry: &Entry, ack: Acknowledgement) {
        self.popup = Some(ResultPopup {
            entry: entry.clone(),
            ack,
        });
    }
}

/// Top-level application state.
pub struct AppState {
    pub config: WheelConfig,
    pub keys: KeyMap,
    pub controller: SpinController,
    pub screen: WheelScreen,
    /// Where the trigger button was last drawn, for mouse hit-testing.
    pub trigger_area: Rect,
    /// Monotonically increasing tick counter (drives the busy spinner).
    pub tick: u64,
    /// Controls the main event loop.
    pub should_quit: bool,
}

impl AppState {
    pub fn new(
        catalog: Arc<Catalog>,
        config: WheelConfig,
        spin_tx: mpsc::UnboundedSender<SpinMessage>,
    ) -> Self {
        let screen = WheelScreen::new(&catalog, &config);
        let controller = SpinController::new(catalog, &config, spin_tx);
        Self {
            config,
            keys: KeyMap::default(),
            controller,
            screen,
            trigger_area: Rect::default(),
            tick: 0,
            should_quit: false,
        }
    }

    /// "spins: N | last: Team" once at least one spin has finished.
    pub fn session_summary(&self) -> Option<String> {
        let wheel = self.controller.wheel();
        let last = wheel.last_result()?;
        Some(format!(
            "spins: {} | last: {}",
            wheel.completed_spins(),
            last.label
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::view::TextKind;
    use crate::core::catalog::Rgb;

    #[test]
    fn starts_with_prompt_and_initial_trigger() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let state = AppState::new(Arc::new(Catalog::nba()), WheelConfig::default(), tx);
        assert_eq!(state.screen.text.text, "Click 'Spin the Wheel' to start!");
        assert_eq!(state.screen.text.kind, TextKind::Status);
        assert_eq!(state.screen.trigger, Trigger::ready("🎯 SPIN THE WHEEL! 🎯"));
        assert!(state.screen.popup.is_none());
        // Clear + 30 slices + hub + pointer.
        assert_eq!(state.screen.commands.len(), 33);
        assert_eq!(state.session_summary(), None);
    }

    #[tokio::test]
    async fn dismiss_releases_the_waiting_spin() {
        let mut screen = WheelScreen::new(&Catalog::nba(), &WheelConfig::default());
        let (ack, rx) = Acknowledgement::new();
        screen.present(&Entry::new("Utah Jazz", Rgb::from_u32(0x002B5C)), ack);
        assert!(screen.popup.is_some());

        assert!(screen.dismiss());
        assert!(screen.popup.is_none());
        assert!(rx.await.is_ok());
        assert!(!screen.dismiss());
    }
}
