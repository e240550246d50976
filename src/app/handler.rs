//! Input handling — maps key/mouse events to state mutations.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use super::spin::SpinUpdate;
use super::state::AppState;
use crate::config::Action;

/// Process a key event.  While the result popup is up it swallows every key
/// except its own dismiss keys.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Ctrl+c always quits, regardless of view.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    if state.screen.popup.is_some() {
        if state.keys.is(Action::Dismiss, key) {
            state.screen.dismiss();
        }
        return;
    }

    if state.keys.is(Action::Spin, key) {
        request_spin(state);
    } else if state.keys.is(Action::Quit, key) {
        state.should_quit = true;
    }
}

/// Left click on the trigger spins; any left click dismisses the popup.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    if state.screen.popup.is_some() {
        state.screen.dismiss();
        return;
    }
    if state
        .trigger_area
        .contains(Position::new(mouse.column, mouse.row))
    {
        request_spin(state);
    }
}

/// Ask the controller for a spin.  A disabled trigger makes this a no-op.
pub fn request_spin(state: &mut AppState) {
    if !state.screen.trigger.enabled {
        return;
    }
    if let Err(err) = state.controller.spin(&mut state.screen) {
        tracing::warn!("spin refused: {err}");
    }
}

/// Feed one message from the spin task back into the controller.
pub fn apply_spin_update(state: &mut AppState, generation: u64, update: SpinUpdate) {
    if let Err(err) = state.controller.apply(generation, update, &mut state.screen) {
        tracing::warn!(generation, "spin update rejected: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::spin::SpinMessage;
    use crate::app::view::{TextKind, Trigger};
    use crate::config::WheelConfig;
    use crate::core::catalog::Catalog;
    use crate::core::wheel::Phase;
    use ratatui::layout::Rect;
    use std::sync::Arc;
    use tokio::sync::mpsc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Press)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn app(catalog: Catalog) -> (AppState, mpsc::UnboundedReceiver<SpinMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let config = WheelConfig {
            seed: Some(99),
            ..WheelConfig::default()
        };
        (AppState::new(Arc::new(catalog), config, tx), rx)
    }

    async fn pump_until_popup(state: &mut AppState, rx: &mut mpsc::UnboundedReceiver<SpinMessage>) {
        while state.screen.popup.is_none() {
            let (generation, update) = rx.recv().await.unwrap();
            apply_spin_update(state, generation, update);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn space_spin_then_enter_dismiss_end_to_end() {
        let (mut state, mut rx) = app(Catalog::nba());

        handle_key(&mut state, key(KeyCode::Char(' ')));
        assert_eq!(state.screen.trigger, Trigger::busy("Spinning..."));
        assert!(matches!(state.controller.wheel().phase(), Phase::Spinning { .. }));

        pump_until_popup(&mut state, &mut rx).await;
        assert_eq!(state.controller.wheel().phase(), Phase::Selecting);

        // Keys other than dismiss keys are swallowed by the popup.
        handle_key(&mut state, key(KeyCode::Char('q')));
        assert!(!state.should_quit);
        assert!(state.screen.popup.is_some());

        handle_key(&mut state, key(KeyCode::Enter));
        assert!(state.screen.popup.is_none());
        let (generation, update) = rx.recv().await.unwrap();
        apply_spin_update(&mut state, generation, update);

        let result = state.controller.wheel().last_result().cloned().unwrap();
        assert_eq!(state.controller.wheel().phase(), Phase::Idle);
        assert!(state.controller.catalog().contains(&result));
        assert_eq!(state.screen.text.text, result.label);
        assert_eq!(state.screen.text.color, Some(result.color));
        assert_eq!(state.screen.trigger, Trigger::ready("🎯 SPIN AGAIN! 🎯"));
        assert_eq!(
            state.session_summary(),
            Some(format!("spins: 1 | last: {}", result.label))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn clicking_the_trigger_spins_and_click_dismisses() {
        let (mut state, mut rx) = app(Catalog::nba());
        state.trigger_area = Rect::new(10, 20, 30, 3);

        handle_mouse(&mut state, click(0, 0));
        assert_eq!(state.controller.wheel().phase(), Phase::Idle);

        handle_mouse(&mut state, click(15, 21));
        assert!(state.controller.wheel().is_spinning());

        // Clicking the disabled trigger again does nothing.
        handle_mouse(&mut state, click(15, 21));

        pump_until_popup(&mut state, &mut rx).await;
        handle_mouse(&mut state, click(0, 0));
        assert!(state.screen.popup.is_none());

        let (generation, update) = rx.recv().await.unwrap();
        apply_spin_update(&mut state, generation, update);
        assert_eq!(state.controller.wheel().completed_spins(), 1);
    }

    #[test]
    fn quit_keys_and_ctrl_c() {
        let (mut state, _rx) = app(Catalog::nba());
        handle_key(&mut state, key(KeyCode::Char('q')));
        assert!(state.should_quit);

        let (mut state, _rx) = app(Catalog::nba());
        handle_key(
            &mut state,
            KeyEvent::new_with_kind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyEventKind::Press),
        );
        assert!(state.should_quit);
    }

    #[test]
    fn key_release_is_ignored() {
        let (mut state, _rx) = app(Catalog::nba());
        handle_key(
            &mut state,
            KeyEvent::new_with_kind(KeyCode::Char('q'), KeyModifiers::NONE, KeyEventKind::Release),
        );
        assert!(!state.should_quit);
    }

    #[test]
    fn empty_catalog_shows_error_and_keeps_trigger() {
        let (mut state, _rx) = app(Catalog::default());
        handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(state.screen.text.kind, TextKind::Error);
        assert_eq!(state.screen.text.text, "cannot spin: the catalog is empty");
        assert!(state.screen.trigger.enabled);
        assert_eq!(state.controller.wheel().phase(), Phase::Idle);
    }
}
