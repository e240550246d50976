//! Application configuration — fixed wheel settings and key bindings.
//!
//! Nothing is read from disk: `WheelConfig` is built once at startup and
//! handed to the controller and the view.

use std::collections::HashMap;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::geometry::WheelGeometry;
use crate::core::render::Palette;

// ───────────────────────────────────────── wheel ─────────────

/// Timing of the cosmetic spin animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationConfig {
    pub steps: u32,
    pub step_delay: Duration,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            steps: 20,
            step_delay: Duration::from_millis(100),
        }
    }
}

/// Every user-visible string on the wheel screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub window_title: &'static str,
    pub heading: &'static str,
    pub subtitle: &'static str,
    pub prompt: &'static str,
    pub spin_started: &'static str,
    /// Alternating animation frames; step `i` shows `spin_frames[i % 2]`.
    pub spin_frames: [&'static str; 2],
    pub trigger_initial: &'static str,
    pub trigger_busy: &'static str,
    pub trigger_again: &'static str,
    pub result_title: &'static str,
    pub result_intro: &'static str,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            window_title: "NBA Team Wheel - For George and Frankie!",
            heading: "NBA Team Wheel",
            subtitle: "For George and Frankie!",
            prompt: "Click 'Spin the Wheel' to start!",
            spin_started: "🎯 Spinning the wheel... 🎯",
            spin_frames: ["🎯 Spinning... 🎯", "🎯 ... Spinning ... 🎯"],
            trigger_initial: "🎯 SPIN THE WHEEL! 🎯",
            trigger_busy: "Spinning...",
            trigger_again: "🎯 SPIN AGAIN! 🎯",
            result_title: "Result!",
            result_intro: "The wheel landed on:",
        }
    }
}

impl Labels {
    pub fn spin_frame(&self, step: u32) -> &'static str {
        self.spin_frames[(step % 2) as usize]
    }
}

/// Immutable settings shared by the controller and the view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WheelConfig {
    pub geometry: WheelGeometry,
    pub palette: Palette,
    pub animation: AnimationConfig,
    pub labels: Labels,
    /// Seed for the selection RNG; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

// ───────────────────────────────────────── actions ───────────

/// All user actions on the wheel screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Spin,
    Dismiss,
    Quit,
}

impl Action {
    /// Human-readable label for the UI.
    pub fn label(self) -> &'static str {
        match self {
            Action::Spin => "spin",
            Action::Dismiss => "ok",
            Action::Quit => "quit",
        }
    }
}

// ───────────────────────────────────────── key bind ──────────

/// A single key binding — key code + modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Does this binding match a key event?  Only CTRL/ALT/SHIFT modifiers
    /// are compared (platform-specific modifiers like SUPER are ignored).
    pub fn matches(&self, event: KeyEvent) -> bool {
        let mask = KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT;
        self.code == event.code && (self.modifiers & mask) == (event.modifiers & mask)
    }

    /// User-friendly display string (e.g. `"Space"`, `"Ctrl+c"`, `"q"`).
    pub fn display(&self) -> String {
        let mut s = String::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            s.push_str("Ctrl+");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            s.push_str("Alt+");
        }
        s.push_str(&match self.code {
            KeyCode::Char(' ') => "Space".into(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "Enter".into(),
            KeyCode::Esc => "Esc".into(),
            other => format!("{other:?}"),
        });
        s
    }
}

// ───────────────────────────────────────── key map ───────────

/// Key bindings per action.
pub struct KeyMap {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
}

impl Default for KeyMap {
    fn default() -> Self {
        use Action::*;
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let mut m = HashMap::new();

        m.insert(Spin, vec![KeyBind::new(Char(' '), n), KeyBind::new(Enter, n), KeyBind::new(Char('s'), n)]);
        m.insert(Dismiss, vec![KeyBind::new(Enter, n), KeyBind::new(Esc, n), KeyBind::new(Char(' '), n)]);
        m.insert(Quit, vec![KeyBind::new(Char('q'), n), KeyBind::new(Esc, n)]);

        Self { bindings: m }
    }
}

impl KeyMap {
    /// Whether `event` is bound to `action`.  Several actions share keys
    /// (Enter spins when idle and dismisses the result popup), so the caller
    /// asks about the actions that make sense in its current view.
    pub fn is(&self, action: Action, event: KeyEvent) -> bool {
        self.bindings
            .get(&action)
            .is_some_and(|binds| binds.iter().any(|b| b.matches(event)))
    }

    /// Short display of the first binding only (for the status bar).
    fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => binds[0].display(),
            _ => "?".into(),
        }
    }

    /// Build the status-bar hint string from current bindings.
    pub fn status_bar_hint(&self) -> String {
        format!(
            "{}: {} | {}: {}",
            self.short_binding(Action::Spin),
            Action::Spin.label(),
            self.short_binding(Action::Quit),
            Action::Quit.label(),
        )
    }

    /// Hint shown inside the result popup.
    pub fn dismiss_hint(&self) -> String {
        format!("{}: {}", self.short_binding(Action::Dismiss), Action::Dismiss.label())
    }
}
