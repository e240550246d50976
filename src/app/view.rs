//! The seam between the spin controller and whatever displays it.
//!
//! The controller only ever talks to a `WheelView`; the terminal screen is
//! one implementation, tests plug in a recorder.

use tokio::sync::oneshot;

use crate::core::catalog::{Entry, Rgb};

/// The inline text region under the wheel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineText {
    pub text: String,
    /// `None` uses the theme's default text colour.
    pub color: Option<Rgb>,
    pub kind: TextKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    Status,
    Result,
    Error,
}

impl InlineText {
    pub fn status(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            kind: TextKind::Status,
        }
    }

    /// The entry's label in the entry's colour.
    pub fn result(entry: &Entry) -> Self {
        Self {
            text: entry.label.clone(),
            color: Some(entry.color),
            kind: TextKind::Result,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            kind: TextKind::Error,
        }
    }
}

/// The spin button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trigger {
    pub label: &'static str,
    pub enabled: bool,
}

impl Trigger {
    pub fn ready(label: &'static str) -> Self {
        Self { label, enabled: true }
    }

    pub fn busy(label: &'static str) -> Self {
        Self { label, enabled: false }
    }
}

/// Handle the view holds while the result popup is up.  Dismissing it lets
/// the spin finish; dropping it abandons the spin.
#[derive(Debug)]
pub struct Acknowledgement {
    tx: oneshot::Sender<()>,
}

impl Acknowledgement {
    /// A fresh acknowledgement and the receiver the spin task awaits.
    pub fn new() -> (Self, oneshot::Receiver<()>) {
        let (tx, rx) = oneshot::channel();
        (Self { tx }, rx)
    }

    pub fn dismiss(self) {
        // The spin task may already be gone (superseded or shut down).
        let _ = self.tx.send(());
    }
}

/// Anything that can show the wheel's text, trigger and result popup.
pub trait WheelView {
    fn show_text(&mut self, text: InlineText);
    fn set_trigger(&mut self, trigger: Trigger);
    /// Show the blocking result popup until `ack` is dismissed.
    fn present(&mut self, entry: &Entry, ack: Acknowledgement);
}
