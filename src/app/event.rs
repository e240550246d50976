//! Terminal input for the wheel.
//!
//! A blocking reader on tokio's blocking pool turns crossterm events into
//! `AppEvent`s and emits a `Tick` whenever the terminal stays quiet for one
//! tick period.  The tick drives the busy spinner.

use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, MouseEvent, MouseEventKind};
use tokio::sync::mpsc;

/// What the main loop reacts to.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    /// Button presses only; motion and drags never reach the app.
    Mouse(MouseEvent),
    /// The next draw picks up the new size.
    Resize,
    Tick,
}

impl AppEvent {
    /// Map a raw terminal event, dropping the ones the wheel ignores.
    pub fn from_terminal(ev: CtEvent) -> Option<Self> {
        match ev {
            CtEvent::Key(k) => Some(Self::Key(k)),
            CtEvent::Mouse(m) if matches!(m.kind, MouseEventKind::Down(_)) => Some(Self::Mouse(m)),
            CtEvent::Resize(..) => Some(Self::Resize),
            _ => None,
        }
    }
}

/// Start the reader.  It stops on its own once the receiver is dropped.
pub fn spawn_event_reader(tick_rate: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    // crossterm's poll blocks, so keep it off the async workers.
    tokio::task::spawn_blocking(move || loop {
        let next = match event::poll(tick_rate) {
            Ok(true) => match event::read() {
                Ok(ev) => AppEvent::from_terminal(ev),
                Err(err) => {
                    tracing::warn!("terminal read failed: {err}");
                    None
                }
            },
            Ok(false) => Some(AppEvent::Tick),
            Err(err) => {
                tracing::warn!("terminal poll failed: {err}");
                Some(AppEvent::Tick)
            }
        };
        let Some(app_event) = next else { continue };
        if tx.send(app_event).is_err() {
            break;
        }
    });

    rx
}
