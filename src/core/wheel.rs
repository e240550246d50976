//! Spin state machine and random selection.
//!
//! ```text
//! Idle --begin_spin--> Spinning --land--> Selecting --finish--> Idle
//! ```
//!
//! Only `begin_spin` is guarded: calling it while a spin is in flight is a
//! no-op.  The other transitions are driven by the controller and report
//! `InvalidTransition` if they arrive out of order.

use rand::Rng;
use thiserror::Error;

use super::catalog::{Catalog, Entry};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WheelError {
    #[error("cannot spin: the catalog is empty")]
    EmptyCatalog,
    #[error("cannot {event} while {from:?}")]
    InvalidTransition { from: Phase, event: &'static str },
}

/// Where the wheel is in its spin cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// Animating; `step` counts completed animation steps.
    Spinning { step: u32 },
    /// A result has been drawn and is awaiting acknowledgement.
    Selecting,
}

/// Ephemeral per-process wheel state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WheelState {
    phase: Phase,
    last_result: Option<Entry>,
    completed_spins: u64,
}

impl WheelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_spinning(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn last_result(&self) -> Option<&Entry> {
        self.last_result.as_ref()
    }

    pub fn completed_spins(&self) -> u64 {
        self.completed_spins
    }

    /// Enter `Spinning`.  Returns `Ok(false)` when a spin is already in
    /// flight (the request is ignored) and `EmptyCatalog` when there is
    /// nothing to land on.
    pub fn begin_spin(&mut self, catalog: &Catalog) -> Result<bool, WheelError> {
        if self.is_spinning() {
            return Ok(false);
        }
        if catalog.is_empty() {
            return Err(WheelError::EmptyCatalog);
        }
        self.phase = Phase::Spinning { step: 0 };
        Ok(true)
    }

    /// Record one finished animation step.
    pub fn advance(&mut self) -> Result<u32, WheelError> {
        match self.phase {
            Phase::Spinning { step } => {
                self.phase = Phase::Spinning { step: step + 1 };
                Ok(step + 1)
            }
            from => Err(WheelError::InvalidTransition { from, event: "advance" }),
        }
    }

    /// Animation finished and `entry` was drawn.
    pub fn land(&mut self, entry: Entry) -> Result<(), WheelError> {
        match self.phase {
            Phase::Spinning { .. } => {
                self.phase = Phase::Selecting;
                self.last_result = Some(entry);
                Ok(())
            }
            from => Err(WheelError::InvalidTransition { from, event: "land" }),
        }
    }

    /// Result acknowledged; back to `Idle`.
    pub fn finish(&mut self) -> Result<(), WheelError> {
        match self.phase {
            Phase::Selecting => {
                self.phase = Phase::Idle;
                self.completed_spins += 1;
                Ok(())
            }
            from => Err(WheelError::InvalidTransition { from, event: "finish" }),
        }
    }
}

/// Draw one entry uniformly at random.  Selection is with replacement:
/// nothing about earlier spins is consulted.
pub fn select_entry<'a, R: Rng + ?Sized>(
    catalog: &'a Catalog,
    rng: &mut R,
) -> Result<&'a Entry, WheelError> {
    if catalog.is_empty() {
        return Err(WheelError::EmptyCatalog);
    }
    let index = rng.random_range(0..catalog.len());
    catalog.get(index).ok_or(WheelError::EmptyCatalog)
}
