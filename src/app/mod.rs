//! Application orchestration — spin control, state management, and input handling.

pub mod event;
pub mod handler;
pub mod spin;
pub mod state;
pub mod view;
