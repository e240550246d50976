//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the *core* data structures and turns them into cells on
//! the terminal.  No spin logic happens here.

pub mod button;
pub mod layout;
pub mod popup;
pub mod result_line;
pub mod spinner;
pub mod theme;
pub mod wheel_widget;
