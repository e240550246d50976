//! Core logic – the entry catalog, wheel geometry, rendering and selection.
//!
//! Nothing in this module depends on any TUI or rendering crate, so the
//! whole spin cycle can be driven without a terminal.

pub mod catalog;
pub mod geometry;
pub mod render;
pub mod wheel;
