//! tcb-tui - Terminal UI for Test Command Builder
//!
//! Adds ratatui rendering, crossterm event polling and the event loop on top
//! of the state and handlers in tcb-app.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
