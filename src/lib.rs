//! Test Command Builder Library
//!
//! A terminal form for assembling `testcase_runner.py` commands. The
//! binary wires configuration, the optional `--load` seed and either the
//! TUI or the headless print mode together.

pub mod headless;
pub mod launch;

// Re-export main entry points
pub use headless::print_command;
pub use launch::{load_command, prepare_state, run_tui, LoadSource};
