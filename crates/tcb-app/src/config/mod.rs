//! Configuration file parsing for Test Command Builder
//!
//! Supports `<config_dir>/test-command-builder/config.toml` (or an explicit
//! `--config` path). A missing or invalid file falls back to defaults.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings, DEFAULT_CONFIG};
pub use types::*;
