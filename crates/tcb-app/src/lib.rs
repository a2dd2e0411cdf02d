//! tcb-app - Application state and orchestration for Test Command Builder
//!
//! This crate implements the TEA (The Elm Architecture) pattern: [`AppState`]
//! is the model, [`Message`] the events, and [`handler::update`] the single
//! place where state changes. Record and parameter editing lives in
//! [`editors`] as pure functions whose results are merged by the update loop.
//! Configuration loading and the clipboard bridge live here too.

pub mod actions;
pub mod clipboard;
pub mod config;
pub mod editors;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod notification;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard, SystemClipboard};
pub use config::Settings;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use notification::{Notification, NotificationLevel};
pub use state::AppState;
