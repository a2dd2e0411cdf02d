//! Copy and paste handlers

use tcb_core::prelude::*;
use tcb_core::PasteError;

use crate::notification::{
    Notification, CLIPBOARD_ERROR_TITLE, COPIED_TITLE, LOADED_TITLE, PARSE_ERROR_TITLE,
    WRONG_FORMAT_TITLE,
};
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Render the compact command and hand it to the clipboard task
pub fn handle_copy(state: &mut AppState) -> UpdateResult {
    match state.codec.render_compact(&state.document) {
        Ok(text) => UpdateResult::action(UpdateAction::WriteClipboard { text }),
        Err(e) => {
            error!("Failed to render command: {}", e);
            state.notify(Notification::error("Could not render command").with_body(e.to_string()));
            UpdateResult::none()
        }
    }
}

pub fn handle_paste(_state: &mut AppState) -> UpdateResult {
    UpdateResult::action(UpdateAction::ReadClipboard)
}

pub fn handle_written(state: &mut AppState) -> UpdateResult {
    state.notify(Notification::success(COPIED_TITLE));
    UpdateResult::none()
}

pub fn handle_write_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!("Clipboard write failed: {}", error);
    state.notify(Notification::error(CLIPBOARD_ERROR_TITLE).with_body(error));
    UpdateResult::none()
}

/// Parse pasted text; the document is only replaced on success
pub fn handle_read(state: &mut AppState, text: &str) -> UpdateResult {
    match state.codec.parse(text) {
        Ok(document) => {
            info!(
                "Loaded command with {} test cases and {} parameters",
                document.records.len(),
                document.params.len()
            );
            state.load_document(document);
            state.notify(Notification::success(LOADED_TITLE));
        }
        Err(PasteError::WrongFormat { marker }) => {
            warn!("Pasted text has no `{}` command", marker);
            state.notify(
                Notification::error(WRONG_FORMAT_TITLE)
                    .with_body(format!("Expected a `{marker} '...'` command")),
            );
        }
        Err(PasteError::Parse(message)) => {
            warn!("Pasted command payload is invalid: {}", message);
            state.notify(Notification::error(PARSE_ERROR_TITLE).with_body(message));
        }
    }
    UpdateResult::none()
}

pub fn handle_read_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!("Clipboard read failed: {}", error);
    state.notify(Notification::error(CLIPBOARD_ERROR_TITLE).with_body(error));
    UpdateResult::none()
}
