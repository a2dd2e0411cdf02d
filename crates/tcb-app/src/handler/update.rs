//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use crate::message::Message;
use crate::state::AppState;

use super::{clipboard, editing, keys::handle_key, params, records, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Quit => {
            state.force_quit();
            UpdateResult::none()
        }

        Message::ConfirmQuit => {
            state.confirm_quit();
            UpdateResult::none()
        }

        Message::CancelQuit => {
            state.cancel_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.notifications.expire(Instant::now());
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusNext | Message::FocusPrevious => {
            // Two panels, so both directions land on the other one
            state.focus = state.focus.next();
            UpdateResult::none()
        }
        Message::SelectUp => {
            state.select_up();
            UpdateResult::none()
        }
        Message::SelectDown => {
            state.select_down();
            UpdateResult::none()
        }
        Message::SelectFirst => {
            state.select_first();
            UpdateResult::none()
        }
        Message::SelectLast => {
            state.select_last();
            UpdateResult::none()
        }
        Message::TogglePreview => {
            state.show_preview = !state.show_preview;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Document Merge Messages
        // ─────────────────────────────────────────────────────────
        Message::RecordChanged { index, record } => {
            records::handle_record_changed(state, index, record)
        }
        Message::ParamsChanged { params } => params::handle_params_changed(state, params),

        // ─────────────────────────────────────────────────────────
        // Record Messages
        // ─────────────────────────────────────────────────────────
        Message::AddField => records::handle_add_field(state),
        Message::RemoveField => records::handle_remove_field(state),
        Message::ToggleFlag => records::handle_toggle_flag(state),
        Message::ConvertFieldType => records::handle_convert_field(state),
        Message::AddRecord => records::handle_add_record(state),
        Message::RemoveRecord => records::handle_remove_record(state),

        // ─────────────────────────────────────────────────────────
        // Parameter Messages
        // ─────────────────────────────────────────────────────────
        Message::AddParam => params::handle_add_param(state),
        Message::RemoveParam => params::handle_remove_param(state),

        // ─────────────────────────────────────────────────────────
        // Edit Buffer Messages
        // ─────────────────────────────────────────────────────────
        Message::StartRename => editing::handle_start_rename(state),
        Message::StartValueEdit => editing::handle_start_value_edit(state),
        Message::EditInput(c) => editing::handle_edit_input(state, c),
        Message::EditBackspace => editing::handle_edit_backspace(state),
        Message::EditClear => editing::handle_edit_clear(state),
        Message::CommitEdit => editing::handle_commit_edit(state),
        Message::CancelEdit => editing::handle_cancel_edit(state),

        // ─────────────────────────────────────────────────────────
        // Clipboard Messages
        // ─────────────────────────────────────────────────────────
        Message::CopyCommand => clipboard::handle_copy(state),
        Message::PasteCommand => clipboard::handle_paste(state),
        Message::ClipboardWritten => clipboard::handle_written(state),
        Message::ClipboardWriteFailed { error } => clipboard::handle_write_failed(state, error),
        Message::ClipboardRead { text } => clipboard::handle_read(state, &text),
        Message::ClipboardReadFailed { error } => clipboard::handle_read_failed(state, error),

        Message::DismissNotification => {
            state.notifications.dismiss();
            UpdateResult::none()
        }
    }
}
