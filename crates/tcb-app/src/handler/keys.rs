//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Normal => handle_key_normal(state, key),
        UiMode::Editing => handle_key_editing(key),
        UiMode::ConfirmQuit => handle_key_confirm_quit(key),
    }
}

/// Handle key events in the quit confirmation dialog
fn handle_key_confirm_quit(key: InputKey) -> Option<Message> {
    match key {
        // 'q' allows double-tap "qq" as quick quit shortcut
        InputKey::Char('y' | 'Y' | 'q') | InputKey::Enter => Some(Message::ConfirmQuit),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelQuit),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events while the edit buffer is active
fn handle_key_editing(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::CommitEdit),
        InputKey::Esc => Some(Message::CancelEdit),
        InputKey::Backspace => Some(Message::EditBackspace),
        InputKey::CharCtrl('u') => Some(Message::EditClear),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char(c) => Some(Message::EditInput(c)),
        _ => None,
    }
}

/// Handle key events in normal mode
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::RequestQuit),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Esc if !state.notifications.is_empty() => Some(Message::DismissNotification),

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        InputKey::Tab => Some(Message::FocusNext),
        InputKey::BackTab => Some(Message::FocusPrevious),
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::SelectFirst),
        InputKey::End | InputKey::Char('G') => Some(Message::SelectLast),
        InputKey::Char('p') => Some(Message::TogglePreview),

        // ─────────────────────────────────────────────────────────
        // Editing
        // ─────────────────────────────────────────────────────────
        InputKey::Enter => activate_selection(state),
        InputKey::Char('r') => Some(Message::StartRename),
        InputKey::Char('e') => Some(Message::StartValueEdit),
        InputKey::Char(' ') => Some(Message::ToggleFlag),
        InputKey::Char('a') => Some(match state.focus {
            Focus::Records => Message::AddField,
            Focus::Params => Message::AddParam,
        }),
        InputKey::Char('d') | InputKey::Delete => Some(match state.focus {
            Focus::Records => Message::RemoveField,
            Focus::Params => Message::RemoveParam,
        }),
        InputKey::Char('t') if state.focus == Focus::Records => Some(Message::ConvertFieldType),
        InputKey::Char('n') => Some(Message::AddRecord),
        InputKey::Char('D') => Some(Message::RemoveRecord),

        // ─────────────────────────────────────────────────────────
        // Clipboard
        // ─────────────────────────────────────────────────────────
        InputKey::Char('c') => Some(Message::CopyCommand),
        InputKey::Char('v') => Some(Message::PasteCommand),

        _ => None,
    }
}

/// Enter on a row: rename an id row, toggle a flag, edit anything else
fn activate_selection(state: &AppState) -> Option<Message> {
    match state.focus {
        Focus::Records => {
            if let Some((_, _, value)) = state.selected_field() {
                if value.is_flag() {
                    Some(Message::ToggleFlag)
                } else {
                    Some(Message::StartValueEdit)
                }
            } else if state.selected_record().is_some() {
                Some(Message::StartRename)
            } else {
                None
            }
        }
        Focus::Params => state
            .selected_param()
            .map(|_| Message::StartValueEdit),
    }
}
