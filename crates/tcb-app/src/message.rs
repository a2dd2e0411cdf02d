//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use tcb_core::{Params, Record};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (notification expiry)
    Tick,

    /// Request to quit (may ask for confirmation)
    RequestQuit,

    /// Force quit without confirmation (Ctrl+C, signal handler)
    Quit,

    /// Confirm quit from confirmation dialog
    ConfirmQuit,

    /// Cancel quit from confirmation dialog
    CancelQuit,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Move focus to the next panel
    FocusNext,
    /// Move focus to the previous panel
    FocusPrevious,
    SelectUp,
    SelectDown,
    SelectFirst,
    SelectLast,
    /// Show or hide the command preview
    TogglePreview,

    // ─────────────────────────────────────────────────────────
    // Document Merge Messages
    // ─────────────────────────────────────────────────────────
    /// A record editor produced a replacement for the record at `index`
    RecordChanged { index: usize, record: Record },
    /// The parameter editor produced a replacement mapping
    ParamsChanged { params: Params },

    // ─────────────────────────────────────────────────────────
    // Record Messages
    // ─────────────────────────────────────────────────────────
    /// Append a generated field to the selected record
    AddField,
    /// Remove the selected field
    RemoveField,
    /// Flip the selected flag field
    ToggleFlag,
    /// Switch the selected field between text and flag
    ConvertFieldType,
    /// Append a new test case built from the configured template
    AddRecord,
    /// Remove the selected test case
    RemoveRecord,

    // ─────────────────────────────────────────────────────────
    // Parameter Messages
    // ─────────────────────────────────────────────────────────
    AddParam,
    RemoveParam,

    // ─────────────────────────────────────────────────────────
    // Edit Buffer Messages
    // ─────────────────────────────────────────────────────────
    /// Start renaming the selected record id, field or parameter
    StartRename,
    /// Start editing the selected text value
    StartValueEdit,
    /// Type a character into the edit buffer
    EditInput(char),
    /// Delete the last character of the edit buffer
    EditBackspace,
    /// Clear the edit buffer
    EditClear,
    /// Apply a pending rename / leave value editing
    CommitEdit,
    /// Discard a pending rename / leave value editing
    CancelEdit,

    // ─────────────────────────────────────────────────────────
    // Clipboard Messages
    // ─────────────────────────────────────────────────────────
    /// Copy the compact command to the clipboard
    CopyCommand,
    /// Load a command from the clipboard
    PasteCommand,
    /// Clipboard write finished
    ClipboardWritten,
    /// Clipboard write failed
    ClipboardWriteFailed { error: String },
    /// Clipboard text is available
    ClipboardRead { text: String },
    /// Clipboard read failed
    ClipboardReadFailed { error: String },

    /// Dismiss the oldest notification
    DismissNotification,
}
