//! Application state (Model in TEA pattern)

use std::time::Duration;

use tcb_core::prelude::*;
use tcb_core::{CommandCodec, Document, FieldValue, Record};

use crate::config::Settings;
use crate::notification::{Notification, Notifications};

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Navigating the panels
    #[default]
    Normal,

    /// Keys go to the edit buffer (rename or value edit)
    Editing,

    /// Quit confirmation dialog
    ConfirmQuit,
}

/// Which panel receives navigation and editing keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Records,
    Params,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Records => Focus::Params,
            Focus::Params => Focus::Records,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Focus::Records => "Test Cases",
            Focus::Params => "Parameters",
        }
    }
}

/// One visible row of the test case panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordRow {
    /// The record's identifier row
    Id(usize),
    /// One field of the record
    Field(usize, String),
}

/// Selection in the test case panel, by record position and field name so
/// it follows a field across a rename
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordCursor {
    pub record: usize,
    /// `None` selects the record's id row
    pub field: Option<String>,
}

impl RecordCursor {
    pub fn id(record: usize) -> Self {
        Self {
            record,
            field: None,
        }
    }

    pub fn field(record: usize, field: impl Into<String>) -> Self {
        Self {
            record,
            field: Some(field.into()),
        }
    }

    fn matches(&self, row: &RecordRow) -> bool {
        match row {
            RecordRow::Id(i) => *i == self.record && self.field.is_none(),
            RecordRow::Field(i, name) => {
                *i == self.record && self.field.as_deref() == Some(name.as_str())
            }
        }
    }

    fn from_row(row: &RecordRow) -> Self {
        match row {
            RecordRow::Id(i) => Self::id(*i),
            RecordRow::Field(i, name) => Self::field(*i, name.clone()),
        }
    }
}

/// What the edit buffer is bound to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditTarget {
    RecordId { record: usize },
    FieldName { record: usize, field: String },
    FieldValue { record: usize, field: String },
    ParamKey { key: String },
    ParamValue { key: String },
}

impl EditTarget {
    /// Renames apply on commit; value edits apply on every keystroke
    pub fn is_rename(&self) -> bool {
        matches!(
            self,
            EditTarget::RecordId { .. } | EditTarget::FieldName { .. } | EditTarget::ParamKey { .. }
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            EditTarget::RecordId { .. } => "Rename test case",
            EditTarget::FieldName { .. } => "Rename field",
            EditTarget::FieldValue { .. } => "Edit value",
            EditTarget::ParamKey { .. } => "Rename parameter",
            EditTarget::ParamValue { .. } => "Edit parameter",
        }
    }
}

/// The single in-progress edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub target: EditTarget,
    pub buffer: String,
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone)]
pub struct AppState {
    /// The document being edited
    pub document: Document,

    /// Renders and parses command text
    pub codec: CommandCodec,

    /// Application settings from config file
    pub settings: Settings,

    /// Current UI mode/screen
    pub ui_mode: UiMode,

    /// Focused panel
    pub focus: Focus,

    /// Selection in the test case panel
    pub record_cursor: RecordCursor,

    /// Selected parameter key
    pub param_cursor: Option<String>,

    /// In-progress rename or value edit
    pub edit: Option<EditSession>,

    pub notifications: Notifications,

    /// Whether the command preview panel is visible
    pub show_preview: bool,

    pub phase: AppPhase,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create a new AppState with default settings
    pub fn new() -> Self {
        Self::build(Settings::default(), CommandCodec::default())
    }

    /// Create a new AppState from loaded settings.
    ///
    /// Fails if the configured script path cannot serve as a paste marker.
    pub fn with_settings(settings: Settings) -> Result<Self> {
        let codec = CommandCodec::new(settings.command.template())?;
        Ok(Self::build(settings, codec))
    }

    fn build(settings: Settings, codec: CommandCodec) -> Self {
        let notifications =
            Notifications::new(Duration::from_millis(settings.ui.notification_ms));
        Self {
            document: Document::new(),
            codec,
            ui_mode: UiMode::Normal,
            focus: Focus::Records,
            record_cursor: RecordCursor::default(),
            param_cursor: None,
            edit: None,
            notifications,
            show_preview: settings.ui.show_preview,
            phase: AppPhase::Running,
            settings,
        }
    }

    /// Seed the state with a document (e.g. from `--load`)
    pub fn with_document(mut self, document: Document) -> Self {
        self.load_document(document);
        self
    }

    /// Replace the whole document, resetting selection and any pending edit
    pub fn load_document(&mut self, document: Document) {
        self.document = document;
        self.edit = None;
        if self.ui_mode == UiMode::Editing {
            self.ui_mode = UiMode::Normal;
        }
        self.record_cursor = RecordCursor::default();
        self.param_cursor = self.document.params.keys().next().cloned();
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    // ─────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────

    /// Rows of the test case panel: each id row followed by its fields
    pub fn record_rows(&self) -> Vec<RecordRow> {
        let mut rows = Vec::new();
        for (i, record) in self.document.records.iter().enumerate() {
            rows.push(RecordRow::Id(i));
            rows.extend(
                record
                    .fields
                    .keys()
                    .map(|name| RecordRow::Field(i, name.clone())),
            );
        }
        rows
    }

    /// Position of the selected row in [`record_rows`](Self::record_rows)
    pub fn selected_record_row(&self) -> Option<usize> {
        self.record_rows()
            .iter()
            .position(|row| self.record_cursor.matches(row))
    }

    pub fn is_record_row_selected(&self, row: &RecordRow) -> bool {
        self.record_cursor.matches(row)
    }

    /// Selected record and its position
    pub fn selected_record(&self) -> Option<(usize, &Record)> {
        let index = self.record_cursor.record;
        self.document.record(index).map(|record| (index, record))
    }

    /// Selected field as `(record index, field name, value)`
    pub fn selected_field(&self) -> Option<(usize, &str, &FieldValue)> {
        let (index, record) = self.selected_record()?;
        let name = self.record_cursor.field.as_deref()?;
        let (name, value) = record.fields.get_key_value(name)?;
        Some((index, name.as_str(), value))
    }

    /// Selected parameter as `(key, value)`
    pub fn selected_param(&self) -> Option<(&str, &str)> {
        let key = self.param_cursor.as_deref()?;
        self.document
            .params
            .get_key_value(key)
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn select_up(&mut self) {
        self.select_by(|current, _| current.saturating_sub(1));
    }

    pub fn select_down(&mut self) {
        self.select_by(|current, len| (current + 1).min(len - 1));
    }

    pub fn select_first(&mut self) {
        self.select_by(|_, _| 0);
    }

    pub fn select_last(&mut self) {
        self.select_by(|_, len| len - 1);
    }

    /// Move the focused panel's selection; `step` gets the current position
    /// and the (non-zero) row count
    fn select_by(&mut self, step: impl Fn(usize, usize) -> usize) {
        match self.focus {
            Focus::Records => {
                let rows = self.record_rows();
                if rows.is_empty() {
                    return;
                }
                let current = self.selected_record_row().unwrap_or(0);
                let next = step(current, rows.len());
                self.record_cursor = RecordCursor::from_row(&rows[next]);
            }
            Focus::Params => {
                let len = self.document.params.len();
                if len == 0 {
                    return;
                }
                let current = self
                    .param_cursor
                    .as_deref()
                    .and_then(|key| self.document.params.get_index_of(key))
                    .unwrap_or(0);
                let next = step(current, len);
                self.param_cursor = self
                    .document
                    .params
                    .get_index(next)
                    .map(|(key, _)| key.clone());
            }
        }
    }

    /// Point the cursors at something that exists after a document change
    pub fn repair_cursors(&mut self) {
        let count = self.document.records.len();
        if count == 0 {
            self.record_cursor = RecordCursor::default();
        } else {
            if self.record_cursor.record >= count {
                self.record_cursor = RecordCursor::id(count - 1);
            }
            let record = &self.document.records[self.record_cursor.record];
            if let Some(field) = &self.record_cursor.field {
                if !record.fields.contains_key(field) {
                    self.record_cursor.field = None;
                }
            }
        }

        let param_exists = self
            .param_cursor
            .as_ref()
            .is_some_and(|key| self.document.params.contains_key(key));
        if !param_exists {
            self.param_cursor = self.document.params.keys().next().cloned();
        }
    }

    // ─────────────────────────────────────────────────────────
    // Edit Buffer
    // ─────────────────────────────────────────────────────────

    pub fn start_edit(&mut self, target: EditTarget, buffer: impl Into<String>) {
        self.edit = Some(EditSession {
            target,
            buffer: buffer.into(),
        });
        self.ui_mode = UiMode::Editing;
    }

    /// Leave edit mode, returning the session that was active
    pub fn end_edit(&mut self) -> Option<EditSession> {
        self.ui_mode = UiMode::Normal;
        self.edit.take()
    }

    pub fn is_editing(&self) -> bool {
        self.edit.is_some()
    }

    // ─────────────────────────────────────────────────────────
    // Quit
    // ─────────────────────────────────────────────────────────

    /// Request application quit
    pub fn request_quit(&mut self) {
        if self.settings.behavior.confirm_quit && !self.document.is_empty() {
            self.ui_mode = UiMode::ConfirmQuit;
        } else {
            self.phase = AppPhase::Quitting;
        }
    }

    /// Force quit without confirmation
    pub fn force_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Confirm quit (from confirmation dialog)
    pub fn confirm_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Cancel quit (from confirmation dialog)
    pub fn cancel_quit(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    /// Check if the app should quit
    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
