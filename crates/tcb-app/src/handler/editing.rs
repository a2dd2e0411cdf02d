//! Edit buffer handlers.
//!
//! Renames are staged in the buffer and applied on commit. Value edits are
//! applied on every keystroke, so commit and cancel only leave edit mode.

use tcb_core::prelude::*;
use tcb_core::FieldValue;

use crate::editors::{param_editor, record_editor, RenameOutcome};
use crate::message::Message;
use crate::notification::Notification;
use crate::state::{AppState, EditSession, EditTarget, Focus, RecordCursor};

use super::UpdateResult;

/// Begin renaming the selected record id, field or parameter.
/// The buffer starts out holding the current name.
pub fn handle_start_rename(state: &mut AppState) -> UpdateResult {
    let target = match state.focus {
        Focus::Records => match state.selected_field() {
            Some((record, field, _)) => Some((
                EditTarget::FieldName {
                    record,
                    field: field.to_string(),
                },
                field.to_string(),
            )),
            None => state
                .selected_record()
                .map(|(record, r)| (EditTarget::RecordId { record }, r.id.clone())),
        },
        Focus::Params => state
            .selected_param()
            .map(|(key, _)| (EditTarget::ParamKey { key: key.to_string() }, key.to_string())),
    };

    if let Some((target, buffer)) = target {
        state.start_edit(target, buffer);
    }
    UpdateResult::none()
}

/// Begin editing the selected text value. Flags are toggled instead.
pub fn handle_start_value_edit(state: &mut AppState) -> UpdateResult {
    let target = match state.focus {
        Focus::Records => match state.selected_field() {
            Some((_, _, FieldValue::Flag(_))) => return UpdateResult::message(Message::ToggleFlag),
            Some((record, field, FieldValue::Text(text))) => Some((
                EditTarget::FieldValue {
                    record,
                    field: field.to_string(),
                },
                text.clone(),
            )),
            None => None,
        },
        Focus::Params => state.selected_param().map(|(key, value)| {
            (
                EditTarget::ParamValue {
                    key: key.to_string(),
                },
                value.to_string(),
            )
        }),
    };

    if let Some((target, buffer)) = target {
        state.start_edit(target, buffer);
    }
    UpdateResult::none()
}

pub fn handle_edit_input(state: &mut AppState, c: char) -> UpdateResult {
    edit_buffer(state, |buffer| buffer.push(c))
}

pub fn handle_edit_backspace(state: &mut AppState) -> UpdateResult {
    edit_buffer(state, |buffer| {
        buffer.pop();
    })
}

pub fn handle_edit_clear(state: &mut AppState) -> UpdateResult {
    edit_buffer(state, String::clear)
}

/// Apply `f` to the buffer, then push value edits straight through
fn edit_buffer(state: &mut AppState, f: impl FnOnce(&mut String)) -> UpdateResult {
    let Some(session) = state.edit.as_mut() else {
        return UpdateResult::none();
    };
    f(&mut session.buffer);

    match live_value_edit(state) {
        Some(msg) => UpdateResult::message(msg),
        None => UpdateResult::none(),
    }
}

/// Replacement message for a value edit target, if the value changed
fn live_value_edit(state: &AppState) -> Option<Message> {
    let session = state.edit.as_ref()?;
    match &session.target {
        EditTarget::FieldValue { record, field } => {
            let current = state.document.record(*record)?;
            record_editor::edit_value(current, field, FieldValue::text(session.buffer.as_str()))
                .map(|updated| Message::RecordChanged {
                    index: *record,
                    record: updated,
                })
        }
        EditTarget::ParamValue { key } => {
            param_editor::edit_value(&state.document.params, key, &session.buffer)
                .map(|params| Message::ParamsChanged { params })
        }
        _ => None,
    }
}

/// Leave edit mode, applying a pending rename
pub fn handle_commit_edit(state: &mut AppState) -> UpdateResult {
    let Some(EditSession { target, buffer }) = state.end_edit() else {
        return UpdateResult::none();
    };

    match target {
        EditTarget::RecordId { record: index } => {
            let Some(record) = state.document.record(index) else {
                return UpdateResult::none();
            };
            match record_editor::rename_record(record, &buffer) {
                RenameOutcome::Renamed(record) => {
                    debug!("Renamed test case {} to {}", index, record.id);
                    UpdateResult::message(Message::RecordChanged { index, record })
                }
                RenameOutcome::Unchanged | RenameOutcome::Collision { .. } => {
                    UpdateResult::none()
                }
            }
        }

        EditTarget::FieldName {
            record: index,
            field,
        } => {
            let Some(record) = state.document.record(index) else {
                return UpdateResult::none();
            };
            match record_editor::rename_field(record, &field, &buffer) {
                RenameOutcome::Renamed(record) => {
                    if let Some(name) = record.fields.keys().last() {
                        state.record_cursor = RecordCursor::field(index, name.clone());
                    }
                    UpdateResult::message(Message::RecordChanged { index, record })
                }
                RenameOutcome::Unchanged => UpdateResult::none(),
                RenameOutcome::Collision { name } => {
                    warn!("Rejected rename of field {} to existing {}", field, name);
                    state.notify(
                        Notification::warning("Name already in use")
                            .with_body(format!("Field `{name}` already exists in this test case")),
                    );
                    UpdateResult::none()
                }
            }
        }

        EditTarget::ParamKey { key } => {
            match param_editor::rename_key(&state.document.params, &key, &buffer) {
                RenameOutcome::Renamed(params) => {
                    state.param_cursor = params.keys().last().cloned();
                    UpdateResult::message(Message::ParamsChanged { params })
                }
                RenameOutcome::Unchanged => UpdateResult::none(),
                RenameOutcome::Collision { name } => {
                    warn!("Rejected rename of parameter {} to existing {}", key, name);
                    state.notify(
                        Notification::warning("Name already in use")
                            .with_body(format!("Parameter `{name}` already exists")),
                    );
                    UpdateResult::none()
                }
            }
        }

        // Value edits were applied as they were typed
        EditTarget::FieldValue { .. } | EditTarget::ParamValue { .. } => UpdateResult::none(),
    }
}

/// Leave edit mode; a pending rename is discarded
pub fn handle_cancel_edit(state: &mut AppState) -> UpdateResult {
    state.end_edit();
    UpdateResult::none()
}
