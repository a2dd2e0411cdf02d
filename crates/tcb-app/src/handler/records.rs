//! Test case and field handlers

use tcb_core::prelude::*;
use tcb_core::Record;

use crate::editors::record_editor;
use crate::message::Message;
use crate::notification::Notification;
use crate::state::{AppState, RecordCursor};

use super::UpdateResult;

/// Merge a replacement record into the document
pub fn handle_record_changed(state: &mut AppState, index: usize, record: Record) -> UpdateResult {
    if state.document.replace_record(index, record) {
        state.repair_cursors();
    }
    UpdateResult::none()
}

pub fn handle_add_field(state: &mut AppState) -> UpdateResult {
    let Some((index, record)) = state.selected_record() else {
        return UpdateResult::none();
    };
    let (record, name) = record_editor::add_field(record);
    debug!("Adding field {} to test case {}", name, index);
    state.record_cursor = RecordCursor::field(index, name);
    UpdateResult::message(Message::RecordChanged { index, record })
}

pub fn handle_remove_field(state: &mut AppState) -> UpdateResult {
    let Some((index, record)) = state.selected_record() else {
        return UpdateResult::none();
    };
    let Some(field) = state.record_cursor.field.as_deref() else {
        return UpdateResult::none();
    };
    let Some(position) = record.fields.get_index_of(field) else {
        return UpdateResult::none();
    };
    let Some(record) = record_editor::remove_field(record, field) else {
        return UpdateResult::none();
    };

    // Select the field that slid into the removed slot, or the id row
    let neighbor = record
        .fields
        .get_index(position.min(record.fields.len().saturating_sub(1)))
        .map(|(name, _)| name.clone());
    state.record_cursor = RecordCursor {
        record: index,
        field: neighbor,
    };
    UpdateResult::message(Message::RecordChanged { index, record })
}

pub fn handle_toggle_flag(state: &mut AppState) -> UpdateResult {
    let Some((index, field, _)) = state.selected_field() else {
        return UpdateResult::none();
    };
    match record_editor::toggle_flag(&state.document.records[index], field) {
        Some(record) => UpdateResult::message(Message::RecordChanged { index, record }),
        None => UpdateResult::none(),
    }
}

pub fn handle_convert_field(state: &mut AppState) -> UpdateResult {
    let Some((index, field, _)) = state.selected_field() else {
        return UpdateResult::none();
    };
    match record_editor::convert_field(&state.document.records[index], field) {
        Some(record) => UpdateResult::message(Message::RecordChanged { index, record }),
        None => UpdateResult::none(),
    }
}

/// Append a test case built from the configured field template
pub fn handle_add_record(state: &mut AppState) -> UpdateResult {
    let index = state
        .document
        .add_record(&state.settings.template.record_fields);
    info!(
        "Added test case {} at position {}",
        state.document.records[index].id, index
    );
    state.record_cursor = RecordCursor::id(index);
    UpdateResult::none()
}

pub fn handle_remove_record(state: &mut AppState) -> UpdateResult {
    let Some((index, _)) = state.selected_record() else {
        return UpdateResult::none();
    };

    if state.settings.behavior.keep_last_record && state.document.records.len() == 1 {
        state.notify(
            Notification::warning("Cannot remove the last test case")
                .with_body("behavior.keep_last_record is enabled"),
        );
        return UpdateResult::none();
    }

    if let Some(removed) = state.document.remove_record(index) {
        info!("Removed test case {} at position {}", removed.id, index);
    }
    state.record_cursor = RecordCursor::id(index);
    state.repair_cursors();
    UpdateResult::none()
}
