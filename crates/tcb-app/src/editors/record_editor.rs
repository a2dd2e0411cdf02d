//! Record editor operations.
//!
//! Each function takes the current record snapshot and returns the complete
//! replacement record, or `None` when nothing changes.

use tcb_core::{next_field_name, FieldValue, Record};

use super::{normalize_candidate, rekey, RenameOutcome};

/// Replace the value of `field`. The new value must have the same kind
/// (text or flag) as the existing one.
pub fn edit_value(record: &Record, field: &str, value: FieldValue) -> Option<Record> {
    let current = record.field(field)?;
    if !current.same_kind(&value) || *current == value {
        return None;
    }
    let mut next = record.clone();
    next.fields.insert(field.to_string(), value);
    Some(next)
}

/// Flip a flag field. Text fields are left alone.
pub fn toggle_flag(record: &Record, field: &str) -> Option<Record> {
    let flag = record.field(field)?.as_flag()?;
    edit_value(record, field, FieldValue::Flag(!flag))
}

/// Commit a rename of the record's identifier.
///
/// Identifiers may repeat across the document, so this never collides.
pub fn rename_record(record: &Record, candidate: &str) -> RenameOutcome<Record> {
    match normalize_candidate(candidate) {
        Some(id) if id != record.id => {
            RenameOutcome::Renamed(Record::with_fields(id, record.fields.clone()))
        }
        _ => RenameOutcome::Unchanged,
    }
}

/// Commit a rename of one field; the renamed field moves to the end
pub fn rename_field(record: &Record, field: &str, candidate: &str) -> RenameOutcome<Record> {
    rekey(&record.fields, field, candidate)
        .map(|fields| Record::with_fields(record.id.clone(), fields))
}

/// Append a field with a generated name and an empty text value.
///
/// Returns the new record together with the generated name.
pub fn add_field(record: &Record) -> (Record, String) {
    let name = next_field_name(&record.fields);
    let mut next = record.clone();
    next.fields.insert(name.clone(), FieldValue::text(""));
    (next, name)
}

/// Remove `field`, keeping the order of the rest
pub fn remove_field(record: &Record, field: &str) -> Option<Record> {
    if !record.fields.contains_key(field) {
        return None;
    }
    let mut next = record.clone();
    next.fields.shift_remove(field);
    Some(next)
}

/// Switch `field` between text and flag in place
pub fn convert_field(record: &Record, field: &str) -> Option<Record> {
    let converted = record.field(field)?.converted();
    let mut next = record.clone();
    next.fields.insert(field.to_string(), converted);
    Some(next)
}
