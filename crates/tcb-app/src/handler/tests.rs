//! Tests for handler module

use super::*;
use crate::config::Settings;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::notification::{NotificationLevel, COPIED_TITLE, LOADED_TITLE};
use crate::state::{AppPhase, AppState, EditTarget, Focus, RecordCursor, UiMode};
use tcb_core::{Document, FieldValue, Params, Record};

fn sample_document() -> Document {
    let mut doc = Document::new();
    doc.records.push(
        Record::new("0004_test")
            .with_field("wallet_id", "50183990")
            .with_field("provider", "35455365")
            .with_field("status", true),
    );
    doc.records
        .push(Record::new("0006_test").with_field("skip_test", "False"));
    doc.params.insert("environment".into(), "dev4".into());
    doc
}

fn sample_state() -> AppState {
    AppState::new().with_document(sample_document())
}

fn state_with(settings: Settings) -> AppState {
    AppState::with_settings(settings)
        .unwrap()
        .with_document(sample_document())
}

/// Run a message and all follow-ups, returning the last action produced
fn dispatch(state: &mut AppState, message: Message) -> Option<UpdateAction> {
    let mut action = None;
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);
        if result.action.is_some() {
            action = result.action;
        }
        msg = result.message;
    }
    action
}

fn press(state: &mut AppState, key: InputKey) -> Option<UpdateAction> {
    dispatch(state, Message::Key(key))
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        press(state, InputKey::Char(c));
    }
}

fn field_names(record: &Record) -> Vec<&str> {
    record.fields.keys().map(String::as_str).collect()
}

fn latest_title(state: &AppState) -> Option<&str> {
    state.notifications.latest().map(|n| n.title.as_str())
}

// ─────────────────────────────────────────────────────────
// Quit
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::new();
    assert_ne!(state.phase, AppPhase::Quitting);

    update(&mut state, Message::Quit);

    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_q_key_produces_request_quit_message() {
    let state = AppState::new();
    let result = handle_key(&state, InputKey::Char('q'));
    assert!(matches!(result, Some(Message::RequestQuit)));
}

#[test]
fn test_ctrl_c_produces_quit_message_in_every_mode() {
    let mut state = sample_state();
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));

    state.start_edit(EditTarget::RecordId { record: 0 }, "0004_test");
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));
}

#[test]
fn test_escape_without_notifications_does_nothing() {
    let state = AppState::new();
    assert!(handle_key(&state, InputKey::Esc).is_none());
}

#[test]
fn test_confirm_quit_dialog_flow() {
    let mut settings = Settings::default();
    settings.behavior.confirm_quit = true;
    let mut state = state_with(settings);

    press(&mut state, InputKey::Char('q'));
    assert_eq!(state.ui_mode, UiMode::ConfirmQuit);

    press(&mut state, InputKey::Char('n'));
    assert_eq!(state.ui_mode, UiMode::Normal);
    assert!(!state.should_quit());

    press(&mut state, InputKey::Char('q'));
    press(&mut state, InputKey::Char('y'));
    assert!(state.should_quit());
}

// ─────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────

#[test]
fn test_tab_switches_focus() {
    let mut state = sample_state();
    press(&mut state, InputKey::Tab);
    assert_eq!(state.focus, Focus::Params);
    press(&mut state, InputKey::BackTab);
    assert_eq!(state.focus, Focus::Records);
}

#[test]
fn test_j_and_k_move_selection() {
    let mut state = sample_state();
    press(&mut state, InputKey::Char('j'));
    assert_eq!(state.record_cursor, RecordCursor::field(0, "wallet_id"));
    press(&mut state, InputKey::Char('k'));
    assert_eq!(state.record_cursor, RecordCursor::id(0));
}

// ─────────────────────────────────────────────────────────
// Merge
// ─────────────────────────────────────────────────────────

#[test]
fn test_record_changed_only_touches_that_position() {
    let mut state = sample_state();
    let before = state.document.clone();
    let replacement = Record::new("0006_test").with_field("skip_test", "True");

    dispatch(
        &mut state,
        Message::RecordChanged {
            index: 1,
            record: replacement.clone(),
        },
    );

    assert_eq!(state.document.records[0], before.records[0]);
    assert_eq!(state.document.records[1], replacement);
    assert_eq!(state.document.params, before.params);
}

#[test]
fn test_record_changed_out_of_range_is_ignored() {
    let mut state = sample_state();
    let before = state.document.clone();
    dispatch(
        &mut state,
        Message::RecordChanged {
            index: 9,
            record: Record::new("x"),
        },
    );
    assert_eq!(state.document, before);
}

#[test]
fn test_params_changed_replaces_mapping() {
    let mut state = sample_state();
    let before = state.document.records.clone();
    let mut params = Params::new();
    params.insert("report_str".into(), "nightly".into());

    dispatch(&mut state, Message::ParamsChanged { params: params.clone() });

    assert_eq!(state.document.params, params);
    assert_eq!(state.document.records, before);
}

// ─────────────────────────────────────────────────────────
// Renames
// ─────────────────────────────────────────────────────────

#[test]
fn test_rename_record_via_keys() {
    let mut state = sample_state();
    let before = state.document.clone();

    press(&mut state, InputKey::Char('r'));
    assert_eq!(state.ui_mode, UiMode::Editing);
    assert_eq!(state.edit.as_ref().unwrap().buffer, "0004_test");

    press(&mut state, InputKey::CharCtrl('u'));
    type_text(&mut state, "0005_test");
    // Renames are not applied until commit
    assert_eq!(state.document, before);

    press(&mut state, InputKey::Enter);

    assert_eq!(state.ui_mode, UiMode::Normal);
    assert!(state.edit.is_none());
    assert_eq!(state.document.records[0].id, "0005_test");
    assert_eq!(state.document.records[0].fields, before.records[0].fields);
    assert_eq!(state.document.records[1], before.records[1]);
}

#[test]
fn test_enter_on_id_row_starts_rename() {
    let mut state = sample_state();
    press(&mut state, InputKey::Enter);
    assert!(matches!(
        state.edit.as_ref().map(|e| &e.target),
        Some(EditTarget::RecordId { record: 0 })
    ));
}

#[test]
fn test_rename_to_empty_is_noop() {
    let mut state = sample_state();
    let before = state.document.clone();

    press(&mut state, InputKey::Char('r'));
    press(&mut state, InputKey::CharCtrl('u'));
    press(&mut state, InputKey::Enter);

    assert_eq!(state.document, before);
    assert!(state.edit.is_none());
    assert!(state.notifications.is_empty());
}

#[test]
fn test_rename_cancel_is_noop() {
    let mut state = sample_state();
    let before = state.document.clone();

    press(&mut state, InputKey::Char('r'));
    type_text(&mut state, "_renamed");
    press(&mut state, InputKey::Esc);

    assert_eq!(state.document, before);
    assert_eq!(state.ui_mode, UiMode::Normal);
}

#[test]
fn test_duplicate_record_ids_are_allowed() {
    let mut state = sample_state();
    press(&mut state, InputKey::Char('r'));
    press(&mut state, InputKey::CharCtrl('u'));
    type_text(&mut state, "0006_test");
    press(&mut state, InputKey::Enter);

    assert_eq!(state.document.records[0].id, "0006_test");
    assert_eq!(state.document.records[1].id, "0006_test");
}

#[test]
fn test_rename_field_moves_to_end_and_cursor_follows() {
    let mut state = sample_state();
    state.record_cursor = RecordCursor::field(0, "wallet_id");

    press(&mut state, InputKey::Char('r'));
    press(&mut state, InputKey::CharCtrl('u'));
    type_text(&mut state, "wallet");
    press(&mut state, InputKey::Enter);

    let record = &state.document.records[0];
    assert_eq!(field_names(record), ["provider", "status", "wallet"]);
    assert_eq!(record.field("wallet"), Some(&FieldValue::text("50183990")));
    assert_eq!(state.record_cursor, RecordCursor::field(0, "wallet"));
}

#[test]
fn test_rename_field_collision_warns_and_keeps_document() {
    let mut state = sample_state();
    let before = state.document.clone();
    state.record_cursor = RecordCursor::field(0, "wallet_id");

    press(&mut state, InputKey::Char('r'));
    press(&mut state, InputKey::CharCtrl('u'));
    type_text(&mut state, "provider");
    press(&mut state, InputKey::Enter);

    assert_eq!(state.document, before);
    let notification = state.notifications.latest().unwrap();
    assert_eq!(notification.level, NotificationLevel::Warning);
    assert!(notification.body.as_deref().unwrap().contains("provider"));
}

#[test]
fn test_rename_param_there_and_back_is_identity() {
    let mut state = sample_state();
    state.document.params.insert("report_str".into(), "x".into());
    let before = state.document.clone();
    state.focus = Focus::Params;
    state.param_cursor = Some("report_str".into());

    for name in ["tmp", "report_str"] {
        press(&mut state, InputKey::Char('r'));
        press(&mut state, InputKey::CharCtrl('u'));
        type_text(&mut state, name);
        press(&mut state, InputKey::Enter);
    }

    assert_eq!(state.document, before);
    assert!(state.document.params.keys().eq(before.params.keys()));
    assert_eq!(state.param_cursor.as_deref(), Some("report_str"));
}

#[test]
fn test_rename_param_collision_warns() {
    let mut state = sample_state();
    state.document.params.insert("report_str".into(), "x".into());
    let before = state.document.clone();
    state.focus = Focus::Params;

    press(&mut state, InputKey::Char('r'));
    press(&mut state, InputKey::CharCtrl('u'));
    type_text(&mut state, "report_str");
    press(&mut state, InputKey::Enter);

    assert_eq!(state.document, before);
    assert_eq!(latest_title(&state), Some("Name already in use"));
}

// ─────────────────────────────────────────────────────────
// Value Editing
// ─────────────────────────────────────────────────────────

#[test]
fn test_value_edit_applies_on_each_keystroke() {
    let mut state = sample_state();
    state.record_cursor = RecordCursor::field(0, "wallet_id");

    press(&mut state, InputKey::Enter);
    press(&mut state, InputKey::CharCtrl('u'));
    assert_eq!(
        state.document.records[0].field("wallet_id"),
        Some(&FieldValue::text(""))
    );

    type_text(&mut state, "77");
    assert_eq!(
        state.document.records[0].field("wallet_id"),
        Some(&FieldValue::text("77"))
    );

    press(&mut state, InputKey::Backspace);
    press(&mut state, InputKey::Esc);
    assert_eq!(
        state.document.records[0].field("wallet_id"),
        Some(&FieldValue::text("7"))
    );
    assert_eq!(state.ui_mode, UiMode::Normal);
}

#[test]
fn test_param_value_edit() {
    let mut state = sample_state();
    state.focus = Focus::Params;

    press(&mut state, InputKey::Enter);
    press(&mut state, InputKey::CharCtrl('u'));
    type_text(&mut state, "staging");
    press(&mut state, InputKey::Enter);

    assert_eq!(state.document.params["environment"], "staging");
}

#[test]
fn test_enter_on_flag_toggles() {
    let mut state = sample_state();
    state.record_cursor = RecordCursor::field(0, "status");

    press(&mut state, InputKey::Enter);

    assert_eq!(state.ui_mode, UiMode::Normal);
    assert_eq!(
        state.document.records[0].field("status"),
        Some(&FieldValue::Flag(false))
    );
}

#[test]
fn test_space_on_text_field_does_nothing() {
    let mut state = sample_state();
    let before = state.document.clone();
    state.record_cursor = RecordCursor::field(0, "wallet_id");
    press(&mut state, InputKey::Char(' '));
    assert_eq!(state.document, before);
}

#[test]
fn test_convert_field_type() {
    let mut state = sample_state();
    state.record_cursor = RecordCursor::field(1, "skip_test");

    press(&mut state, InputKey::Char('t'));
    assert_eq!(
        state.document.records[1].field("skip_test"),
        Some(&FieldValue::Flag(false))
    );

    press(&mut state, InputKey::Char('t'));
    assert_eq!(
        state.document.records[1].field("skip_test"),
        Some(&FieldValue::text("False"))
    );
}

// ─────────────────────────────────────────────────────────
// Add / Remove
// ─────────────────────────────────────────────────────────

#[test]
fn test_add_param_to_single_entry_mapping() {
    let mut state = sample_state();
    state.focus = Focus::Params;

    press(&mut state, InputKey::Char('a'));

    assert!(state
        .document
        .params
        .keys()
        .eq(["environment", "new_param_1"]));
    assert_eq!(state.document.params["new_param_1"], "");
    assert_eq!(state.param_cursor.as_deref(), Some("new_param_1"));

    press(&mut state, InputKey::Home);
    assert_eq!(state.param_cursor.as_deref(), Some("environment"));
    press(&mut state, InputKey::Char('d'));

    let mut expected = Params::new();
    expected.insert("new_param_1".into(), String::new());
    assert_eq!(state.document.params, expected);
    assert_eq!(state.param_cursor.as_deref(), Some("new_param_1"));
}

#[test]
fn test_add_then_remove_field_is_inverse() {
    let mut state = sample_state();
    let before = state.document.clone();

    press(&mut state, InputKey::Char('a'));
    assert_eq!(state.record_cursor, RecordCursor::field(0, "new_param_3"));
    assert_eq!(
        state.document.records[0].field("new_param_3"),
        Some(&FieldValue::text(""))
    );

    press(&mut state, InputKey::Char('d'));
    assert_eq!(state.document, before);
}

#[test]
fn test_remove_field_selects_neighbor() {
    let mut state = sample_state();
    state.record_cursor = RecordCursor::field(0, "provider");

    press(&mut state, InputKey::Char('d'));

    assert_eq!(
        field_names(&state.document.records[0]),
        ["wallet_id", "status"]
    );
    assert_eq!(state.record_cursor, RecordCursor::field(0, "status"));
}

#[test]
fn test_remove_last_field_selects_id_row() {
    let mut state = sample_state();
    state.record_cursor = RecordCursor::field(1, "skip_test");
    press(&mut state, InputKey::Char('d'));
    assert!(state.document.records[1].fields.is_empty());
    assert_eq!(state.record_cursor, RecordCursor::id(1));
}

#[test]
fn test_add_then_remove_param_is_inverse() {
    let mut state = sample_state();
    let before = state.document.clone();
    state.focus = Focus::Params;

    press(&mut state, InputKey::Char('a'));
    press(&mut state, InputKey::Char('d'));

    assert_eq!(state.document, before);
    assert_eq!(state.param_cursor.as_deref(), Some("environment"));
}

#[test]
fn test_add_record_uses_template_and_selects_it() {
    let mut settings = Settings::default();
    settings
        .template
        .record_fields
        .insert("status".into(), FieldValue::Flag(true));
    let mut state = state_with(settings);

    press(&mut state, InputKey::Char('n'));

    let record = &state.document.records[2];
    assert_eq!(record.id, "new_testcase_3");
    assert_eq!(record.field("status"), Some(&FieldValue::Flag(true)));
    assert_eq!(state.record_cursor, RecordCursor::id(2));
}

#[test]
fn test_add_then_remove_record_is_inverse() {
    let mut state = sample_state();
    let before = state.document.clone();

    press(&mut state, InputKey::Char('n'));
    press(&mut state, InputKey::Char('D'));

    assert_eq!(state.document, before);
    assert_eq!(state.record_cursor, RecordCursor::id(1));
}

#[test]
fn test_remove_records_down_to_zero() {
    let mut state = sample_state();
    press(&mut state, InputKey::Char('D'));
    press(&mut state, InputKey::Char('D'));
    assert!(state.document.records.is_empty());
    assert!(state.selected_record().is_none());

    // Nothing left to remove
    press(&mut state, InputKey::Char('D'));
    assert!(state.document.records.is_empty());
}

#[test]
fn test_keep_last_record_refuses_removal() {
    let mut settings = Settings::default();
    settings.behavior.keep_last_record = true;
    let mut state = state_with(settings);

    press(&mut state, InputKey::Char('D'));
    press(&mut state, InputKey::Char('D'));

    assert_eq!(state.document.records.len(), 1);
    let notification = state.notifications.latest().unwrap();
    assert_eq!(notification.level, NotificationLevel::Warning);
}

// ─────────────────────────────────────────────────────────
// Clipboard
// ─────────────────────────────────────────────────────────

#[test]
fn test_copy_produces_compact_command() {
    let mut state = sample_state();
    let expected = state.codec.render_compact(&state.document).unwrap();

    let action = press(&mut state, InputKey::Char('c'));

    let Some(UpdateAction::WriteClipboard { text }) = action else {
        panic!("expected WriteClipboard, got {action:?}");
    };
    assert_eq!(text, expected);
    assert!(!text.contains('\n'));
    assert!(text.starts_with("python -u /home/tornado/selenium-tests/testcase_runner.py '"));
}

#[test]
fn test_clipboard_written_notifies() {
    let mut state = sample_state();
    dispatch(&mut state, Message::ClipboardWritten);
    assert_eq!(latest_title(&state), Some(COPIED_TITLE));
}

#[test]
fn test_clipboard_write_failed_notifies_error() {
    let mut state = sample_state();
    dispatch(
        &mut state,
        Message::ClipboardWriteFailed {
            error: "no clipboard tool".into(),
        },
    );
    let notification = state.notifications.latest().unwrap();
    assert_eq!(notification.level, NotificationLevel::Error);
    assert_eq!(notification.title, "Clipboard unavailable");
}

#[test]
fn test_paste_requests_clipboard_read() {
    let mut state = sample_state();
    let action = press(&mut state, InputKey::Char('v'));
    assert_eq!(action, Some(UpdateAction::ReadClipboard));
}

#[test]
fn test_paste_wrong_format_keeps_document() {
    let mut state = sample_state();
    let before = state.document.clone();

    dispatch(
        &mut state,
        Message::ClipboardRead {
            text: "foo bar".into(),
        },
    );

    assert_eq!(state.document, before);
    assert_eq!(latest_title(&state), Some("Wrong format"));
}

#[test]
fn test_paste_invalid_json_is_parse_error() {
    let mut state = sample_state();
    let before = state.document.clone();

    dispatch(
        &mut state,
        Message::ClipboardRead {
            text: "testcase_runner.py '{not valid json'".into(),
        },
    );

    assert_eq!(state.document, before);
    assert_eq!(latest_title(&state), Some("Parse error"));
}

#[test]
fn test_copy_then_paste_round_trips() {
    let mut state = sample_state();
    let original = state.document.clone();
    let Some(UpdateAction::WriteClipboard { text }) = press(&mut state, InputKey::Char('c'))
    else {
        panic!("expected WriteClipboard");
    };

    state.load_document(Document::new());
    dispatch(&mut state, Message::ClipboardRead { text });

    assert_eq!(state.document, original);
    assert_eq!(latest_title(&state), Some(LOADED_TITLE));
    assert_eq!(state.record_cursor, RecordCursor::id(0));
    assert_eq!(state.param_cursor.as_deref(), Some("environment"));
}

#[test]
fn test_paste_result_cancels_pending_edit() {
    let mut state = sample_state();
    press(&mut state, InputKey::Char('r'));
    assert!(state.is_editing());

    let text = state.codec.render_compact(&Document::new()).unwrap();
    dispatch(&mut state, Message::ClipboardRead { text });

    assert!(!state.is_editing());
    assert_eq!(state.ui_mode, UiMode::Normal);
    assert!(state.document.is_empty());
}

#[test]
fn test_clipboard_read_failed_keeps_document() {
    let mut state = sample_state();
    let before = state.document.clone();
    dispatch(
        &mut state,
        Message::ClipboardReadFailed {
            error: "timed out".into(),
        },
    );
    assert_eq!(state.document, before);
    assert_eq!(latest_title(&state), Some("Clipboard unavailable"));
}

// ─────────────────────────────────────────────────────────
// Notifications
// ─────────────────────────────────────────────────────────

#[test]
fn test_tick_expires_notifications() {
    let mut settings = Settings::default();
    settings.ui.notification_ms = 0;
    let mut state = state_with(settings);

    dispatch(&mut state, Message::ClipboardWritten);
    assert_eq!(state.notifications.len(), 1);

    dispatch(&mut state, Message::Tick);
    assert!(state.notifications.is_empty());
}

#[test]
fn test_escape_dismisses_notification() {
    let mut state = sample_state();
    dispatch(&mut state, Message::ClipboardWritten);

    press(&mut state, InputKey::Esc);

    assert!(state.notifications.is_empty());
    assert!(!state.should_quit());
}
