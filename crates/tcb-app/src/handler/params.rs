//! Parameter handlers

use tcb_core::prelude::*;
use tcb_core::Params;

use crate::editors::param_editor;
use crate::message::Message;
use crate::state::AppState;

use super::UpdateResult;

/// Replace the parameter mapping wholesale
pub fn handle_params_changed(state: &mut AppState, params: Params) -> UpdateResult {
    state.document.replace_params(params);
    state.repair_cursors();
    UpdateResult::none()
}

pub fn handle_add_param(state: &mut AppState) -> UpdateResult {
    let (params, name) = param_editor::add_param(&state.document.params);
    debug!("Adding parameter {}", name);
    state.param_cursor = Some(name);
    UpdateResult::message(Message::ParamsChanged { params })
}

pub fn handle_remove_param(state: &mut AppState) -> UpdateResult {
    let Some(key) = state.param_cursor.as_deref() else {
        return UpdateResult::none();
    };
    let Some(position) = state.document.params.get_index_of(key) else {
        return UpdateResult::none();
    };
    let Some(params) = param_editor::remove_param(&state.document.params, key) else {
        return UpdateResult::none();
    };

    state.param_cursor = params
        .get_index(position.min(params.len().saturating_sub(1)))
        .map(|(key, _)| key.clone());
    UpdateResult::message(Message::ParamsChanged { params })
}
