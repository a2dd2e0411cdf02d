//! Parameter panel: one `key = value` row per parameter

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use tcb_app::state::{AppState, EditTarget, Focus};

use super::{list, EDIT_CURSOR};
use crate::theme::styles;

pub struct ParamsPanel<'a> {
    state: &'a AppState,
}

impl<'a> ParamsPanel<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn row_line(&self, key: &str, value: &str) -> Line<'static> {
        let editing = self.state.edit.as_ref();

        let key_span = match editing.map(|e| (&e.target, &e.buffer)) {
            Some((EditTarget::ParamKey { key: target }, buffer)) if target == key => {
                Span::styled(format!("{buffer}{EDIT_CURSOR}"), styles::edit_buffer())
            }
            _ => Span::styled(key.to_string(), styles::text_secondary()),
        };
        let value_span = match editing.map(|e| (&e.target, &e.buffer)) {
            Some((EditTarget::ParamValue { key: target }, buffer)) if target == key => {
                Span::styled(format!("{buffer}{EDIT_CURSOR}"), styles::edit_buffer())
            }
            _ => Span::styled(value.to_string(), styles::text_primary()),
        };

        Line::from(vec![key_span, Span::styled(" = ", styles::text_muted()), value_span])
    }
}

impl Widget for ParamsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == Focus::Params;
        let params = &self.state.document.params;
        let block = styles::glass_block(focused).title(Line::styled(
            format!(" Parameters ({}) ", params.len()),
            if focused {
                styles::accent_bold()
            } else {
                styles::text_secondary()
            },
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if params.is_empty() {
            Paragraph::new(Line::styled(
                "No parameters. Press a to add one.",
                styles::text_muted(),
            ))
            .render(inner, buf);
            return;
        }

        let lines = params
            .iter()
            .map(|(key, value)| self.row_line(key, value))
            .collect();
        let selected = self
            .state
            .param_cursor
            .as_deref()
            .and_then(|key| params.get_index_of(key));
        list::render_rows(lines, selected, focused, inner, buf);
    }
}
