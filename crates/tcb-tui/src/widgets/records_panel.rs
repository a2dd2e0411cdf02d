//! Test case panel: each record's id row followed by its field rows

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use tcb_app::state::{AppState, EditTarget, Focus, RecordRow};
use tcb_core::FieldValue;

use super::{list, EDIT_CURSOR};
use crate::theme::styles;

/// Display label for a field name: `predecessor_test` -> `predecessor test`
pub fn humanize(name: &str) -> String {
    name.replace('_', " ")
}

pub struct RecordsPanel<'a> {
    state: &'a AppState,
}

impl<'a> RecordsPanel<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn editing(&self) -> Option<(&EditTarget, &str)> {
        self.state
            .edit
            .as_ref()
            .map(|e| (&e.target, e.buffer.as_str()))
    }

    fn row_line(&self, row: &RecordRow) -> Line<'a> {
        match row {
            RecordRow::Id(index) => {
                let id = self.state.document.records[*index].id.as_str();
                let id_span = match self.editing() {
                    Some((EditTarget::RecordId { record }, buffer)) if record == index => {
                        Span::styled(format!("{buffer}{EDIT_CURSOR}"), styles::edit_buffer())
                    }
                    _ => Span::styled(id.to_string(), styles::accent_bold()),
                };
                Line::from(vec![Span::styled("● ", styles::accent()), id_span])
            }
            RecordRow::Field(index, name) => {
                let value = self.state.document.records[*index].field(name);

                let label = match self.editing() {
                    Some((EditTarget::FieldName { record, field }, buffer))
                        if record == index && field == name =>
                    {
                        Span::styled(format!("{buffer}{EDIT_CURSOR}"), styles::edit_buffer())
                    }
                    _ => Span::styled(humanize(name), styles::text_secondary()),
                };

                let value = match self.editing() {
                    Some((EditTarget::FieldValue { record, field }, buffer))
                        if record == index && field == name =>
                    {
                        Span::styled(format!("{buffer}{EDIT_CURSOR}"), styles::edit_buffer())
                    }
                    _ => value_span(value),
                };

                Line::from(vec![Span::raw("    "), label, Span::raw(": "), value])
            }
        }
    }
}

fn value_span(value: Option<&FieldValue>) -> Span<'static> {
    match value {
        Some(FieldValue::Flag(flag)) => Span::styled(
            FieldValue::Flag(*flag).to_string(),
            styles::flag(*flag),
        ),
        Some(FieldValue::Text(text)) => Span::styled(text.clone(), styles::text_primary()),
        None => Span::raw(""),
    }
}

impl Widget for RecordsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == Focus::Records;
        let count = self.state.document.records.len();
        let block = styles::glass_block(focused).title(Line::styled(
            format!(" Test Cases ({count}) "),
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

        let rows = self.state.record_rows();
        if rows.is_empty() {
            Paragraph::new(Line::styled(
                "No test cases. Press n to add one.",
                styles::text_muted(),
            ))
            .render(inner, buf);
            return;
        }

        let lines = rows.iter().map(|row| self.row_line(row)).collect();
        list::render_rows(
            lines,
            self.state.selected_record_row(),
            focused,
            inner,
            buf,
        );
    }
}
