//! Key hint bar

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use tcb_app::state::{AppState, Focus, UiMode};

use crate::theme::styles;

const NORMAL_RECORDS: &[(&str, &str)] = &[
    ("Tab", "panel"),
    ("Enter", "edit"),
    ("r", "rename"),
    ("a", "add field"),
    ("d", "remove"),
    ("t", "type"),
    ("n", "new case"),
    ("D", "delete case"),
    ("c", "copy"),
    ("v", "paste"),
    ("p", "preview"),
    ("q", "quit"),
];

const NORMAL_PARAMS: &[(&str, &str)] = &[
    ("Tab", "panel"),
    ("Enter", "edit"),
    ("r", "rename"),
    ("a", "add"),
    ("d", "remove"),
    ("c", "copy"),
    ("v", "paste"),
    ("p", "preview"),
    ("q", "quit"),
];

const EDITING: &[(&str, &str)] = &[("Enter", "done"), ("Esc", "cancel"), ("Ctrl-U", "clear")];

const CONFIRM_QUIT: &[(&str, &str)] = &[("y", "quit"), ("n", "stay")];

/// Hints for the current mode and focused panel
pub struct KeyHints<'a> {
    state: &'a AppState,
}

impl<'a> KeyHints<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.state.ui_mode {
            UiMode::Normal => match self.state.focus {
                Focus::Records => NORMAL_RECORDS,
                Focus::Params => NORMAL_PARAMS,
            },
            UiMode::Editing => EDITING,
            UiMode::ConfirmQuit => CONFIRM_QUIT,
        }
    }
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let mut spans = Vec::new();
        if let Some(edit) = &self.state.edit {
            spans.push(Span::styled(
                format!("{} ", edit.target.label()),
                styles::accent_bold(),
            ));
        }
        for (i, (key, action)) in self.hints().iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {action}"), styles::text_muted()));
        }

        buf.set_line(area.x + 1, area.y, &Line::from(spans), area.width.saturating_sub(1));
    }
}
