//! Quit confirmation modal

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::modal_overlay;
use crate::theme::styles;

const WIDTH: u16 = 44;
const HEIGHT: u16 = 6;

pub struct ConfirmDialog<'a> {
    title: &'a str,
    message: &'a str,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(title: &'a str, message: &'a str) -> Self {
        Self { title, message }
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dialog = modal_overlay::centered_rect(WIDTH, HEIGHT, area);
        modal_overlay::clear_area(buf, dialog);

        let title = format!(" {} ", self.title);
        let block = styles::modal_block(&title);

        let lines = vec![
            Line::styled(self.message, styles::text_primary()),
            Line::raw(""),
            Line::from(vec![
                Span::styled("y", styles::keybinding()),
                Span::styled(" quit   ", styles::text_muted()),
                Span::styled("n", styles::keybinding()),
                Span::styled(" stay", styles::text_muted()),
            ]),
        ];

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .render(dialog, buf);
    }
}
