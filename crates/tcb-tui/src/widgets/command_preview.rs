//! Live preview of the generated command

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Text},
    widgets::{Paragraph, Widget, Wrap},
};
use tcb_core::{CommandCodec, Document};

use crate::theme::styles;

pub struct CommandPreview<'a> {
    codec: &'a CommandCodec,
    document: &'a Document,
}

impl<'a> CommandPreview<'a> {
    pub fn new(codec: &'a CommandCodec, document: &'a Document) -> Self {
        Self { codec, document }
    }
}

impl Widget for CommandPreview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(Line::styled(" Generated Command ", styles::text_secondary()));

        let text = match self.codec.render(self.document) {
            Ok(command) => Text::styled(command, styles::json_string()),
            Err(e) => Text::styled(format!("Could not render command: {e}"), styles::text_muted()),
        };

        Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use tcb_core::Record;

    #[test]
    fn test_preview_renders_prefix_and_payload() {
        let codec = CommandCodec::default();
        let mut doc = Document::new();
        doc.records
            .push(Record::new("0004_test").with_field("status", true));

        let mut term = TestTerminal::with_size(100, 16);
        term.render_widget(CommandPreview::new(&codec, &doc), term.area());

        assert!(term.buffer_contains("Generated Command"));
        assert!(term.buffer_contains("python -u /home/tornado/selenium-tests/testcase_runner.py '{"));
        assert!(term.buffer_contains("\"0004_test\": {"));
        assert!(term.buffer_contains("\"status\": true"));
    }
}
