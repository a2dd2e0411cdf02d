//! Header bar: app title, command prefix and document counts

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use tcb_core::Document;
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;

pub const APP_TITLE: &str = "Test Command Builder";

pub struct MainHeader<'a> {
    prefix: &'a str,
    document: &'a Document,
}

impl<'a> MainHeader<'a> {
    pub fn new(prefix: &'a str, document: &'a Document) -> Self {
        Self { prefix, document }
    }

    fn counts(&self) -> String {
        let records = self.document.records.len();
        let params = self.document.params.len();
        format!(
            "{} {} · {} {}",
            records,
            if records == 1 { "case" } else { "cases" },
            params,
            if params == 1 { "param" } else { "params" },
        )
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let counts = self.counts();
        let counts_width = counts.width() as u16;

        let title = Line::from(vec![
            Span::styled(APP_TITLE, styles::accent_bold()),
            Span::raw("  "),
            Span::styled(self.prefix.to_string(), styles::text_muted()),
        ]);
        let title_width = inner.width.saturating_sub(counts_width + 1);
        buf.set_line(inner.x, inner.y, &title, title_width);

        // Counts stay right-aligned and win over the prefix when space is short
        if counts_width < inner.width {
            let x = inner.x + inner.width - counts_width;
            buf.set_string(x, inner.y, &counts, styles::text_secondary());
        }
    }
}
