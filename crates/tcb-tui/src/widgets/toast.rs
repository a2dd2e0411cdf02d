//! Notification toast drawn over the bottom-right corner

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use tcb_app::Notification;
use unicode_width::UnicodeWidthStr;

use super::modal_overlay;
use crate::theme::styles;

const MAX_WIDTH: u16 = 60;
const MIN_WIDTH: u16 = 24;

pub struct Toast<'a> {
    notification: &'a Notification,
}

impl<'a> Toast<'a> {
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }

    /// Outer `(width, height)` including borders
    pub fn size(&self) -> (u16, u16) {
        let (icon, _) = styles::notification_indicator(self.notification.level);
        let title = icon.width() + 1 + self.notification.title.width();
        let body = self.notification.body.as_deref().map_or(0, |b| b.width());
        let content = title.max(body) as u16;

        let width = (content + 4).clamp(MIN_WIDTH, MAX_WIDTH);
        let height = if self.notification.body.is_some() { 4 } else { 3 };
        (width, height)
    }
}

impl Widget for Toast<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        modal_overlay::clear_area(buf, area);

        let (icon, icon_style) = styles::notification_indicator(self.notification.level);
        let block = styles::glass_block(true).border_style(icon_style);

        let mut lines = vec![Line::from(vec![
            Span::styled(icon, icon_style),
            Span::raw(" "),
            Span::styled(self.notification.title.clone(), styles::text_primary()),
        ])];
        if let Some(body) = &self.notification.body {
            lines.push(Line::styled(body.clone(), styles::text_secondary()));
        }

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_toast_size() {
        let n = Notification::success("Command copied!");
        assert_eq!(Toast::new(&n).size(), (MIN_WIDTH, 3));

        let n = Notification::error("Wrong format")
            .with_body("Expected a `testcase_runner.py '...'` command");
        let (w, h) = Toast::new(&n).size();
        assert_eq!(h, 4);
        assert_eq!(w, 45 + 4);
    }

    #[test]
    fn test_toast_renders_title_and_body() {
        let n = Notification::error("Parse error").with_body("expected value at line 1");
        let toast = Toast::new(&n);
        let (w, h) = toast.size();

        let mut term = TestTerminal::with_size(w, h);
        term.render_widget(toast, term.area());

        assert!(term.line_contains(1, "✗ Parse error"));
        assert!(term.line_contains(2, "expected value at line 1"));
    }
}
