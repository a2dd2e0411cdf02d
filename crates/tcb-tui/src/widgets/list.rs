//! Scrolling row list shared by the two editor panels

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Line;

use crate::theme::styles;

/// First visible row so that `selected` stays on screen
pub(crate) fn scroll_offset(selected: usize, visible: usize) -> usize {
    selected.saturating_sub(visible.saturating_sub(1))
}

/// Render `lines` into `area`, highlighting `selected`
pub(crate) fn render_rows(
    lines: Vec<Line<'_>>,
    selected: Option<usize>,
    focused: bool,
    area: Rect,
    buf: &mut Buffer,
) {
    let visible = area.height as usize;
    if visible == 0 || area.width == 0 {
        return;
    }
    let offset = selected.map_or(0, |s| scroll_offset(s, visible));

    for (i, line) in lines.into_iter().enumerate().skip(offset).take(visible) {
        let y = area.y + (i - offset) as u16;
        if Some(i) == selected {
            let style = if focused {
                styles::focused_selected()
            } else {
                styles::unfocused_selected()
            };
            let row = Rect::new(area.x, y, area.width, 1);
            buf.set_style(row, style);
            // Plain text so span colors don't fight the highlight
            buf.set_line(area.x, y, &Line::styled(line.to_string(), style), area.width);
        } else {
            buf.set_line(area.x, y, &line, area.width);
        }
    }
}
