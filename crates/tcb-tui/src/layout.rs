//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title bar
    pub header: Rect,

    /// Test case panel (left)
    pub records: Rect,

    /// Parameter panel (right)
    pub params: Rect,

    /// Generated command preview, when enabled
    pub preview: Option<Rect>,

    /// Key hints (one row)
    pub footer: Rect,
}

/// Create the main screen layout. The preview takes two fifths of the
/// rows between header and footer.
pub fn create(area: Rect, show_preview: bool) -> ScreenAreas {
    let (header, body, preview, footer) = if show_preview {
        let preview_height = area.height.saturating_sub(4) * 2 / 5;
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(preview_height),
            Constraint::Length(1),
        ])
        .split(area);
        (chunks[0], chunks[1], Some(chunks[2]), chunks[3])
    } else {
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .split(area);
        (chunks[0], chunks[1], None, chunks[2])
    };

    let columns =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).split(body);

    ScreenAreas {
        header,
        records: columns[0],
        params: columns[1],
        preview,
        footer,
    }
}

/// Bottom-right corner above the footer, for the notification toast
pub fn toast_area(areas: &ScreenAreas, width: u16, height: u16) -> Rect {
    let bottom = areas.footer.y;
    let right = areas.footer.x + areas.footer.width;
    let w = width.min(areas.footer.width);
    let h = height.min(bottom.saturating_sub(areas.header.height));
    Rect::new(right.saturating_sub(w + 1), bottom.saturating_sub(h), w, h)
}
