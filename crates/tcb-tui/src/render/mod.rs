//! Main render/view function (View in TEA pattern)


use ratatui::Frame;
use tcb_app::state::{AppState, UiMode};

use crate::{layout, widgets};

pub const QUIT_TITLE: &str = "Quit?";
pub const QUIT_MESSAGE: &str = "Unsaved test cases will be lost.";

/// Render the complete UI (View function in TEA).
///
/// Pure rendering: reads state, never modifies it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let areas = layout::create(area, state.show_preview);

    let prefix = state.codec.template().prefix();
    frame.render_widget(
        widgets::MainHeader::new(&prefix, &state.document),
        areas.header,
    );
    frame.render_widget(widgets::RecordsPanel::new(state), areas.records);
    frame.render_widget(widgets::ParamsPanel::new(state), areas.params);

    if let Some(preview) = areas.preview {
        frame.render_widget(
            widgets::CommandPreview::new(&state.codec, &state.document),
            preview,
        );
    }

    frame.render_widget(widgets::KeyHints::new(state), areas.footer);

    if let Some(notification) = state.notifications.latest() {
        let toast = widgets::Toast::new(notification);
        let (width, height) = toast.size();
        frame.render_widget(toast, layout::toast_area(&areas, width, height));
    }

    if state.ui_mode == UiMode::ConfirmQuit {
        frame.render_widget(widgets::ConfirmDialog::new(QUIT_TITLE, QUIT_MESSAGE), area);
    }
}
