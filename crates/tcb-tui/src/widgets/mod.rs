//! Custom widget components

mod command_preview;
mod confirm_dialog;
mod footer;
mod header;
mod list;
pub mod modal_overlay;
mod params_panel;
mod records_panel;
mod toast;

pub use command_preview::CommandPreview;
pub use confirm_dialog::ConfirmDialog;
pub use footer::KeyHints;
pub use header::MainHeader;
pub use params_panel::ParamsPanel;
pub use records_panel::{humanize, RecordsPanel};
pub use toast::Toast;

/// Cursor glyph drawn after the edit buffer
pub(crate) const EDIT_CURSOR: &str = "▏";
