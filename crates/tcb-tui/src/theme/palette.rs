//! Color palette

use ratatui::style::Color;

// --- Background layers ---
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43);
pub const EDIT_BG: Color = Color::Rgb(40, 40, 50);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const CONTRAST_FG: Color = Color::Black;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Values ---
pub const FLAG_TRUE: Color = Color::Green;
pub const FLAG_FALSE: Color = Color::Red;
pub const JSON_STRING: Color = Color::LightGreen;
