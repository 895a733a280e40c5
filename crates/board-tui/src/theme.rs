//! Color palette and style constants for the board TUI.

use ratatui::style::{Color, Modifier, Style};

// ── Color palette ─────────────────────────────────────────────────────────────

pub const C_BG: Color = Color::Rgb(14, 16, 22);
pub const C_PRIMARY: Color = Color::Rgb(225, 228, 235);
pub const C_SECONDARY: Color = Color::Rgb(130, 138, 158);
pub const C_MUTED: Color = Color::Rgb(78, 84, 100);
pub const C_ACCENT: Color = Color::Rgb(255, 184, 80);
pub const C_ALERT: Color = Color::Rgb(255, 92, 92);
pub const C_PANEL_BORDER: Color = Color::Rgb(44, 48, 62);
pub const C_PANEL_TITLE: Color = Color::Rgb(170, 178, 196);
pub const C_CLOCK: Color = Color::Rgb(120, 200, 255);
pub const C_FIRST_DEP: Color = Color::Rgb(255, 210, 80); // next departure stands out
pub const C_SECOND_DEP: Color = Color::Rgb(160, 200, 255);
pub const C_DIRECTION: Color = Color::Rgb(110, 190, 160);
pub const C_PAUSED: Color = Color::Rgb(255, 140, 90);
pub const C_SELECTION_BG: Color = Color::Rgb(30, 34, 48);
pub const C_OVERLAY_BG: Color = Color::Rgb(20, 22, 32);
pub const C_NETWORK_LOGO: Color = Color::Rgb(150, 130, 220);

// ── Operator-cyclable paints ──────────────────────────────────────────────────
//
// The settings overlay cycles each panel's background and text through these
// named choices. Index 0 is the default look.

pub const PAINT_BG: &[(&str, Color)] = &[
    ("標準", C_BG),
    ("紺", Color::Rgb(16, 24, 48)),
    ("深緑", Color::Rgb(12, 34, 26)),
    ("臙脂", Color::Rgb(44, 16, 22)),
    ("墨", Color::Rgb(28, 28, 30)),
    ("白", Color::Rgb(230, 230, 224)),
];

pub const PAINT_FG: &[(&str, Color)] = &[
    ("標準", C_PRIMARY),
    ("白", Color::Rgb(245, 245, 245)),
    ("黄", Color::Rgb(255, 220, 90)),
    ("水色", Color::Rgb(140, 210, 255)),
    ("緑", Color::Rgb(140, 230, 160)),
    ("黒", Color::Rgb(20, 20, 20)),
];

// ── Predefined styles ─────────────────────────────────────────────────────────

pub fn style_secondary() -> Style {
    Style::default().fg(C_SECONDARY)
}

pub fn style_muted() -> Style {
    Style::default().fg(C_MUTED)
}

pub fn style_title() -> Style {
    Style::default().fg(C_PANEL_TITLE).add_modifier(Modifier::BOLD)
}

pub fn style_first_dep() -> Style {
    Style::default().fg(C_FIRST_DEP).add_modifier(Modifier::BOLD)
}

pub fn style_second_dep() -> Style {
    Style::default().fg(C_SECOND_DEP)
}

pub fn style_direction() -> Style {
    Style::default().fg(C_DIRECTION).add_modifier(Modifier::BOLD)
}
