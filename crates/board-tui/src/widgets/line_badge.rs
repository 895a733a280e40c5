//! Line badges — colored chips standing in for the image assets the icon
//! registry names.
//!
//! A graphical host draws the PNGs; in a terminal each asset becomes a short
//! line code on the operator's line color. Assets missing from this table
//! still render, as a neutral chip, so a registry addition can never blank a
//! label.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use board_proto::icons;

use crate::theme::C_NETWORK_LOGO;

const CHIP_TEXT_LIGHT: Color = Color::Rgb(245, 245, 245);
const CHIP_TEXT_DARK: Color = Color::Rgb(20, 20, 20);

/// `(asset identifier, line code, chip color, dark text)` for every asset the
/// registry can resolve. Colors follow each operator's published line color.
const ASSET_CHIPS: &[(&str, &str, Color, bool)] = &[
    // 東急電鉄
    ("OM.png", "OM", Color::Rgb(0xF1, 0x8C, 0x43), false),
    ("OM_1.png", "OM", Color::Rgb(0x15, 0x6C, 0xB4), false),
    ("DT.png", "DT", Color::Rgb(0x00, 0xA0, 0x40), false),
    ("TY.png", "TY", Color::Rgb(0xDA, 0x04, 0x42), false),
    ("MG.png", "MG", Color::Rgb(0x00, 0x9C, 0xD2), false),
    ("IK.png", "IK", Color::Rgb(0xEE, 0x86, 0xA7), true),
    ("TM.png", "TM", Color::Rgb(0xAE, 0x03, 0x78), false),
    ("KD.png", "KD", Color::Rgb(0x00, 0x68, 0xB7), false),
    ("tokyu_bus.png", "バス", Color::Rgb(0xCC, 0x06, 0x33), false),
    // 東京メトロ
    ("icon_marunouchi.png", "M", Color::Rgb(0xF6, 0x2E, 0x36), false),
    ("icon_namboku.png", "N", Color::Rgb(0x00, 0xAC, 0x9B), false),
    ("icon_tozai.png", "T", Color::Rgb(0x00, 0x9B, 0xBF), false),
    ("icon_yurakucho.png", "Y", Color::Rgb(0xC1, 0xA4, 0x70), true),
    ("icon_chiyoda.png", "C", Color::Rgb(0x00, 0xBB, 0x85), false),
    ("icon_fukutoshin.png", "F", Color::Rgb(0x9C, 0x5E, 0x31), false),
    ("icon_ginza.png", "G", Color::Rgb(0xFF, 0x95, 0x00), true),
    ("icon_hanzomon.png", "Z", Color::Rgb(0x8F, 0x76, 0xD6), false),
    ("icon_hibiya.png", "H", Color::Rgb(0xB5, 0xB5, 0xAC), true),
    // 都営地下鉄・都電
    ("Toei_Asakusa_line_symbol.svg.png", "A", Color::Rgb(0xEC, 0x6E, 0x65), false),
    ("Toei_Mita_line_symbol.svg.png", "I", Color::Rgb(0x00, 0x6A, 0xB8), false),
    ("Toei_Shinjuku_line_symbol.svg.png", "S", Color::Rgb(0xB0, 0xC1, 0x24), true),
    ("Toei_Oedo_line_symbol.svg.png", "E", Color::Rgb(0xE8, 0x52, 0x98), false),
    ("Toei_Arakawa_line_symbol.svg.png", "SA", Color::Rgb(0xEF, 0x54, 0x5C), false),
    // 横浜市営地下鉄
    ("icon_green.png", "G", Color::Rgb(0x00, 0xA6, 0x50), false),
    ("icon_blue.png", "B", Color::Rgb(0x00, 0x68, 0xB7), false),
    // その他
    ("icon_rinkai.png", "R", Color::Rgb(0x00, 0x41, 0x8E), false),
    ("icon_tx.png", "TX", Color::Rgb(0x1D, 0x20, 0x88), false),
    ("icon_tama.png", "TT", Color::Rgb(0xFF, 0x7D, 0x15), true),
];

fn chip_for_asset(asset: &str) -> Span<'static> {
    for (file, code, color, dark_text) in ASSET_CHIPS {
        if *file == asset {
            let fg = if *dark_text {
                CHIP_TEXT_DARK
            } else {
                CHIP_TEXT_LIGHT
            };
            return Span::styled(
                format!(" {} ", code),
                Style::default()
                    .fg(fg)
                    .bg(*color)
                    .add_modifier(Modifier::BOLD),
            );
        }
    }
    Span::styled(
        " ■ ",
        Style::default().fg(CHIP_TEXT_LIGHT).bg(Color::Rgb(70, 74, 90)),
    )
}

/// Chips for every asset the registry resolves from `label`, each followed
/// by a single separating space. Unknown labels produce nothing.
pub fn badge_spans(label: &str) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for asset in icons::resolve(label) {
        spans.push(chip_for_asset(asset));
        spans.push(Span::raw(" "));
    }
    spans
}

/// Marker shown when a status entry carries its own operator logo. The image
/// itself only renders on a graphical host.
pub fn logo_marker() -> Span<'static> {
    Span::styled(
        "◉ ",
        Style::default()
            .fg(C_NETWORK_LOGO)
            .add_modifier(Modifier::BOLD),
    )
}
