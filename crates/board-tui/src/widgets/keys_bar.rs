//! Keys bar — bottom line with the run/paused badge and keybindings.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::{C_DIRECTION, C_MUTED, C_PAUSED};

/// Draw the keybindings footer bar (one row). While the settings overlay is
/// open every timer is stopped, and the badge says so.
pub fn draw_keys_bar(frame: &mut Frame, area: Rect, paused: bool, resizable: bool) {
    if area.height == 0 {
        return;
    }

    let (label, label_color) = if paused {
        ("停止中", C_PAUSED)
    } else {
        ("運行中", C_DIRECTION)
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", label),
        Style::default().fg(label_color).add_modifier(Modifier::BOLD),
    )];

    let keys = if paused {
        " ↑↓ 選択  Space/Enter 切替  ←→ 調整  Esc 閉じる"
    } else if resizable {
        " s 設定  [ ] 幅調整  q 終了"
    } else {
        " s 設定  q 終了"
    };
    spans.push(Span::styled(keys, Style::default().fg(C_MUTED)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
