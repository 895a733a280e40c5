//! Standardized bordered panel with operator paint and border preset applied.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};

use crate::settings::{BorderPreset, DisplaySettings, PanelPaint};
use crate::theme::{style_title, C_PANEL_BORDER, PAINT_BG, PAINT_FG};

pub fn paint_bg(paint: PanelPaint) -> Color {
    PAINT_BG[paint.bg % PAINT_BG.len()].1
}

pub fn paint_fg(paint: PanelPaint) -> Color {
    PAINT_FG[paint.fg % PAINT_FG.len()].1
}

/// Body text style for a panel: the operator's text paint plus the
/// font-scale modifier.
pub fn body_style(paint: PanelPaint, settings: &DisplaySettings) -> Style {
    Style::default()
        .fg(paint_fg(paint))
        .add_modifier(settings.text_modifier())
}

/// Renders a bordered panel block with the shared board look.
pub fn panel_chrome<'a>(title: &'a str, paint: PanelPaint, preset: BorderPreset) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(preset.border_type())
        .border_style(Style::default().fg(C_PANEL_BORDER))
        .style(Style::default().bg(paint_bg(paint)))
        .title(Line::from(Span::styled(format!(" {} ", title), style_title())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_indexes_wrap_instead_of_panicking() {
        let paint = PanelPaint {
            bg: PAINT_BG.len() + 1,
            fg: PAINT_FG.len() + 2,
        };
        assert_eq!(paint_bg(paint), PAINT_BG[1].1);
        assert_eq!(paint_fg(paint), PAINT_FG[2].1);
    }
}
