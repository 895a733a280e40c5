//! News ticker — one rotating headline across the bottom of the board.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::{
    action::PanelId,
    app_state::BoardState,
    component::Component,
    theme::style_muted,
    widgets::panel_chrome::{body_style, panel_chrome},
};

/// Clip `text` to `max_width` terminal cells, ending with an ellipsis when
/// anything was cut. Width-aware so full-width characters never straddle the
/// panel edge.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let limit = max_width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > limit {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

pub struct NewsTicker;

impl NewsTicker {
    pub fn new() -> Self {
        Self
    }
}

impl Component for NewsTicker {
    fn id(&self) -> PanelId {
        PanelId::News
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, state: &BoardState) {
        let paint = state.settings.paint(PanelId::News);
        let block = panel_chrome(self.id().title(), paint, state.settings.border_preset);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let line = match state.current_headline() {
            Some(headline) => Line::from(Span::styled(
                truncate_to_width(headline, inner.width as usize),
                body_style(paint, &state.settings),
            )),
            None => Line::from(Span::styled("ニュース取得中…", style_muted())),
        };
        frame.render_widget(Paragraph::new(line), inner);
    }
}
