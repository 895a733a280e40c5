//! Status panel — the service-status entry currently under the rotation
//! cursor, with its operator logo marker or registry badge in front.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use board_proto::feeds::FETCH_ERROR_TEXT;

use crate::{
    action::PanelId,
    app_state::BoardState,
    component::Component,
    theme::{style_muted, C_ALERT},
    widgets::{
        line_badge::{badge_spans, logo_marker},
        panel_chrome::{body_style, panel_chrome},
    },
};

pub struct StatusPanel;

impl StatusPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Component for StatusPanel {
    fn id(&self) -> PanelId {
        PanelId::Status
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, state: &BoardState) {
        let paint = state.settings.paint(PanelId::Status);
        let block = panel_chrome(self.id().title(), paint, state.settings.border_preset);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height == 0 {
            return;
        }

        let entry = state.current_status();
        let mut spans = if entry.logo.is_some() {
            vec![logo_marker()]
        } else {
            badge_spans(&entry.text)
        };
        let body = if entry.text == FETCH_ERROR_TEXT {
            Style::default().fg(C_ALERT).add_modifier(Modifier::BOLD)
        } else {
            body_style(paint, &state.settings)
        };
        spans.push(Span::styled(entry.text.clone(), body));

        let mut lines = vec![Line::from(spans)];
        if state.status_entries.len() > 1 {
            lines.push(Line::from(Span::styled(
                format!(
                    "{}/{}",
                    state.status_cursor % state.status_entries.len() + 1,
                    state.status_entries.len()
                ),
                style_muted(),
            )));
        }

        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: false }),
            inner,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use board_proto::feeds::StatusEntry;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered(state: &BoardState) -> String {
        let backend = TestBackend::new(60, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut panel = StatusPanel::new();
        terminal
            .draw(|frame| panel.draw(frame, frame.area(), state))
            .unwrap();
        // Wide glyphs leave blank continuation cells behind them; drop all
        // spaces so `contains` can match Japanese strings.
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .filter(|s| *s != " ")
            .collect()
    }

    #[test]
    fn failed_fetch_shows_the_error_entry() {
        let mut state = BoardState::new("ja".into());
        state.set_status_failed();
        let content = rendered(&state);
        assert!(content.contains("運行情報取得エラー"));
    }

    #[test]
    fn registry_badge_precedes_plain_entries() {
        let mut state = BoardState::new("ja".into());
        state.set_status(vec![StatusEntry {
            logo: None,
            text: "田園都市線で遅延が発生しています".into(),
        }]);
        let content = rendered(&state);
        assert!(content.contains("DT"));
        assert!(content.contains("田園都市線"));
    }

    #[test]
    fn api_logo_takes_over_from_the_registry() {
        let mut state = BoardState::new("ja".into());
        state.set_status(vec![StatusEntry {
            logo: Some("https://example.jp/tokyu.png".into()),
            text: "東横線は平常運転です".into(),
        }]);
        let content = rendered(&state);
        assert!(content.contains("◉"));
        assert!(!content.contains("TY"));
    }

    #[test]
    fn rotation_position_appears_only_with_multiple_entries() {
        let mut state = BoardState::new("ja".into());
        assert!(!rendered(&state).contains("1/1"));

        state.set_status(vec![
            StatusEntry::all_clear(),
            StatusEntry {
                logo: None,
                text: "目黒線 ダイヤ乱れ".into(),
            },
        ]);
        state.rotate_status();
        assert!(rendered(&state).contains("2/2"));
    }
}
