//! Settings overlay — centered modal with every operator control.
//!
//! While it is open the app has stopped all timers, but an in-flight
//! schedule fetch can still land and change the route rows under the
//! selection; every row access therefore goes through `rows.get`, so a
//! shrunk list never panics. Every edit leaves as an [`Action`]; nothing
//! here touches state directly.

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tui_input::{backend::crossterm::EventHandler, Input};

use crate::{
    action::{Action, ColorTarget, PanelId},
    app_state::BoardState,
    component::Component,
    settings::parse_count,
    theme::{
        style_muted, style_title, C_ACCENT, C_OVERLAY_BG, C_PANEL_BORDER, C_PRIMARY,
        C_SELECTION_BG, PAINT_BG, PAINT_FG,
    },
};

const TOGGLEABLE_PANELS: [PanelId; 4] = [
    PanelId::Status,
    PanelId::Weather,
    PanelId::News,
    PanelId::Schedule,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsRow {
    PanelToggle(PanelId),
    PanelBg(PanelId),
    PanelFg(PanelId),
    Zoom,
    FontScale,
    BorderPreset,
    Resizable,
    RouteVisible(usize),
    RouteCount(usize),
}

pub struct SettingsOverlay {
    pub visible: bool,
    selected: usize,
    editing: Option<Input>,
}

impl SettingsOverlay {
    pub fn new() -> Self {
        Self {
            visible: false,
            selected: 0,
            editing: None,
        }
    }

    fn rows(state: &BoardState) -> Vec<SettingsRow> {
        let mut rows = Vec::new();
        for panel in TOGGLEABLE_PANELS {
            rows.push(SettingsRow::PanelToggle(panel));
            rows.push(SettingsRow::PanelBg(panel));
            rows.push(SettingsRow::PanelFg(panel));
        }
        rows.push(SettingsRow::Zoom);
        rows.push(SettingsRow::FontScale);
        rows.push(SettingsRow::BorderPreset);
        rows.push(SettingsRow::Resizable);
        for idx in 0..state.schedule.routes.len() {
            rows.push(SettingsRow::RouteVisible(idx));
            rows.push(SettingsRow::RouteCount(idx));
        }
        rows
    }

    fn route_label(state: &BoardState, idx: usize) -> Option<&str> {
        state.schedule.routes.get(idx).map(|r| r.label.as_str())
    }

    fn on_off(on: bool) -> &'static str {
        if on {
            "オン"
        } else {
            "オフ"
        }
    }

    fn row_label(row: SettingsRow, state: &BoardState) -> String {
        match row {
            SettingsRow::PanelToggle(p) => format!("{} 表示", p.title()),
            SettingsRow::PanelBg(p) => format!("{} 背景色", p.title()),
            SettingsRow::PanelFg(p) => format!("{} 文字色", p.title()),
            SettingsRow::Zoom => "ズーム".to_string(),
            SettingsRow::FontScale => "文字サイズ".to_string(),
            SettingsRow::BorderPreset => "枠線".to_string(),
            SettingsRow::Resizable => "幅調整キー".to_string(),
            SettingsRow::RouteVisible(i) => {
                format!("{} 表示", Self::route_label(state, i).unwrap_or("?"))
            }
            SettingsRow::RouteCount(i) => {
                format!("{} 表示本数", Self::route_label(state, i).unwrap_or("?"))
            }
        }
    }

    fn row_value(&self, row: SettingsRow, state: &BoardState, selected: bool) -> String {
        let s = &state.settings;
        match row {
            SettingsRow::PanelToggle(p) => Self::on_off(s.show(p)).to_string(),
            SettingsRow::PanelBg(p) => PAINT_BG[s.paint(p).bg % PAINT_BG.len()].0.to_string(),
            SettingsRow::PanelFg(p) => PAINT_FG[s.paint(p).fg % PAINT_FG.len()].0.to_string(),
            SettingsRow::Zoom => format!("{}%", s.zoom_percent),
            SettingsRow::FontScale => format!("{}%", s.font_percent),
            SettingsRow::BorderPreset => s.border_preset.label().to_string(),
            SettingsRow::Resizable => Self::on_off(s.resizable).to_string(),
            SettingsRow::RouteVisible(i) => Self::route_label(state, i)
                .map(|label| Self::on_off(state.route_display.is_visible(label)).to_string())
                .unwrap_or_default(),
            SettingsRow::RouteCount(i) => {
                if selected {
                    if let Some(input) = &self.editing {
                        return format!("{}_", input.value());
                    }
                }
                Self::route_label(state, i)
                    .map(|label| format!("{}本 (最大10本目安)", state.route_display.count(label)))
                    .unwrap_or_default()
            }
        }
    }

    /// Space/Enter on a row.
    fn activate(&mut self, row: SettingsRow, state: &BoardState) -> Vec<Action> {
        match row {
            SettingsRow::PanelToggle(p) => vec![Action::TogglePanel(p)],
            SettingsRow::PanelBg(p) => vec![Action::CyclePanelColor(p, ColorTarget::Background, 1)],
            SettingsRow::PanelFg(p) => vec![Action::CyclePanelColor(p, ColorTarget::Text, 1)],
            SettingsRow::BorderPreset => vec![Action::CycleBorderPreset],
            SettingsRow::Resizable => vec![Action::ToggleResizable],
            SettingsRow::RouteVisible(i) => match Self::route_label(state, i) {
                Some(label) => vec![Action::SetRouteVisible(
                    label.to_string(),
                    !state.route_display.is_visible(label),
                )],
                None => vec![],
            },
            SettingsRow::RouteCount(i) => {
                if let Some(label) = Self::route_label(state, i) {
                    self.editing =
                        Some(Input::new(state.route_display.count(label).to_string()));
                }
                vec![]
            }
            SettingsRow::Zoom | SettingsRow::FontScale => vec![],
        }
    }

    /// ←/→ on a row. `step` is -1 or 1.
    fn adjust(&mut self, row: SettingsRow, state: &BoardState, step: i8) -> Vec<Action> {
        let s = &state.settings;
        match row {
            SettingsRow::PanelBg(p) => {
                vec![Action::CyclePanelColor(p, ColorTarget::Background, step)]
            }
            SettingsRow::PanelFg(p) => vec![Action::CyclePanelColor(p, ColorTarget::Text, step)],
            SettingsRow::Zoom => {
                let next = if step < 0 {
                    s.zoom_percent.saturating_sub(crate::settings::ZOOM_STEP)
                } else {
                    s.zoom_percent.saturating_add(crate::settings::ZOOM_STEP)
                };
                vec![Action::SetZoom(next)]
            }
            SettingsRow::FontScale => {
                let next = if step < 0 {
                    s.font_percent.saturating_sub(crate::settings::FONT_STEP)
                } else {
                    s.font_percent.saturating_add(crate::settings::FONT_STEP)
                };
                vec![Action::SetFontScale(next)]
            }
            SettingsRow::BorderPreset => vec![Action::CycleBorderPreset],
            SettingsRow::RouteCount(i) => match Self::route_label(state, i) {
                Some(label) => {
                    let current = state.route_display.count(label);
                    let next = if step < 0 {
                        current.saturating_sub(1)
                    } else {
                        current.saturating_add(1)
                    };
                    vec![Action::SetRouteCount(label.to_string(), next)]
                }
                None => vec![],
            },
            SettingsRow::PanelToggle(_) | SettingsRow::Resizable | SettingsRow::RouteVisible(_) => {
                vec![]
            }
        }
    }
}

impl Component for SettingsOverlay {
    fn id(&self) -> PanelId {
        PanelId::SettingsOverlay
    }

    fn handle_key(&mut self, key: KeyEvent, state: &BoardState) -> Vec<Action> {
        if !self.visible {
            return vec![];
        }

        // Count editor swallows everything while armed.
        if let Some(input) = &mut self.editing {
            match key.code {
                KeyCode::Esc => {
                    self.editing = None;
                }
                KeyCode::Enter => {
                    let count = parse_count(input.value());
                    self.editing = None;
                    let rows = Self::rows(state);
                    if let Some(SettingsRow::RouteCount(i)) = rows.get(self.selected).copied() {
                        if let Some(label) = Self::route_label(state, i) {
                            return vec![Action::SetRouteCount(label.to_string(), count)];
                        }
                    }
                }
                _ => {
                    input.handle_event(&ratatui::crossterm::event::Event::Key(key));
                }
            }
            return vec![];
        }

        let rows = Self::rows(state);
        match key.code {
            KeyCode::Esc | KeyCode::Char('s') => return vec![Action::CloseSettings],
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1).min(rows.len().saturating_sub(1));
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                if let Some(row) = rows.get(self.selected).copied() {
                    return self.activate(row, state);
                }
            }
            KeyCode::Left | KeyCode::Char('h') => {
                if let Some(row) = rows.get(self.selected).copied() {
                    return self.adjust(row, state, -1);
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if let Some(row) = rows.get(self.selected).copied() {
                    return self.adjust(row, state, 1);
                }
            }
            _ => {}
        }
        vec![]
    }

    fn on_action(&mut self, action: &Action, _state: &BoardState) -> Vec<Action> {
        match action {
            Action::OpenSettings => {
                self.visible = true;
                self.selected = 0;
                self.editing = None;
            }
            Action::CloseSettings => {
                self.visible = false;
                self.editing = None;
            }
            _ => {}
        }
        vec![]
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, state: &BoardState) {
        if !self.visible {
            return;
        }

        let rows = Self::rows(state);
        let height = (rows.len() as u16 + 4).min(area.height.saturating_sub(2));
        let popup = centered_rect(64, height, area);

        let mut lines = Vec::with_capacity(rows.len() + 2);
        for (idx, row) in rows.iter().enumerate() {
            let selected = idx == self.selected;
            let base = if selected {
                Style::default().bg(C_SELECTION_BG)
            } else {
                Style::default()
            };
            let marker = if selected { "▸ " } else { "  " };
            lines.push(Line::from(vec![
                Span::styled(marker, base.fg(C_ACCENT)),
                Span::styled(Self::row_label(*row, state), base.fg(C_PRIMARY)),
                Span::styled("：", base.fg(C_PANEL_BORDER)),
                Span::styled(self.row_value(*row, state, selected), base.fg(C_ACCENT)),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            " ↑↓ 選択 / Space 切替 / ←→ 調整 / Esc 閉じる",
            style_muted(),
        )));

        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(C_PANEL_BORDER))
                    .style(Style::default().bg(C_OVERLAY_BG))
                    .title(Line::from(Span::styled(" 設定 ", style_title()))),
            ),
            popup,
        );
    }
}

fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(r);
    let horiz = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vert[1]);
    horiz[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use board_proto::feeds::ScheduleFeed;
    use ratatui::crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn state_with_routes() -> BoardState {
        let mut state = BoardState::new("ja".into());
        let schedule: ScheduleFeed = serde_json::from_str(
            r#"{"routes":[
                {"label":"東急大井町線　尾山台駅","schedules":["先発: 10:00発"]},
                {"label":"等01　東京都市大学前","schedules":["先発: 10:05発"]}
            ]}"#,
        )
        .unwrap();
        state.set_schedule(schedule);
        state
    }

    fn open_overlay(state: &BoardState) -> SettingsOverlay {
        let mut overlay = SettingsOverlay::new();
        overlay.on_action(&Action::OpenSettings, state);
        overlay
    }

    fn press_down(overlay: &mut SettingsOverlay, state: &BoardState, times: usize) {
        for _ in 0..times {
            overlay.handle_key(key(KeyCode::Down), state);
        }
    }

    #[test]
    fn row_list_covers_panels_globals_and_routes() {
        let state = state_with_routes();
        let rows = SettingsOverlay::rows(&state);
        // 4 panels x (toggle, bg, fg) + 4 globals + 2 routes x (visible, count)
        assert_eq!(rows.len(), 12 + 4 + 4);
    }

    #[test]
    fn esc_requests_close() {
        let state = state_with_routes();
        let mut overlay = open_overlay(&state);
        let actions = overlay.handle_key(key(KeyCode::Esc), &state);
        assert_eq!(actions, vec![Action::CloseSettings]);
    }

    #[test]
    fn space_toggles_the_selected_panel() {
        let state = state_with_routes();
        let mut overlay = open_overlay(&state);
        let actions = overlay.handle_key(key(KeyCode::Char(' ')), &state);
        assert_eq!(actions, vec![Action::TogglePanel(PanelId::Status)]);
    }

    #[test]
    fn arrows_adjust_the_zoom_row() {
        let state = state_with_routes();
        let mut overlay = open_overlay(&state);
        press_down(&mut overlay, &state, 12);
        let actions = overlay.handle_key(key(KeyCode::Right), &state);
        assert_eq!(actions, vec![Action::SetZoom(105)]);
        let actions = overlay.handle_key(key(KeyCode::Left), &state);
        assert_eq!(actions, vec![Action::SetZoom(95)]);
    }

    #[test]
    fn count_editor_commits_through_the_coercion() {
        let state = state_with_routes();
        let mut overlay = open_overlay(&state);
        // First route's count row: 12 panel rows + 4 globals + visible row.
        press_down(&mut overlay, &state, 17);
        assert!(overlay.handle_key(key(KeyCode::Enter), &state).is_empty());

        // Replace the prefilled "2" with "7".
        overlay.handle_key(key(KeyCode::Backspace), &state);
        overlay.handle_key(key(KeyCode::Char('7')), &state);
        let actions = overlay.handle_key(key(KeyCode::Enter), &state);
        assert_eq!(
            actions,
            vec![Action::SetRouteCount("東急大井町線　尾山台駅".into(), 7)]
        );
    }

    #[test]
    fn count_editor_coerces_garbage_to_one() {
        let state = state_with_routes();
        let mut overlay = open_overlay(&state);
        press_down(&mut overlay, &state, 17);
        overlay.handle_key(key(KeyCode::Enter), &state);
        overlay.handle_key(key(KeyCode::Backspace), &state);
        overlay.handle_key(key(KeyCode::Char('x')), &state);
        let actions = overlay.handle_key(key(KeyCode::Enter), &state);
        assert_eq!(
            actions,
            vec![Action::SetRouteCount("東急大井町線　尾山台駅".into(), 1)]
        );
    }

    #[test]
    fn escape_cancels_the_count_editor_without_emitting() {
        let state = state_with_routes();
        let mut overlay = open_overlay(&state);
        press_down(&mut overlay, &state, 17);
        overlay.handle_key(key(KeyCode::Enter), &state);
        overlay.handle_key(key(KeyCode::Char('9')), &state);
        assert!(overlay.handle_key(key(KeyCode::Esc), &state).is_empty());
        // Editor gone: Esc now closes the overlay instead.
        let actions = overlay.handle_key(key(KeyCode::Esc), &state);
        assert_eq!(actions, vec![Action::CloseSettings]);
    }

    #[test]
    fn selection_stops_at_the_last_row() {
        let state = state_with_routes();
        let mut overlay = open_overlay(&state);
        press_down(&mut overlay, &state, 99);
        let rows = SettingsOverlay::rows(&state);
        let actions = overlay.handle_key(key(KeyCode::Char(' ')), &state);
        // Last row is the second route's count row; Space arms its editor.
        assert_eq!(rows.len() - 1, 19);
        assert!(actions.is_empty());
        assert!(overlay.editing.is_some());
    }

    #[test]
    fn schedule_reload_shrinking_the_rows_keeps_the_selection_safe() {
        let state = state_with_routes();
        let mut overlay = open_overlay(&state);
        // Park the selection on the last row of the two-route list.
        press_down(&mut overlay, &state, 99);

        // An in-flight fetch completion lands while the overlay is open and
        // drops the second route from the document.
        let mut shrunk = BoardState::new("ja".into());
        shrunk.set_schedule(
            serde_json::from_str(
                r#"{"routes":[{"label":"東急大井町線　尾山台駅","schedules":["先発: 10:00発"]}]}"#,
            )
            .unwrap(),
        );

        // The stale selection points past the shrunk list; nothing fires.
        assert!(overlay.handle_key(key(KeyCode::Char(' ')), &shrunk).is_empty());
        assert!(overlay.editing.is_none());

        // Moving re-clamps onto the shrunk list's last row, which works again.
        overlay.handle_key(key(KeyCode::Down), &shrunk);
        assert!(overlay.handle_key(key(KeyCode::Enter), &shrunk).is_empty());
        assert!(overlay.editing.is_some());
    }

    #[test]
    fn hidden_overlay_draws_nothing() {
        let state = state_with_routes();
        let mut overlay = SettingsOverlay::new();
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| overlay.draw(frame, frame.area(), &state))
            .unwrap();
        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(content.trim().is_empty());
    }

    #[test]
    fn open_overlay_renders_the_controls() {
        let state = state_with_routes();
        let mut overlay = open_overlay(&state);
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| overlay.draw(frame, frame.area(), &state))
            .unwrap();
        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .filter(|s| *s != " ")
            .collect();
        assert!(content.contains("設定"));
        assert!(content.contains("ズーム"));
        assert!(content.contains("尾山台駅"));
    }
}
