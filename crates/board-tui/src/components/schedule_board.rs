//! Schedule board — departure cards for every visible route.
//!
//! Departure lines arrive preformatted as `prefix: body`. Under the ja
//! locale the first three positions of each direction column swap their
//! prefix for 先発/次発/次々発; every later row keeps whatever prefix the
//! feed sent. The split is on the first colon only, so departure times
//! inside the body survive untouched.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use board_proto::feeds::Route;

use crate::{
    action::PanelId,
    app_state::BoardState,
    component::Component,
    settings::{DisplaySettings, PanelPaint},
    theme::{style_direction, style_first_dep, style_muted, style_second_dep, style_title},
    widgets::{line_badge::badge_spans, panel_chrome::{body_style, panel_chrome}},
};

pub const POSITION_LABELS: [&str; 3] = ["先発", "次発", "次々発"];

/// Relabel one departure row for its column position.
pub fn format_departure(raw: &str, position: usize, locale: &str) -> String {
    let (prefix, rest) = match raw.find(':') {
        Some(idx) => (&raw[..idx], raw[idx + 1..].trim()),
        None => ("", raw.trim()),
    };
    let label = if locale == "ja" && position < POSITION_LABELS.len() {
        POSITION_LABELS[position]
    } else {
        prefix
    };
    if label.is_empty() {
        rest.to_string()
    } else {
        format!("{}:{}", label, rest)
    }
}

fn departure_style(position: usize, paint: PanelPaint, settings: &DisplaySettings) -> Style {
    match position {
        0 => style_first_dep(),
        1 => style_second_dep(),
        _ => body_style(paint, settings),
    }
}

pub struct ScheduleBoard;

impl ScheduleBoard {
    pub fn new() -> Self {
        Self
    }

    fn route_lines(route: &Route, state: &BoardState) -> Vec<Line<'static>> {
        let paint = state.settings.paint(PanelId::Schedule);
        let count = state.route_display.count(&route.label) as usize;

        let mut title_spans = badge_spans(&route.label);
        title_spans.push(Span::styled(route.label.clone(), style_title()));
        let mut lines = vec![Line::from(title_spans)];

        for (direction, departures) in route.schedules.pairs() {
            if !direction.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("▸ {}", direction),
                    style_direction(),
                )));
            }
            for (position, raw) in departures.iter().take(count).enumerate() {
                lines.push(Line::from(Span::styled(
                    format!("  {}", format_departure(raw, position, &state.locale)),
                    departure_style(position, paint, &state.settings),
                )));
            }
        }
        lines.push(Line::default());
        lines
    }
}

impl Component for ScheduleBoard {
    fn id(&self) -> PanelId {
        PanelId::Schedule
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, state: &BoardState) {
        let paint = state.settings.paint(PanelId::Schedule);
        let block = panel_chrome(self.id().title(), paint, state.settings.border_preset);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let visible = state.route_display.visible_routes(&state.schedule);
        if visible.is_empty() {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled("時刻表取得中…", style_muted()))),
                inner,
            );
            return;
        }

        let mut lines = Vec::new();
        for route in visible {
            lines.extend(Self::route_lines(route, state));
        }
        frame.render_widget(Paragraph::new(lines), inner);
    }
}
