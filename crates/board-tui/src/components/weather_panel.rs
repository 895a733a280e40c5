//! Weather panel — up to three forecast days side by side.
//!
//! The feed's weather image only renders on a graphical host; here the telop
//! text picks a glyph instead. Matching is first-hit in severity order, so
//! 「晴時々雨」 shows the rain glyph.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use board_proto::feeds::Forecast;

use crate::{
    action::PanelId,
    app_state::BoardState,
    component::Component,
    theme::{style_muted, style_title},
    widgets::panel_chrome::{body_style, panel_chrome},
};

const TELOP_GLYPHS: &[(&str, &str)] = &[
    ("雷", "⛈"),
    ("雪", "☃"),
    ("雨", "☂"),
    ("曇", "☁"),
    ("晴", "☀"),
];

/// Glyph for a telop string, or empty when nothing matches.
pub fn telop_glyph(telop: &str) -> &'static str {
    for (key, glyph) in TELOP_GLYPHS {
        if telop.contains(key) {
            return glyph;
        }
    }
    ""
}

pub struct WeatherPanel;

impl WeatherPanel {
    pub fn new() -> Self {
        Self
    }

    fn day_lines(day: &Forecast, state: &BoardState) -> Vec<Line<'static>> {
        let body = body_style(
            state.settings.paint(PanelId::Weather),
            &state.settings,
        );
        vec![
            Line::from(Span::styled(day.date_label.clone(), style_title())),
            Line::from(Span::styled(
                format!("{} {}", telop_glyph(&day.telop), day.telop),
                body,
            )),
            Line::from(Span::styled(
                format!("降水確率：{}", day.rain_label()),
                body,
            )),
            Line::from(Span::styled(format!("風：{}", day.wind_label()), body)),
        ]
    }
}

impl Component for WeatherPanel {
    fn id(&self) -> PanelId {
        PanelId::Weather
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, state: &BoardState) {
        let paint = state.settings.paint(PanelId::Weather);
        let block = panel_chrome(self.id().title(), paint, state.settings.border_preset);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if state.forecast_days.is_empty() {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled("取得中…", style_muted()))),
                inner,
            );
            return;
        }

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(
                state
                    .forecast_days
                    .iter()
                    .map(|_| Constraint::Ratio(1, state.forecast_days.len() as u32))
                    .collect::<Vec<_>>(),
            )
            .split(inner);

        for (day, column) in state.forecast_days.iter().zip(columns.iter()) {
            frame.render_widget(Paragraph::new(Self::day_lines(day, state)), *column);
        }
    }
}
