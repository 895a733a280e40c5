//! Clock panel — single top row with the Japanese date and wall-clock time.

use chrono::{Datelike, Timelike};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::{
    action::PanelId,
    app_state::BoardState,
    component::Component,
    theme::{style_secondary, C_CLOCK},
};

const WEEKDAYS: [&str; 7] = ["月", "火", "水", "木", "金", "土", "日"];

/// "2026/08/23(日)" — the ja-JP short-date form.
pub fn japanese_date(date: impl Datelike) -> String {
    format!(
        "{:04}/{:02}/{:02}({})",
        date.year(),
        date.month(),
        date.day(),
        WEEKDAYS[date.weekday().num_days_from_monday() as usize]
    )
}

pub fn clock_time(time: impl Timelike) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        time.hour(),
        time.minute(),
        time.second()
    )
}

pub struct ClockPanel;

impl ClockPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Component for ClockPanel {
    fn id(&self) -> PanelId {
        PanelId::Clock
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, state: &BoardState) {
        if area.height == 0 {
            return;
        }

        let date = Line::from(Span::styled(
            format!(" {}", japanese_date(state.now.date_naive())),
            style_secondary(),
        ));
        frame.render_widget(Paragraph::new(date), area);

        let time = Line::from(Span::styled(
            format!("{} ", clock_time(state.now.time())),
            Style::default().fg(C_CLOCK).add_modifier(Modifier::BOLD),
        ))
        .right_aligned();
        frame.render_widget(Paragraph::new(time), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn date_uses_japanese_weekday() {
        let sunday = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
        assert_eq!(japanese_date(sunday), "2026/08/23(日)");
        let monday = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        assert_eq!(japanese_date(monday), "2026/08/24(月)");
    }

    #[test]
    fn time_is_zero_padded() {
        let t = NaiveTime::from_hms_opt(9, 5, 3).unwrap();
        assert_eq!(clock_time(t), "09:05:03");
    }
}
