//! DisplaySettings — operator-adjustable presentation state.
//!
//! Every settings-overlay input dispatches one Action; the App applies it
//! here and the next frame reflects it. Nothing in this module is persisted —
//! the board resets to defaults on restart.

use ratatui::style::Modifier;
use ratatui::widgets::BorderType;

use crate::action::PanelId;

pub const ZOOM_MIN: u16 = 50;
pub const ZOOM_MAX: u16 = 150;
pub const ZOOM_STEP: u16 = 5;
pub const FONT_MIN: u16 = 50;
pub const FONT_MAX: u16 = 200;
pub const FONT_STEP: u16 = 10;
pub const SHARE_MIN: u16 = 30;
pub const SHARE_MAX: u16 = 80;

/// Background/text paint for one panel, as indexes into the theme's
/// `PAINT_BG` / `PAINT_FG` tables. Cycling wraps, so every value is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelPaint {
    pub bg: usize,
    pub fg: usize,
}

/// Border look applied to every panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderPreset {
    Plain,
    Rounded,
    Thick,
    Double,
}

impl BorderPreset {
    pub fn next(self) -> Self {
        match self {
            Self::Plain => Self::Rounded,
            Self::Rounded => Self::Thick,
            Self::Thick => Self::Double,
            Self::Double => Self::Plain,
        }
    }

    pub fn border_type(self) -> BorderType {
        match self {
            Self::Plain => BorderType::Plain,
            Self::Rounded => BorderType::Rounded,
            Self::Thick => BorderType::Thick,
            Self::Double => BorderType::Double,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Plain => "標準",
            Self::Rounded => "丸角",
            Self::Thick => "太線",
            Self::Double => "二重線",
        }
    }
}

#[derive(Debug, Clone)]
pub struct DisplaySettings {
    pub show_status: bool,
    pub show_weather: bool,
    pub show_news: bool,
    pub show_schedule: bool,
    pub status_paint: PanelPaint,
    pub weather_paint: PanelPaint,
    pub news_paint: PanelPaint,
    pub schedule_paint: PanelPaint,
    /// Scales the side-panel column width.
    pub zoom_percent: u16,
    /// ≥ 120 renders panel text bold, ≤ 80 dim.
    pub font_percent: u16,
    pub border_preset: BorderPreset,
    /// Gates the manual `[`/`]` schedule-width keys.
    pub resizable: bool,
    /// Percent of the body width given to the schedule board.
    pub schedule_share: u16,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            show_status: true,
            show_weather: true,
            show_news: true,
            show_schedule: true,
            status_paint: PanelPaint::default(),
            weather_paint: PanelPaint::default(),
            news_paint: PanelPaint::default(),
            schedule_paint: PanelPaint::default(),
            zoom_percent: 100,
            font_percent: 100,
            border_preset: BorderPreset::Plain,
            resizable: false,
            schedule_share: 60,
        }
    }
}

impl DisplaySettings {
    pub fn show(&self, panel: PanelId) -> bool {
        match panel {
            PanelId::Status => self.show_status,
            PanelId::Weather => self.show_weather,
            PanelId::News => self.show_news,
            PanelId::Schedule => self.show_schedule,
            PanelId::Clock | PanelId::SettingsOverlay => true,
        }
    }

    pub fn toggle(&mut self, panel: PanelId) {
        match panel {
            PanelId::Status => self.show_status = !self.show_status,
            PanelId::Weather => self.show_weather = !self.show_weather,
            PanelId::News => self.show_news = !self.show_news,
            PanelId::Schedule => self.show_schedule = !self.show_schedule,
            PanelId::Clock | PanelId::SettingsOverlay => {}
        }
    }

    pub fn paint(&self, panel: PanelId) -> PanelPaint {
        match panel {
            PanelId::Status => self.status_paint,
            PanelId::Weather => self.weather_paint,
            PanelId::News => self.news_paint,
            PanelId::Schedule => self.schedule_paint,
            PanelId::Clock | PanelId::SettingsOverlay => PanelPaint::default(),
        }
    }

    pub fn paint_mut(&mut self, panel: PanelId) -> Option<&mut PanelPaint> {
        match panel {
            PanelId::Status => Some(&mut self.status_paint),
            PanelId::Weather => Some(&mut self.weather_paint),
            PanelId::News => Some(&mut self.news_paint),
            PanelId::Schedule => Some(&mut self.schedule_paint),
            PanelId::Clock | PanelId::SettingsOverlay => None,
        }
    }

    pub fn set_zoom(&mut self, percent: u16) {
        self.zoom_percent = percent.clamp(ZOOM_MIN, ZOOM_MAX);
    }

    pub fn set_font_scale(&mut self, percent: u16) {
        self.font_percent = percent.clamp(FONT_MIN, FONT_MAX);
    }

    pub fn adjust_schedule_share(&mut self, delta: i16) {
        let share = self.schedule_share as i16 + delta;
        self.schedule_share = (share.max(SHARE_MIN as i16) as u16).min(SHARE_MAX);
    }

    /// Modifier applied to panel body text for the current font scale.
    pub fn text_modifier(&self) -> Modifier {
        if self.font_percent >= 120 {
            Modifier::BOLD
        } else if self.font_percent <= 80 {
            Modifier::DIM
        } else {
            Modifier::empty()
        }
    }

    /// Side-panel column width in cells for a given terminal width,
    /// scaled by the zoom percent.
    pub fn side_column_width(&self, terminal_width: u16) -> u16 {
        let base = terminal_width.saturating_mul(100 - self.schedule_share.min(99)) / 100;
        let scaled = (base as u32 * self.zoom_percent as u32 / 100) as u16;
        scaled.clamp(20, terminal_width.saturating_sub(20).max(20))
    }
}

/// Coerce the count editor's raw text into a usable departure count.
/// Anything unparseable or below 1 becomes 1; there is no upper clamp
/// (the editor only hints at 10).
pub fn parse_count(input: &str) -> u32 {
    match input.trim().parse::<i64>() {
        Ok(v) if v >= 1 => v.min(u32::MAX as i64) as u32,
        _ => 1,
    }
}
