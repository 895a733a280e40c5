//! Shared state every panel renders from.
//!
//! Feed handlers mutate this through the methods below; the draw pass only
//! reads. The rotation cursors live here too so the panels stay stateless.

use std::collections::HashMap;

use board_proto::feeds::{Forecast, Route, ScheduleFeed, StatusEntry};
use chrono::{DateTime, Local};

use crate::settings::DisplaySettings;

/// Departure rows shown per direction until the operator overrides it.
pub const DEFAULT_DEPARTURES: u32 = 2;

// ── route display ────────────────────────────────────────────────────────────

/// Which routes the schedule board shows and how many departures each gets.
/// The visible set is seeded from the first schedule document and never
/// re-seeded, so the operator's choices survive every later fetch — and a
/// route whose label first appears in a later document stays off the board
/// until the operator turns it on.
#[derive(Debug, Default)]
pub struct RouteDisplay {
    initialized: bool,
    visible: Vec<String>,
    counts: HashMap<String, u32>,
}

impl RouteDisplay {
    pub fn initialize(&mut self, routes: &[Route]) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        for route in routes {
            self.visible.push(route.label.clone());
            self.counts.insert(route.label.clone(), DEFAULT_DEPARTURES);
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_visible(&self, label: &str) -> bool {
        self.visible.iter().any(|v| v == label)
    }

    pub fn set_visible(&mut self, label: &str, visible: bool) {
        if visible {
            if !self.is_visible(label) {
                self.visible.push(label.to_string());
            }
        } else {
            self.visible.retain(|v| v != label);
        }
    }

    pub fn count(&self, label: &str) -> u32 {
        self.counts.get(label).copied().unwrap_or(DEFAULT_DEPARTURES)
    }

    /// Counts below 1 are coerced up — a route card with zero rows would
    /// read as a dead line rather than a setting.
    pub fn set_count(&mut self, label: &str, count: u32) {
        self.counts.insert(label.to_string(), count.max(1));
    }

    /// Visible routes in document order. Visible labels missing from the
    /// current document are skipped here, never removed from the set.
    pub fn visible_routes<'a>(&self, schedule: &'a ScheduleFeed) -> Vec<&'a Route> {
        schedule
            .routes
            .iter()
            .filter(|r| self.is_visible(&r.label))
            .collect()
    }
}

// ── board state ──────────────────────────────────────────────────────────────

pub struct BoardState {
    /// Never empty: seeded with the fetch-error entry so rotation and the
    /// status panel always have something to show before the first fetch.
    pub status_entries: Vec<StatusEntry>,
    pub status_cursor: usize,
    pub forecast_days: Vec<Forecast>,
    pub headlines: Vec<String>,
    /// `None` until the first non-empty news document arrives.
    pub news_cursor: Option<usize>,
    pub schedule: ScheduleFeed,
    pub route_display: RouteDisplay,
    pub now: DateTime<Local>,
    pub settings: DisplaySettings,
    pub settings_open: bool,
    pub locale: String,
}

impl BoardState {
    pub fn new(locale: String) -> Self {
        Self {
            status_entries: vec![StatusEntry::fetch_error()],
            status_cursor: 0,
            forecast_days: Vec::new(),
            headlines: Vec::new(),
            news_cursor: None,
            schedule: ScheduleFeed::default(),
            route_display: RouteDisplay::default(),
            now: Local::now(),
            settings: DisplaySettings::default(),
            settings_open: false,
            locale,
        }
    }

    pub fn tick_clock(&mut self) {
        self.now = Local::now();
    }

    // ── status ──

    pub fn current_status(&self) -> &StatusEntry {
        &self.status_entries[self.status_cursor % self.status_entries.len()]
    }

    pub fn rotate_status(&mut self) {
        self.status_cursor = (self.status_cursor + 1) % self.status_entries.len();
    }

    pub fn set_status(&mut self, entries: Vec<StatusEntry>) {
        debug_assert!(!entries.is_empty());
        self.status_entries = entries;
        self.status_cursor = 0;
    }

    pub fn set_status_failed(&mut self) {
        self.status_entries = vec![StatusEntry::fetch_error()];
        self.status_cursor = 0;
    }

    // ── news ──

    pub fn current_headline(&self) -> Option<&str> {
        let cursor = self.news_cursor?;
        if self.headlines.is_empty() {
            return None;
        }
        Some(self.headlines[cursor % self.headlines.len()].as_str())
    }

    /// Replaces the ticker list. The cursor rewinds to the top only when
    /// content arrives after an empty document; a non-empty reload keeps the
    /// current position so the ticker doesn't jump back every fetch.
    pub fn set_headlines(&mut self, headlines: Vec<String>) {
        let was_empty = self.headlines.is_empty();
        self.headlines = headlines;
        if was_empty && !self.headlines.is_empty() {
            self.news_cursor = Some(0);
        }
    }

    pub fn rotate_news(&mut self) {
        if self.headlines.is_empty() {
            return;
        }
        let next = self.news_cursor.map(|i| i + 1).unwrap_or(0);
        self.news_cursor = Some(next % self.headlines.len());
    }

    // ── weather / schedule ──

    pub fn set_forecast(&mut self, days: Vec<Forecast>) {
        self.forecast_days = days;
    }

    pub fn set_schedule(&mut self, schedule: ScheduleFeed) {
        self.route_display.initialize(&schedule.routes);
        self.schedule = schedule;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use board_proto::feeds::{DirectionSet, FETCH_ERROR_TEXT};

    fn route(label: &str) -> Route {
        Route {
            label: label.to_string(),
            schedules: DirectionSet::Flat(vec!["先発: 10:00発 【各停】 二子玉川行".into()]),
        }
    }

    #[test]
    fn status_starts_with_the_error_entry_and_rotates_safely() {
        let mut state = BoardState::new("ja".into());
        assert_eq!(state.current_status().text, FETCH_ERROR_TEXT);
        state.rotate_status();
        assert_eq!(state.status_cursor, 0);

        state.set_status(vec![
            StatusEntry::all_clear(),
            StatusEntry {
                logo: None,
                text: "大井町線 遅延".into(),
            },
        ]);
        state.rotate_status();
        assert_eq!(state.current_status().text, "大井町線 遅延");
        state.rotate_status();
        assert_eq!(state.status_cursor, 0);
    }

    #[test]
    fn news_cursor_starts_at_top_and_survives_reloads() {
        let mut state = BoardState::new("ja".into());
        assert!(state.current_headline().is_none());
        state.rotate_news();
        assert_eq!(state.news_cursor, None);

        state.set_headlines(vec![]);
        assert_eq!(state.news_cursor, None);

        state.set_headlines(vec!["A".into(), "B".into(), "C".into()]);
        assert_eq!(state.news_cursor, Some(0));
        state.rotate_news();
        state.rotate_news();
        assert_eq!(state.current_headline(), Some("C"));

        // A non-empty reload does not rewind the ticker.
        state.set_headlines(vec!["D".into(), "E".into(), "F".into()]);
        assert_eq!(state.news_cursor, Some(2));
        assert_eq!(state.current_headline(), Some("F"));
        state.rotate_news();
        assert_eq!(state.current_headline(), Some("D"));
    }

    #[test]
    fn news_cursor_rewinds_when_content_returns_after_an_empty_document() {
        let mut state = BoardState::new("ja".into());
        state.set_headlines(vec!["A".into(), "B".into(), "C".into(), "D".into()]);
        state.rotate_news();
        state.rotate_news();
        state.rotate_news();
        assert_eq!(state.news_cursor, Some(3));

        state.set_headlines(vec![]);
        assert!(state.current_headline().is_none());

        state.set_headlines(vec!["X".into(), "Y".into()]);
        assert_eq!(state.news_cursor, Some(0));
        assert_eq!(state.current_headline(), Some("X"));
    }

    #[test]
    fn shrinking_news_list_keeps_reads_in_bounds() {
        let mut state = BoardState::new("ja".into());
        state.set_headlines(vec!["A".into(), "B".into(), "C".into()]);
        state.rotate_news();
        state.rotate_news();
        state.set_headlines(vec!["X".into()]);
        assert_eq!(state.news_cursor, Some(2));
        assert_eq!(state.current_headline(), Some("X"));
    }

    #[test]
    fn route_display_seeds_once() {
        let mut display = RouteDisplay::default();
        display.initialize(&[route("東急大井町線　尾山台駅")]);
        display.set_visible("東急大井町線　尾山台駅", false);
        display.set_count("東急大井町線　尾山台駅", 5);

        // A later document with more routes must not reset the operator's choices.
        display.initialize(&[route("東急大井町線　尾山台駅"), route("東急バス")]);
        assert!(!display.is_visible("東急大井町線　尾山台駅"));
        assert_eq!(display.count("東急大井町線　尾山台駅"), 5);
        assert_eq!(display.count("東急バス"), DEFAULT_DEPARTURES);
    }

    #[test]
    fn routes_arriving_after_the_first_document_stay_hidden() {
        let mut display = RouteDisplay::default();
        display.initialize(&[route("東急大井町線　尾山台駅")]);

        // A later document introduces a brand-new route; it waits for the
        // operator instead of appearing on its own.
        let schedule = ScheduleFeed {
            routes: vec![route("東急大井町線　尾山台駅"), route("東急東横線　自由が丘駅")],
        };
        display.initialize(&schedule.routes);
        assert!(!display.is_visible("東急東横線　自由が丘駅"));
        let labels: Vec<&str> = display
            .visible_routes(&schedule)
            .iter()
            .map(|r| r.label.as_str())
            .collect();
        assert_eq!(labels, ["東急大井町線　尾山台駅"]);

        display.set_visible("東急東横線　自由が丘駅", true);
        assert!(display.is_visible("東急東横線　自由が丘駅"));
        assert_eq!(display.count("東急東横線　自由が丘駅"), DEFAULT_DEPARTURES);
    }

    #[test]
    fn count_floor_is_one() {
        let mut display = RouteDisplay::default();
        display.initialize(&[route("東急バス")]);
        display.set_count("東急バス", 0);
        assert_eq!(display.count("東急バス"), 1);
    }

    #[test]
    fn visible_routes_keep_document_order() {
        let mut display = RouteDisplay::default();
        let schedule = ScheduleFeed {
            routes: vec![route("甲"), route("乙"), route("丙")],
        };
        display.initialize(&schedule.routes);
        display.set_visible("乙", false);
        let labels: Vec<&str> = display
            .visible_routes(&schedule)
            .iter()
            .map(|r| r.label.as_str())
            .collect();
        assert_eq!(labels, ["甲", "丙"]);
    }
}
