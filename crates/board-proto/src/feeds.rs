//! Wire contracts and normalizers for the four board feeds.
//!
//! Shapes follow the backend JSON verbatim (`dateLabel`, `chanceOfRain`,
//! etc. via serde renames). Normalization rules differ per feed and are part
//! of the board's contract:
//! - status: never empty — empty or failed responses substitute a synthetic
//!   entry so the panel always has something to rotate through
//! - weather: only the first three forecast days are kept
//! - news: may be empty, no substitution
//! - schedule: departures are either a bare list or named direction columns;
//!   `DirectionSet::pairs` gives both the same shape, preserving the
//!   document order of named columns

use std::fmt;

use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Shown when the status feed returns an empty list.
pub const ALL_CLEAR_TEXT: &str = "各社平常運転です";
/// Shown when the status fetch or parse fails.
pub const FETCH_ERROR_TEXT: &str = "運行情報取得エラー";

/// Number of forecast days the weather panel displays.
pub const FORECAST_DAYS: usize = 3;

// ── Status ────────────────────────────────────────────────────────────────────

/// One line of the service-status panel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusEntry {
    /// Operator-provided logo URL. When absent the display falls back to the
    /// icon registry, keyed off the entry text.
    #[serde(default)]
    pub logo: Option<String>,
    pub text: String,
}

impl StatusEntry {
    pub fn all_clear() -> Self {
        Self {
            logo: None,
            text: ALL_CLEAR_TEXT.to_string(),
        }
    }

    pub fn fetch_error() -> Self {
        Self {
            logo: None,
            text: FETCH_ERROR_TEXT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusFeed {
    pub status: Vec<StatusEntry>,
}

impl StatusFeed {
    /// Normalized entry list — never empty.
    pub fn into_entries(self) -> Vec<StatusEntry> {
        if self.status.is_empty() {
            vec![StatusEntry::all_clear()]
        } else {
            self.status
        }
    }
}

// ── Weather ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherFeed {
    pub forecasts: Vec<Forecast>,
}

impl WeatherFeed {
    /// The days the panel shows, truncated to [`FORECAST_DAYS`].
    pub fn into_days(self) -> Vec<Forecast> {
        let mut days = self.forecasts;
        days.truncate(FORECAST_DAYS);
        days
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Forecast {
    #[serde(rename = "dateLabel")]
    pub date_label: String,
    pub telop: String,
    #[serde(default)]
    pub image: ForecastImage,
    #[serde(rename = "chanceOfRain", default)]
    pub chance_of_rain: RainChance,
    #[serde(default)]
    pub detail: ForecastDetail,
}

impl Forecast {
    /// Afternoon rain chance, `--%` when the feed omits it.
    pub fn rain_label(&self) -> &str {
        self.chance_of_rain.afternoon.as_deref().unwrap_or("--%")
    }

    /// Wind description, empty when the feed omits it.
    pub fn wind_label(&self) -> &str {
        self.detail.wind.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastImage {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RainChance {
    #[serde(rename = "T12_18", default)]
    pub afternoon: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastDetail {
    #[serde(default)]
    pub wind: Option<String>,
}

// ── News ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct NewsFeed {
    #[serde(default)]
    pub news: Vec<String>,
}

// ── Schedule ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScheduleFeed {
    #[serde(default)]
    pub routes: Vec<Route>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Route {
    /// Stable join key for per-route display settings.
    pub label: String,
    pub schedules: DirectionSet,
}

/// Departure lists for one route — either a bare list or named direction
/// columns whose order matches the JSON document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectionSet {
    Flat(Vec<String>),
    Named(Vec<(String, Vec<String>)>),
}

impl DirectionSet {
    /// Uniform view as `(direction name, departures)` pairs in document
    /// order. A flat list becomes a single pair with an empty name.
    pub fn pairs(&self) -> Vec<(&str, &[String])> {
        match self {
            DirectionSet::Flat(list) => vec![("", list.as_slice())],
            DirectionSet::Named(columns) => columns
                .iter()
                .map(|(name, list)| (name.as_str(), list.as_slice()))
                .collect(),
        }
    }
}

impl<'de> Deserialize<'de> for DirectionSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SetVisitor;

        impl<'de> Visitor<'de> for SetVisitor {
            type Value = DirectionSet;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a departure list or a map of direction name to departure list")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut list = Vec::new();
                while let Some(entry) = seq.next_element::<String>()? {
                    list.push(entry);
                }
                Ok(DirectionSet::Flat(list))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                // MapAccess yields entries as they appear in the document;
                // the board relies on that order for column placement.
                let mut columns = Vec::new();
                while let Some((name, list)) = map.next_entry::<String, Vec<String>>()? {
                    columns.push((name, list));
                }
                Ok(DirectionSet::Named(columns))
            }
        }

        deserializer.deserialize_any(SetVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_status_normalizes_to_all_clear() {
        let feed: StatusFeed = serde_json::from_str(r#"{"status":[]}"#).unwrap();
        assert_eq!(feed.into_entries(), vec![StatusEntry::all_clear()]);
    }

    #[test]
    fn status_entries_pass_through_unchanged() {
        let feed: StatusFeed = serde_json::from_str(
            r#"{"status":[
                {"logo":"https://example.jp/logo.png","text":"東横線で遅延が発生しています"},
                {"text":"大井町線は平常運転です"}
            ]}"#,
        )
        .unwrap();
        let entries = feed.into_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].logo.as_deref(), Some("https://example.jp/logo.png"));
        assert_eq!(entries[1].logo, None);
        assert_eq!(entries[1].text, "大井町線は平常運転です");
    }

    #[test]
    fn weather_truncates_to_three_days() {
        let feed: WeatherFeed = serde_json::from_str(
            r#"{"forecasts":[
                {"dateLabel":"今日","telop":"晴れ","image":{"url":"a.png"},
                 "chanceOfRain":{"T12_18":"10%"},"detail":{"wind":"北の風"}},
                {"dateLabel":"明日","telop":"曇り","image":{"url":"b.png"},
                 "chanceOfRain":{},"detail":{}},
                {"dateLabel":"明後日","telop":"雨","image":{"url":"c.png"},
                 "chanceOfRain":{"T12_18":"80%"},"detail":{"wind":"南の風 やや強く"}},
                {"dateLabel":"4日後","telop":"雪","image":{"url":"d.png"},
                 "chanceOfRain":{},"detail":{}}
            ]}"#,
        )
        .unwrap();
        let days = feed.into_days();
        assert_eq!(days.len(), FORECAST_DAYS);
        assert_eq!(days[0].rain_label(), "10%");
        assert_eq!(days[1].rain_label(), "--%");
        assert_eq!(days[1].wind_label(), "");
        assert_eq!(days[2].wind_label(), "南の風 やや強く");
    }

    #[test]
    fn news_tolerates_missing_field() {
        let feed: NewsFeed = serde_json::from_str("{}").unwrap();
        assert!(feed.news.is_empty());

        let feed: NewsFeed =
            serde_json::from_str(r#"{"news":["見出し1","見出し2"]}"#).unwrap();
        assert_eq!(feed.news.len(), 2);
    }

    #[test]
    fn flat_schedule_becomes_single_unnamed_pair() {
        let route: Route = serde_json::from_str(
            r#"{"label":"等01　東京都市大学前",
                "schedules":["先発: 12:10発 - 14分 歩けば間に合います",
                             "次発: 12:25発 - 29分 歩けば間に合います"]}"#,
        )
        .unwrap();
        let pairs = route.schedules.pairs();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0, "");
        assert_eq!(pairs[0].1.len(), 2);
    }

    #[test]
    fn direction_map_preserves_document_order() {
        // 下り before 上り in the document; lexicographic order would flip it.
        let route: Route = serde_json::from_str(
            r#"{"label":"東急大井町線　尾山台駅",
                "schedules":{
                    "溝の口方面":["先発: 12:03発 【各停】 溝の口行 - 7分 走れば間に合います"],
                    "大井町方面":["先発: 12:05発 【急行】 大井町行 - 9分 歩けば間に合います"]
                }}"#,
        )
        .unwrap();
        let pairs = route.schedules.pairs();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].0, "溝の口方面");
        assert_eq!(pairs[1].0, "大井町方面");
    }

    #[test]
    fn empty_schedule_document_parses() {
        let feed: ScheduleFeed = serde_json::from_str("{}").unwrap();
        assert!(feed.routes.is_empty());
    }
}
