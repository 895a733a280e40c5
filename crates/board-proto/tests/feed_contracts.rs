//! End-to-end parsing of realistic feed documents, matching what the Flask
//! backend actually emits.

use board_proto::feeds::{
    DirectionSet, NewsFeed, ScheduleFeed, StatusFeed, WeatherFeed, ALL_CLEAR_TEXT,
    FORECAST_DAYS,
};
use board_proto::icons;

#[test]
fn status_document_with_mixed_logo_entries() {
    let raw = r#"{
        "status": [
            {"logo": "https://transit.example.jp/img/tokyu.png",
             "text": "東横線：人身事故の影響で遅延が発生しています"},
            {"logo": null, "text": "田園都市線は平常運転です"}
        ]
    }"#;

    let feed: StatusFeed = serde_json::from_str(raw).expect("status document should parse");
    let entries = feed.into_entries();
    assert_eq!(entries.len(), 2);
    assert!(entries[0].logo.is_some());
    // The second entry has no logo; the display derives its badge from the text.
    assert_eq!(icons::resolve(&entries[1].text), &["DT.png"]);
}

#[test]
fn empty_status_document_yields_the_all_clear_entry() {
    let feed: StatusFeed = serde_json::from_str(r#"{"status": []}"#).expect("should parse");
    let entries = feed.into_entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].text, ALL_CLEAR_TEXT);
}

#[test]
fn weather_document_with_extra_days_and_sparse_fields() {
    let raw = r#"{
        "forecasts": [
            {"dateLabel": "今日", "telop": "晴のち曇",
             "image": {"url": "https://weather.example.jp/1.png"},
             "chanceOfRain": {"T12_18": "20%"},
             "detail": {"wind": "北の風 後 南の風"}},
            {"dateLabel": "明日", "telop": "曇時々雨",
             "image": {"url": "https://weather.example.jp/2.png"},
             "chanceOfRain": {"T12_18": "70%"},
             "detail": {}},
            {"dateLabel": "明後日", "telop": "雨",
             "image": {"url": "https://weather.example.jp/3.png"},
             "chanceOfRain": {},
             "detail": {"wind": "南の風 やや強く"}},
            {"dateLabel": "3日後", "telop": "晴",
             "image": {"url": "https://weather.example.jp/4.png"},
             "chanceOfRain": {"T12_18": "0%"},
             "detail": {"wind": "無風"}},
            {"dateLabel": "4日後", "telop": "雪",
             "image": {"url": "https://weather.example.jp/5.png"},
             "chanceOfRain": {}, "detail": {}}
        ]
    }"#;

    let feed: WeatherFeed = serde_json::from_str(raw).expect("weather document should parse");
    let days = feed.into_days();
    assert_eq!(days.len(), FORECAST_DAYS);
    assert_eq!(days[0].date_label, "今日");
    assert_eq!(days[2].rain_label(), "--%");
    assert_eq!(days[2].wind_label(), "南の風 やや強く");
}

#[test]
fn news_document_is_a_plain_headline_list() {
    let raw = r#"{"news": [
        "来週月曜から平日ダイヤを一部変更します",
        "構内エレベーター改修工事のお知らせ",
        "台風接近に伴う計画運休の可能性について"
    ]}"#;

    let feed: NewsFeed = serde_json::from_str(raw).expect("news document should parse");
    assert_eq!(feed.news.len(), 3);
    assert!(feed.news[0].contains("ダイヤ"));
}

#[test]
fn schedule_document_mixes_flat_and_named_routes() {
    let raw = r#"{
        "current_time": "12:00:00",
        "routes": [
            {"label": "東急大井町線　尾山台駅",
             "schedules": {
                 "大井町方面": [
                     "先発: 12:03発 【各停】 大井町行 - 3分 走れば間に合います",
                     "次発: 12:08発 【急行】 大井町行 - 8分 歩けば間に合います",
                     "次々発: 12:15発 【各停】 大井町行 - 15分 歩けば間に合います"
                 ],
                 "溝の口方面": [
                     "先発: 12:05発 【各停】 溝の口行 - 5分 歩けば間に合います"
                 ]
             }},
            {"label": "等01　東京都市大学前",
             "schedules": [
                 "先発: 12:10発 - 10分 歩けば間に合います",
                 "次発: 12:25発 - 25分 歩けば間に合います"
             ]}
        ]
    }"#;

    let feed: ScheduleFeed = serde_json::from_str(raw).expect("schedule document should parse");
    assert_eq!(feed.routes.len(), 2);

    // Named directions keep document order and entry order.
    let pairs = feed.routes[0].schedules.pairs();
    assert_eq!(pairs[0].0, "大井町方面");
    assert_eq!(pairs[0].1.len(), 3);
    assert_eq!(pairs[1].0, "溝の口方面");

    // Flat list exposes one unnamed direction.
    match &feed.routes[1].schedules {
        DirectionSet::Flat(list) => assert_eq!(list.len(), 2),
        DirectionSet::Named(_) => panic!("bus route should parse as a flat list"),
    }
    let pairs = feed.routes[1].schedules.pairs();
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].0, "");

    // Unknown top-level fields (current_time) are ignored.
    assert_eq!(feed.routes[0].label, "東急大井町線　尾山台駅");
}
