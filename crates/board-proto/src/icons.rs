//! Line icon registry — maps a substring of a display label to the local
//! image assets shown next to it.
//!
//! The table is ordered and the resolver takes the first key contained in the
//! label, so an earlier entry always beats a later (even longer) one. Keys
//! cover Tokyu rail, Tokyu bus routes, Tokyo Metro, Toei subway, the Arakawa
//! tram, the Yokohama municipal subway, and a few other operators.

/// Ordered `(label substring, asset identifiers)` table.
pub const ICON_REGISTRY: &[(&str, &[&str])] = &[
    // 東急電鉄
    ("大井町線", &["OM.png", "OM_1.png"]),
    ("田園都市線", &["DT.png"]),
    ("東横線", &["TY.png"]),
    ("目黒線", &["MG.png"]),
    ("池上線", &["IK.png"]),
    ("多摩川線", &["TM.png"]),
    ("こどもの国線", &["KD.png"]),
    // バス
    ("玉11", &["tokyu_bus.png"]),
    ("園02", &["tokyu_bus.png"]),
    ("等01", &["tokyu_bus.png"]),
    // 東京メトロ
    ("丸の内線", &["icon_marunouchi.png"]),
    ("丸の内線方南町支線", &["icon_marunouchi.png"]),
    ("南北線", &["icon_namboku.png"]),
    ("東西線", &["icon_tozai.png"]),
    ("有楽町線", &["icon_yurakucho.png"]),
    ("千代田線", &["icon_chiyoda.png"]),
    ("副都心線", &["icon_fukutoshin.png"]),
    ("銀座線", &["icon_ginza.png"]),
    ("半蔵門線", &["icon_hanzomon.png"]),
    ("日比谷線", &["icon_hibiya.png"]),
    // 都営地下鉄
    ("浅草線", &["Toei_Asakusa_line_symbol.svg.png"]),
    ("三田線", &["Toei_Mita_line_symbol.svg.png"]),
    ("新宿線", &["Toei_Shinjuku_line_symbol.svg.png"]),
    ("大江戸線", &["Toei_Oedo_line_symbol.svg.png"]),
    // 都電
    (
        "都電荒川線（東京さくらトラム）",
        &["Toei_Arakawa_line_symbol.svg.png"],
    ),
    // 横浜市営地下鉄
    ("横浜市営地下鉄・グリーンライン", &["icon_green.png"]),
    ("横浜市営地下鉄・ブルーライン", &["icon_blue.png"]),
    // その他
    ("りんかい線", &["icon_rinkai.png"]),
    ("つくばエクスプレス線", &["icon_tx.png"]),
    ("多摩モノレール", &["icon_tama.png"]),
];

/// Resolve the icon set for a display label.
///
/// Scans the registry in declaration order and returns the assets of the
/// first key that is a substring of `label`. Unknown labels resolve to an
/// empty slice; there is no error path.
pub fn resolve(label: &str) -> &'static [&'static str] {
    for (key, assets) in ICON_REGISTRY {
        if label.contains(key) {
            return assets;
        }
    }
    &[]
}

/// Web path under which a graphical host serves an asset identifier.
pub fn asset_path(file: &str) -> String {
    format!("/static/img/{}", file)
}
