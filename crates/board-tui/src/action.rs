//! Action enum — operator intents flowing from the settings overlay (and
//! global keys) into the App.

/// Unique identifier for a board panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    Status,
    Weather,
    News,
    Schedule,
    Clock,
    SettingsOverlay,
}

impl PanelId {
    /// Display title, also used by the settings rows.
    pub fn title(self) -> &'static str {
        match self {
            PanelId::Status => "運行情報",
            PanelId::Weather => "天気予報",
            PanelId::News => "ニュース",
            PanelId::Schedule => "発車案内",
            PanelId::Clock => "時計",
            PanelId::SettingsOverlay => "設定",
        }
    }
}

/// Which half of a panel's paint a color action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTarget {
    Background,
    Text,
}

/// All actions that can flow through the system.
/// Components produce Actions; the App dispatches them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ── Settings lifecycle ───────────────────────────────────────────────────
    /// Open the settings overlay; freezes every timer until it closes.
    OpenSettings,
    /// Close the overlay and restart the timer set.
    CloseSettings,

    // ── Panel settings ───────────────────────────────────────────────────────
    TogglePanel(PanelId),
    CyclePanelColor(PanelId, ColorTarget, i8),
    SetZoom(u16),
    SetFontScale(u16),
    CycleBorderPreset,
    ToggleResizable,

    // ── Route display ────────────────────────────────────────────────────────
    SetRouteVisible(String, bool),
    SetRouteCount(String, u32),

    // ── Layout ───────────────────────────────────────────────────────────────
    /// Shift the schedule column width by a signed percent step.
    /// Only honored while the resizable setting is on.
    AdjustScheduleShare(i16),

    // ── System ───────────────────────────────────────────────────────────────
    Quit,
    Resize(u16, u16),
}
