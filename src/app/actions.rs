#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    OpenSettings,
    CloseSettings,

    // Main view offset nudges
    OffsetUp,
    OffsetDown,

    // Settings menu
    SettingsUp,
    SettingsDown,
    SettingsActivate,
    SettingsAdjust(i32),

    Resize,
}
