//! Glyphs used across the TUI

#[derive(Debug, Clone)]
pub struct Icons {
    pub music: &'static str,
    pub settings: &'static str,
    pub selected: &'static str,
    pub unselected: &'static str,

    // Progress bar
    pub progress_full: &'static str,
    pub progress_empty: &'static str,
    pub progress_head: &'static str,
}

impl Icons {
    pub const fn unicode() -> Self {
        Self {
            music: "♪",
            settings: "⚙",
            selected: "▸",
            unselected: " ",

            progress_full: "━",
            progress_empty: "─",
            progress_head: "●",
        }
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self::unicode()
    }
}

/// Loading spinner frames
pub struct LoadingSpinner;

impl LoadingSpinner {
    /// Braille-based smooth spinner
    pub const BRAILLE: [&'static str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

    pub fn frame(tick: u64) -> &'static str {
        let idx = (tick / 2) as usize % Self::BRAILLE.len();
        Self::BRAILLE[idx]
    }
}
