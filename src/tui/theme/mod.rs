//! Theme configuration - named color themes

pub mod icons;
pub mod palette;

pub use icons::{Icons, LoadingSpinner};
pub use palette::Palette;

/// Theme names in cycling order.
pub const THEME_NAMES: [&str; 6] = ["spotify", "nord", "dracula", "gruvbox", "monokai", "arch"];

/// Active theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,
    pub palette: Palette,
    pub icons: Icons,
}

impl Theme {
    /// Look up a theme by name, falling back to the first one.
    pub fn named(name: &str) -> Self {
        let idx = index_of(name);
        let palette = match THEME_NAMES[idx] {
            "nord" => Palette::NORD,
            "dracula" => Palette::DRACULA,
            "gruvbox" => Palette::GRUVBOX,
            "monokai" => Palette::MONOKAI,
            "arch" => Palette::ARCH,
            _ => Palette::SPOTIFY,
        };
        Self {
            name: THEME_NAMES[idx],
            palette,
            icons: Icons::unicode(),
        }
    }

    pub fn border_set(&self) -> ratatui::symbols::border::Set<'static> {
        ratatui::symbols::border::ROUNDED
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::named(THEME_NAMES[0])
    }
}

fn index_of(name: &str) -> usize {
    THEME_NAMES.iter().position(|n| *n == name).unwrap_or(0)
}

/// Name of the theme `step` positions away from `current`, wrapping around.
pub fn cycle(current: &str, step: i32) -> &'static str {
    let len = THEME_NAMES.len() as i32;
    let idx = (index_of(current) as i32 + step).rem_euclid(len);
    THEME_NAMES[idx as usize]
}

pub fn get_theme(name: &str) -> Theme {
    Theme::named(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_theme_falls_back() {
        let t = get_theme("solarized");
        assert_eq!(t.name, "spotify");
        assert_eq!(t.palette, Palette::SPOTIFY);
        assert_eq!(get_theme("dracula").palette, Palette::DRACULA);
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(cycle("spotify", 1), "nord");
        assert_eq!(cycle("spotify", -1), "arch");
        assert_eq!(cycle("arch", 1), "spotify");
        assert_eq!(cycle("unknown", 1), "nord");
    }
}
