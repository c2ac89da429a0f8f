//! Color palettes, one per named theme

use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Accent: header background, active line, sung words
    pub primary: Color,
    pub bg: Color,
    pub text: Color,
    /// Inactive lines, status line, borders
    pub dim: Color,
}

impl Palette {
    pub const SPOTIFY: Self = Self {
        primary: Color::Rgb(0x1d, 0xb9, 0x54), // #1DB954
        bg: Color::Rgb(0x12, 0x12, 0x12),      // #121212
        text: Color::Rgb(0xff, 0xff, 0xff),    // #FFFFFF
        dim: Color::Rgb(0x53, 0x53, 0x53),     // #535353
    };

    pub const NORD: Self = Self {
        primary: Color::Rgb(0x88, 0xc0, 0xd0), // #88C0D0
        bg: Color::Rgb(0x2e, 0x34, 0x40),      // #2E3440
        text: Color::Rgb(0xec, 0xef, 0xf4),    // #ECEFF4
        dim: Color::Rgb(0x4c, 0x56, 0x6a),     // #4C566A
    };

    pub const DRACULA: Self = Self {
        primary: Color::Rgb(0xff, 0x79, 0xc6), // #FF79C6
        bg: Color::Rgb(0x28, 0x2a, 0x36),      // #282A36
        text: Color::Rgb(0xf8, 0xf8, 0xf2),    // #F8F8F2
        dim: Color::Rgb(0x62, 0x72, 0xa4),     // #6272A4
    };

    pub const GRUVBOX: Self = Self {
        primary: Color::Rgb(0xfa, 0xbd, 0x2f), // #FABD2F
        bg: Color::Rgb(0x28, 0x28, 0x28),      // #282828
        text: Color::Rgb(0xeb, 0xdb, 0xb2),    // #EBDBB2
        dim: Color::Rgb(0x92, 0x83, 0x74),     // #928374
    };

    pub const MONOKAI: Self = Self {
        primary: Color::Rgb(0xa6, 0xe2, 0x2e), // #A6E22E
        bg: Color::Rgb(0x27, 0x28, 0x22),      // #272822
        text: Color::Rgb(0xf8, 0xf8, 0xf2),    // #F8F8F2
        dim: Color::Rgb(0x75, 0x71, 0x5e),     // #75715E
    };

    pub const ARCH: Self = Self {
        primary: Color::Rgb(0x17, 0x93, 0xd1), // #1793D1
        bg: Color::Rgb(0x0f, 0x0f, 0x0f),      // #0F0F0F
        text: Color::Rgb(0xee, 0xee, 0xee),    // #EEEEEE
        dim: Color::Rgb(0x4d, 0x4d, 0x4d),     // #4D4D4D
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::SPOTIFY
    }
}
