//! Built-in color themes for calligram backgrounds and text.
//!
//! Selecting a theme sets both colors at once; either color can still
//! be overridden individually afterwards.

use crate::models::Color;

/// A paired background/text color preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTheme {
    /// Stable lowercase identifier used in CLI arguments and config
    pub id: &'static str,
    /// Human-readable display name
    pub name: &'static str,
    /// Canvas background color
    pub background: Color,
    /// Text foreground color
    pub text: Color,
}

/// All built-in themes in picker order.
pub const COLOR_THEMES: [ColorTheme; 10] = [
    ColorTheme {
        id: "default",
        name: "Default",
        background: Color::new(0xFF, 0xFF, 0xFF),
        text: Color::new(0x00, 0x00, 0x00),
    },
    ColorTheme {
        id: "dark",
        name: "Dark Mode",
        background: Color::new(0x12, 0x12, 0x12),
        text: Color::new(0xFF, 0xFF, 0xFF),
    },
    ColorTheme {
        id: "pastel",
        name: "Pastel",
        background: Color::new(0xFA, 0xF3, 0xF0),
        text: Color::new(0xA3, 0x67, 0xB1),
    },
    ColorTheme {
        id: "vintage",
        name: "Vintage",
        background: Color::new(0xF5, 0xEB, 0xE0),
        text: Color::new(0x7D, 0x5A, 0x50),
    },
    ColorTheme {
        id: "ocean",
        name: "Ocean",
        background: Color::new(0xEB, 0xF5, 0xFB),
        text: Color::new(0x1A, 0x52, 0x76),
    },
    ColorTheme {
        id: "forest",
        name: "Forest",
        background: Color::new(0xE8, 0xF6, 0xEF),
        text: Color::new(0x2D, 0x6A, 0x4F),
    },
    ColorTheme {
        id: "sunset",
        name: "Sunset",
        background: Color::new(0xFA, 0xE8, 0xE0),
        text: Color::new(0xD3, 0x54, 0x00),
    },
    ColorTheme {
        id: "monochrome",
        name: "Monochrome",
        background: Color::new(0xF2, 0xF3, 0xF4),
        text: Color::new(0x42, 0x49, 0x49),
    },
    ColorTheme {
        id: "elegant",
        name: "Elegant",
        background: Color::new(0xFA, 0xF9, 0xF6),
        text: Color::new(0x85, 0x92, 0x9E),
    },
    ColorTheme {
        id: "vibrant",
        name: "Vibrant",
        background: Color::new(0xFF, 0xFF, 0xFF),
        text: Color::new(0x8E, 0x44, 0xAD),
    },
];

impl ColorTheme {
    /// Finds a theme by its identifier.
    #[must_use]
    pub fn find(id: &str) -> Option<Self> {
        COLOR_THEMES.iter().copied().find(|theme| theme.id == id)
    }
}
