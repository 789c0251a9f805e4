//! Render style parameters and the font catalog.
//!
//! Pure presentation data. The core algorithms never branch on these
//! values; they are carried through to the preview and SVG renderers
//! untouched.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::Color;

/// Font size range in pixels.
pub const FONT_SIZE_RANGE: (u8, u8) = (8, 24);

/// Letter spacing range in pixels.
pub const LETTER_SPACING_RANGE: (u8, u8) = (0, 10);

/// Font weight choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// Regular weight
    #[default]
    Normal,
    /// Bold weight
    Bold,
    /// Light weight
    Lighter,
}

impl FontWeight {
    /// All weights in display order.
    pub const ALL: [Self; 3] = [Self::Normal, Self::Bold, Self::Lighter];

    /// CSS/SVG attribute value for this weight.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
            Self::Lighter => "lighter",
        }
    }

    /// Parses a weight from its CSS value.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not one of normal, bold, lighter.
    pub fn parse(value: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|w| w.as_css() == value)
            .ok_or_else(|| {
                anyhow::anyhow!("Unknown font weight '{value}'. Valid weights: normal, bold, lighter")
            })
    }
}

/// Font style choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    /// Upright style
    #[default]
    Normal,
    /// Italic style
    Italic,
}

impl FontStyle {
    /// All styles in display order.
    pub const ALL: [Self; 2] = [Self::Normal, Self::Italic];

    /// CSS/SVG attribute value for this style.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Italic => "italic",
        }
    }

    /// Parses a style from its CSS value.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not normal or italic.
    pub fn parse(value: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.as_css() == value)
            .ok_or_else(|| {
                anyhow::anyhow!("Unknown font style '{value}'. Valid styles: normal, italic")
            })
    }
}

/// A named group of font families for the settings form.
#[derive(Debug, Clone, Copy)]
pub struct FontCategory {
    /// Category display name (e.g., "Serif")
    pub name: &'static str,
    /// Font family names in this category
    pub fonts: &'static [&'static str],
}

/// The curated font catalog, grouped by typeface family.
pub const FONT_CATALOG: [FontCategory; 5] = [
    FontCategory {
        name: "Serif",
        fonts: &[
            "Georgia",
            "Times New Roman",
            "Garamond",
            "Baskerville",
            "Palatino",
        ],
    },
    FontCategory {
        name: "Sans-Serif",
        fonts: &["Arial", "Helvetica", "Verdana", "Trebuchet MS", "Calibri"],
    },
    FontCategory {
        name: "Monospace",
        fonts: &["Courier New", "Consolas", "Monaco", "Lucida Console"],
    },
    FontCategory {
        name: "Handwriting",
        fonts: &[
            "Brush Script MT",
            "Comic Sans MS",
            "Segoe Script",
            "Satisfy",
            "Dancing Script",
        ],
    },
    FontCategory {
        name: "Decorative",
        fonts: &["Impact", "Papyrus", "Copperplate", "Luminari", "Chalkduster"],
    },
];

/// Returns every font family in the catalog, flattened in catalog order.
#[must_use]
pub fn all_fonts() -> Vec<&'static str> {
    FONT_CATALOG
        .iter()
        .flat_map(|category| category.fonts.iter().copied())
        .collect()
}

/// Flat record of everything a renderer needs to draw a fragment.
///
/// Numeric fields are clamped to their slider ranges on mutation so the
/// record is always renderable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleParameters {
    /// Font size in pixels (8-24)
    pub font_size: u8,
    /// Font family name from the catalog
    pub font_family: String,
    /// Additional spacing between letters in pixels (0-10)
    pub letter_spacing: u8,
    /// Foreground (text) color
    pub color: Color,
    /// Font weight
    pub font_weight: FontWeight,
    /// Font style
    pub font_style: FontStyle,
    /// Canvas background color
    pub background_color: Color,
}

impl Default for StyleParameters {
    fn default() -> Self {
        Self {
            font_size: 16,
            font_family: "Georgia".to_string(),
            letter_spacing: 2,
            color: Color::new(0, 0, 0),
            font_weight: FontWeight::Normal,
            font_style: FontStyle::Normal,
            background_color: Color::new(255, 255, 255),
        }
    }
}

impl StyleParameters {
    /// Sets the font size, clamped to the valid range.
    pub fn set_font_size(&mut self, size: u8) {
        self.font_size = size.clamp(FONT_SIZE_RANGE.0, FONT_SIZE_RANGE.1);
    }

    /// Sets the letter spacing, clamped to the valid range.
    pub fn set_letter_spacing(&mut self, spacing: u8) {
        self.letter_spacing = spacing.clamp(LETTER_SPACING_RANGE.0, LETTER_SPACING_RANGE.1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_size_clamped() {
        let mut style = StyleParameters::default();
        style.set_font_size(200);
        assert_eq!(style.font_size, 24);
        style.set_font_size(1);
        assert_eq!(style.font_size, 8);
        style.set_font_size(16);
        assert_eq!(style.font_size, 16);
    }

    #[test]
    fn test_letter_spacing_clamped() {
        let mut style = StyleParameters::default();
        style.set_letter_spacing(99);
        assert_eq!(style.letter_spacing, 10);
        style.set_letter_spacing(0);
        assert_eq!(style.letter_spacing, 0);
    }

    #[test]
    fn test_catalog_has_all_categories() {
        let names: Vec<&str> = FONT_CATALOG.iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec!["Serif", "Sans-Serif", "Monospace", "Handwriting", "Decorative"]
        );
        assert_eq!(all_fonts().len(), 24);
        assert!(all_fonts().contains(&"Georgia"));
    }

    #[test]
    fn test_weight_and_style_parse() {
        assert_eq!(FontWeight::parse("bold").unwrap(), FontWeight::Bold);
        assert_eq!(FontStyle::parse("italic").unwrap(), FontStyle::Italic);
        assert!(FontWeight::parse("heavy").is_err());
        assert!(FontStyle::parse("oblique").is_err());
    }
}
