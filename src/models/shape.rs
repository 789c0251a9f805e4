//! The closed set of silhouettes a calligram can take.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A geometric silhouette for arranging text.
///
/// Each variant maps to exactly one generation rule in
/// [`crate::services::generator`]. Adding a shape means adding one
/// variant and one rule; nothing else distinguishes shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Parametric heart curve with interior fill
    #[default]
    Heart,
    /// Half-ellipse dove body with wing and beak strokes
    Dove,
    /// Single circle outline
    Circle,
    /// Sine wave across the full canvas width
    Wave,
    /// Archimedean spiral from the center outward
    Spiral,
    /// Plain rectangle outline
    Custom,
    /// Price-tag outline with beveled corners and a hole
    Tag,
    /// Five-pointed star with interior fill
    Star,
    /// Four-winged butterfly with body and antennae
    Butterfly,
    /// Trunk plus three triangular crown bands
    Tree,
}

impl ShapeKind {
    /// All shapes in picker/display order.
    pub const ALL: [Self; 10] = [
        Self::Heart,
        Self::Dove,
        Self::Circle,
        Self::Wave,
        Self::Spiral,
        Self::Custom,
        Self::Tag,
        Self::Star,
        Self::Butterfly,
        Self::Tree,
    ];

    /// Stable lowercase identifier, used in CLI arguments, config files,
    /// and export file names.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Heart => "heart",
            Self::Dove => "dove",
            Self::Circle => "circle",
            Self::Wave => "wave",
            Self::Spiral => "spiral",
            Self::Custom => "custom",
            Self::Tag => "tag",
            Self::Star => "star",
            Self::Butterfly => "butterfly",
            Self::Tree => "tree",
        }
    }

    /// Human-readable display name for pickers and listings.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Heart => "Heart",
            Self::Dove => "Dove",
            Self::Circle => "Circle",
            Self::Wave => "Wave",
            Self::Spiral => "Spiral",
            Self::Custom => "Rectangle",
            Self::Tag => "Tag",
            Self::Star => "Star",
            Self::Butterfly => "Butterfly",
            Self::Tree => "Tree",
        }
    }

    /// Parses a shape from its lowercase identifier.
    ///
    /// # Errors
    ///
    /// Returns an error listing the valid identifiers if `id` does not
    /// name a shape.
    pub fn parse(id: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|shape| shape.id() == id)
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::ALL.iter().map(|s| s.id()).collect();
                anyhow::anyhow!(
                    "Unknown shape '{id}'. Valid shapes: {}",
                    valid.join(", ")
                )
            })
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_ids_round_trip() {
        for shape in ShapeKind::ALL {
            assert_eq!(ShapeKind::parse(shape.id()).unwrap(), shape);
        }
    }

    #[test]
    fn test_parse_unknown_shape_lists_choices() {
        let err = ShapeKind::parse("hexagon").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("hexagon"));
        assert!(message.contains("heart"));
        assert!(message.contains("butterfly"));
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<&str> = ShapeKind::ALL.iter().map(|s| s.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), ShapeKind::ALL.len());
    }

    #[test]
    fn test_serde_uses_lowercase_ids() {
        let value = toml::Value::try_from(ShapeKind::Butterfly).unwrap();
        assert_eq!(value, toml::Value::String("butterfly".to_string()));
    }
}
