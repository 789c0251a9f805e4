//! Data models for calligrams: points, shapes, styles, and themes.
//!
//! This module contains all the core data structures used throughout the application.
//! Models are designed to be independent of UI and business logic.

pub mod color;
pub mod fragment;
pub mod point;
pub mod shape;
pub mod style;
pub mod theme;

// Re-export all model types
pub use color::Color;
pub use fragment::Fragment;
pub use point::{Point, PointField};
pub use shape::ShapeKind;
pub use style::{
    all_fonts, FontCategory, FontStyle, FontWeight, StyleParameters, FONT_CATALOG,
    FONT_SIZE_RANGE, LETTER_SPACING_RANGE,
};
pub use theme::{ColorTheme, COLOR_THEMES};
