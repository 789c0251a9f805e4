//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the logical canvas dimensions.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Calligram Studio";

/// Logical canvas width in canvas units. Shapes are generated relative to
/// the canvas center; renderers scale from this space to their own.
pub const CANVAS_WIDTH: f64 = 800.0;

/// Logical canvas height in canvas units.
pub const CANVAS_HEIGHT: f64 = 600.0;
