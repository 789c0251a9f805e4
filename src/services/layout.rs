//! Derived-state caching for the calligram layout.
//!
//! Two caches with independent keys: the point field depends only on
//! (shape, width, height) and is rebuilt when that tuple changes; the
//! fragments depend on the text and the point field and are rebuilt on
//! any text edit. Style changes touch neither cache.

use crate::models::{Fragment, PointField, ShapeKind, StyleParameters};
use crate::services::{distributor, generator};

/// Owns the current calligram state and its derived caches.
#[derive(Debug, Clone)]
pub struct CalligramLayout {
    shape: ShapeKind,
    width: f64,
    height: f64,
    text: String,
    /// Style carried for renderers; never consulted by the algorithms
    pub style: StyleParameters,
    points: PointField,
    fragments: Vec<Fragment>,
}

impl CalligramLayout {
    /// Creates a layout for the given shape and canvas, with empty text
    /// and default style.
    #[must_use]
    pub fn new(shape: ShapeKind, width: f64, height: f64) -> Self {
        let points = generator::generate_shape_points(shape, width, height);
        Self {
            shape,
            width,
            height,
            text: String::new(),
            style: StyleParameters::default(),
            points,
            fragments: Vec::new(),
        }
    }

    /// Current shape.
    #[must_use]
    pub const fn shape(&self) -> ShapeKind {
        self.shape
    }

    /// Current raw (unnormalized) text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The cached point field.
    #[must_use]
    pub fn points(&self) -> &PointField {
        &self.points
    }

    /// The cached fragment assignments.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Selects a new shape. Regenerates the point field and
    /// redistributes the text only if the shape actually changed.
    pub fn set_shape(&mut self, shape: ShapeKind) {
        if shape == self.shape {
            return;
        }
        self.shape = shape;
        self.points = generator::generate_shape_points(shape, self.width, self.height);
        self.redistribute();
    }

    /// Resizes the canvas. Regenerates the point field only on an
    /// actual dimension change.
    pub fn set_canvas(&mut self, width: f64, height: f64) {
        if (width, height) == (self.width, self.height) {
            return;
        }
        self.width = width;
        self.height = height;
        self.points = generator::generate_shape_points(self.shape, width, height);
        self.redistribute();
    }

    /// Replaces the text and redistributes it over the cached field.
    /// The point field is not touched.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.redistribute();
    }

    fn redistribute(&mut self) {
        self.fragments = distributor::distribute_text(&self.text, &self.points);
    }
}
