//! Canvas-space points and point fields.

/// A single anchor point in canvas space.
///
/// Coordinates are real-valued positions on the 800x600 logical canvas.
/// A point has no identity beyond its position; its place in a
/// [`PointField`] determines reading order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal position in canvas units
    pub x: f64,
    /// Vertical position in canvas units
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An ordered sequence of anchor points covering a shape's outline and
/// interior. Regenerated whole whenever the shape or canvas dimensions
/// change; never mutated in place.
pub type PointField = Vec<Point>;
