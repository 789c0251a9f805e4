//! Text fragments anchored to points.

use super::Point;

/// A contiguous slice of the normalized input text assigned to one
/// anchor point.
///
/// Fragments are only ever produced non-empty; trailing points with no
/// characters left receive no fragment at all. Style parameters travel
/// separately and apply uniformly to every fragment of a calligram.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    /// The anchor point; renderers center the text on it (both axes)
    pub point: Point,
    /// The characters to draw at this point, in reading order
    pub text: String,
}

impl Fragment {
    /// Creates a new fragment.
    #[must_use]
    pub const fn new(point: Point, text: String) -> Self {
        Self { point, text }
    }
}
