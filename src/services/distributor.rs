//! Text distribution over a point field.
//!
//! Splits the normalized input text into contiguous slices and assigns
//! each slice to one anchor point, preserving reading order. Pure and
//! total over any string and any field; both empty inputs yield an
//! empty result.

use crate::models::{Fragment, PointField};

/// Collapses every run of whitespace in `text` to a single space.
///
/// Ends are not trimmed: leading and trailing whitespace become single
/// spaces.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_whitespace = false;

    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                result.push(' ');
            }
            in_whitespace = true;
        } else {
            result.push(ch);
            in_whitespace = false;
        }
    }

    result
}

/// Distributes `text` across `points`, one uniform-size slice per point.
///
/// With N normalized characters and P points, each point receives
/// ceil(N / P) characters (minimum one); the final fragment may be
/// shorter. Trailing points beyond the text receive no fragment.
/// Concatenating the fragments in order reconstructs the normalized
/// text exactly.
#[must_use]
pub fn distribute_text(text: &str, points: &PointField) -> Vec<Fragment> {
    if points.is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = normalize_text(text).chars().collect();
    if chars.is_empty() {
        return Vec::new();
    }

    let chars_per_point = chars.len().div_ceil(points.len()).max(1);

    points
        .iter()
        .enumerate()
        .map_while(|(index, point)| {
            let start = index * chars_per_point;
            if start >= chars.len() {
                return None;
            }
            let end = (start + chars_per_point).min(chars.len());
            let slice: String = chars[start..end].iter().collect();
            Some(Fragment::new(*point, slice))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;

    fn field(n: usize) -> PointField {
        (0..n).map(|i| Point::new(i as f64, i as f64)).collect()
    }

    #[test]
    fn test_normalize_collapses_whitespace_runs() {
        assert_eq!(normalize_text("a  b\t\nc"), "a b c");
        assert_eq!(normalize_text("  hello  "), " hello ");
        assert_eq!(normalize_text("plain"), "plain");
        assert_eq!(normalize_text(""), "");
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        assert!(distribute_text("", &field(5)).is_empty());
    }

    #[test]
    fn test_empty_field_yields_nothing() {
        assert!(distribute_text("some text", &PointField::new()).is_empty());
    }

    #[test]
    fn test_two_chars_over_three_points() {
        let points = field(3);
        let fragments = distribute_text("AB", &points);
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0].text, "A");
        assert_eq!(fragments[0].point, points[0]);
        assert_eq!(fragments[1].text, "B");
        assert_eq!(fragments[1].point, points[1]);
    }

    #[test]
    fn test_reconstruction_law() {
        let texts = [
            "The rose is red, the violet's blue",
            "short",
            "x",
            "  spaced   out   text  ",
            "line\nbreaks\tand tabs",
        ];
        for text in texts {
            for field_size in [1, 2, 3, 7, 50, 1000] {
                let points = field(field_size);
                let fragments = distribute_text(text, &points);
                let rebuilt: String = fragments.iter().map(|f| f.text.as_str()).collect();
                assert_eq!(rebuilt, normalize_text(text), "field size {field_size}");
            }
        }
    }

    #[test]
    fn test_uniform_slice_sizes() {
        let text = "abcdefghijk"; // 11 chars
        let points = field(4);
        let fragments = distribute_text(text, &points);
        // ceil(11 / 4) = 3
        assert_eq!(fragments.len(), 4);
        assert_eq!(fragments[0].text.len(), 3);
        assert_eq!(fragments[1].text.len(), 3);
        assert_eq!(fragments[2].text.len(), 3);
        assert_eq!(fragments[3].text.len(), 2);
    }

    #[test]
    fn test_no_empty_fragments_emitted() {
        // 4 chars over 8 points: half the points get nothing
        let fragments = distribute_text("abcd", &field(8));
        assert_eq!(fragments.len(), 4);
        assert!(fragments.iter().all(|f| !f.text.is_empty()));
    }

    #[test]
    fn test_multibyte_text_distributes_by_chars() {
        let fragments = distribute_text("héllo wörld", &field(11));
        let rebuilt: String = fragments.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(rebuilt, "héllo wörld");
        assert!(fragments.iter().all(|f| f.text.chars().count() == 1));
    }

    #[test]
    fn test_assignments_never_exceed_points() {
        let long_text = "a".repeat(5000);
        let points = field(100);
        let fragments = distribute_text(&long_text, &points);
        assert!(fragments.len() <= points.len());
        assert_eq!(fragments.len(), 100);
    }
}
