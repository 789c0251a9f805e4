//! Integration tests for text distribution over generated fields.

use calligram::constants::{CANVAS_HEIGHT, CANVAS_WIDTH};
use calligram::models::ShapeKind;
use calligram::services::{distribute_text, generate_shape_points, normalize_text};

#[test]
fn test_reconstruction_over_every_shape() {
    let poem = "The rose is red,\n the violet's blue,\n sugar is sweet,\n and so are you.";
    for shape in ShapeKind::ALL {
        let points = generate_shape_points(shape, CANVAS_WIDTH, CANVAS_HEIGHT);
        let fragments = distribute_text(poem, &points);
        let rebuilt: String = fragments.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(rebuilt, normalize_text(poem), "reconstruction broke for {shape}");
        assert!(fragments.len() <= points.len());
    }
}

#[test]
fn test_fragment_sizes_are_uniform_except_last() {
    let text: String = "abcdefghij".repeat(137); // 1370 chars
    let points = generate_shape_points(ShapeKind::Circle, CANVAS_WIDTH, CANVAS_HEIGHT);
    let fragments = distribute_text(&text, &points);

    let expected = 1370_usize.div_ceil(points.len()).max(1);
    for fragment in &fragments[..fragments.len() - 1] {
        assert_eq!(fragment.text.chars().count(), expected);
    }
    let last = fragments.last().unwrap().text.chars().count();
    assert!(last >= 1 && last <= expected);
}

#[test]
fn test_fragments_follow_point_order() {
    let points = generate_shape_points(ShapeKind::Wave, CANVAS_WIDTH, CANVAS_HEIGHT);
    let fragments = distribute_text("reading order is preserved", &points);
    for (fragment, point) in fragments.iter().zip(points.iter()) {
        assert_eq!(fragment.point, *point);
    }
}

#[test]
fn test_empty_inputs() {
    let points = generate_shape_points(ShapeKind::Heart, CANVAS_WIDTH, CANVAS_HEIGHT);
    assert!(distribute_text("", &points).is_empty());
    assert!(distribute_text("text", &Vec::new()).is_empty());
}

#[test]
fn test_long_text_covers_every_point() {
    let text = "x".repeat(50_000);
    let points = generate_shape_points(ShapeKind::Spiral, CANVAS_WIDTH, CANVAS_HEIGHT);
    let fragments = distribute_text(&text, &points);
    assert_eq!(fragments.len(), points.len());
}
