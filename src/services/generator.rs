//! Shape point generation.
//!
//! Maps a [`ShapeKind`] and canvas dimensions to an ordered field of
//! anchor points approximating the shape's outline and interior. Pure
//! and total: every shape has a rule and no rule can fail. The output
//! order is part of the contract — outline curves come first, then
//! interior layers, then ornaments — because text reads along it.
//!
//! Sizes and radii are fixed tuning constants; the canvas dimensions
//! only position the shape at the canvas center (the wave additionally
//! spans the full width).

use std::f64::consts::PI;

use crate::models::{Point, PointField, ShapeKind};

const TAU: f64 = PI * 2.0;

/// Generates the anchor point field for a shape on a canvas.
///
/// Deterministic and order-stable: identical inputs always produce the
/// identical point sequence.
#[must_use]
pub fn generate_shape_points(shape: ShapeKind, width: f64, height: f64) -> PointField {
    let center_x = width / 2.0;
    let center_y = height / 2.0;

    match shape {
        ShapeKind::Heart => heart_points(center_x, center_y),
        ShapeKind::Star => star_points(center_x, center_y),
        ShapeKind::Butterfly => butterfly_points(center_x, center_y),
        ShapeKind::Tree => tree_points(center_x, center_y),
        ShapeKind::Dove => dove_points(center_x, center_y),
        ShapeKind::Circle => circle_points(center_x, center_y),
        ShapeKind::Wave => wave_points(width, center_y),
        ShapeKind::Spiral => spiral_points(center_x, center_y),
        ShapeKind::Tag => tag_points(center_x, center_y),
        ShapeKind::Custom => rectangle_points(center_x, center_y),
    }
}

/// Evaluates the parametric heart curve at parameter `t` for a given
/// scale, relative to the canvas center.
fn heart_curve(center_x: f64, center_y: f64, scale: f64, t: f64) -> Point {
    // Standard heart curve: x = 16 sin^3 t, y = weighted cosine sum
    let x = center_x + scale * (16.0 * t.sin().powi(3)) / 16.0;
    let y = center_y
        - scale
            * (13.0 * t.cos()
                - 5.0 * (2.0 * t).cos()
                - 2.0 * (3.0 * t).cos()
                - (4.0 * t).cos())
            / 16.0;
    Point::new(x, y)
}

fn heart_points(center_x: f64, center_y: f64) -> PointField {
    let heart_size = 200.0;
    let mut result = PointField::new();

    // Outline
    let mut t = 0.0;
    while t <= TAU {
        result.push(heart_curve(center_x, center_y, heart_size, t));
        t += 0.05;
    }

    // Scaled-down interior copies, coarser step
    for i in 1..8 {
        let scale = f64::from(i) / 8.0;
        let mut t = 0.0;
        while t <= TAU {
            result.push(heart_curve(center_x, center_y, scale * heart_size, t));
            t += 0.2;
        }
    }

    // Grid fill over the heart's center
    let mut y = center_y - heart_size / 3.0;
    while y <= center_y + heart_size / 3.0 {
        let mut x = center_x - heart_size / 3.0;
        while x <= center_x + heart_size / 3.0 {
            result.push(Point::new(x, y));
            x += 10.0;
        }
        y += 10.0;
    }

    result
}

fn star_points(center_x: f64, center_y: f64) -> PointField {
    let star_points = 5;
    let outer_radius = 200.0;
    let inner_radius = outer_radius * 0.4;
    let mut result = PointField::new();

    // Alternating outer/inner vertices
    for i in 0..star_points * 2 {
        let radius = if i % 2 == 0 { outer_radius } else { inner_radius };
        let angle = (PI / f64::from(star_points)) * f64::from(i);
        result.push(Point::new(
            center_x + radius * angle.sin(),
            center_y - radius * angle.cos(),
        ));
    }

    // Scaled-down interior copies
    for i in 1..8 {
        let scale = f64::from(i) / 8.0;
        for j in 0..star_points * 2 {
            let radius = if j % 2 == 0 {
                outer_radius * scale
            } else {
                inner_radius * scale
            };
            let angle = (PI / f64::from(star_points)) * f64::from(j);
            result.push(Point::new(
                center_x + radius * angle.sin(),
                center_y - radius * angle.cos(),
            ));
        }
    }

    // Grid fill over the inner-radius bounding box
    let mut y = center_y - inner_radius;
    while y <= center_y + inner_radius {
        let mut x = center_x - inner_radius;
        while x <= center_x + inner_radius {
            result.push(Point::new(x, y));
            x += 15.0;
        }
        y += 15.0;
    }

    result
}

fn butterfly_points(center_x: f64, center_y: f64) -> PointField {
    let size = 250.0;
    let mut result = PointField::new();

    // Upper wings: sin(2t) lobes, right then left
    let mut t = 0.0;
    while t <= PI {
        result.push(Point::new(
            center_x + (size / 2.0) * t.sin(),
            center_y - (size / 2.0) * (2.0 * t).sin(),
        ));
        t += 0.05;
    }
    let mut t = 0.0;
    while t <= PI {
        result.push(Point::new(
            center_x - (size / 2.0) * t.sin(),
            center_y - (size / 2.0) * (2.0 * t).sin(),
        ));
        t += 0.05;
    }

    // Lower wings: simple half-sine lobes, right then left
    let mut t = 0.0;
    while t <= PI {
        result.push(Point::new(
            center_x + (size / 3.0) * t.sin(),
            center_y + (size / 4.0) * t.sin(),
        ));
        t += 0.05;
    }
    let mut t = 0.0;
    while t <= PI {
        result.push(Point::new(
            center_x - (size / 3.0) * t.sin(),
            center_y + (size / 4.0) * t.sin(),
        ));
        t += 0.05;
    }

    // Body
    let mut y = center_y - size / 2.0;
    while y <= center_y + size / 3.0 {
        result.push(Point::new(center_x, y));
        y += 5.0;
    }

    // Antennae: visually tuned literals, ten points per side
    for i in 0..10 {
        let i = f64::from(i);
        result.push(Point::new(
            center_x - (10.0 * i) / 2.0,
            center_y - size / 2.0 - 10.0 * i,
        ));
        result.push(Point::new(
            center_x + (10.0 * i) / 2.0,
            center_y - size / 2.0 - 10.0 * i,
        ));
    }

    // Interior fill layers of the same wing curves
    for i in 1..5 {
        let scale = f64::from(i) / 5.0;

        let mut t = 0.0;
        while t <= PI {
            result.push(Point::new(
                center_x + scale * (size / 2.0) * t.sin(),
                center_y - scale * (size / 2.0) * (2.0 * t).sin(),
            ));
            t += 0.2;
        }

        let mut t = 0.0;
        while t <= PI {
            result.push(Point::new(
                center_x - scale * (size / 2.0) * t.sin(),
                center_y - scale * (size / 2.0) * (2.0 * t).sin(),
            ));
            t += 0.2;
        }

        // Lower wings fill both sides per parameter step
        let mut t = 0.0;
        while t <= PI {
            result.push(Point::new(
                center_x + scale * (size / 3.0) * t.sin(),
                center_y + scale * (size / 4.0) * t.sin(),
            ));
            result.push(Point::new(
                center_x - scale * (size / 3.0) * t.sin(),
                center_y + scale * (size / 4.0) * t.sin(),
            ));
            t += 0.2;
        }
    }

    result
}

fn tree_points(center_x: f64, center_y: f64) -> PointField {
    let trunk_width = 30.0;
    let trunk_height = 180.0;
    let mut result = PointField::new();

    // Filled trunk rectangle
    let mut y = center_y;
    while y <= center_y + trunk_height {
        let mut x = center_x - trunk_width / 2.0;
        while x <= center_x + trunk_width / 2.0 {
            result.push(Point::new(x, y));
            x += 5.0;
        }
        y += 5.0;
    }

    // Three stacked crown bands, each filled row by row with a linear
    // taper from its apex
    let bands = [(200.0, 100.0), (150.0, 80.0), (100.0, 70.0)];
    let mut band_top = center_y;
    for (crown_width, crown_height) in bands {
        let band_bottom = band_top;
        let mut y = band_bottom;
        while y >= band_bottom - crown_height {
            let progress = (band_bottom - y) / crown_height;
            let current_width = crown_width * progress;
            let mut x = center_x - current_width;
            while x <= center_x + current_width {
                result.push(Point::new(x, y));
                x += 5.0;
            }
            y -= 5.0;
        }
        band_top = band_bottom - crown_height;
    }

    result
}

fn dove_points(center_x: f64, center_y: f64) -> PointField {
    let mut result = PointField::new();

    // Body: flattened half ellipse
    let mut t = 0.0;
    while t < PI {
        let scale = 100.0;
        result.push(Point::new(
            center_x + scale * t.cos(),
            center_y + scale * t.sin() * 0.7,
        ));
        t += 0.1;
    }

    // Wing: offset half ellipse, rotated a quarter turn back
    let mut t = 0.0;
    while t < PI {
        let scale = 80.0;
        result.push(Point::new(
            center_x + scale * (t + PI / 4.0).cos(),
            center_y - 50.0 + scale * (t + PI / 4.0).sin() * 0.5,
        ));
        t += 0.1;
    }

    // Head and beak stroke
    for i in 0..20 {
        let i = f64::from(i);
        result.push(Point::new(
            center_x + 100.0 + i * 5.0,
            center_y - 20.0 - i * 2.0,
        ));
    }

    result
}

fn circle_points(center_x: f64, center_y: f64) -> PointField {
    let radius = 200.0;
    let mut result = PointField::new();

    let mut t = 0.0;
    while t < TAU {
        result.push(Point::new(
            center_x + radius * t.cos(),
            center_y + radius * t.sin(),
        ));
        t += 0.05;
    }

    result
}

fn wave_points(width: f64, center_y: f64) -> PointField {
    let amplitude = 100.0;
    let frequency = 0.01;
    let mut result = PointField::new();

    let mut x = 0.0;
    while x < width {
        result.push(Point::new(x, center_y + amplitude * (frequency * x).sin()));
        x += 10.0;
    }

    result
}

fn spiral_points(center_x: f64, center_y: f64) -> PointField {
    let mut result = PointField::new();

    // Archimedean spiral r = 10t
    let mut t: f64 = 0.0;
    while t < 20.0 {
        let radius = t * 10.0;
        result.push(Point::new(
            center_x + radius * t.cos(),
            center_y + radius * t.sin(),
        ));
        t += 0.1;
    }

    result
}

fn tag_points(center_x: f64, center_y: f64) -> PointField {
    let tag_width = 300.0;
    let tag_height = 200.0;
    let mut result = PointField::new();

    // Top edge, left to right
    let mut x = center_x - tag_width / 2.0;
    while x <= center_x + tag_width / 2.0 {
        result.push(Point::new(x, center_y - tag_height / 2.0));
        x += 10.0;
    }

    // Right edge down to the bevel start
    let mut y = center_y - tag_height / 2.0;
    while y <= center_y + tag_height / 4.0 {
        result.push(Point::new(center_x + tag_width / 2.0, y));
        y += 10.0;
    }

    // Bottom-right bevel
    for i in 0..=10 {
        let f = f64::from(i) / 10.0;
        result.push(Point::new(
            center_x + tag_width / 2.0 - (tag_width / 4.0) * f,
            center_y + tag_height / 4.0 + (tag_height / 4.0) * f,
        ));
    }

    // Bottom-left bevel
    for i in 0..=10 {
        let f = f64::from(i) / 10.0;
        result.push(Point::new(
            center_x - (tag_width / 4.0) * f,
            center_y + tag_height / 2.0 - (tag_height / 4.0) * f,
        ));
    }

    // Left edge back up
    let mut y = center_y + tag_height / 4.0;
    while y >= center_y - tag_height / 2.0 {
        result.push(Point::new(center_x - tag_width / 2.0, y));
        y -= 10.0;
    }

    // String hole offset inside the tag
    let hole_radius = 20.0;
    let hole_x = center_x - tag_width / 4.0;
    let hole_y = center_y - tag_height / 4.0;
    let mut t = 0.0;
    while t < TAU {
        result.push(Point::new(
            hole_x + hole_radius * t.cos(),
            hole_y + hole_radius * t.sin(),
        ));
        t += 0.2;
    }

    result
}

fn rectangle_points(center_x: f64, center_y: f64) -> PointField {
    let rect_width = 300.0;
    let rect_height = 200.0;
    let mut result = PointField::new();

    // Perimeter traced clockwise from the top-left corner
    let mut x = center_x - rect_width / 2.0;
    while x <= center_x + rect_width / 2.0 {
        result.push(Point::new(x, center_y - rect_height / 2.0));
        x += 10.0;
    }

    let mut y = center_y - rect_height / 2.0;
    while y <= center_y + rect_height / 2.0 {
        result.push(Point::new(center_x + rect_width / 2.0, y));
        y += 10.0;
    }

    let mut x = center_x + rect_width / 2.0;
    while x >= center_x - rect_width / 2.0 {
        result.push(Point::new(x, center_y + rect_height / 2.0));
        x -= 10.0;
    }

    let mut y = center_y + rect_height / 2.0;
    while y >= center_y - rect_height / 2.0 {
        result.push(Point::new(center_x - rect_width / 2.0, y));
        y -= 10.0;
    }

    result
}
