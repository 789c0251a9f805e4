//! SVG rendering of a distributed calligram.
//!
//! Builds one centered `<text>` element per fragment over a background
//! rectangle. Raster encoding is deliberately out of scope; the SVG
//! file is the export artifact and any external rasterizer can consume
//! it.

use svg::node::element::{Rectangle, Text};
use svg::Document;

use crate::models::{Fragment, StyleParameters};

/// Renders fragments into a complete SVG document.
///
/// Each fragment is anchored at its point's center on both axes, with
/// the style applied verbatim. Empty fragment lists still produce a
/// valid document showing only the styled background.
#[must_use]
pub fn render_document(
    fragments: &[Fragment],
    style: &StyleParameters,
    width: f64,
    height: f64,
) -> Document {
    let background = Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", width)
        .set("height", height)
        .set("fill", style.background_color.to_hex());

    let mut document = Document::new()
        .set("viewBox", (0, 0, width, height))
        .set("width", format!("{width}px"))
        .set("height", format!("{height}px"))
        .add(background);

    for fragment in fragments {
        let text = Text::new()
            .add(svg::node::Text::new(fragment.text.clone()))
            .set("x", fragment.point.x)
            .set("y", fragment.point.y)
            .set("font-size", format!("{}px", style.font_size))
            .set("font-family", style.font_family.clone())
            .set("font-weight", style.font_weight.as_css())
            .set("font-style", style.font_style.as_css())
            .set("letter-spacing", format!("{}px", style.letter_spacing))
            .set("fill", style.color.to_hex())
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central");
        document = document.add(text);
    }

    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Color, Point};

    fn sample_fragments() -> Vec<Fragment> {
        vec![
            Fragment::new(Point::new(100.0, 50.0), "Hel".to_string()),
            Fragment::new(Point::new(200.0, 75.0), "lo".to_string()),
        ]
    }

    #[test]
    fn test_document_contains_fragments_and_background() {
        let mut style = StyleParameters::default();
        style.color = Color::new(0xD3, 0x54, 0x00);
        let document = render_document(&sample_fragments(), &style, 800.0, 600.0);
        let rendered = document.to_string();

        assert!(rendered.contains("<svg"));
        assert!(rendered.contains("Hel"));
        assert!(rendered.contains("lo"));
        assert!(rendered.contains("#D35400"));
        assert!(rendered.contains("#FFFFFF"));
        assert!(rendered.contains("text-anchor=\"middle\""));
    }

    #[test]
    fn test_empty_fragments_render_background_only() {
        let style = StyleParameters::default();
        let document = render_document(&[], &style, 800.0, 600.0);
        let rendered = document.to_string();
        assert!(rendered.contains("<rect"));
        assert!(!rendered.contains("<text"));
    }

    #[test]
    fn test_style_attributes_pass_through() {
        let mut style = StyleParameters::default();
        style.font_family = "Courier New".to_string();
        style.set_font_size(24);
        style.set_letter_spacing(5);
        let document = render_document(&sample_fragments(), &style, 800.0, 600.0);
        let rendered = document.to_string();
        assert!(rendered.contains("Courier New"));
        assert!(rendered.contains("font-size=\"24px\""));
        assert!(rendered.contains("letter-spacing=\"5px\""));
    }
}
