//! Export functionality for finished calligrams.
//!
//! The export boundary is the only fallible edge of the system: file
//! system errors are reported to the caller, which surfaces them as a
//! status message and never lets them crash the UI.

pub mod svg_renderer;

pub use svg_renderer::render_document;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::models::{Fragment, ShapeKind, StyleParameters};

/// Default export file name: `calligram-{shape}_{date}.svg`.
#[must_use]
pub fn default_output_path(shape: ShapeKind) -> PathBuf {
    let date = chrono::Local::now().format("%Y-%m-%d");
    PathBuf::from(format!("calligram-{}_{}.svg", shape.id(), date))
}

/// Renders the calligram and writes it to `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be written. Rendering itself
/// cannot fail.
pub fn save_svg(
    path: &Path,
    fragments: &[Fragment],
    style: &StyleParameters,
    width: f64,
    height: f64,
) -> Result<()> {
    let document = render_document(fragments, style, width, height);
    svg::save(path, &document).context(format!(
        "Failed to write SVG file: {}",
        path.display()
    ))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path_names_the_shape() {
        let path = default_output_path(ShapeKind::Butterfly);
        let name = path.to_string_lossy();
        assert!(name.starts_with("calligram-butterfly_"));
        assert!(name.ends_with(".svg"));
    }

    #[test]
    fn test_save_svg_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.svg");
        let style = StyleParameters::default();
        save_svg(&path, &[], &style, 800.0, 600.0).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<svg"));
    }

    #[test]
    fn test_save_svg_reports_unwritable_path() {
        let style = StyleParameters::default();
        let result = save_svg(
            Path::new("/nonexistent-dir/out.svg"),
            &[],
            &style,
            800.0,
            600.0,
        );
        assert!(result.is_err());
    }
}
