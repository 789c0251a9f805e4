//! Render command: headless calligram to SVG.

use clap::Args;
use std::fs;
use std::path::PathBuf;

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::constants::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::export;
use crate::models::{
    all_fonts, Color, ColorTheme, FontStyle, FontWeight, ShapeKind, FONT_SIZE_RANGE,
    LETTER_SPACING_RANGE,
};
use crate::services::{distribute_text, generate_shape_points};

/// Render text into a shaped SVG calligram
#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Text to arrange (use --text-file for longer input)
    #[arg(short, long, value_name = "TEXT", conflicts_with = "text_file")]
    pub text: Option<String>,

    /// Read the text from a file instead
    #[arg(long, value_name = "FILE")]
    pub text_file: Option<PathBuf>,

    /// Shape identifier (see `calligram shapes`)
    #[arg(short, long, value_name = "ID")]
    pub shape: Option<String>,

    /// Output SVG path (defaults to calligram-{shape}_{date}.svg)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Color theme identifier (see `calligram themes`)
    #[arg(long, value_name = "ID")]
    pub theme: Option<String>,

    /// Font size in pixels (8-24)
    #[arg(long, value_name = "PX")]
    pub font_size: Option<u8>,

    /// Font family name from the catalog
    #[arg(long, value_name = "NAME")]
    pub font_family: Option<String>,

    /// Letter spacing in pixels (0-10)
    #[arg(long, value_name = "PX")]
    pub letter_spacing: Option<u8>,

    /// Font weight: normal, bold, or lighter
    #[arg(long, value_name = "WEIGHT")]
    pub font_weight: Option<String>,

    /// Font style: normal or italic
    #[arg(long, value_name = "STYLE")]
    pub font_style: Option<String>,

    /// Text color as a hex value (#RRGGBB), overrides the theme
    #[arg(long, value_name = "HEX")]
    pub color: Option<String>,

    /// Background color as a hex value (#RRGGBB), overrides the theme
    #[arg(long, value_name = "HEX")]
    pub background: Option<String>,
}

impl RenderArgs {
    /// Execute the render command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load().unwrap_or_default();

        let shape = match &self.shape {
            Some(id) => ShapeKind::parse(id).map_err(|e| CliError::validation(e.to_string()))?,
            None => config.defaults.shape,
        };

        let text = self.resolve_text()?;
        let style = self.resolve_style(&config)?;

        let points = generate_shape_points(shape, CANVAS_WIDTH, CANVAS_HEIGHT);
        let fragments = distribute_text(&text, &points);

        let output_path = self
            .output
            .clone()
            .unwrap_or_else(|| export::default_output_path(shape));

        export::save_svg(&output_path, &fragments, &style, CANVAS_WIDTH, CANVAS_HEIGHT)
            .map_err(|e| CliError::io(format!("Failed to export calligram: {e}")))?;

        println!(
            "✓ Rendered {} characters over {} anchor points to: {}",
            fragments.iter().map(|f| f.text.chars().count()).sum::<usize>(),
            points.len(),
            output_path.display()
        );

        Ok(())
    }

    /// Reads the text from the flag or the file, requiring exactly one.
    fn resolve_text(&self) -> CliResult<String> {
        let text = match (&self.text, &self.text_file) {
            (Some(text), None) => text.clone(),
            (None, Some(path)) => fs::read_to_string(path)
                .map_err(|e| CliError::io(format!("Failed to read {}: {e}", path.display())))?,
            (None, None) => {
                return Err(CliError::validation(
                    "No text given. Use --text or --text-file",
                ));
            }
            // clap's conflicts_with rules this out
            (Some(_), Some(_)) => unreachable!(),
        };

        if text.chars().all(char::is_whitespace) {
            return Err(CliError::validation("Text is empty"));
        }

        Ok(text)
    }

    /// Builds the style: config defaults, then theme, then explicit flags.
    fn resolve_style(&self, config: &Config) -> CliResult<crate::models::StyleParameters> {
        let mut style = config.defaults.style.clone();

        let theme_id = self
            .theme
            .clone()
            .unwrap_or_else(|| config.defaults.color_theme.clone());
        let theme = ColorTheme::find(&theme_id).ok_or_else(|| {
            CliError::validation(format!(
                "Unknown theme '{theme_id}'. See `calligram themes` for the list"
            ))
        })?;
        style.color = theme.text;
        style.background_color = theme.background;

        if let Some(size) = self.font_size {
            if !(FONT_SIZE_RANGE.0..=FONT_SIZE_RANGE.1).contains(&size) {
                return Err(CliError::validation(format!(
                    "Font size {size} out of range ({}-{})",
                    FONT_SIZE_RANGE.0, FONT_SIZE_RANGE.1
                )));
            }
            style.font_size = size;
        }

        if let Some(family) = &self.font_family {
            if !all_fonts().contains(&family.as_str()) {
                return Err(CliError::validation(format!(
                    "Unknown font family '{family}'. Valid families: {}",
                    all_fonts().join(", ")
                )));
            }
            style.font_family.clone_from(family);
        }

        if let Some(spacing) = self.letter_spacing {
            if !(LETTER_SPACING_RANGE.0..=LETTER_SPACING_RANGE.1).contains(&spacing) {
                return Err(CliError::validation(format!(
                    "Letter spacing {spacing} out of range ({}-{})",
                    LETTER_SPACING_RANGE.0, LETTER_SPACING_RANGE.1
                )));
            }
            style.letter_spacing = spacing;
        }

        if let Some(weight) = &self.font_weight {
            style.font_weight =
                FontWeight::parse(weight).map_err(|e| CliError::validation(e.to_string()))?;
        }

        if let Some(font_style) = &self.font_style {
            style.font_style =
                FontStyle::parse(font_style).map_err(|e| CliError::validation(e.to_string()))?;
        }

        if let Some(hex) = &self.color {
            style.color =
                Color::from_hex(hex).map_err(|e| CliError::validation(e.to_string()))?;
        }

        if let Some(hex) = &self.background {
            style.background_color =
                Color::from_hex(hex).map_err(|e| CliError::validation(e.to_string()))?;
        }

        Ok(style)
    }
}
