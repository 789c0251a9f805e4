//! Shapes command: list the available silhouettes.

use clap::Args;

use crate::cli::common::CliResult;
use crate::constants::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::models::ShapeKind;
use crate::services::generate_shape_points;

/// List available shapes with their anchor point counts
#[derive(Debug, Clone, Args)]
pub struct ShapesArgs {}

impl ShapesArgs {
    /// Execute the shapes command
    pub fn execute(&self) -> CliResult<()> {
        println!("{:<12} {:<12} {:>8}", "ID", "NAME", "POINTS");
        for shape in ShapeKind::ALL {
            let points = generate_shape_points(shape, CANVAS_WIDTH, CANVAS_HEIGHT);
            println!(
                "{:<12} {:<12} {:>8}",
                shape.id(),
                shape.display_name(),
                points.len()
            );
        }
        Ok(())
    }
}
