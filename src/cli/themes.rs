//! Themes command: list the built-in color themes.

use clap::Args;

use crate::cli::common::CliResult;
use crate::models::COLOR_THEMES;

/// List built-in color themes with their color pairs
#[derive(Debug, Clone, Args)]
pub struct ThemesArgs {}

impl ThemesArgs {
    /// Execute the themes command
    pub fn execute(&self) -> CliResult<()> {
        println!("{:<12} {:<12} {:<12} {:<12}", "ID", "NAME", "BACKGROUND", "TEXT");
        for theme in COLOR_THEMES {
            println!(
                "{:<12} {:<12} {:<12} {:<12}",
                theme.id,
                theme.name,
                theme.background.to_hex(),
                theme.text.to_hex()
            );
        }
        Ok(())
    }
}
