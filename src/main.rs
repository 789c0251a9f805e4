//! Calligram Studio - terminal calligram editor
//!
//! Arranges user text along the outline and interior of a geometric
//! silhouette, with a live terminal preview and SVG export. Run with a
//! subcommand for headless use, or without arguments for the studio.

use anyhow::Result;
use clap::{Parser, Subcommand};

use calligram::cli::{RenderArgs, ShapesArgs, ThemesArgs};
use calligram::config::Config;
use calligram::constants::APP_NAME;
use calligram::tui;

/// Calligram Studio - arrange text into shapes in your terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render text into a shaped SVG calligram
    Render(RenderArgs),
    /// List available shapes
    Shapes(ShapesArgs),
    /// List built-in color themes
    Themes(ThemesArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(command) = cli.command {
        let result = match command {
            Commands::Render(args) => args.execute(),
            Commands::Shapes(args) => args.execute(),
            Commands::Themes(args) => args.execute(),
        };

        if let Err(e) = result {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code() as i32);
        }

        return Ok(());
    }

    // No subcommand: launch the interactive studio
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load config, using defaults: {e}");
            Config::default()
        }
    };

    println!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    let mut terminal = tui::setup_terminal()?;
    let mut app_state = tui::AppState::new(config);

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal before reporting any error
    tui::restore_terminal(terminal)?;

    result?;

    Ok(())
}
