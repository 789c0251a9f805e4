//! CLI command handlers for Calligram Studio.
//!
//! This module provides headless, scriptable access to the core
//! functionality for automation and testing.

pub mod common;
pub mod render;
pub mod shapes;
pub mod themes;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliErrorKind, CliResult, ExitCode};
pub use render::RenderArgs;
pub use shapes::ShapesArgs;
pub use themes::ThemesArgs;
