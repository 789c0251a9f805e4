//! Calligram Studio Library
//!
//! This library provides the core functionality for Calligram Studio:
//! generating anchor point fields for geometric silhouettes,
//! distributing text across them in reading order, and exporting the
//! arranged text as an SVG image.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod models;
pub mod services;
pub mod tui;
