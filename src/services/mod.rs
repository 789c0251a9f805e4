//! Service layer for the calligram algorithms.
//!
//! This module contains the pure core — shape point generation and
//! text distribution — plus the derived-state cache that ties them to
//! the interactive surfaces.

pub mod distributor;
pub mod generator;
pub mod layout;

// Re-export commonly used types and functions
pub use distributor::{distribute_text, normalize_text};
pub use generator::generate_shape_points;
pub use layout::CalligramLayout;
