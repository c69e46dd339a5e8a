//! Isometric landscapes from integer heightmaps.
//!
//! [`Landscape`] ties the pipeline together: it generates (or takes) an elevation grid, resolves it into classified
//! tiles, scatters vegetation, and produces per-frame draw lists for the tiles around a movable center.

mod config;
mod landscape;

pub use config::{Config, ConfigError};
pub use landscape::{Landscape, LandscapeError, Move};

// Re-exports.
pub use isoscape_core;
pub use isoscape_map;
pub use isoscape_renderer;
