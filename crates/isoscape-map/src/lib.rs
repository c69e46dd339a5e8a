//! Isometric terrain from integer heightmaps.
//!
//! # Pipeline
//!
//! 1. An [`ElevationGrid`] is parsed, built from rows, or produced by the [`generate`] pass.
//! 2. [`resolve`] classifies every cell into a [`Tile`] with a 4-bit [`Signature`] that says which of its edges climb
//!    toward a higher neighbor. A cell whose four edges all climb is a one-cell pit; it is raised a level and its
//!    neighbors are reclassified until the terrain is stable.
//! 3. [`decorate`] scatters vegetation over flat tiles.
//! 4. [`window`] selects the tiles around a center, re-keyed so the center is the origin, and marks the window edges as
//!    hard boundaries.
//! 5. [`derive_geometry`] (or a [`GeometryCache`]) turns each tile into renderer-neutral faces: the ramped top surface,
//!    cliff walls and ramp-edge fillers.
//!
//! # Coordinates
//!
//! Grids are indexed by `(column, row)` with rows growing downward. Resolved terrain is keyed relative to the grid's
//! center cell, and windowed terrain relative to the window center. The [`GridUnits`], [`TerrainUnits`] and
//! [`WindowUnits`] wrappers keep these apart where they meet.

mod classify;
mod config;
mod coordinates;
mod decoration;
mod generator;
mod geometry;
mod grid;
mod sampling;
mod signature;
mod terrain;
mod units;
mod window;

pub use classify::*;
pub use config::*;
pub use coordinates::*;
pub use decoration::*;
pub use generator::*;
pub use geometry::*;
pub use grid::*;
pub use sampling::*;
pub use signature::*;
pub use terrain::*;
pub use units::*;
pub use window::*;

pub use isoscape_core::geometry::{Anchor, Axis, ClipPolygon, Face, FaceTransform, Tilt};
