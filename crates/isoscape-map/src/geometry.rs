//! Derives the faces that render a [`Tile`](crate::Tile): the top surface (flat or ramped), cliff walls, and narrow
//! filler faces along ramp edges.
//!
//! Everything here is a pure function of the tile and the two size parameters, so results can be memoized with a
//! [`GeometryCache`].

mod cache;
mod surface;
mod walls;

pub use cache::GeometryCache;
pub use surface::{derive_surface, steep_corner, Surface};
pub use walls::{east_edge, east_wall, south_edge, south_wall, Wall};

use crate::terrain::Tile;

use std::f32::consts::SQRT_2;

/// The two size parameters every face depends on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileScale {
    /// Side of a tile, in pixels.
    pub tile_size: f32,
    /// Height of one elevation level as a fraction of `tile_size`.
    pub z_step: f32,
}

impl TileScale {
    pub fn new(tile_size: f32, z_step: f32) -> Self {
        Self { tile_size, z_step }
    }

    /// Height of one elevation level, in pixels.
    pub fn z_tile(&self) -> f32 {
        self.z_step * self.tile_size
    }

    /// Tilt of a triangular ramp that climbs one level from the tile's diagonal to a corner, in degrees.
    pub fn corner_angle(&self) -> f32 {
        let adjacent = 0.5 * SQRT_2 * self.tile_size;
        (self.z_tile() / adjacent).atan().to_degrees()
    }

    /// Slanted length of a triangular ramp relative to half a tile.
    pub fn corner_length_scale(&self) -> f32 {
        let half_diagonal = 0.5 * SQRT_2 * self.tile_size;
        self.z_tile().hypot(half_diagonal) / (0.5 * self.tile_size)
    }

    /// Slanted length of a ramp that climbs one level across a whole tile.
    pub fn edge_hypot(&self) -> f32 {
        self.tile_size.hypot(self.z_tile())
    }

    /// Stretch along the tilted axis so a full-tile ramp still covers one cell in plan view.
    pub fn edge_scale(&self) -> f32 {
        self.edge_hypot() / self.tile_size
    }

    /// Tilt of a ramp that climbs one level across a whole tile, in degrees.
    pub fn edge_angle(&self) -> f32 {
        (self.z_tile() / self.edge_hypot()).asin().to_degrees()
    }
}

/// Every face of one tile.
#[derive(Clone, Debug, PartialEq)]
pub struct RampGeometry {
    pub surface: Surface,
    pub south_wall: Option<Wall>,
    pub east_wall: Option<Wall>,
    pub south_edge: Option<Wall>,
    pub east_edge: Option<Wall>,
}

impl RampGeometry {
    pub fn walls(&self) -> impl Iterator<Item = &Wall> {
        [&self.south_wall, &self.east_wall].into_iter().flatten()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Wall> {
        [&self.south_edge, &self.east_edge].into_iter().flatten()
    }
}

/// Derives all faces of `tile`.
///
/// Panics if the tile has an all-rising signature. A resolved terrain never contains one.
pub fn derive_geometry(tile_size: f32, z_step: f32, tile: &Tile) -> RampGeometry {
    let scale = TileScale::new(tile_size, z_step);
    let surface = derive_surface(&scale, tile.signature, steep_corner(tile.signature, &tile.deltas));
    with_walls(&scale, surface, tile)
}

pub(crate) fn with_walls(scale: &TileScale, surface: Surface, tile: &Tile) -> RampGeometry {
    let wall_offset = surface.extra_level_offset();
    RampGeometry {
        south_wall: south_wall(scale, tile, wall_offset),
        east_wall: east_wall(scale, tile, wall_offset),
        south_edge: south_edge(scale, tile),
        east_edge: east_edge(scale, tile),
        surface,
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝

#[cfg(test)]
mod test {
    use super::*;
    use crate::{coordinates::Neighborhood, signature::Signature};

    use approx::assert_relative_eq;
    use isoscape_core::glam::IVec2;

    pub(crate) fn tile(signature: u8, deltas: [Option<i32>; 8]) -> Tile {
        Tile {
            position: IVec2::ZERO,
            z: 3,
            signature: Signature::new(signature),
            deltas: Neighborhood::new(deltas),
            fade: 0.0,
            decoration: None,
        }
    }

    #[test]
    fn edge_ramp_covers_one_cell() {
        let scale = TileScale::new(45.0, 0.25);
        assert_relative_eq!(
            scale.edge_scale() * scale.tile_size,
            45.0f32.hypot(0.25 * 45.0),
            epsilon = 1e-4
        );
        // The tilted face spans exactly one level.
        assert_relative_eq!(
            scale.edge_hypot() * scale.edge_angle().to_radians().sin(),
            scale.z_tile(),
            epsilon = 1e-4
        );
    }

    #[test]
    fn corner_ramp_spans_half_a_diagonal() {
        let scale = TileScale::new(40.0, 0.5);
        let half_diagonal = 0.5 * SQRT_2 * 40.0;
        assert_relative_eq!(
            scale.corner_angle().to_radians().tan() * half_diagonal,
            scale.z_tile(),
            epsilon = 1e-4
        );
        assert_relative_eq!(
            scale.corner_length_scale() * 20.0,
            half_diagonal.hypot(scale.z_tile()),
            epsilon = 1e-4
        );
    }

    #[test]
    fn flat_interior_tile_is_a_single_face() {
        let g = derive_geometry(45.0, 0.25, &tile(0b0000, [Some(0); 8]));
        assert!(g.surface.top.transform.is_identity());
        assert!(g.surface.top.clip.is_full());
        assert!(g.surface.extra.is_none());
        assert_eq!(g.walls().count(), 0);
        assert_eq!(g.edges().count(), 0);
    }

    #[test]
    fn each_class_has_distinct_geometry() {
        let mut tops = Vec::new();
        for bits in [0b0000, 0b0100, 0b0110, 0b1011, 0b0101] {
            let g = derive_geometry(45.0, 0.25, &tile(bits, [Some(0); 8]));
            if bits == 0 {
                assert!(g.surface.top.transform.is_identity());
            } else {
                assert!(!g.surface.top.transform.is_identity(), "{:04b}", bits);
                assert!(g.surface.top.clip.area() > 0.0, "{:04b}", bits);
            }
            assert!(tops.iter().all(|t| *t != g.surface.top), "{:04b}", bits);
            tops.push(g.surface.top);
        }
    }

    #[test]
    fn derivation_is_repeatable() {
        for s in Signature::all().filter(|s| !s.is_all_rising()) {
            let t = tile(s.bits(), [Some(-2), Some(2), None, Some(-3), Some(1), Some(2), Some(2), Some(2)]);
            let a = derive_geometry(45.0, 0.25, &t);
            let b = derive_geometry(45.0, 0.25, &t);
            assert_eq!(a, b);
        }
    }

    #[test]
    #[should_panic]
    fn all_rising_is_rejected() {
        derive_geometry(45.0, 0.25, &tile(0b1111, [Some(1); 8]));
    }
}
