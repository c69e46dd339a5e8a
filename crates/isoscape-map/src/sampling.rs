use crate::{
    coordinates::{Direction, Neighborhood},
    grid::{Elevation, ElevationGrid},
    units::GridUnits,
};

use isoscape_core::glam::IVec2;

/// The elevations of the eight neighbors of a cell. Neighbors that fall off the grid are `None`, meaning "no
/// constraint." They are never treated as elevation 0, which would put a cliff along every grid boundary.
pub type NeighborSet = Neighborhood<Option<Elevation>>;

/// Samples the eight neighbors of `p` from `grid`.
pub fn sample(grid: &ElevationGrid, p: GridUnits<IVec2>) -> NeighborSet {
    sample_with(p.into_inner(), |q| grid.get(GridUnits(q)))
}

/// Samples the eight neighbors of `p` from an arbitrary `lookup`, which returns `None` for cells that don't exist.
pub fn sample_with(p: IVec2, mut lookup: impl FnMut(IVec2) -> Option<Elevation>) -> NeighborSet {
    Neighborhood::from_fn(|dir: Direction| lookup(p + dir.offset()))
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
