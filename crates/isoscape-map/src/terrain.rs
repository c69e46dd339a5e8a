use crate::{
    classify::{classify, ClassifierConfig, NeighborDeltas},
    coordinates::terrain_from_grid,
    decoration::Decoration,
    grid::{Elevation, ElevationGrid},
    sampling::{sample, sample_with},
    signature::Signature,
    units::TerrainUnits,
};

use isoscape_core::{glam::IVec2, SmallKeyHashMap, SmallKeyHashSet};
use std::collections::VecDeque;

/// One classified cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tile {
    /// Terrain or window coordinates, depending on where the tile came from.
    pub position: IVec2,
    /// May be higher than the raw grid value if the cell was raised out of a pit.
    pub z: Elevation,
    pub signature: Signature,
    pub deltas: NeighborDeltas,
    /// Distance-based blend toward the background in `[0, 1]`. Only set by windowing.
    pub fade: f32,
    pub decoration: Option<Decoration>,
}

impl Tile {
    pub fn is_flat(&self) -> bool {
        self.signature.is_flat()
    }
}

/// The classified tiles of a whole grid, keyed by position.
#[derive(Clone, Debug, Default)]
pub struct Terrain {
    tiles: SmallKeyHashMap<IVec2, Tile>,
}

impl Terrain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn get(&self, p: IVec2) -> Option<&Tile> {
        self.tiles.get(&p)
    }

    pub fn get_mut(&mut self, p: IVec2) -> Option<&mut Tile> {
        self.tiles.get_mut(&p)
    }

    pub fn contains(&self, p: IVec2) -> bool {
        self.tiles.contains_key(&p)
    }

    /// Inserts `tile` at its own position, returning the tile it replaced.
    pub fn insert(&mut self, tile: Tile) -> Option<Tile> {
        self.tiles.insert(tile.position, tile)
    }

    /// Visits tiles in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    /// Tiles sorted by row, then column. This is the back-to-front order for drawing.
    pub fn iter_row_major(&self) -> impl Iterator<Item = &Tile> {
        self.row_major_keys()
            .into_iter()
            .filter_map(move |p| self.tiles.get(&p))
    }

    pub(crate) fn row_major_keys(&self) -> Vec<IVec2> {
        let mut keys: Vec<_> = self.tiles.keys().copied().collect();
        keys.sort_unstable_by_key(|p| (p.y, p.x));
        keys
    }

    /// The inclusive `(min, max)` corners of all tile positions.
    pub fn bounds(&self) -> Option<(IVec2, IVec2)> {
        let mut positions = self.tiles.keys();
        let first = *positions.next()?;
        Some(positions.fold((first, first), |(min, max), &p| (min.min(p), max.max(p))))
    }

    fn elevation(&self, p: IVec2) -> Option<Elevation> {
        self.tiles.get(&p).map(|t| t.z)
    }
}

/// Counters describing how much work [`resolve`] had to do.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ResolveStats {
    pub cells: usize,
    /// Total levels added to cells across both phases.
    pub raises: u32,
    /// Cells classified again because a neighbor was raised.
    pub reclassified: usize,
}

/// Classifies every cell of `grid` so that no tile is left with an all-rising signature.
///
/// The first pass classifies each cell against raw grid elevations. Raising a cell can change what its neighbors see, so
/// the neighbors of every raised cell go on a worklist, which is drained by reclassifying each cell against the current
/// tile elevations until nothing else is raised. Elevations only ever grow and never past the highest grid value, so the
/// worklist always empties.
pub fn resolve(grid: &ElevationGrid, config: &ClassifierConfig) -> Terrain {
    resolve_with_stats(grid, config).0
}

pub fn resolve_with_stats(grid: &ElevationGrid, config: &ClassifierConfig) -> (Terrain, ResolveStats) {
    let shape = grid.shape();
    let mut terrain = Terrain::new();
    let mut stats = ResolveStats {
        cells: grid.num_cells(),
        ..Default::default()
    };
    let mut worklist = Worklist::default();

    for (p, z) in grid.iter() {
        let TerrainUnits(key) = terrain_from_grid(shape, p);
        let c = classify(z, &sample(grid, p), config);
        if c.needs_recheck() {
            log::trace!("raised {} by {} to {}", key, c.raises, c.z);
            stats.raises += c.raises;
            worklist.extend(c.invalidated(key));
        }
        terrain.insert(Tile {
            position: key,
            z: c.z,
            signature: c.signature,
            deltas: c.deltas,
            fade: 0.0,
            decoration: None,
        });
    }

    let max_z = grid.max_elevation();
    while let Some(key) = worklist.pop() {
        let z = match terrain.elevation(key) {
            Some(z) => z,
            None => continue,
        };
        let neighbors = sample_with(key, |q| terrain.elevation(q));
        let c = classify(z, &neighbors, config);
        stats.reclassified += 1;
        if c.needs_recheck() {
            log::trace!("raised {} by {} to {}", key, c.raises, c.z);
            stats.raises += c.raises;
            worklist.extend(c.invalidated(key));
        }
        debug_assert!(c.z <= max_z.max(z));

        if let Some(tile) = terrain.get_mut(key) {
            tile.z = c.z;
            tile.signature = c.signature;
            tile.deltas = c.deltas;
        }
    }

    log::debug!(
        "resolved {} cells: {} raises, {} reclassified",
        stats.cells,
        stats.raises,
        stats.reclassified
    );

    (terrain, stats)
}

/// FIFO of keys to reclassify. A key is only queued once until it is popped.
#[derive(Default)]
struct Worklist {
    queue: VecDeque<IVec2>,
    queued: SmallKeyHashSet<IVec2>,
}

impl Worklist {
    fn extend(&mut self, keys: impl IntoIterator<Item = IVec2>) {
        for key in keys {
            if self.queued.insert(key) {
                self.queue.push_back(key);
            }
        }
    }

    fn pop(&mut self) -> Option<IVec2> {
        let key = self.queue.pop_front()?;
        self.queued.remove(&key);
        Some(key)
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
