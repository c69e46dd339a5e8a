use super::{derive_surface, steep_corner, with_walls, RampGeometry, Surface, TileScale};
use crate::{signature::Signature, terrain::Tile};

use isoscape_core::SmallKeyHashMap;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
struct SurfaceKey {
    signature: Signature,
    steep_corner: bool,
    tile_size_bits: u32,
    z_step_bits: u32,
}

/// Memoizes tile surfaces. There are only a handful of distinct surfaces for a given tile size and z step, while walls
/// depend on each tile's own deltas and are cheap to derive, so only surfaces are cached.
#[derive(Default)]
pub struct GeometryCache {
    surfaces: SmallKeyHashMap<SurfaceKey, Surface>,
    misses: usize,
}

impl GeometryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same as [`derive_geometry`](super::derive_geometry), reusing surfaces derived earlier.
    pub fn geometry(&mut self, tile_size: f32, z_step: f32, tile: &Tile) -> RampGeometry {
        let scale = TileScale::new(tile_size, z_step);
        let surface = self
            .surface(&scale, tile.signature, steep_corner(tile.signature, &tile.deltas))
            .clone();
        with_walls(&scale, surface, tile)
    }

    pub fn surface(&mut self, scale: &TileScale, signature: Signature, steep_corner: bool) -> &Surface {
        let key = SurfaceKey {
            signature,
            steep_corner,
            tile_size_bits: scale.tile_size.to_bits(),
            z_step_bits: scale.z_step.to_bits(),
        };
        let misses = &mut self.misses;
        self.surfaces.entry(key).or_insert_with(|| {
            *misses += 1;
            log::debug!("deriving surface {} at {:?}", signature, scale);
            derive_surface(scale, signature, steep_corner)
        })
    }

    /// The number of distinct surfaces derived so far.
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    pub fn misses(&self) -> usize {
        self.misses
    }

    pub fn clear(&mut self) {
        self.surfaces.clear();
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
    use crate::geometry::{derive_geometry, test::tile};

    #[test]
    fn cached_geometry_matches_direct_derivation() {
        let mut cache = GeometryCache::new();
        for s in Signature::all().filter(|s| !s.is_all_rising()) {
            let t = tile(s.bits(), [Some(0), Some(2), Some(-1), Some(2), None, Some(2), Some(-2), Some(2)]);
            assert_eq!(cache.geometry(45.0, 0.25, &t), derive_geometry(45.0, 0.25, &t));
            assert_eq!(cache.geometry(45.0, 0.25, &t), derive_geometry(45.0, 0.25, &t));
        }
        assert_eq!(cache.len(), 15);
        assert_eq!(cache.misses(), 15);
    }

    #[test]
    fn scale_is_part_of_the_key() {
        let mut cache = GeometryCache::new();
        let t = tile(0b0110, [Some(0); 8]);
        let a = cache.geometry(45.0, 0.25, &t);
        let b = cache.geometry(45.0, 0.5, &t);
        assert_ne!(a.surface, b.surface);
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
    }
}
