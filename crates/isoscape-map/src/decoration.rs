//! Scatters vegetation over flat, high-enough tiles.

use crate::{coordinates::Direction, grid::Elevation, terrain::Terrain};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Vegetation {
    Weed,
    Bush,
    Tree,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decoration {
    pub kind: Vegetation,
    /// Degrees about the vertical axis.
    pub rotation: f32,
    pub scale: f32,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct DecorationConfig {
    /// Tiles below this elevation are never decorated.
    pub min_elevation: Elevation,
    /// Probability that an eligible tile is decorated.
    pub density: f32,
    /// Probability that a tile enclosed by level neighbors grows a tree instead of undergrowth.
    pub tree_ratio: f32,
    pub min_scale: f32,
    pub max_scale: f32,
    pub seed: u64,
}

impl Default for DecorationConfig {
    fn default() -> Self {
        Self {
            min_elevation: 3,
            density: 1.0,
            tree_ratio: 0.7,
            min_scale: 0.9,
            max_scale: 1.1,
            seed: 1,
        }
    }
}

/// Assigns a [`Decoration`] to eligible tiles of `terrain` and returns how many were decorated.
///
/// A tile is eligible when it is flat and at least `min_elevation` high. Only signature and elevation decide
/// eligibility; the result is the same for the same seed and terrain.
pub fn decorate(terrain: &mut Terrain, config: &DecorationConfig) -> usize {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut decorated = 0;
    for key in terrain.row_major_keys() {
        let tile = match terrain.get_mut(key) {
            Some(tile) => tile,
            None => continue,
        };
        if !tile.is_flat() || tile.z < config.min_elevation {
            tile.decoration = None;
            continue;
        }
        if !rng.gen_bool(probability(config.density)) {
            tile.decoration = None;
            continue;
        }

        // Absent neighbors don't break the level ground around a tree.
        let enclosed = Direction::CARDINALS
            .iter()
            .all(|&dir| matches!(tile.deltas[dir], Some(0) | None));
        let kind = if enclosed && rng.gen::<f32>() < config.tree_ratio {
            Vegetation::Tree
        } else if rng.gen_bool(0.5) {
            Vegetation::Weed
        } else {
            Vegetation::Bush
        };
        let rotation = rng.gen_range(0.0..360.0);
        let scale = if config.max_scale > config.min_scale {
            rng.gen_range(config.min_scale..config.max_scale)
        } else {
            config.min_scale
        };

        tile.decoration = Some(Decoration { kind, rotation, scale });
        decorated += 1;
    }

    log::debug!("decorated {} of {} tiles", decorated, terrain.len());

    decorated
}

fn probability(p: f32) -> f64 {
    f64::from(p).clamp(0.0, 1.0)
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
