//! Procedural elevation grids.

use crate::{
    coordinates::NEIGHBOR_OFFSETS,
    grid::{Elevation, ElevationGrid, GridError},
};

use fastnoise_lite::{FastNoiseLite, NoiseType};
use isoscape_core::glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum GroundStyle {
    /// One noise sample per cell, smoothed against the cells generated before it.
    Simple,
    /// Each noise sample becomes a jittered 3x3 block, then the whole grid is smoothed.
    Expanded,
    /// Plateaus seeded by noise and grown one ring per level.
    Natural,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub seed: u64,
    /// Cells per side, before any expansion.
    pub size: u32,
    /// Number of distinct elevation levels.
    pub levels: Elevation,
    pub frequency: f32,
    pub style: GroundStyle,
    /// Generate a flat grid at this elevation instead.
    pub force_z: Option<Elevation>,
    /// Smoothing never produces anything lower than this.
    pub land_floor: Elevation,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            size: 40,
            levels: 7,
            frequency: 0.1,
            style: GroundStyle::Expanded,
            force_z: None,
            land_floor: 2,
        }
    }
}

impl GeneratorConfig {
    /// Cells per side of the generated grid.
    pub fn grid_size(&self) -> u32 {
        match (self.force_z, self.style) {
            (None, GroundStyle::Expanded) => 3 * self.size,
            _ => self.size,
        }
    }
}

/// Generates a grid that is the same for the same config.
///
/// Fails if the config asks for an empty grid or a negative forced elevation.
pub fn generate(config: &GeneratorConfig) -> Result<ElevationGrid, GridError> {
    let size = config.size as i32;
    let rows = if let Some(z) = config.force_z {
        vec![vec![z; size as usize]; size as usize]
    } else {
        let mut generator = Generator::new(config);
        match config.style {
            GroundStyle::Simple => generator.simple(size),
            GroundStyle::Expanded => generator.expanded(size),
            GroundStyle::Natural => generator.natural(size),
        }
    };

    let grid = ElevationGrid::from_rows(&rows)?;
    log::debug!(
        "generated {}x{} {:?} grid, max elevation {}",
        grid.width(),
        grid.height(),
        config.style,
        grid.max_elevation()
    );

    Ok(grid)
}

/// Floored mean of `cell` and its neighbors, where absent neighbors count as `cell`. Means at or below `land_floor`
/// become `land_floor`.
pub fn smooth(cell: Elevation, neighbors: &[Option<Elevation>], land_floor: Elevation) -> Elevation {
    let sum: Elevation = cell + neighbors.iter().map(|n| n.unwrap_or(cell)).sum::<Elevation>();
    let mean = sum.div_euclid(neighbors.len() as Elevation + 1);
    if mean <= land_floor {
        land_floor
    } else {
        mean
    }
}

struct Generator {
    noise: FastNoiseLite,
    rng: ChaCha8Rng,
    levels: Elevation,
    land_floor: Elevation,
}

impl Generator {
    fn new(config: &GeneratorConfig) -> Self {
        let mut noise = FastNoiseLite::with_seed(config.seed as i32);
        noise.set_noise_type(Some(NoiseType::OpenSimplex2));
        noise.set_frequency(Some(config.frequency));

        Self {
            noise,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            levels: config.levels.max(1),
            land_floor: config.land_floor,
        }
    }

    fn noise(&self, x: i32, y: i32) -> f32 {
        self.noise.get_noise_2d(x as f32, y as f32).clamp(-1.0, 1.0)
    }

    /// The noise at `(x, y)` mapped to a level in `[0, levels]`.
    fn level(&self, x: i32, y: i32) -> Elevation {
        ((self.noise(x, y) + 1.0) / 2.0 * self.levels as f32).floor() as Elevation
    }

    fn wiggle(&mut self, level: Elevation) -> Elevation {
        let r: f32 = self.rng.gen();
        let jittered = (level as f32 + 3.0 * (r - 0.5)).floor() as Elevation;
        jittered.clamp(0, self.levels - 1)
    }

    fn simple(&self, size: i32) -> Vec<Vec<Elevation>> {
        let mut rows: Vec<Vec<Elevation>> = Vec::with_capacity(size as usize);
        for y in 0..size {
            let mut row = Vec::with_capacity(size as usize);
            for x in 0..size {
                let above = usize::try_from(y - 1).ok().map(|y| &rows[y]);
                let at = |r: Option<&Vec<Elevation>>, x: i32| {
                    r.and_then(|r| usize::try_from(x).ok().and_then(|x| r.get(x)).copied())
                };
                let neighbors = [
                    usize::try_from(x - 1).ok().map(|x| row[x]),
                    at(above, x),
                    at(above, x - 1),
                    at(above, x + 1),
                ];
                row.push(smooth(self.level(x, y), &neighbors, self.land_floor));
            }
            rows.push(row);
        }
        rows
    }

    fn expanded(&mut self, size: i32) -> Vec<Vec<Elevation>> {
        let side = 3 * size as usize;
        let mut rows = vec![Vec::with_capacity(side); side];
        for y in 0..size {
            for x in 0..size {
                let level = self.level(x, y);
                for row in &mut rows[3 * y as usize..3 * (y as usize + 1)] {
                    for _ in 0..3 {
                        let v = self.wiggle(level);
                        row.push(v);
                    }
                }
            }
        }
        smooth_all(&rows, self.land_floor)
    }

    fn natural(&self, size: i32) -> Vec<Vec<Elevation>> {
        let mut rows = vec![vec![0; size as usize]; size as usize];
        for level in 1..self.levels {
            let threshold = 0.4 + 0.05 * level as f32;
            let below = level - 1;

            rows = map_cells(&rows, |rows, p, v| {
                let seeded = v == below
                    && self.noise(p.x, p.y) > threshold
                    && neighbor_values(rows, p).all(|n| n.map_or(true, |n| n == below));
                if seeded {
                    level
                } else {
                    v
                }
            });
            rows = map_cells(&rows, |rows, p, v| {
                if v == below && neighbor_values(rows, p).any(|n| n == Some(level)) {
                    level
                } else {
                    v
                }
            });
        }
        smooth_all(&rows, self.land_floor)
    }
}

fn smooth_all(rows: &[Vec<Elevation>], land_floor: Elevation) -> Vec<Vec<Elevation>> {
    map_cells(rows, |rows, p, v| {
        let neighbors: Vec<_> = neighbor_values(rows, p).collect();
        smooth(v, &neighbors, land_floor)
    })
}

/// Builds a new grid from `f(rows, p, value)` applied to every cell of the old one.
fn map_cells(
    rows: &[Vec<Elevation>],
    mut f: impl FnMut(&[Vec<Elevation>], IVec2, Elevation) -> Elevation,
) -> Vec<Vec<Elevation>> {
    rows.iter()
        .enumerate()
        .map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(|(x, &v)| f(rows, IVec2::new(x as i32, y as i32), v))
                .collect()
        })
        .collect()
}

fn neighbor_values(rows: &[Vec<Elevation>], p: IVec2) -> impl Iterator<Item = Option<Elevation>> + '_ {
    NEIGHBOR_OFFSETS.into_iter().map(move |offset| {
        let q = p + offset;
        let row = usize::try_from(q.y).ok().and_then(|y| rows.get(y))?;
        usize::try_from(q.x).ok().and_then(|x| row.get(x)).copied()
    })
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
