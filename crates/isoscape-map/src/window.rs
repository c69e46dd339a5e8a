use crate::{
    coordinates::{window_from_terrain, Direction},
    terrain::{Terrain, Tile},
    units::{TerrainUnits, WindowUnits},
};

use isoscape_core::glam::{IVec2, Vec2};
use itertools::iproduct;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Side length of the visible square, not counting the buffer.
    pub perimeter: u32,
    /// Extra rings of tiles beyond the perimeter. They are drawn but fully faded.
    pub buffer: u32,
    pub fade: bool,
    pub fade_exponent: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            perimeter: 13,
            buffer: 1,
            fade: true,
            fade_exponent: 2.0,
        }
    }
}

impl WindowConfig {
    /// Side length including the buffer on both sides.
    pub fn extent(&self) -> i32 {
        (self.perimeter + 2 * self.buffer) as i32
    }

    /// Half the extent, rounding up.
    pub fn half(&self) -> i32 {
        (self.extent() + 1) / 2
    }

    /// The inclusive `(min, max)` window coordinates.
    pub fn bounds(&self) -> (WindowUnits<IVec2>, WindowUnits<IVec2>) {
        let half = self.half();
        (
            WindowUnits(IVec2::splat(-half)),
            WindowUnits(IVec2::splat(self.extent() - half)),
        )
    }

    /// How far `p` is faded toward the background, in `[0, 1]`.
    pub fn fade_at(&self, p: WindowUnits<IVec2>) -> f32 {
        let extent = self.extent();
        let half = self.half();
        // The true middle of the window sits half a cell off the origin when the extent is odd.
        let middle = Vec2::splat(0.5 * extent as f32 - half as f32);
        let distance = p.into_inner().as_vec2().distance(middle);

        let radius = half - self.buffer as i32;
        if radius <= 0 {
            return if distance > 0.0 { 1.0 } else { 0.0 };
        }
        (distance / radius as f32).powf(self.fade_exponent).min(1.0)
    }
}

/// Selects the tiles within the window around `center`, re-keyed so `center` lands on the origin.
///
/// Tiles in the last column lose their right delta and tiles in the last row lose their down delta. Whatever lies past
/// the window is not drawn, so those edges must render as hard boundary walls.
pub fn window(terrain: &Terrain, center: TerrainUnits<IVec2>, config: &WindowConfig) -> Terrain {
    let (WindowUnits(min), WindowUnits(max)) = config.bounds();

    let mut visible = Terrain::new();
    for (y, x) in iproduct!(min.y..=max.y, min.x..=max.x) {
        let offset = IVec2::new(x, y);
        let source = TerrainUnits(center.into_inner() + offset);
        let tile = match terrain.get(source.into_inner()) {
            Some(tile) => tile,
            None => continue,
        };
        let WindowUnits(position) = window_from_terrain(center, source);
        debug_assert_eq!(position, offset);

        let mut deltas = tile.deltas;
        if x == max.x {
            deltas[Direction::R] = None;
        }
        if y == max.y {
            deltas[Direction::D] = None;
        }
        let fade = if config.fade {
            config.fade_at(WindowUnits(position))
        } else {
            0.0
        };

        visible.insert(Tile {
            position,
            deltas,
            fade,
            ..*tile
        });
    }

    if visible.is_empty() {
        log::warn!("window around {} contains no tiles", center.into_inner());
    } else {
        log::debug!("window around {} holds {} tiles", center.into_inner(), visible.len());
    }

    visible
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
