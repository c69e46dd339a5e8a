use super::TileScale;
use crate::{coordinates::Direction, signature::Signature, terrain::Tile};

use isoscape_core::geometry::{Anchor, ClipPolygon, Face, FaceTransform, Tilt};

/// A vertical face hanging from the south or east edge of a tile.
#[derive(Clone, Debug, PartialEq)]
pub struct Wall {
    pub face: Face,
    /// The neighbor on this side is absent, so the wall closes off the edge of the map.
    pub boundary: bool,
}

/// The cliff below the tile's south edge, if the neighbor there is more than one level down or absent.
///
/// A cliff is as tall as the drop to the neighbor. At a boundary it reaches all the way to level zero.
pub fn south_wall(scale: &TileScale, tile: &Tile, level_offset: f32) -> Option<Wall> {
    let (levels, boundary) = cliff_height(tile, Direction::D)?;
    let transform = FaceTransform::IDENTITY
        .tilted(Tilt::about_x(90.0))
        .scaled(1.0, levels as f32 * scale.z_step);
    Some(Wall {
        face: Face {
            transform,
            clip: ClipPolygon::full(),
            anchor: Anchor::Bottom,
            level_offset,
        },
        boundary,
    })
}

/// The cliff below the tile's east edge. See [`south_wall`].
pub fn east_wall(scale: &TileScale, tile: &Tile, level_offset: f32) -> Option<Wall> {
    let (levels, boundary) = cliff_height(tile, Direction::R)?;
    let transform = FaceTransform::IDENTITY
        .tilted(Tilt::about_y(90.0))
        .scaled(levels as f32 * scale.z_step, 1.0)
        .shifted(1.0, 0.0);
    Some(Wall {
        face: Face {
            transform,
            clip: ClipPolygon::full(),
            anchor: Anchor::Right,
            level_offset,
        },
        boundary,
    })
}

fn cliff_height(tile: &Tile, dir: Direction) -> Option<(i32, bool)> {
    match tile.deltas[dir] {
        None => Some((tile.z, true)),
        Some(d) if d < -1 => Some((-d, false)),
        Some(_) => None,
    }
}

/// One level of wall under the south edge of a ramp, filling the sliver the sloped faces leave open above a lower
/// neighbor.
pub fn south_edge(scale: &TileScale, tile: &Tile) -> Option<Wall> {
    let boundary = lower_or_absent(tile, Direction::D)?;
    let clip = match tile.signature.bits() {
        0b1100 | 0b1010 | 0b1110 | 0b1000 => ClipPolygon::new(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]),
        0b1011 => ClipPolygon::full(),
        0b0011 | 0b0111 | 0b0001 | 0b0101 => ClipPolygon::new(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]),
        _ => return None,
    };
    let transform = FaceTransform::IDENTITY
        .tilted(Tilt::about_x(90.0))
        .scaled(1.0, scale.z_step)
        .shifted(0.0, 1.0);
    Some(Wall {
        face: Face {
            transform,
            clip,
            anchor: Anchor::Bottom,
            level_offset: edge_level_offset(tile.signature),
        },
        boundary,
    })
}

/// The east counterpart of [`south_edge`].
pub fn east_edge(scale: &TileScale, tile: &Tile) -> Option<Wall> {
    let boundary = lower_or_absent(tile, Direction::R)?;
    let clip = match tile.signature.bits() {
        0b0111 | 0b1011 | 0b0011 => ClipPolygon::full(),
        0b0110 | 0b1110 | 0b1010 | 0b0010 => ClipPolygon::new(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]),
        0b1001 | 0b1101 | 0b0001 | 0b0101 => ClipPolygon::new(&[[0.0, 1.0], [1.0, 0.0], [1.0, 1.0]]),
        _ => return None,
    };
    let transform = FaceTransform::IDENTITY
        .tilted(Tilt::about_y(90.0))
        .scaled(scale.z_step, 1.0);
    Some(Wall {
        face: Face {
            transform,
            clip,
            anchor: Anchor::Right,
            level_offset: edge_level_offset(tile.signature),
        },
        boundary,
    })
}

/// `Some(is_boundary)` if the neighbor in `dir` is lower or absent.
fn lower_or_absent(tile: &Tile, dir: Direction) -> Option<bool> {
    match tile.deltas[dir] {
        None => Some(true),
        Some(d) if d < 0 => Some(false),
        Some(_) => None,
    }
}

fn edge_level_offset(signature: Signature) -> f32 {
    if signature.is_one_up() || signature.is_two_up() || signature.is_three_up() {
        0.5
    } else {
        0.0
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
