use super::TileScale;
use crate::{
    classify::NeighborDeltas,
    coordinates::Direction,
    signature::{Edge, EdgePair, RampClass, Signature, SplitAxis},
};

use isoscape_core::geometry::{Anchor, Axis, ClipPolygon, Face, FaceTransform, Tilt};
use std::f32::consts::SQRT_2;

// Triangles named by where their apex points.
const POINTING_LEFT: [[f32; 2]; 3] = [[1.0, 0.0], [0.0, 0.5], [1.0, 1.0]];
const POINTING_RIGHT: [[f32; 2]; 3] = [[0.0, 0.0], [1.0, 0.5], [0.0, 1.0]];
const POINTING_UP: [[f32; 2]; 3] = [[0.0, 1.0], [0.5, 0.0], [1.0, 1.0]];
const POINTING_DOWN: [[f32; 2]; 3] = [[0.0, 0.0], [0.5, 1.0], [1.0, 0.0]];

// Half squares named by the corner they keep.
const UPPER_LEFT: [[f32; 2]; 3] = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
const UPPER_RIGHT: [[f32; 2]; 3] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]];
const LOWER_LEFT: [[f32; 2]; 3] = [[0.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
const LOWER_RIGHT: [[f32; 2]; 3] = [[1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

/// Level offset of any sloped top face.
const RAMP_LEVEL: f32 = 0.5;

/// The top of a tile: one primary face, plus a second face for shapes that one plane can't cover.
#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    pub class: RampClass,
    pub top: Face,
    pub extra: Option<Face>,
}

impl Surface {
    /// Walls are shaded like the extra face, or like the base level if there is none.
    pub fn extra_level_offset(&self) -> f32 {
        self.extra.as_ref().map_or(0.0, |f| f.level_offset)
    }
}

/// Whether the corner that a three-up ramp leaves open is two levels up, in which case the extra face becomes another
/// triangular ramp instead of a flat plane.
pub fn steep_corner(signature: Signature, deltas: &NeighborDeltas) -> bool {
    let corner = match signature.class() {
        RampClass::ThreeUp { low: Edge::Down } => Direction::LU,
        RampClass::ThreeUp { low: Edge::Up } => Direction::RD,
        RampClass::ThreeUp { low: Edge::Right } => Direction::LD,
        RampClass::ThreeUp { low: Edge::Left } => Direction::RU,
        _ => return false,
    };
    deltas[corner] == Some(2)
}

/// Derives the top faces for `signature`.
///
/// Panics on [`Signature::ALL_RISING`].
pub fn derive_surface(scale: &TileScale, signature: Signature, steep_corner: bool) -> Surface {
    let class = signature.class();
    let (top, extra) = match class {
        RampClass::Flat => (Face::flat(), None),
        RampClass::OneUp(edge) => one_up(scale, edge),
        RampClass::TwoUp(pair) => (two_up(scale, pair), None),
        RampClass::ThreeUp { low } => three_up(scale, low, steep_corner),
        RampClass::Split(axis) => split(scale, axis),
        RampClass::AllRising => panic!("all-rising tiles must be raised before deriving geometry"),
    };
    Surface {
        class,
        top,
        extra,
    }
}

/// A triangular ramp cut along the tile's diagonal, turned 45 degrees so its slope runs corner to corner.
fn corner_ramp(scale: &TileScale, tilt: Tilt) -> FaceTransform {
    let along = 0.5 * scale.corner_length_scale();
    let transform = FaceTransform::IDENTITY.yawed(45.0).tilted(tilt);
    match tilt.axis {
        Axis::X => transform.scaled(SQRT_2, along),
        Axis::Y => transform.scaled(along, SQRT_2),
    }
}

fn face(transform: FaceTransform, clip: &[[f32; 2]], anchor: Anchor, level_offset: f32) -> Face {
    Face {
        transform,
        clip: ClipPolygon::new(clip),
        anchor,
        level_offset,
    }
}

fn one_up(scale: &TileScale, edge: Edge) -> (Face, Option<Face>) {
    let a = scale.corner_angle();
    let (clip, anchor, tilt, extra_clip) = match edge {
        Edge::Up => (POINTING_LEFT, Anchor::TopRight, Tilt::about_y(a), LOWER_RIGHT),
        Edge::Down => (POINTING_RIGHT, Anchor::BottomLeft, Tilt::about_y(-a), UPPER_LEFT),
        Edge::Left => (POINTING_DOWN, Anchor::TopLeft, Tilt::about_x(a), UPPER_RIGHT),
        Edge::Right => (POINTING_UP, Anchor::BottomRight, Tilt::about_x(-a), LOWER_LEFT),
    };

    let top = face(corner_ramp(scale, tilt), &clip, anchor, RAMP_LEVEL);
    // The rest of the footprint stays at the base level.
    let extra = face(FaceTransform::IDENTITY, &extra_clip, anchor, 0.0);
    (top, Some(extra))
}

fn two_up(scale: &TileScale, pair: EdgePair) -> Face {
    let angle = scale.edge_angle();
    let s = scale.edge_scale();
    let (transform, anchor) = match pair {
        EdgePair::LeftUp => (
            FaceTransform::IDENTITY.tilted(Tilt::about_y(angle)).scaled(s, 1.0),
            Anchor::Right,
        ),
        EdgePair::UpRight => (
            FaceTransform::IDENTITY.tilted(Tilt::about_x(-angle)).scaled(1.0, s),
            Anchor::Bottom,
        ),
        EdgePair::DownLeft => (
            FaceTransform::IDENTITY.tilted(Tilt::about_x(angle)).scaled(1.0, s),
            Anchor::Top,
        ),
        EdgePair::RightDown => (
            FaceTransform::IDENTITY.tilted(Tilt::about_y(-angle)).scaled(s, 1.0),
            Anchor::Left,
        ),
    };
    Face {
        transform,
        clip: ClipPolygon::full(),
        anchor,
        level_offset: RAMP_LEVEL,
    }
}

fn three_up(scale: &TileScale, low: Edge, steep_corner: bool) -> (Face, Option<Face>) {
    let a = scale.corner_angle();
    let z = scale.z_tile();

    let (clip, anchor, tilt, flat_clip, steep) = match low {
        Edge::Down => (
            POINTING_RIGHT,
            Anchor::BottomLeft,
            Tilt::about_y(a),
            UPPER_LEFT,
            (POINTING_LEFT, Anchor::TopRight, Tilt::about_y(a)),
        ),
        Edge::Up => (
            POINTING_LEFT,
            Anchor::TopRight,
            Tilt::about_y(-a),
            LOWER_RIGHT,
            (POINTING_RIGHT, Anchor::BottomLeft, Tilt::about_y(-a)),
        ),
        Edge::Right => (
            POINTING_UP,
            Anchor::BottomRight,
            Tilt::about_x(a),
            LOWER_LEFT,
            (POINTING_DOWN, Anchor::TopLeft, Tilt::about_x(a)),
        ),
        Edge::Left => (
            POINTING_DOWN,
            Anchor::TopLeft,
            Tilt::about_x(-a),
            UPPER_RIGHT,
            (POINTING_UP, Anchor::BottomRight, Tilt::about_x(-a)),
        ),
    };

    let top = face(corner_ramp(scale, tilt).lifted(z), &clip, anchor, RAMP_LEVEL);
    let extra = if steep_corner {
        let (steep_clip, steep_anchor, steep_tilt) = steep;
        face(corner_ramp(scale, steep_tilt).lifted(z), &steep_clip, steep_anchor, 2.0)
    } else {
        face(FaceTransform::IDENTITY.lifted(z), &flat_clip, anchor, 1.0)
    };
    (top, Some(extra))
}

fn split(scale: &TileScale, axis: SplitAxis) -> (Face, Option<Face>) {
    let a = scale.corner_angle();
    let z = scale.z_tile();

    let (clip, anchor, tilt, extra_clip, extra_tilt, shift) = match axis {
        SplitAxis::LeftRight => (
            POINTING_RIGHT,
            Anchor::BottomLeft,
            Tilt::about_y(a),
            POINTING_LEFT,
            Tilt::about_y(-a),
            [-1.0, 0.0],
        ),
        SplitAxis::UpDown => (
            POINTING_UP,
            Anchor::BottomRight,
            Tilt::about_x(a),
            POINTING_DOWN,
            Tilt::about_x(-a),
            [0.0, 1.0],
        ),
    };

    let top = face(corner_ramp(scale, tilt).lifted(z), &clip, anchor, RAMP_LEVEL);
    let extra_transform = corner_ramp(scale, extra_tilt)
        .lifted(z)
        .shifted(shift[0], shift[1]);
    let extra = face(extra_transform, &extra_clip, anchor, RAMP_LEVEL);
    (top, Some(extra))
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
    use crate::coordinates::Neighborhood;

    use approx::assert_relative_eq;

    fn scale() -> TileScale {
        TileScale::new(45.0, 0.25)
    }

    #[test]
    fn flat_surface_is_untouched() {
        let s = derive_surface(&scale(), Signature::FLAT, false);
        assert_eq!(s.class, RampClass::Flat);
        assert_eq!(s.top, Face::flat());
        assert_eq!(s.top.level_offset, 0.0);
        assert_eq!(s.extra_level_offset(), 0.0);
    }

    #[test]
    fn two_up_ramps_pivot_on_the_low_side() {
        let scale = scale();
        let s = derive_surface(&scale, Signature::new(0b1100), false);
        assert!(s.extra.is_none());
        assert_eq!(s.top.anchor, Anchor::Right);
        assert!(s.top.clip.is_full());
        assert_relative_eq!(s.top.transform.scale.x * scale.tile_size, scale.edge_hypot());
        assert_eq!(s.top.transform.scale.y, 1.0);
        let tilt = s.top.transform.tilt.unwrap();
        assert_eq!(tilt.axis, Axis::Y);
        assert_relative_eq!(tilt.degrees, scale.edge_angle());

        let s = derive_surface(&scale, Signature::new(0b0110), false);
        assert_eq!(s.top.anchor, Anchor::Bottom);
        assert_relative_eq!(s.top.transform.scale.y * scale.tile_size, scale.edge_hypot());
        assert_relative_eq!(s.top.transform.tilt.unwrap().degrees, -scale.edge_angle());
    }

    #[test]
    fn one_up_ramps_are_half_tile_triangles() {
        let scale = scale();
        for edge in Edge::ALL {
            let s = derive_surface(&scale, Signature::new(edge.bit()), false);
            assert_eq!(s.class, RampClass::OneUp(edge));
            assert_eq!(s.top.transform.yaw, 45.0);
            assert_eq!(s.top.transform.lift, 0.0);
            assert_relative_eq!(s.top.clip.area(), 0.5);
            assert_eq!(s.top.level_offset, 0.5);

            let extra = s.extra.unwrap();
            assert!(extra.transform.is_identity());
            assert_relative_eq!(extra.clip.area(), 0.5);
            assert_eq!(extra.level_offset, 0.0);
        }
    }

    #[test]
    fn three_up_corner_subdivision() {
        let scale = scale();
        let mut deltas = Neighborhood::new([Some(1); 8]);
        let signature = Signature::new(0b1110);
        assert!(!steep_corner(signature, &deltas));

        let s = derive_surface(&scale, signature, false);
        assert_eq!(s.top.transform.lift, scale.z_tile());
        let extra = s.extra.unwrap();
        assert_eq!(extra.level_offset, 1.0);
        assert_eq!(extra.transform.tilt, None);
        assert_eq!(extra.transform.lift, scale.z_tile());

        deltas[Direction::LU] = Some(2);
        assert!(steep_corner(signature, &deltas));
        let s = derive_surface(&scale, signature, true);
        let extra = s.extra.unwrap();
        assert_eq!(extra.level_offset, 2.0);
        assert_eq!(extra.anchor, Anchor::TopRight);
        assert_eq!(extra.transform.yaw, 45.0);
        assert!(extra.transform.tilt.is_some());

        // Only the open corner matters.
        let mut deltas = Neighborhood::new([Some(1); 8]);
        deltas[Direction::RD] = Some(2);
        assert!(!steep_corner(signature, &deltas));
        assert!(steep_corner(Signature::new(0b1011), &deltas));
    }

    #[test]
    fn split_ramps_have_two_opposed_halves() {
        let scale = scale();
        for (bits, shift) in [(0b1010, [-1.0, 0.0]), (0b0101, [0.0, 1.0])] {
            let s = derive_surface(&scale, Signature::new(bits), false);
            let extra = s.extra.unwrap();
            assert_eq!(extra.level_offset, 0.5);
            assert_eq!(extra.transform.shift.to_array(), shift);
            assert_eq!(extra.anchor, s.top.anchor);

            let (top_tilt, extra_tilt) = (s.top.transform.tilt.unwrap(), extra.transform.tilt.unwrap());
            assert_eq!(top_tilt.axis, extra_tilt.axis);
            assert_relative_eq!(top_tilt.degrees, -extra_tilt.degrees);
            assert_eq!(s.top.transform.lift, scale.z_tile());
        }
    }

    #[test]
    #[should_panic(expected = "all-rising")]
    fn all_rising_panics() {
        derive_surface(&scale(), Signature::ALL_RISING, false);
    }
}
