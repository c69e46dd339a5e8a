//! Renderer-neutral descriptions of the planar faces that make up a tile.
//!
//! A face always starts life as the unit tile square lying flat at the tile's elevation. Its [`FaceTransform`] is applied
//! about its [`Anchor`], in this order: lift, yaw, tilt, scale, shift. Only the part of the face inside its
//! [`ClipPolygon`] is drawn.

use glam::Vec2;
use smallvec::SmallVec;
use static_assertions::const_assert_eq;
use std::mem;

/// The point of the unit square that stays fixed while a face is rotated and scaled.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Anchor {
    TopLeft,
    Top,
    TopRight,
    Left,
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

const_assert_eq!(mem::size_of::<Anchor>(), 1);

impl Default for Anchor {
    fn default() -> Self {
        Anchor::Center
    }
}

impl Anchor {
    /// The anchor as a point in unit-tile fractions.
    pub fn point(self) -> Vec2 {
        match self {
            Anchor::TopLeft => Vec2::new(0.0, 0.0),
            Anchor::Top => Vec2::new(0.5, 0.0),
            Anchor::TopRight => Vec2::new(1.0, 0.0),
            Anchor::Left => Vec2::new(0.0, 0.5),
            Anchor::Center => Vec2::new(0.5, 0.5),
            Anchor::Right => Vec2::new(1.0, 0.5),
            Anchor::BottomLeft => Vec2::new(0.0, 1.0),
            Anchor::Bottom => Vec2::new(0.5, 1.0),
            Anchor::BottomRight => Vec2::new(1.0, 1.0),
        }
    }
}

/// An in-plane axis of the tile.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Axis {
    X,
    Y,
}

/// A signed rotation about one of the tile's in-plane axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub axis: Axis,
    pub degrees: f32,
}

impl Tilt {
    pub fn about_x(degrees: f32) -> Self {
        Self {
            axis: Axis::X,
            degrees,
        }
    }

    pub fn about_y(degrees: f32) -> Self {
        Self {
            axis: Axis::Y,
            degrees,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceTransform {
    /// Translation along the vertical axis, in pixels.
    pub lift: f32,
    /// Rotation about the vertical axis, in degrees.
    pub yaw: f32,
    pub tilt: Option<Tilt>,
    /// Per-axis scale, applied after rotation.
    pub scale: Vec2,
    /// Final in-plane translation as a fraction of the face size.
    pub shift: Vec2,
}

impl Default for FaceTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl FaceTransform {
    pub const IDENTITY: Self = Self {
        lift: 0.0,
        yaw: 0.0,
        tilt: None,
        scale: Vec2::ONE,
        shift: Vec2::ZERO,
    };

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    pub fn lifted(mut self, lift: f32) -> Self {
        self.lift = lift;
        self
    }

    pub fn yawed(mut self, degrees: f32) -> Self {
        self.yaw = degrees;
        self
    }

    pub fn tilted(mut self, tilt: Tilt) -> Self {
        self.tilt = Some(tilt);
        self
    }

    pub fn scaled(mut self, x: f32, y: f32) -> Self {
        self.scale = Vec2::new(x, y);
        self
    }

    pub fn shifted(mut self, x: f32, y: f32) -> Self {
        self.shift = Vec2::new(x, y);
        self
    }
}

/// A polygon in unit-tile fractions (x grows right, y grows down) that masks a face.
#[derive(Clone, Debug, PartialEq)]
pub struct ClipPolygon {
    points: SmallVec<[Vec2; 4]>,
}

impl Default for ClipPolygon {
    fn default() -> Self {
        Self::full()
    }
}

impl ClipPolygon {
    pub fn new(points: &[[f32; 2]]) -> Self {
        Self {
            points: points.iter().map(|&p| Vec2::from(p)).collect(),
        }
    }

    /// The whole unit square; the face is not masked.
    pub fn full() -> Self {
        Self::new(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]])
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn is_full(&self) -> bool {
        *self == Self::full()
    }

    /// Unsigned area by the shoelace formula.
    pub fn area(&self) -> f32 {
        let n = self.points.len();
        let mut twice_area = 0.0;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            twice_area += a.x * b.y - b.x * a.y;
        }
        0.5 * twice_area.abs()
    }
}

/// One planar face of a tile.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Face {
    pub transform: FaceTransform,
    pub clip: ClipPolygon,
    pub anchor: Anchor,
    /// Elevation offset in levels, used for shading. Ramps sit half a level above their base.
    pub level_offset: f32,
}

impl Face {
    /// A flat, unmasked tile top.
    pub fn flat() -> Self {
        Self::default()
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

    use approx::assert_relative_eq;

    #[test]
    fn default_transform_is_identity() {
        assert!(FaceTransform::default().is_identity());
        assert!(!FaceTransform::default().lifted(2.0).is_identity());
        assert!(!FaceTransform::default()
            .tilted(Tilt::about_x(10.0))
            .is_identity());
    }

    #[test]
    fn full_clip_covers_unit_square() {
        let full = ClipPolygon::full();
        assert!(full.is_full());
        assert_relative_eq!(full.area(), 1.0);
    }

    #[test]
    fn triangle_clip_covers_half_the_tile() {
        let triangle = ClipPolygon::new(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]);
        assert!(!triangle.is_full());
        assert_relative_eq!(triangle.area(), 0.5);

        // A wedge from one edge to the middle of the opposite edge.
        let wedge = ClipPolygon::new(&[[0.0, 0.0], [1.0, 0.5], [0.0, 1.0]]);
        assert_relative_eq!(wedge.area(), 0.5);
    }

    #[test]
    fn anchors_sit_on_unit_square() {
        assert_eq!(Anchor::TopLeft.point(), Vec2::ZERO);
        assert_eq!(Anchor::BottomRight.point(), Vec2::ONE);
        assert_eq!(Anchor::default().point(), Vec2::splat(0.5));
    }
}
