use crate::units::*;

use isoscape_core::glam::{const_ivec2, IVec2};
use std::ops::{Index, IndexMut};

/// One of the eight neighbors of a cell. Rows grow downward, so "up" is `-y`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    L = 0,
    LU = 1,
    U = 2,
    RU = 3,
    R = 4,
    RD = 5,
    D = 6,
    LD = 7,
}

impl Direction {
    pub const ALL: [Self; 8] = [
        Self::L,
        Self::LU,
        Self::U,
        Self::RU,
        Self::R,
        Self::RD,
        Self::D,
        Self::LD,
    ];
    pub const CARDINALS: [Self; 4] = [Self::L, Self::U, Self::R, Self::D];
    pub const CORNERS: [Self; 4] = [Self::LU, Self::RU, Self::RD, Self::LD];

    #[inline]
    pub fn offset(self) -> IVec2 {
        NEIGHBOR_OFFSETS[self as usize]
    }
}

/// Offsets of the eight neighbors, in [`Direction::ALL`] order.
pub const NEIGHBOR_OFFSETS: [IVec2; 8] = [
    const_ivec2!([-1, 0]),
    const_ivec2!([-1, -1]),
    const_ivec2!([0, -1]),
    const_ivec2!([1, -1]),
    const_ivec2!([1, 0]),
    const_ivec2!([1, 1]),
    const_ivec2!([0, 1]),
    const_ivec2!([-1, 1]),
];

/// One `T` for each of the eight neighbors of a cell. Use [`Index`] and [`IndexMut`] with a [`Direction`] for access.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Neighborhood<T> {
    pub values: [T; 8],
}

impl<T> Neighborhood<T> {
    pub fn new(values: [T; 8]) -> Self {
        Self { values }
    }

    pub fn from_fn(mut f: impl FnMut(Direction) -> T) -> Self {
        Self {
            values: Direction::ALL.map(&mut f),
        }
    }

    pub fn map<S>(self, f: impl FnMut(T) -> S) -> Neighborhood<S> {
        Neighborhood {
            values: self.values.map(f),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Direction, &T)> {
        Direction::ALL.into_iter().zip(self.values.iter())
    }
}

impl<T> Index<Direction> for Neighborhood<T> {
    type Output = T;

    #[inline]
    fn index(&self, dir: Direction) -> &Self::Output {
        &self.values[dir as usize]
    }
}

impl<T> IndexMut<Direction> for Neighborhood<T> {
    #[inline]
    fn index_mut(&mut self, dir: Direction) -> &mut Self::Output {
        &mut self.values[dir as usize]
    }
}

/// The coordinates of all eight neighbors of `p`, in [`Direction::ALL`] order.
pub fn neighbors(p: IVec2) -> impl Iterator<Item = IVec2> {
    NEIGHBOR_OFFSETS.into_iter().map(move |offset| p + offset)
}

/// The grid cell that maps to the terrain origin.
pub fn grid_center(grid_shape: IVec2) -> GridUnits<IVec2> {
    GridUnits(grid_shape / 2)
}

pub fn terrain_from_grid(grid_shape: IVec2, p: GridUnits<IVec2>) -> TerrainUnits<IVec2> {
    let GridUnits(center) = grid_center(grid_shape);
    TerrainUnits(p.into_inner() - center)
}

pub fn grid_from_terrain(grid_shape: IVec2, p: TerrainUnits<IVec2>) -> GridUnits<IVec2> {
    let GridUnits(center) = grid_center(grid_shape);
    GridUnits(p.into_inner() + center)
}

pub fn window_from_terrain(
    window_center: TerrainUnits<IVec2>,
    p: TerrainUnits<IVec2>,
) -> WindowUnits<IVec2> {
    WindowUnits(p.into_inner() - window_center.into_inner())
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
