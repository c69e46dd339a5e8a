use crate::units::GridUnits;

use isoscape_core::glam::IVec2;
use std::ops::Index;
use thiserror::Error;

/// A discrete elevation level. Grids only hold non-negative levels; differences between levels are signed.
pub type Elevation = i32;

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum GridError {
    #[error("elevation grid has no cells")]
    Empty,
    #[error("row {row} has {found} cells but the first row has {expected}")]
    NonRectangular {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("cell ({x}, {y}) has negative elevation {value}")]
    NegativeElevation { x: usize, y: usize, value: Elevation },
    #[error("cell ({x}, {y}) is {found:?}, expected a decimal digit")]
    InvalidDigit { x: usize, y: usize, found: char },
}

/// A rectangular, row-major 2D array of elevation levels.
///
/// Grids are validated once on construction and immutable afterwards. Use [`Index`] with `[i32; 2]` or [`IVec2`]
/// `(column, row)` coordinates for access that panics out of bounds, or [`ElevationGrid::get`] for access that treats
/// out-of-bounds cells as absent.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ElevationGrid {
    width: i32,
    height: i32,
    values: Vec<Elevation>,
}

impl ElevationGrid {
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, GridError>
    where
        R: AsRef<[Elevation]>,
    {
        let expected = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if expected == 0 {
            return Err(GridError::Empty);
        }

        let mut values = Vec::with_capacity(expected * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != expected {
                return Err(GridError::NonRectangular {
                    row: y,
                    expected,
                    found: row.len(),
                });
            }
            for (x, &value) in row.iter().enumerate() {
                if value < 0 {
                    return Err(GridError::NegativeElevation { x, y, value });
                }
                values.push(value);
            }
        }

        Ok(Self {
            width: expected as i32,
            height: rows.len() as i32,
            values,
        })
    }

    /// Parses the textual "ground" format: one decimal digit per cell, one row per line. Blank lines are ignored.
    pub fn parse(ground: &str) -> Result<Self, GridError> {
        let rows = ground
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(y, line)| {
                line.chars()
                    .enumerate()
                    .map(|(x, c)| {
                        c.to_digit(10)
                            .map(|d| d as Elevation)
                            .ok_or(GridError::InvalidDigit { x, y, found: c })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(&rows)
    }

    /// A `width x height` grid where every cell has elevation `z`.
    pub fn filled(width: u32, height: u32, z: Elevation) -> Self {
        assert!(width > 0 && height > 0, "grid must have at least one cell");
        assert!(z >= 0, "elevation must be non-negative");
        Self {
            width: width as i32,
            height: height as i32,
            values: vec![z; (width * height) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn shape(&self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }

    pub fn num_cells(&self) -> usize {
        self.values.len()
    }

    pub fn contains(&self, p: GridUnits<IVec2>) -> bool {
        let GridUnits(p) = p;
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// The elevation at `p`, or `None` if `p` is off the grid.
    #[inline]
    pub fn get(&self, p: GridUnits<IVec2>) -> Option<Elevation> {
        self.contains(p).then(|| self.values[self.linearize(p.0)])
    }

    pub fn max_elevation(&self) -> Elevation {
        self.values.iter().copied().max().unwrap_or(0)
    }

    /// Visits every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (GridUnits<IVec2>, Elevation)> + '_ {
        let width = self.width;
        self.values.iter().enumerate().map(move |(i, &z)| {
            let i = i as i32;
            (GridUnits(IVec2::new(i % width, i / width)), z)
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Elevation]> {
        self.values.chunks(self.width as usize)
    }

    #[inline]
    fn linearize(&self, p: IVec2) -> usize {
        (p.y * self.width + p.x) as usize
    }
}

impl Index<[i32; 2]> for ElevationGrid {
    type Output = Elevation;

    #[inline]
    fn index(&self, [x, y]: [i32; 2]) -> &Self::Output {
        assert!(
            self.contains(GridUnits(IVec2::new(x, y))),
            "({}, {}) is outside of the {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        &self.values[self.linearize(IVec2::new(x, y))]
    }
}

impl Index<IVec2> for ElevationGrid {
    type Output = Elevation;

    #[inline]
    fn index(&self, index: IVec2) -> &Self::Output {
        self.index(index.to_array())
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
