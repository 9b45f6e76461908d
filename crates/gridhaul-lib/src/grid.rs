use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Cell on the planning grid, addressed as `(row, col)`.
///
/// Serialises as a two-element array so scenario files read naturally
/// (`"pickup": [3, 5]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to `other`.
    pub fn manhattan(&self, other: &Coord) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Coordinate shifted by the given row/column delta.
    pub(crate) fn offset(&self, d_row: i32, d_col: i32) -> Coord {
        Coord::new(self.row + d_row, self.col + d_col)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Coord::new(row, col)
    }
}

impl From<Coord> for (i32, i32) {
    fn from(coord: Coord) -> Self {
        (coord.row, coord.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Rectangular, obstacle-free grid of `rows x cols` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBounds {
    pub rows: u32,
    pub cols: u32,
}

impl GridBounds {
    /// Create bounds, rejecting empty grids.
    pub fn new(rows: u32, cols: u32) -> Result<Self> {
        let bounds = Self { rows, cols };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Largest accepted row or column count. Cells are addressed with `i32`,
    /// so every in-bounds coordinate and its neighbours stay representable.
    pub const MAX_DIMENSION: u32 = i32::MAX as u32;

    /// Validate that both dimensions are positive and addressable.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(Error::configuration(format!(
                "grid dimensions must be positive, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.rows > Self::MAX_DIMENSION || self.cols > Self::MAX_DIMENSION {
            return Err(Error::configuration(format!(
                "grid dimensions must not exceed {}, got {}x{}",
                Self::MAX_DIMENSION,
                self.rows,
                self.cols
            )));
        }
        Ok(())
    }

    /// Whether `coord` lies inside the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row >= 0
            && coord.col >= 0
            && (coord.row as u32) < self.rows
            && (coord.col as u32) < self.cols
    }

    /// Return a configuration error naming `what` when `coord` is out of bounds.
    pub fn ensure_contains(&self, coord: Coord, what: &str) -> Result<()> {
        if self.contains(coord) {
            Ok(())
        } else {
            Err(Error::configuration(format!(
                "{what} {coord} lies outside the {}x{} grid",
                self.rows, self.cols
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Coord::new(2, 3);
        let b = Coord::new(7, 0);
        assert_eq!(a.manhattan(&b), 8);
        assert_eq!(b.manhattan(&a), 8);
        assert_eq!(a.manhattan(&a), 0);
    }

    #[test]
    fn bounds_reject_negative_and_overflowing_cells() {
        let bounds = GridBounds::new(3, 4).unwrap();
        assert!(bounds.contains(Coord::new(0, 0)));
        assert!(bounds.contains(Coord::new(2, 3)));
        assert!(!bounds.contains(Coord::new(3, 0)));
        assert!(!bounds.contains(Coord::new(0, 4)));
        assert!(!bounds.contains(Coord::new(-1, 0)));
    }

    #[test]
    fn zero_sized_grid_is_rejected() {
        assert!(matches!(
            GridBounds::new(0, 5),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn grid_wider_than_coord_range_is_rejected() {
        assert!(matches!(
            GridBounds::new(u32::MAX, 4),
            Err(Error::Configuration { .. })
        ));
        assert!(GridBounds::new(4, GridBounds::MAX_DIMENSION + 1).is_err());

        let widest = GridBounds::new(GridBounds::MAX_DIMENSION, GridBounds::MAX_DIMENSION).unwrap();
        let corner = Coord::new(i32::MAX - 1, i32::MAX - 1);
        assert!(widest.contains(corner));
        assert_eq!(corner.manhattan(&Coord::new(0, 0)), 2 * (i32::MAX as u32 - 1));
        assert!(!widest.contains(corner.offset(1, 0)));
    }

    #[test]
    fn coord_serialises_as_pair() {
        let json = serde_json::to_string(&Coord::new(4, 9)).unwrap();
        assert_eq!(json, "[4,9]");
        let parsed: Coord = serde_json::from_str("[1, 8]").unwrap();
        assert_eq!(parsed, Coord::new(1, 8));
    }
}
