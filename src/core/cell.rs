//! Grid coordinates.
//!
//! The play field is a fixed 8x8 grid stored row-major: a cell at
//! `(row, col)` lives at index `row * 8 + col`. `Cell` is the type-safe
//! coordinate used everywhere a cell has already been bounds-checked;
//! raw `i32` pairs appear only at the placement boundary, where the
//! presentation layer's pointer translation may produce out-of-range
//! values that are simply illegal placements.

use serde::{Deserialize, Serialize};

/// Side length of the play field.
pub const GRID_SIZE: usize = 8;

/// Total number of cells in the play field.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// A bounds-checked grid coordinate.
///
/// Invariant: `row < 8` and `col < 8`. Construct with [`Cell::new`] (which
/// asserts) or [`Cell::at`] (which checks).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: u8,
    pub col: u8,
}

impl Cell {
    /// Create a cell, panicking if out of range.
    #[must_use]
    pub fn new(row: u8, col: u8) -> Self {
        assert!(
            (row as usize) < GRID_SIZE && (col as usize) < GRID_SIZE,
            "cell ({row}, {col}) out of range"
        );
        Self { row, col }
    }

    /// Create a cell from possibly out-of-range coordinates.
    ///
    /// Returns `None` for anything outside `[0,8)x[0,8)`, including
    /// negatives.
    #[must_use]
    pub fn at(row: i32, col: i32) -> Option<Self> {
        if (0..GRID_SIZE as i32).contains(&row) && (0..GRID_SIZE as i32).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Row-major index into the 64-cell grid.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * GRID_SIZE + self.col as usize
    }

    /// Inverse of [`Cell::index`].
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        assert!(index < CELL_COUNT, "cell index {index} out of range");
        Self {
            row: (index / GRID_SIZE) as u8,
            col: (index % GRID_SIZE) as u8,
        }
    }

    /// Iterate over every cell of the grid in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELL_COUNT).map(Cell::from_index)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cell({}, {})", self.row, self.col)
    }
}
