//! Errors raised by grid construction and cell writes

use thiserror::Error;

/// Errors that can occur when building or editing a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A write targeted a cell outside the grid.
    #[error("Coordinates ({row}, {col}) out of bounds for {rows}x{cols} grid")]
    OutOfRange {
        row: isize,
        col: isize,
        rows: usize,
        cols: usize,
    },

    /// Rows passed to `Grid::from_rows` had unequal lengths.
    #[error("Row {row} has length {len}, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// Serialized cells disagree with the declared dimensions.
    #[error("Cells form a {rows}x{cols} grid, declared {expected_rows}x{expected_cols}")]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        expected_rows: usize,
        expected_cols: usize,
    },
}
