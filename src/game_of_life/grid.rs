//! Grid representation and utilities for Game of Life

use super::{Cell, GameOfLifeRules, GridError};
use itertools::{iproduct, Itertools};
use serde::{Deserialize, Serialize};

/// An immutable rectangular generation of cells.
///
/// Dimensions are stored once and cells live in a flat row-major buffer, so a
/// ragged grid cannot be represented. Every editing operation returns a new
/// grid and leaves `self` untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridRepr", into = "GridRepr")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

/// Serialized shape of a grid: explicit dimensions plus nested rows.
#[derive(Serialize, Deserialize)]
struct GridRepr {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create a `rows x cols` grid with every cell dead.
    ///
    /// A zero dimension yields a degenerate grid with no cells.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    pub fn build_empty(rows: usize, cols: usize) -> Self {
        let len = rows
            .checked_mul(cols)
            .unwrap_or_else(|| panic!("grid of {}x{} cells overflows usize", rows, cols));
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; len],
        }
    }

    /// Create a grid from nested rows, rejecting rows of unequal length.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GridError::Ragged {
                    row: i,
                    len: row.len(),
                    expected: width,
                });
            }
        }

        Ok(Self {
            rows: height,
            cols: width,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Wrap an already row-major buffer of exactly `rows * cols` cells.
    pub(super) fn from_parts(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    /// Create a grid from nested booleans (`true` is live).
    pub fn from_bools(rows: Vec<Vec<bool>>) -> Result<Self, GridError> {
        Self::from_rows(
            rows.into_iter()
                .map(|row| row.into_iter().map(Cell::from).collect())
                .collect(),
        )
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Flat row-major index, or `None` when the position is outside the grid.
    #[inline]
    fn index(&self, row: isize, col: isize) -> Option<usize> {
        let row = usize::try_from(row).ok().filter(|&r| r < self.rows)?;
        let col = usize::try_from(col).ok().filter(|&c| c < self.cols)?;
        Some(row * self.cols + col)
    }

    /// Cell at `(row, col)`; anything outside the grid reads as dead.
    pub fn get_cell(&self, row: isize, col: isize) -> Cell {
        self.index(row, col)
            .map_or(Cell::Dead, |idx| self.cells[idx])
    }

    /// Copy of this grid with `(row, col)` set to `state`.
    fn with_cell(&self, row: isize, col: isize, state: Cell) -> Result<Self, GridError> {
        let idx = self.index(row, col).ok_or(GridError::OutOfRange {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        })?;
        let mut next = self.clone();
        next.cells[idx] = state;
        Ok(next)
    }

    /// Copy of this grid with `(row, col)` alive.
    pub fn revive_cell(&self, row: isize, col: isize) -> Result<Self, GridError> {
        self.with_cell(row, col, Cell::Live)
    }

    /// Copy of this grid with `(row, col)` dead.
    pub fn kill_cell(&self, row: isize, col: isize) -> Result<Self, GridError> {
        self.with_cell(row, col, Cell::Dead)
    }

    /// Kill the cell if it is alive, revive it otherwise.
    pub fn toggle_cell(&self, row: isize, col: isize) -> Result<Self, GridError> {
        if self.get_cell(row, col).is_alive() {
            self.kill_cell(row, col)
        } else {
            self.revive_cell(row, col)
        }
    }

    /// Empty grid with the same dimensions.
    pub fn clear(&self) -> Self {
        Self::build_empty(self.rows, self.cols)
    }

    /// Empty grid with new dimensions. Cell states are not carried over.
    pub fn resize(&self, rows: usize, cols: usize) -> Self {
        Self::build_empty(rows, cols)
    }

    /// The next generation under the B3/S23 rule.
    pub fn next_gen(&self) -> Self {
        GameOfLifeRules::evolve(self)
    }

    /// Count live cells among the eight surrounding positions.
    ///
    /// Neighbours whose coordinates would overflow `isize` lie outside the
    /// grid and count as dead.
    pub fn live_neighbor_count(&self, row: isize, col: isize) -> u8 {
        iproduct!(-1isize..=1, -1isize..=1)
            .filter(|&offset| offset != (0, 0))
            .filter_map(|(dr, dc)| Some((row.checked_add(dr)?, col.checked_add(dc)?)))
            .filter(|&(r, c)| self.get_cell(r, c).is_alive())
            .count() as u8
    }

    /// All live cell coordinates in row-major order.
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        iproduct!(0..self.rows, 0..self.cols)
            .filter(|&(row, col)| self.cells[row * self.cols + col].is_alive())
            .collect()
    }

    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// True when no cell is alive.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_dead())
    }

    /// Iterate rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks() panics on zero; a zero-width grid has no cells anyway
        self.cells.chunks(self.cols.max(1))
    }

    /// Human-readable dump: a `--` separator per column, then one bracketed
    /// numeric row per line. Debug aid only.
    pub fn debug_dump(&self) -> String {
        let mut out = "--".repeat(self.cols);
        out.push('\n');
        for row in self.iter_rows() {
            out.push('[');
            out.push_str(&row.iter().map(|&cell| u8::from(cell)).join(","));
            out.push_str("]\n");
        }
        out
    }
}

impl TryFrom<GridRepr> for Grid {
    type Error = GridError;

    fn try_from(repr: GridRepr) -> Result<Self, Self::Error> {
        let no_cells = repr.cells.iter().all(Vec::is_empty);
        if (repr.rows == 0 || repr.cols == 0) && no_cells {
            return Ok(Self::build_empty(repr.rows, repr.cols));
        }
        let grid = Self::from_rows(repr.cells)?;
        if (grid.rows, grid.cols) != (repr.rows, repr.cols) {
            return Err(GridError::ShapeMismatch {
                rows: grid.rows,
                cols: grid.cols,
                expected_rows: repr.rows,
                expected_cols: repr.cols,
            });
        }
        Ok(grid)
    }
}

impl From<Grid> for GridRepr {
    fn from(grid: Grid) -> Self {
        let cells = grid.iter_rows().map(<[Cell]>::to_vec).collect();
        GridRepr {
            rows: grid.rows,
            cols: grid.cols,
            cells,
        }
    }
}
