//! Board module - manages the game grid
//!
//! The board is a `rows x cols` grid where each cell is empty or holds a color.
//! Uses a flat vector in row-major order; dimensions never change after
//! construction.
//! Coordinates: (row, col) where row 0 is the top (spawn) row and
//! `rows - 1` is the bottom row watched by the game-over check.

use std::fmt;

use arrayvec::ArrayVec;

use crate::error::GameError;
use crate::types::{cell_char, Cell, EMPTY, NEIGHBOR_OFFSETS};

/// The game board - fixed size, flat storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    ///
    /// Both dimensions must be at least 1.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GameError> {
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![EMPTY; rows * cols],
        })
    }

    /// Calculate flat index from (row, col), checking the row first
    #[inline]
    fn index(&self, row: usize, col: usize) -> Result<usize, GameError> {
        if row >= self.rows {
            return Err(GameError::InvalidRow {
                row,
                rows: self.rows,
            });
        }
        if col >= self.cols {
            return Err(GameError::InvalidColumn {
                col,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get cell at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Overwrite cell at (row, col)
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), GameError> {
        let idx = self.index(row, col)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Unchecked read for callers iterating within bounds
    #[inline(always)]
    pub(crate) fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// Unchecked write for callers iterating within bounds
    #[inline(always)]
    pub(crate) fn put(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.cols + col] = cell;
    }

    /// Check if a row holds no colored cell
    ///
    /// Rows outside the board are reported as not empty.
    pub fn is_row_empty(&self, row: usize) -> bool {
        self.row(row)
            .map_or(false, |cells| cells.iter().all(|cell| cell.is_none()))
    }

    /// Borrow one row as a slice
    pub fn row(&self, row: usize) -> Result<&[Cell], GameError> {
        let start = self.index(row, 0)?;
        Ok(&self.cells[start..start + self.cols])
    }

    /// Iterate rows top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols)
    }

    /// In-bounds positions of the 8-neighbourhood of (row, col)
    ///
    /// Stack-only; cells on an edge or corner get fewer entries.
    pub fn neighbors(&self, row: usize, col: usize) -> ArrayVec<(usize, usize), 8> {
        let mut out = ArrayVec::new();
        for &(dr, dc) in &NEIGHBOR_OFFSETS {
            let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
            else {
                continue;
            };
            if r < self.rows && c < self.cols {
                out.push((r, c));
            }
        }
        out
    }

    /// Shift every row below `row` up by one and clear the bottom row
    ///
    /// The contents of `row` itself are overwritten. Uses `copy_within` so the
    /// move stays allocation free.
    pub fn shift_rows_up(&mut self, row: usize) {
        if row >= self.rows {
            return;
        }
        let width = self.cols;
        let src_start = (row + 1) * width;
        let end = self.rows * width;
        if src_start < end {
            self.cells.copy_within(src_start..end, row * width);
        }
        self.clear_row(self.rows - 1);
    }

    /// Set every cell of a row to empty
    pub fn clear_row(&mut self, row: usize) {
        if row >= self.rows {
            return;
        }
        let start = row * self.cols;
        for cell in &mut self.cells[start..start + self.cols] {
            *cell = EMPTY;
        }
    }

    /// Set every cell of a row to `cell`
    pub fn fill_row(&mut self, row: usize, cell: Cell) -> Result<(), GameError> {
        let start = self.index(row, 0)?;
        for slot in &mut self.cells[start..start + self.cols] {
            *slot = cell;
        }
        Ok(())
    }

    /// Set every cell of the board to `cell`
    pub fn fill(&mut self, cell: Cell) {
        for slot in &mut self.cells {
            *slot = cell;
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.fill(EMPTY);
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Create from a 2D vector for testing
    #[cfg(test)]
    pub fn from_rows(rows_2d: Vec<Vec<Cell>>) -> Self {
        let rows = rows_2d.len();
        let cols = rows_2d.first().map_or(0, |row| row.len());
        assert!(rows > 0 && cols > 0);
        assert!(rows_2d.iter().all(|row| row.len() == cols));
        Self {
            rows,
            cols,
            cells: rows_2d.into_iter().flatten().collect(),
        }
    }

    /// Convert to 2D vector for testing
    #[cfg(test)]
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.iter_rows().map(|row| row.to_vec()).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for (col, &cell) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell_char(cell))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    const G: Cell = Some(Color::Green);
    const B: Cell = Some(Color::Blue);
    const E: Cell = EMPTY;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(4, 3).unwrap();
        assert_eq!(board.index(0, 0), Ok(0));
        assert_eq!(board.index(0, 2), Ok(2));
        assert_eq!(board.index(1, 0), Ok(3));
        assert_eq!(board.index(3, 2), Ok(11));
        assert_eq!(
            board.index(4, 0),
            Err(GameError::InvalidRow { row: 4, rows: 4 })
        );
        assert_eq!(
            board.index(0, 3),
            Err(GameError::InvalidColumn { col: 3, cols: 3 })
        );
    }

    #[test]
    fn test_board_rejects_zero_dimensions() {
        assert!(Board::new(0, 5).is_err());
        assert!(Board::new(5, 0).is_err());
    }

    #[test]
    fn test_neighbors_interior_edge_corner() {
        let board = Board::new(5, 5).unwrap();
        assert_eq!(board.neighbors(2, 2).len(), 8);
        assert_eq!(board.neighbors(0, 2).len(), 5);
        assert_eq!(board.neighbors(2, 4).len(), 5);
        assert_eq!(board.neighbors(0, 0).len(), 3);
        assert_eq!(board.neighbors(4, 4).len(), 3);

        let single = Board::new(1, 1).unwrap();
        assert!(single.neighbors(0, 0).is_empty());
    }

    #[test]
    fn test_shift_rows_up_clears_bottom() {
        let mut board = Board::from_rows(vec![
            vec![G, G],
            vec![E, E],
            vec![B, E],
            vec![E, B],
        ]);
        board.shift_rows_up(1);
        assert_eq!(
            board.to_rows(),
            vec![vec![G, G], vec![B, E], vec![E, B], vec![E, E]]
        );
    }

    #[test]
    fn test_shift_last_row_just_clears_it() {
        let mut board = Board::from_rows(vec![vec![G], vec![B]]);
        board.shift_rows_up(1);
        assert_eq!(board.to_rows(), vec![vec![G], vec![E]]);
    }

    #[test]
    fn test_row_emptiness() {
        let board = Board::from_rows(vec![vec![E, E], vec![E, G]]);
        assert!(board.is_row_empty(0));
        assert!(!board.is_row_empty(1));
        assert!(!board.is_row_empty(2));
    }

    #[test]
    fn test_row_slice_is_bounds_checked() {
        let board = Board::from_rows(vec![vec![G, E], vec![E, B]]);
        assert_eq!(board.row(1), Ok(&[E, B][..]));
        assert_eq!(board.row(2), Err(GameError::InvalidRow { row: 2, rows: 2 }));
    }

    #[test]
    fn test_display_uses_initials() {
        let board = Board::from_rows(vec![vec![G, E], vec![E, B]]);
        assert_eq!(board.to_string(), "G .\n. B\n");
    }
}
