//! Board module - owns the occupancy grid
//!
//! The board is a 10x22 grid stored as a flat row-major array. Row 0 is the
//! bottom of the well; rows 20 and 21 form the ceiling buffer where pieces
//! spawn but can never lock.
//!
//! Every cell is either empty or holds the [`Block`] handle of the locked
//! unit occupying it.

use arrayvec::ArrayVec;

use crate::error::LockError;
use crate::types::{Block, Cell, BOARD_HEIGHT, BOARD_WIDTH, CEILING_ROW};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Rows removed by one [`Board::clear_completed_lines`] call, in clearing order
pub type ClearedRows = ArrayVec<u8, { BOARD_HEIGHT as usize }>;

/// Result of a line-clear pass
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineClear {
    /// Cleared row indices, topmost first. Each entry means "remove this row
    /// and shift everything above it down by one", applied in order.
    pub rows: ClearedRows,
    /// The grid was empty once all clears settled
    pub perfect_clear: bool,
}

impl LineClear {
    pub fn count(&self) -> usize {
        self.rows.len()
    }
}

/// The game board - 10 columns x 22 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(col: i8, row: i8) -> Option<usize> {
        if col < 0 || col >= BOARD_WIDTH as i8 || row < 0 || row >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((row as usize) * (BOARD_WIDTH as usize) + (col as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Horizontal bounds plus the floor.
    ///
    /// The upper bound is deliberately unchecked so pieces can move above the
    /// allocated rows; only [`Board::lock`] enforces the ceiling.
    pub fn is_inside_bounds(&self, col: i8, row: i8) -> bool {
        col >= 0 && col < BOARD_WIDTH as i8 && row >= 0
    }

    /// True iff a locked block sits at (col, row). Anything outside the grid is empty.
    pub fn is_occupied(&self, col: i8, row: i8) -> bool {
        matches!(self.get(col, row), Some(Some(_)))
    }

    /// Get cell at (col, row); `None` if outside the grid
    pub fn get(&self, col: i8, row: i8) -> Option<Cell> {
        Self::index(col, row).map(|idx| self.cells[idx])
    }

    /// Set cell at (col, row). Returns false if outside the grid.
    pub fn set(&mut self, col: i8, row: i8, cell: Cell) -> bool {
        match Self::index(col, row) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Lock a set of cells as one unit.
    ///
    /// Fails with [`LockError::Ceiling`] if any cell sits at or above the
    /// ceiling row, in which case nothing is written. Cells outside the grid
    /// or already occupied are caller bugs: they trip a debug assertion and
    /// are skipped in release builds.
    pub fn lock(&mut self, cells: &[(i8, i8)], block: Block) -> Result<(), LockError> {
        if let Some(&(col, row)) = cells.iter().find(|&&(_, row)| row >= CEILING_ROW as i8) {
            return Err(LockError::Ceiling { col, row });
        }

        for &(col, row) in cells {
            debug_assert!(
                self.is_inside_bounds(col, row),
                "lock outside the grid at ({col}, {row})"
            );
            debug_assert!(
                !self.is_occupied(col, row),
                "lock over an occupied cell at ({col}, {row})"
            );
            if let Some(idx) = Self::index(col, row) {
                if self.cells[idx].is_none() {
                    self.cells[idx] = Some(block);
                }
            }
        }

        Ok(())
    }

    /// Number of occupied cells in a row
    pub fn row_count(&self, row: usize) -> usize {
        if row >= BOARD_HEIGHT as usize {
            return 0;
        }
        let start = row * BOARD_WIDTH as usize;
        self.cells[start..start + BOARD_WIDTH as usize]
            .iter()
            .filter(|cell| cell.is_some())
            .count()
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row_count(row) == BOARD_WIDTH as usize
    }

    /// Remove one row and move every row above it down by one.
    /// The top row becomes empty.
    fn remove_row(&mut self, row: usize) {
        let width = BOARD_WIDTH as usize;
        let height = BOARD_HEIGHT as usize;

        let dst = row * width;
        self.cells.copy_within(dst + width..height * width, dst);

        let top = (height - 1) * width;
        self.cells[top..].fill(None);
    }

    /// Clear every complete row and report what happened.
    ///
    /// Rows are scanned from the top down. A full row is removed and the rows
    /// above it shift down before the scan continues below it, so rows that
    /// were already scanned never get revisited. Partially filled rows are
    /// left untouched.
    pub fn clear_completed_lines(&mut self) -> LineClear {
        let mut rows = ClearedRows::new();

        for row in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(row) {
                self.remove_row(row);
                rows.push(row as u8);
            }
        }

        LineClear {
            rows,
            perfect_clear: self.is_empty(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Number of occupied cells on the whole grid
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Iterate every grid position as `(col, row, cell)`, bottom row first
    pub fn iter(&self) -> impl Iterator<Item = (i8, i8, Cell)> + '_ {
        let width = BOARD_WIDTH as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, cell)| ((idx % width) as i8, (idx / width) as i8, *cell))
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
