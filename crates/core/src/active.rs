//! Active piece controller
//!
//! Holds the falling piece's origin, rotation and gravity accumulator, and
//! performs every movement through [`ActivePiece::validate`], the single
//! legality gate for shifts, rotations and drops.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::pieces::{cell_offsets, PieceShape};
use crate::types::{
    Direction, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_COL, SPAWN_ROW,
};

/// Outcome of a gravity tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fall {
    /// Not enough time accumulated yet
    Idle,
    /// The piece moved down one row
    Stepped,
    /// The downward step was blocked; the piece must lock now
    Blocked,
}

/// The falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    /// Origin column; cells are origin + offset
    pub col: i8,
    /// Origin row (row 0 is the bottom of the well)
    pub row: i8,
    /// Milliseconds between forced downward steps
    pub fall_interval_ms: u32,
    /// Time accumulated toward the next gravity step
    pub fall_timer_ms: u32,
}

impl ActivePiece {
    /// Create a piece at the spawn origin in the spawn orientation
    pub fn spawn(kind: PieceKind, fall_interval_ms: u32) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            col: SPAWN_COL,
            row: SPAWN_ROW,
            fall_interval_ms,
            fall_timer_ms: 0,
        }
    }

    /// Offsets for the current rotation
    pub fn shape(&self) -> PieceShape {
        cell_offsets(self.kind, self.rotation)
    }

    /// Board-space cells
    pub fn cells(&self) -> PieceShape {
        self.shape().map(|(dx, dy)| (self.col + dx, self.row + dy))
    }

    /// True iff every cell, translated by (dcol, drow), is inside the
    /// horizontal bounds, not below the floor and not on a locked cell.
    pub fn validate(&self, board: &Board, dcol: i8, drow: i8) -> bool {
        self.cells().iter().all(|&(col, row)| {
            let (col, row) = (col + dcol, row + drow);
            board.is_inside_bounds(col, row) && !board.is_occupied(col, row)
        })
    }

    /// Shift one column. Rejected shifts leave the piece untouched.
    pub fn shift(&mut self, board: &Board, direction: Direction) -> bool {
        let dcol = direction.dx();
        if !self.validate(board, dcol, 0) {
            return false;
        }
        self.col += dcol;
        true
    }

    /// Quarter turn with the wall push.
    ///
    /// After turning, each cell in order is checked against the board edges
    /// and the piece is pushed back inside immediately, so later cells are
    /// measured from the already pushed position. If the final position still
    /// fails validation the piece is restored exactly as it was.
    pub fn rotate(&mut self, board: &Board, direction: Direction) -> bool {
        let before = *self;
        self.rotation = self.rotation.turn(direction);

        let mut pushes: ArrayVec<(i8, i8), 4> = ArrayVec::new();
        for (dx, dy) in self.shape() {
            let push = wall_push(self.col + dx, self.row + dy);
            if push != (0, 0) {
                self.col += push.0;
                self.row += push.1;
                pushes.push(push);
            }
        }

        if self.validate(board, 0, 0) {
            return true;
        }

        for (pc, pr) in pushes.into_iter().rev() {
            self.col -= pc;
            self.row -= pr;
        }
        self.rotation = before.rotation;
        debug_assert_eq!(*self, before);
        false
    }

    /// Number of rows the piece can fall before it is blocked
    pub fn drop_distance(&self, board: &Board) -> i8 {
        let mut distance = 0;
        while self.validate(board, 0, -(distance + 1)) {
            distance += 1;
        }
        distance
    }

    /// Move straight down to the resting position. Returns rows dropped.
    pub fn hard_drop(&mut self, board: &Board) -> u32 {
        let distance = self.drop_distance(board);
        self.row -= distance;
        distance as u32
    }

    /// Where this piece would land if hard-dropped now. Never mutates `self`.
    pub fn ghost(&self, board: &Board) -> ActivePiece {
        let mut ghost = *self;
        ghost.hard_drop(board);
        ghost
    }

    /// Advance the gravity accumulator.
    ///
    /// Once the accumulated time exceeds the fall interval, one downward step
    /// is attempted and the accumulator restarts.
    pub fn tick(&mut self, board: &Board, elapsed_ms: u32) -> Fall {
        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        if self.fall_timer_ms <= self.fall_interval_ms {
            return Fall::Idle;
        }
        self.fall_timer_ms = 0;

        if self.validate(board, 0, -1) {
            self.row -= 1;
            Fall::Stepped
        } else {
            Fall::Blocked
        }
    }
}

/// Correction needed to bring one cell back inside the board edges.
///
/// A cell at column 0 needs no push; the vertical ceiling push only matters
/// for a cell above the allocated rows.
fn wall_push(col: i8, row: i8) -> (i8, i8) {
    let width = BOARD_WIDTH as i8;
    let height = BOARD_HEIGHT as i8;

    let mut pc = 0;
    let mut pr = 0;
    if col < 0 {
        pc = -col;
    }
    if col >= width {
        pc = (width - 1) - col;
    }
    if row < 0 {
        pr = -row;
    }
    if row >= height {
        pr = (height - 1) - row;
    }
    (pc, pr)
}
