//! Read-only view of a game between ticks
//!
//! Renderers and other observers consume this instead of reaching into
//! [`GameState`]. It owns its data, so it can be kept across ticks or
//! serialized.

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::active::ActivePiece;
use crate::game_state::{GameState, Phase};
use crate::messages::Message;
use crate::pieces::PieceShape;
use crate::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH, MAX_PREVIEW_LEN};

/// Grid of locked kinds, indexed `[row][col]` with row 0 at the bottom
pub type GridSnapshot = [[Option<PieceKind>; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub col: i8,
    pub row: i8,
    /// Board-space cells
    pub cells: PieceShape,
}

impl From<ActivePiece> for PieceSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            col: value.col,
            row: value.row,
            cells: value.cells(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub board: GridSnapshot,
    pub active: Option<PieceSnapshot>,
    pub ghost: Option<PieceSnapshot>,
    pub ghost_enabled: bool,
    pub hold: Option<PieceKind>,
    pub can_hold: bool,
    pub preview: ArrayVec<PieceKind, MAX_PREVIEW_LEN>,
    pub score: u32,
    pub lines_cleared: u32,
    pub level: u32,
    pub fall_interval_ms: u32,
    pub message: Option<Message>,
    pub message_ms: u32,
    /// False while the lights-out cycle has the grid dark
    pub grid_visible: bool,
}

impl GameSnapshot {
    /// Locked kind at (col, row), `None` for empty or off-grid positions
    pub fn cell(&self, col: i8, row: i8) -> Option<PieceKind> {
        if col < 0 || row < 0 {
            return None;
        }
        self.board
            .get(row as usize)
            .and_then(|cells| cells.get(col as usize))
            .copied()
            .flatten()
    }

    pub fn playable(&self) -> bool {
        self.phase == Phase::Play
    }
}

impl From<&GameState> for GameSnapshot {
    fn from(game: &GameState) -> Self {
        let mut board: GridSnapshot = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        for (col, row, cell) in game.board().iter() {
            board[row as usize][col as usize] = cell.map(|block| block.kind);
        }

        let score = game.score();
        Self {
            phase: game.phase(),
            board,
            active: game.active().map(PieceSnapshot::from),
            ghost: game.ghost().map(PieceSnapshot::from),
            ghost_enabled: game.ghost_enabled(),
            hold: game.supply().held(),
            can_hold: game.supply().can_hold(),
            preview: game.supply().preview().take(MAX_PREVIEW_LEN).collect(),
            score: score.score,
            lines_cleared: score.lines_cleared,
            level: score.level,
            fall_interval_ms: game.fall_interval_ms(),
            message: game.message(),
            message_ms: game.messages().remaining_ms(),
            grid_visible: game.lights().visible(),
        }
    }
}
