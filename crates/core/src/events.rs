//! Change notifications for presentation layers
//!
//! The game appends events as it mutates state; a renderer drains them once
//! per frame to drive animation without reading game internals.

use serde::Serialize;

use crate::board::ClearedRows;
use crate::game_state::Phase;
use crate::messages::Message;
use crate::pieces::PieceShape;
use crate::types::{PieceKind, Rotation};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// A piece entered play at the spawn origin
    Spawned { kind: PieceKind, piece_id: u32 },
    Moved { col: i8, row: i8 },
    Rotated {
        rotation: Rotation,
        col: i8,
        row: i8,
    },
    /// The active piece went to the hold slot
    Held { kind: PieceKind },
    Locked {
        kind: PieceKind,
        piece_id: u32,
        cells: PieceShape,
    },
    /// Rows in clearing order; each removes that row and shifts the rest down
    RowsCleared {
        rows: ClearedRows,
        perfect_clear: bool,
    },
    Scored { points: u32, total: u32 },
    LevelUp { level: u32 },
    Message { message: Message, duration_ms: u32 },
    GridLights { visible: bool },
    PhaseChanged { from: Phase, to: Phase },
    GameOver { score: u32 },
}
