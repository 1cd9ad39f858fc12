//! Pieces module - shape definitions and pivot rotation
//!
//! Each kind stores its spawn (North) cells and one fixed pivot. The other
//! rotation states are derived by turning the spawn cells clockwise about
//! that pivot, so the pivot never moves with the piece's rotation state.
//!
//! Coordinates are (dx, dy) with dy pointing up, relative to the piece origin.
//! Pivots sit either on a cell center or on a cell corner. They are stored
//! doubled so every turn stays in integer arithmetic.

use crate::types::{PieceKind, Rotation};

/// Offset of a single cell relative to the piece origin
pub type CellOffset = (i8, i8);

/// Cells of a piece - 4 offsets from the piece origin
pub type PieceShape = [CellOffset; 4];

/// Spawn orientation cells. Every shape spans dy 0..=1 so a fresh piece
/// occupies the two ceiling rows.
fn spawn_cells(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::I => [(-1, 0), (0, 0), (1, 0), (2, 0)],
        PieceKind::O => [(0, 0), (1, 0), (0, 1), (1, 1)],
        PieceKind::T => [(-1, 0), (0, 0), (1, 0), (0, 1)],
        PieceKind::S => [(-1, 0), (0, 0), (0, 1), (1, 1)],
        PieceKind::Z => [(-1, 1), (0, 1), (0, 0), (1, 0)],
        PieceKind::J => [(-1, 1), (-1, 0), (0, 0), (1, 0)],
        PieceKind::L => [(-1, 0), (0, 0), (1, 0), (1, 1)],
    }
}

/// Rotation pivot in doubled coordinates
pub fn pivot2(kind: PieceKind) -> (i8, i8) {
    match kind {
        // Corner pivots: (0.5, -0.5) and (0.5, 0.5)
        PieceKind::I => (1, -1),
        PieceKind::O => (1, 1),
        _ => (0, 0),
    }
}

/// One clockwise quarter turn of a cell about a doubled pivot.
///
/// Both pivot coordinates share parity, which keeps the halving exact.
#[inline]
fn turn_cw((x, y): CellOffset, (px, py): (i8, i8)) -> CellOffset {
    let dx = 2 * x - px;
    let dy = 2 * y - py;
    ((px + dy) / 2, (py - dx) / 2)
}

/// Cell offsets for a kind in a rotation state. Pure and deterministic.
pub fn cell_offsets(kind: PieceKind, rotation: Rotation) -> PieceShape {
    let pivot = pivot2(kind);
    let mut shape = spawn_cells(kind);
    for _ in 0..rotation.index() {
        for cell in shape.iter_mut() {
            *cell = turn_cw(*cell, pivot);
        }
    }
    shape
}
