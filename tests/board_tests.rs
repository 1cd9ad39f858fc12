//! Board tests - locking, ceiling and line clears through the public API

use tui_blockfall::core::{Board, LockError};
use tui_blockfall::types::{Block, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, CEILING_ROW};

fn block(piece_id: u32) -> Block {
    Block {
        kind: PieceKind::T,
        piece_id,
    }
}

fn fill_row(board: &mut Board, row: i8) {
    for col in 0..BOARD_WIDTH as i8 {
        board.set(col, row, Some(block(0)));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    for (col, row, cell) in board.iter() {
        assert!(cell.is_none(), "({col}, {row}) should be empty");
    }
    assert_eq!(board.iter().count(), 220);
}

#[test]
fn test_bounds_ignore_the_top() {
    let board = Board::new();
    assert!(board.is_inside_bounds(0, 0));
    assert!(board.is_inside_bounds(9, 40));
    assert!(!board.is_inside_bounds(-1, 5));
    assert!(!board.is_inside_bounds(10, 5));
    assert!(!board.is_inside_bounds(4, -1));
    assert!(!board.is_occupied(4, 40));
}

#[test]
fn test_lock_writes_all_cells() {
    let mut board = Board::new();
    let cells = [(0, 0), (1, 0), (2, 0), (1, 1)];
    assert_eq!(board.lock(&cells, block(7)), Ok(()));
    for (col, row) in cells {
        assert_eq!(board.get(col, row), Some(Some(block(7))));
    }
    assert_eq!(board.occupied_count(), 4);
}

#[test]
fn test_lock_in_ceiling_writes_nothing() {
    let mut board = Board::new();
    let top = CEILING_ROW as i8;
    let cells = [(4, top - 2), (4, top - 1), (4, top), (5, top)];
    assert_eq!(
        board.lock(&cells, block(1)),
        Err(LockError::Ceiling { col: 4, row: top })
    );
    assert!(board.is_empty());
}

#[test]
fn test_clear_single_line_shifts_down() {
    let mut board = Board::new();
    fill_row(&mut board, 0);
    board.set(3, 1, Some(block(2)));
    board.set(7, 5, Some(block(3)));

    let clear = board.clear_completed_lines();
    assert_eq!(clear.count(), 1);
    assert_eq!(clear.rows.as_slice(), &[0]);
    assert!(!clear.perfect_clear);
    assert_eq!(board.get(3, 0), Some(Some(block(2))));
    assert_eq!(board.get(7, 4), Some(Some(block(3))));
    assert_eq!(board.occupied_count(), 2);
}

#[test]
fn test_clear_non_adjacent_lines() {
    let mut board = Board::new();
    fill_row(&mut board, 0);
    board.set(0, 1, Some(block(1)));
    fill_row(&mut board, 2);
    board.set(9, 3, Some(block(2)));

    let clear = board.clear_completed_lines();
    assert_eq!(clear.rows.as_slice(), &[2, 0]);
    assert_eq!(board.get(0, 0), Some(Some(block(1))));
    assert_eq!(board.get(9, 1), Some(Some(block(2))));
    assert_eq!(board.occupied_count(), 2);
}

#[test]
fn test_four_lines_perfect_clear() {
    let mut board = Board::new();
    for row in 0..4 {
        fill_row(&mut board, row);
    }
    let clear = board.clear_completed_lines();
    assert_eq!(clear.count(), 4);
    assert!(clear.perfect_clear);
    assert!(board.is_empty());
}

#[test]
fn test_partial_rows_never_clear() {
    let mut board = Board::new();
    for col in 0..BOARD_WIDTH as i8 - 1 {
        board.set(col, 0, Some(block(0)));
    }
    let clear = board.clear_completed_lines();
    assert_eq!(clear.count(), 0);
    assert_eq!(board.row_count(0), 9);
}

#[test]
fn test_reset() {
    let mut board = Board::new();
    fill_row(&mut board, 3);
    board.reset();
    assert!(board.is_empty());
}
