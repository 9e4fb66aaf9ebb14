//! Move legality and flip computation.
//!
//! Everything here is pure: functions read a [`Board`] and never mutate it.
//! All of them are built on [`scan`], so legality and the flip set cannot
//! disagree about which directions capture.

use crate::board::{BOARD_SIZE, Board};
use crate::error::MoveError;
use crate::types::{Position, Side};

pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Walks from `origin` in direction `(dr, dc)`.
///
/// Returns the opponent discs crossed when the walk sees one or more of them
/// followed by a disc owned by `side`, all in bounds. Any other outcome
/// (own disc adjacent, empty square, grid edge) captures nothing.
pub fn scan(
    board: &Board,
    origin: Position,
    (dr, dc): (i32, i32),
    side: Side,
) -> Option<Vec<Position>> {
    let mut r = origin.row as i32 + dr;
    let mut c = origin.col as i32 + dc;
    let mut run = Vec::new();

    while let Some(cell) = board.cell(r, c) {
        match cell.owner() {
            Some(owner) if owner == !side => run.push(Position::new(r as u8, c as u8)),
            Some(_) => return (!run.is_empty()).then_some(run),
            None => return None,
        }
        r += dr;
        c += dc;
    }

    None
}

/// Validates a move and returns the discs it would flip.
pub fn check_move(
    board: &Board,
    row: i32,
    col: i32,
    side: Side,
) -> Result<Vec<Position>, MoveError> {
    let cell = board.cell(row, col).ok_or(MoveError::OutOfBounds)?;
    if !cell.is_empty() {
        return Err(MoveError::Occupied);
    }

    let origin = Position::new(row as u8, col as u8);
    let flips: Vec<Position> = DIRECTIONS
        .iter()
        .filter_map(|&dir| scan(board, origin, dir, side))
        .flatten()
        .collect();

    if flips.is_empty() {
        return Err(MoveError::NoCapture);
    }
    Ok(flips)
}

pub fn is_legal(board: &Board, row: i32, col: i32, side: Side) -> bool {
    let Some(cell) = board.cell(row, col) else {
        return false;
    };
    if !cell.is_empty() {
        return false;
    }

    let origin = Position::new(row as u8, col as u8);
    DIRECTIONS
        .iter()
        .any(|&dir| scan(board, origin, dir, side).is_some())
}

/// Union of every capturing run around `(row, col)`. Empty when the move is
/// illegal.
pub fn flip_set(board: &Board, row: i32, col: i32, side: Side) -> Vec<Position> {
    check_move(board, row, col, side).unwrap_or_default()
}

/// Returns every legal square for `side` in row-major order.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Position> {
    let size = BOARD_SIZE as i32;
    (0..size)
        .flat_map(|row| (0..size).map(move |col| (row, col)))
        .filter(|&(row, col)| is_legal(board, row, col, side))
        .map(|(row, col)| Position::new(row as u8, col as u8))
        .collect()
}
