//! Legality filtering
//!
//! Turns pseudo-legal moves into legal moves by simulating each one on a
//! cloned board and rejecting those that leave the mover's own king
//! attacked. The live board is never touched.
//!
//! Move lists come out in board-scan order (a8 .. h1, then per-piece
//! generation order). Callers that want another order shuffle afterwards.

use super::attack::is_in_check;
use super::pseudo_moves;
use crate::board::Board;
use crate::types::*;

/// Legal destinations for the piece on `from`
///
/// Empty when `from` is empty or holds a piece that is not `side`'s.
pub fn legal_moves(board: &Board, from: Square, side: Color) -> Vec<Square> {
    pseudo_moves(board, from, side)
        .into_iter()
        .filter(|&to| keeps_king_safe(board, from, to, side))
        .collect()
}

/// Every legal `(origin, destination)` pair for `side`, in board-scan order
pub fn all_legal_moves(board: &Board, side: Color) -> Vec<(Square, Square)> {
    board
        .pieces_of(side)
        .flat_map(|(from, _)| {
            legal_moves(board, from, side)
                .into_iter()
                .map(move |to| (from, to))
        })
        .collect()
}

/// [`all_legal_moves`] as [`Move`] values with default (queen) promotion
pub fn legal_move_list(board: &Board, side: Color) -> Vec<Move> {
    all_legal_moves(board, side)
        .into_iter()
        .map(|(from, to)| Move::new(from, to))
        .collect()
}

/// Whether `side` has at least one legal move; stops at the first one found
pub fn has_any_legal_move(board: &Board, side: Color) -> bool {
    board.pieces_of(side).any(|(from, _)| {
        pseudo_moves(board, from, side)
            .into_iter()
            .any(|to| keeps_king_safe(board, from, to, side))
    })
}

/// Check whether a single move is legal for `side`
pub fn is_legal_move(board: &Board, from: Square, to: Square, side: Color) -> bool {
    pseudo_moves(board, from, side).contains(&to) && keeps_king_safe(board, from, to, side)
}

fn keeps_king_safe(board: &Board, from: Square, to: Square, side: Color) -> bool {
    let mut scratch = board.clone();
    scratch.apply_move(from, to, None);
    !is_in_check(&scratch, side)
}
