//! Move generation
//!
//! Produces destination squares for the piece on a square. Two modes exist:
//!
//! - [`GenMode::AttacksOnly`] - pseudo-legal destinations following the
//!   piece's movement pattern, ignoring king safety. This is what attack
//!   detection scans, and it never recurses into the legality filter.
//! - [`GenMode::Legal`] - pseudo-legal destinations that do not leave the
//!   mover's own king attacked, see [`legal`].
//!
//! Both return an empty list for an empty square or a piece that does not
//! belong to the side to move.
//!
//! ## Module Organization
//!
//! - `pawn`, `knight`, `king`, `sliding` - per-kind movement rules
//! - `attack` - square attack and check detection
//! - `legal` - king-safety filtering and whole-side move lists

pub mod attack;
pub mod king;
pub mod knight;
pub mod legal;
pub mod pawn;
pub mod sliding;

pub use attack::{is_in_check, is_square_attacked};
pub use legal::{all_legal_moves, has_any_legal_move, legal_move_list, legal_moves};

use crate::board::Board;
use crate::types::*;

/// Whether generated moves are filtered for king safety
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenMode {
    AttacksOnly,
    Legal,
}

/// Generate destinations for the piece on `from` in the given mode
pub fn generate_moves(board: &Board, from: Square, side: Color, mode: GenMode) -> Vec<Square> {
    match mode {
        GenMode::AttacksOnly => pseudo_moves(board, from, side),
        GenMode::Legal => legal_moves(board, from, side),
    }
}

/// Pseudo-legal destinations for the piece on `from`
///
/// # Arguments
///
/// * `board` - The position to generate from
/// * `from` - Square to generate for
/// * `side` - Side to move; pieces of the other color yield no moves
///
/// # Returns
///
/// Destination squares in per-kind generation order. Empty when `from` is
/// empty or holds a piece of the other color.
pub fn pseudo_moves(board: &Board, from: Square, side: Color) -> Vec<Square> {
    let mut moves = Vec::new();

    let piece = match board.piece_at(from) {
        Some(piece) if piece.color == side => piece,
        _ => return moves,
    };

    match piece.kind {
        PieceKind::Pawn => pawn::generate_pawn_moves(board, from, side, &mut moves),
        PieceKind::Knight => knight::generate_knight_moves(board, from, side, &mut moves),
        PieceKind::Bishop => sliding::generate_bishop_moves(board, from, side, &mut moves),
        PieceKind::Rook => sliding::generate_rook_moves(board, from, side, &mut moves),
        PieceKind::Queen => sliding::generate_queen_moves(board, from, side, &mut moves),
        PieceKind::King => king::generate_king_moves(board, from, side, &mut moves),
    }

    moves
}

/// Shared logic for fixed-offset movers (knight, king)
///
/// Each offset is valid when it stays on the board and lands on an empty
/// square or an opposing piece. Off-board offsets are skipped silently.
pub(crate) fn generate_step_moves(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Square>,
) {
    for &(d_row, d_col) in offsets {
        if let Some(to) = from.offset(d_row, d_col) {
            match board.piece_at(to) {
                Some(piece) if piece.color == color => {}
                _ => moves.push(to),
            }
        }
    }
}
