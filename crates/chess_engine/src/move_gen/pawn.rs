//! Pawn move generation
//!
//! Handles pawn-specific move generation:
//! - Single forward push onto an empty square
//! - Double push from the starting row when both squares ahead are empty
//! - Diagonal captures of opposing pieces
//!
//! En passant is not part of the rules this engine plays. Promotion is
//! applied when the move is executed ([`crate::board::Board::apply_move`]),
//! not here.

use crate::board::Board;
use crate::types::*;

/// Generate pawn moves from a given square
///
/// # Arguments
///
/// * `board` - The position to generate from
/// * `from` - Square holding the pawn
/// * `color` - Color of the pawn
/// * `moves` - Output vector to append destination squares to
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_pawn_moves(&board, e2, Color::White, &mut moves);
/// // Moves now contains e3 and e4 plus any diagonal captures
/// ```
pub fn generate_pawn_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Square>) {
    let direction = color.pawn_direction();

    if let Some(one_step) = from.offset(direction, 0) {
        if board.is_empty(one_step) {
            moves.push(one_step);

            if from.row() == color.pawn_start_row() {
                if let Some(two_step) = from.offset(2 * direction, 0) {
                    if board.is_empty(two_step) {
                        moves.push(two_step);
                    }
                }
            }
        }
    }

    for side in [-1, 1] {
        if let Some(target) = from.offset(direction, side) {
            if matches!(board.piece_at(target), Some(piece) if piece.color != color) {
                moves.push(target);
            }
        }
    }
}
