//! Knight move generation
//!
//! Knights jump in an L-shape (2+1 or 1+2 squares) and ignore anything
//! standing in between. A destination is valid when it is on the board and
//! empty or held by an opposing piece.

use crate::board::Board;
use crate::constants::KNIGHT_OFFSETS;
use crate::types::*;

/// Generate knight moves from a given square
pub fn generate_knight_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Square>) {
    super::generate_step_moves(board, from, color, &KNIGHT_OFFSETS, moves);
}
