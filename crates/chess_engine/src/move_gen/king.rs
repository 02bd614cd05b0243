//! King move generation
//!
//! Kings move one square in any direction. Whether the destination is
//! attacked is decided later by the legality filter. Castling is not part
//! of the rules this engine plays.

use crate::board::Board;
use crate::constants::KING_OFFSETS;
use crate::types::*;

/// Generate king moves from a given square
///
/// # Arguments
///
/// * `board` - The position to generate from
/// * `from` - Square holding the king
/// * `color` - Color of the king
/// * `moves` - Output vector to append destination squares to
pub fn generate_king_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Square>) {
    super::generate_step_moves(board, from, color, &KING_OFFSETS, moves);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_king_moves_on_edge() {
        let board = Board::from_fen_placement("4k3/8/8/8/8/8/3P4/4K3").unwrap();
        let mut moves = Vec::new();
        generate_king_moves(&board, Square::from_algebraic("e1").unwrap(), Color::White, &mut moves);
        let names: Vec<String> = moves.iter().map(|s| s.to_string()).collect();
        assert_eq!(names, vec!["e2", "f2", "d1", "f1"]);
    }
}
