//! Material evaluation
//!
//! Evaluates the material balance of a position by counting piece values.

use crate::board::Board;
use crate::types::*;

/// Evaluate material balance
///
/// Sums [`PieceKind::value`] over all pieces, adding White's and
/// subtracting Black's.
pub fn evaluate_material(board: &Board) -> Score {
    board
        .pieces()
        .map(|(_, piece)| match piece.color {
            Color::White => piece.kind.value(),
            Color::Black => -piece.kind.value(),
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{KING_VALUE, PAWN_VALUE, QUEEN_VALUE};

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn test_starting_position_material_balance() {
        let board = Board::initial();
        let score = evaluate_material(&board);
        assert_eq!(score, 0, "Starting position should have 0 material balance");
    }

    #[test]
    fn test_white_up_queen() {
        let mut board = Board::initial();
        board.set_piece(sq("d8"), None);

        let score = evaluate_material(&board);
        assert_eq!(score, QUEEN_VALUE, "Score should be exactly the queen value");
    }

    #[test]
    fn test_black_up_pawn() {
        let mut board = Board::initial();
        board.set_piece(sq("e2"), None);

        let score = evaluate_material(&board);
        assert_eq!(
            score, -PAWN_VALUE,
            "Score should be exactly negative pawn value"
        );
    }

    #[test]
    fn test_lone_king() {
        let board = Board::from_fen_placement("8/8/8/8/8/8/8/4K3").unwrap();
        assert_eq!(evaluate_material(&board), KING_VALUE);
    }

    #[test]
    fn test_empty_board_material() {
        let score = evaluate_material(&Board::empty());
        assert_eq!(score, 0, "Empty board should have 0 material");
    }
}
