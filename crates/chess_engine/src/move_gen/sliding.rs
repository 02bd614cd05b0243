//! Sliding piece move generation
//!
//! Common functionality for sliding pieces (bishops, rooks, queens).
//! These pieces can move multiple squares in a direction until blocked.
//!
//! ## Algorithm
//!
//! For every direction vector of the piece, step repeatedly from the origin:
//! 1. Leaving the board ends the ray
//! 2. An empty square is a valid move, keep stepping
//! 3. An opponent piece is a valid capture, then the ray ends
//! 4. An own piece is not a valid move, and the ray ends
//!
//! ## Performance
//!
//! - **Time complexity**: O(n) in the number of squares on the rays
//! - **Typical moves per square**: 14 for rooks, up to 13 for bishops, up to 27 for queens

use crate::board::Board;
use crate::constants::{BISHOP_DIRS, QUEEN_DIRS, ROOK_DIRS};
use crate::types::*;

/// Generate moves for a sliding piece along the given direction vectors
///
/// # Arguments
///
/// * `board` - The position to generate from
/// * `from` - Square holding the piece
/// * `color` - Color of the moving piece
/// * `directions` - `(d_row, d_col)` unit vectors the piece slides along
/// * `moves` - Output vector to append destination squares to
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_sliding_moves(&board, a1, Color::White, &ROOK_DIRS, &mut moves);
/// ```
pub fn generate_sliding_moves(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    moves: &mut Vec<Square>,
) {
    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(next) = current.offset(d_row, d_col) {
            match board.piece_at(next) {
                None => moves.push(next),
                Some(piece) => {
                    if piece.color != color {
                        moves.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
}

pub fn generate_bishop_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Square>) {
    generate_sliding_moves(board, from, color, &BISHOP_DIRS, moves);
}

pub fn generate_rook_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Square>) {
    generate_sliding_moves(board, from, color, &ROOK_DIRS, moves);
}

/// Queens combine the rook and bishop rays
pub fn generate_queen_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Square>) {
    generate_sliding_moves(board, from, color, &QUEEN_DIRS, moves);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn test_rook_on_empty_board_has_14_moves() {
        let board = Board::from_fen_placement("8/8/8/8/3R4/8/8/8").unwrap();
        let mut moves = Vec::new();
        generate_rook_moves(&board, sq("d4"), Color::White, &mut moves);
        assert_eq!(moves.len(), 14);
    }

    #[test]
    fn test_bishop_stops_at_blockers() {
        //! Opponent blocker is included, own blocker is excluded, both end the ray
        let board = Board::from_fen_placement("8/8/1p6/8/3B4/8/5P2/8").unwrap();
        let mut moves = Vec::new();
        generate_bishop_moves(&board, sq("d4"), Color::White, &mut moves);

        assert!(moves.contains(&sq("c5")));
        assert!(moves.contains(&sq("b6")));
        assert!(!moves.contains(&sq("a7")));
        assert!(moves.contains(&sq("e3")));
        assert!(!moves.contains(&sq("f2")));
        assert!(!moves.contains(&sq("g1")));
        assert_eq!(moves.len(), 2 + 4 + 3 + 1);
    }

    #[test]
    fn test_queen_combines_rook_and_bishop() {
        let board = Board::from_fen_placement("8/8/8/8/3Q4/8/8/8").unwrap();
        let mut queen = Vec::new();
        generate_queen_moves(&board, sq("d4"), Color::White, &mut queen);

        let mut rook_and_bishop = Vec::new();
        generate_rook_moves(&board, sq("d4"), Color::White, &mut rook_and_bishop);
        generate_bishop_moves(&board, sq("d4"), Color::White, &mut rook_and_bishop);

        assert_eq!(queen.len(), 27);
        assert_eq!(queen.len(), rook_and_bishop.len());
        assert!(rook_and_bishop.iter().all(|s| queen.contains(s)));
    }
}
