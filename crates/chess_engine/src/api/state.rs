//! Game state classification
//!
//! Combines check detection with the availability of legal moves. The
//! result is computed fresh from a board and a side to move every time; it
//! is never stored on the board.

use crate::board::Board;
use crate::move_gen::{has_any_legal_move, is_in_check};
use crate::types::Color;

/// Status of the side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Not in check, has legal moves
    Normal,
    /// In check, has legal moves
    Check,
    /// In check, no legal moves
    Checkmate,
    /// Not in check, no legal moves
    Stalemate,
}

impl GameState {
    /// Whether the game has ended
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, GameState::Checkmate | GameState::Stalemate)
    }
}

/// Classify the position for `side` to move
///
/// | in check | has moves | result    |
/// |----------|-----------|-----------|
/// | yes      | no        | Checkmate |
/// | no       | no        | Stalemate |
/// | yes      | yes       | Check     |
/// | no       | yes       | Normal    |
pub fn classify_state(board: &Board, side: Color) -> GameState {
    let in_check = is_in_check(board, side);
    let has_moves = has_any_legal_move(board, side);

    match (in_check, has_moves) {
        (true, false) => GameState::Checkmate,
        (false, false) => GameState::Stalemate,
        (true, true) => GameState::Check,
        (false, true) => GameState::Normal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(fen: &str) -> Board {
        Board::from_fen_placement(fen).unwrap()
    }

    #[test]
    fn test_initial_position_is_normal() {
        let board = Board::initial();
        assert_eq!(classify_state(&board, Color::White), GameState::Normal);
        assert_eq!(classify_state(&board, Color::Black), GameState::Normal);
    }

    #[test]
    fn test_back_rank_mate() {
        let board = board("k6R/8/1K6/8/8/8/8/8");
        assert_eq!(classify_state(&board, Color::Black), GameState::Checkmate);
        assert!(GameState::Checkmate.is_terminal());
    }

    #[test]
    fn test_stalemate() {
        let board = board("k7/2K5/1Q6/8/8/8/8/8");
        assert_eq!(classify_state(&board, Color::Black), GameState::Stalemate);
        assert!(GameState::Stalemate.is_terminal());
    }

    #[test]
    fn test_check_with_escape() {
        let board = board("k6R/8/8/8/8/8/8/4K3");
        assert_eq!(classify_state(&board, Color::Black), GameState::Check);
        assert!(!GameState::Check.is_terminal());
    }

    #[test]
    fn test_kingless_side_is_checkmated() {
        //! No king means "in check"; with no pieces there are no moves either
        let board = board("8/8/8/8/8/8/8/4K3");
        assert_eq!(classify_state(&board, Color::Black), GameState::Checkmate);
    }
}
