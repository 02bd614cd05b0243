//! Game session
//!
//! A [`Game`] owns the live board, the side to move and the move history.
//! It is the only place where moves are committed for real; everything
//! else in the engine works on throwaway copies of the board.

use tracing::{debug, warn};

use super::moves::play_move;
use super::state::{classify_state, GameState};
use crate::board::Board;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::move_gen::{legal_move_list, legal_moves};
use crate::search::AiPlayer;
use crate::types::*;

/// Result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Color),
    Draw,
}

/// A game in progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    state: GameState,
    history: Vec<Move>,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// Standard starting position, White to move
    pub fn new() -> Self {
        Game::from_board(Board::initial(), Color::White)
    }

    /// Resume from an arbitrary position
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        let state = classify_state(&board, side_to_move);
        Game {
            board,
            side_to_move,
            state,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// State of the side to move, recomputed after every move
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Moves played so far, oldest first
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Legal destinations of the piece on `from` for the side to move
    pub fn legal_moves_from(&self, from: Square) -> Vec<Square> {
        legal_moves(&self.board, from, self.side_to_move)
    }

    /// Every legal move of the side to move, in board-scan order
    pub fn legal_move_list(&self) -> Vec<Move> {
        legal_move_list(&self.board, self.side_to_move)
    }

    /// Winner or draw once the game has ended
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            GameState::Checkmate => Some(Outcome::Winner(self.side_to_move.opposite())),
            GameState::Stalemate => Some(Outcome::Draw),
            GameState::Normal | GameState::Check => None,
        }
    }

    /// Play `mv` for the side to move
    ///
    /// On success the side to move flips and the state is reclassified.
    ///
    /// # Errors
    ///
    /// [`ChessEngineError::GameOver`] once the game has ended, otherwise
    /// whatever [`play_move`] reports. A rejected move changes nothing.
    pub fn play(&mut self, mv: Move) -> ChessEngineResult<Piece> {
        if self.state.is_terminal() {
            return Err(ChessEngineError::GameOver { state: self.state });
        }

        let piece = play_move(&mut self.board, mv, self.side_to_move)?;
        self.history.push(mv);
        self.side_to_move = self.side_to_move.opposite();
        self.state = classify_state(&self.board, self.side_to_move);

        debug!(
            mv = %mv,
            ply = self.history.len(),
            next = %self.side_to_move,
            state = ?self.state,
            "move played"
        );
        Ok(piece)
    }

    /// Let `ai` choose and play a move for the side to move
    ///
    /// Returns the move played. When the search finds no move (every legal
    /// move loses to a forced mate) the turn passes to the other side with
    /// the board unchanged and `None` is returned.
    pub fn play_ai(&mut self, ai: &mut AiPlayer) -> ChessEngineResult<Option<Move>> {
        if self.state.is_terminal() {
            return Err(ChessEngineError::GameOver { state: self.state });
        }

        match ai.choose(&self.board, self.side_to_move) {
            Some(scored) => {
                self.play(scored.mv)?;
                Ok(Some(scored.mv))
            }
            None => {
                warn!(side = %self.side_to_move, "found no move, passing the turn");
                self.side_to_move = self.side_to_move.opposite();
                self.state = classify_state(&self.board, self.side_to_move);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchConfig;

    fn mv(text: &str) -> Move {
        Move::from_uci(text).unwrap()
    }

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.state(), GameState::Normal);
        assert_eq!(game.legal_move_list().len(), 20);
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn test_sides_alternate() {
        let mut game = Game::new();
        game.play(mv("e2e4")).unwrap();
        assert_eq!(game.side_to_move(), Color::Black);

        // White may not move twice in a row
        assert!(matches!(
            game.play(mv("d2d4")),
            Err(ChessEngineError::WrongPieceColor { .. })
        ));

        game.play(mv("e7e5")).unwrap();
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.history(), &[mv("e2e4"), mv("e7e5")]);
    }

    #[test]
    fn test_fools_mate_ends_game() {
        let mut game = Game::new();
        for text in ["e2e4", "f7f6", "d2d4", "g7g5", "d1h5"] {
            game.play(mv(text)).unwrap();
        }
        assert_eq!(game.state(), GameState::Checkmate);
        assert_eq!(game.outcome(), Some(Outcome::Winner(Color::White)));
        assert!(matches!(
            game.play(mv("e8f7")),
            Err(ChessEngineError::GameOver { .. })
        ));
    }

    #[test]
    fn test_check_is_reported() {
        let mut game = Game::new();
        for text in ["e2e4", "f7f6", "d1h5"] {
            game.play(mv(text)).unwrap();
        }
        assert_eq!(game.state(), GameState::Check);
        // Only g7g6 blocks; the king has no flight square
        assert_eq!(game.legal_move_list(), vec![mv("g7g6")]);
    }

    #[test]
    fn test_kings_only_is_playable() {
        let board = Board::from_fen_placement("4k3/8/8/8/8/8/8/4K3").unwrap();
        let game = Game::from_board(board, Color::White);
        assert_eq!(game.state(), GameState::Normal);
        assert_eq!(game.legal_moves_from(Square::from_algebraic("e1").unwrap()).len(), 5);
    }

    #[test]
    fn test_stalemate_outcome_is_draw() {
        let board = Board::from_fen_placement("k7/2K5/1Q6/8/8/8/8/8").unwrap();
        let mut game = Game::from_board(board, Color::Black);
        assert_eq!(game.outcome(), Some(Outcome::Draw));

        let mut ai = AiPlayer::new(SearchConfig::default().with_seed(1)).unwrap();
        assert!(game.play_ai(&mut ai).is_err());
    }

    #[test]
    fn test_ai_without_move_passes_turn() {
        //! Every Black move walks into mate at depth 3, so Black passes
        let board = Board::from_fen_placement("k7/8/1K6/8/8/8/8/7R").unwrap();
        let mut game = Game::from_board(board.clone(), Color::Black);
        let mut ai = AiPlayer::new(SearchConfig::default().with_depth(3).with_seed(2)).unwrap();

        assert_eq!(game.play_ai(&mut ai), Ok(None));
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.board(), &board);
        assert!(game.history().is_empty());

        let played = game.play_ai(&mut ai).unwrap();
        assert_eq!(played, Some(mv("h1h8")));
        assert_eq!(game.outcome(), Some(Outcome::Winner(Color::White)));
    }

    #[test]
    fn test_ai_plays_legal_move() {
        let mut game = Game::new();
        let mut ai = AiPlayer::new(SearchConfig::default().with_depth(1).with_seed(4)).unwrap();
        let played = game.play_ai(&mut ai).unwrap().unwrap();
        assert_eq!(game.history(), &[played]);
        assert_eq!(game.side_to_move(), Color::Black);
    }
}
