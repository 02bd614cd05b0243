//! # Chess Engine
//!
//! Rules core and move chooser for standard chess on an 8×8 board.
//!
//! - [`board`] - Position value, starting setup, move application
//! - [`move_gen`] - Per-piece attack patterns, check detection, legal moves
//! - [`evaluation`] - Material count from White's point of view
//! - [`search`] - Fixed-depth minimax with alpha-beta pruning
//! - [`api`] - Game state classification and the game session
//!
//! Castling, en passant and draw rules other than stalemate are not part
//! of the rules implemented here.
//!
//! ## Example
//!
//! ```rust,ignore
//! use chess_engine::{AiPlayer, Game, SearchConfig};
//!
//! let mut game = Game::new();
//! let mut ai = AiPlayer::new(SearchConfig::default().with_seed(7))?;
//! while game.outcome().is_none() {
//!     game.play_ai(&mut ai)?;
//! }
//! ```

pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod move_gen;
pub mod search;
pub mod types;

pub use api::{classify_state, play_move, validate_promotion, Game, GameState, Outcome};
pub use board::{apply_move, create_initial_board, Board};
pub use error::{ChessEngineError, ChessEngineResult};
pub use evaluation::evaluate;
pub use move_gen::{
    all_legal_moves, generate_moves, has_any_legal_move, is_in_check, is_square_attacked,
    legal_move_list, legal_moves, pseudo_moves, GenMode,
};
pub use search::{
    minimax, select_move, select_move_scored, AiPlayer, ScoredMove, SearchConfig, SearchStats,
};
pub use types::{Color, Move, Piece, PieceKind, Score, Square};
