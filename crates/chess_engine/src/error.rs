//! Error types for chess engine
//!
//! Provides custom error types for the checked entry points of the engine:
//! square parsing, board text parsing, move validation and search setup.
//!
//! The low-level rules primitives (`pseudo_moves`, `legal_moves`,
//! `apply_move`, ...) never fail. Empty squares, foreign pieces and
//! off-board offsets simply produce empty move sets.

use thiserror::Error;

use crate::api::GameState;
use crate::types::{Color, PieceKind, Square};

/// Errors that can occur in the chess engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessEngineError {
    /// Row or column outside `0..8`
    #[error("Invalid square: row {row}, col {col} (both must be 0-7)")]
    InvalidSquare { row: i32, col: i32 },

    /// Square name that is not of the form `a1`..`h8`
    #[error("Invalid square name: '{name}'")]
    InvalidSquareName { name: String },

    /// No piece at source square
    #[error("No piece at source square {square}")]
    NoPieceAtSquare { square: Square },

    /// Piece does not belong to the side to move
    #[error("Piece at square {square} does not belong to {color}")]
    WrongPieceColor { square: Square, color: Color },

    /// Move is not in the legal move set of the side to move
    #[error("Illegal move: from square {from} to square {to}")]
    IllegalMove { from: Square, to: Square },

    /// Pawns may only promote to a knight, bishop, rook or queen
    #[error("Invalid promotion kind: {kind:?}")]
    InvalidPromotionKind { kind: PieceKind },

    /// Search depth must be at least one ply
    #[error("Invalid search depth: {depth} (must be at least 1)")]
    InvalidDepth { depth: u32 },

    /// Board diagram or FEN placement could not be parsed
    #[error("Invalid board text: {message}")]
    InvalidBoardText { message: String },

    /// Move or search requested after the game has ended
    #[error("Game is over: {state:?}")]
    GameOver { state: GameState },
}

/// Result type alias for chess engine operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
