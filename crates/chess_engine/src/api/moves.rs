//! Checked move execution
//!
//! The board primitives in [`crate::board`] trust their caller. The
//! function here validates a requested move against the side to move and
//! the legality filter before applying it, reporting the first problem as
//! a [`ChessEngineError`].

use crate::board::Board;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::move_gen::legal::is_legal_move;
use crate::types::*;

/// Accept only knight, bishop, rook or queen as a promotion kind
pub fn validate_promotion(kind: PieceKind) -> ChessEngineResult<PieceKind> {
    if kind.is_promotion_target() {
        Ok(kind)
    } else {
        Err(ChessEngineError::InvalidPromotionKind { kind })
    }
}

/// Validate and apply `mv` for `side`
///
/// # Arguments
///
/// * `board` - Board to mutate
/// * `mv` - Requested move; a missing promotion kind means queen
/// * `side` - Side making the move
///
/// # Returns
///
/// The piece now standing on the destination (after promotion).
///
/// # Errors
///
/// - [`ChessEngineError::NoPieceAtSquare`] if the origin is empty
/// - [`ChessEngineError::WrongPieceColor`] if the origin piece is not `side`'s
/// - [`ChessEngineError::InvalidPromotionKind`] for a king or pawn promotion
/// - [`ChessEngineError::IllegalMove`] if the move is not legal
///
/// The board is unchanged whenever an error is returned.
pub fn play_move(board: &mut Board, mv: Move, side: Color) -> ChessEngineResult<Piece> {
    let piece = board
        .piece_at(mv.from)
        .ok_or(ChessEngineError::NoPieceAtSquare { square: mv.from })?;

    if piece.color != side {
        return Err(ChessEngineError::WrongPieceColor {
            square: mv.from,
            color: side,
        });
    }

    if let Some(kind) = mv.promotion {
        validate_promotion(kind)?;
    }

    if !is_legal_move(board, mv.from, mv.to, side) {
        return Err(ChessEngineError::IllegalMove {
            from: mv.from,
            to: mv.to,
        });
    }

    board
        .make_move(mv)
        .ok_or(ChessEngineError::NoPieceAtSquare { square: mv.from })
}
