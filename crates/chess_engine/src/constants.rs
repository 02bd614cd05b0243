//! # Chess Engine Constants - Material Values, Offsets & Search Bounds
//!
//! ## Material Values
//!
//! The evaluator is a plain material count in "tenths of a pawn":
//!
//! - **Pawn**: 10
//! - **Knight**: 30
//! - **Bishop**: 30
//! - **Rook**: 50
//! - **Queen**: 90
//! - **King**: 900
//!
//! The king value exceeds all other material combined (at most 1,030 per
//! side), so positions are never scored as if a king could be traded.
//!
//! ## Direction Vectors
//!
//! Offsets are `(d_row, d_col)` pairs. Row 0 is Black's back rank, so
//! "north" (toward rank 8) is `d_row = -1`.
//!
//! ## Score Bounds
//!
//! [`SCORE_INFINITY`] stands for a forced mate. It is `i32::MAX` so that
//! `-SCORE_INFINITY` is representable and negation never overflows.

use crate::types::{PieceKind, Score};

/// Board width and height
pub const BOARD_SIZE: usize = 8;

pub const PAWN_VALUE: Score = 10;
pub const KNIGHT_VALUE: Score = 30;
pub const BISHOP_VALUE: Score = 30;
pub const ROOK_VALUE: Score = 50;
pub const QUEEN_VALUE: Score = 90;
pub const KING_VALUE: Score = 900;

/// Score of a position where Black is mated; Black being mated is the negation
pub const SCORE_INFINITY: Score = Score::MAX;

/// Score of a stalemate
pub const DRAW_SCORE: Score = 0;

/// Default search depth in plies
pub const DEFAULT_SEARCH_DEPTH: u32 = 2;

/// Kind a pawn promotes to when none is requested
pub const DEFAULT_PROMOTION: PieceKind = PieceKind::Queen;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const ROOK_DIRS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub const BISHOP_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub const QUEEN_DIRS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Piece order on both back ranks, file a to file h
pub const BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// FEN piece placement of the standard starting position
pub const INITIAL_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";
