//! # Chess Engine Core Types
//!
//! ## Overview
//!
//! This module defines the value types every other module trades in:
//! [`Color`], [`PieceKind`], [`Piece`], [`Square`], [`Move`] and the
//! [`Score`] alias used by the evaluator and the search.
//!
//! ## Board Orientation
//!
//! Squares are `(row, col)` pairs with both coordinates in `0..8`:
//!
//! - **Row 0** is rank 8 (Black's back rank), **row 7** is rank 1 (White's back rank)
//! - **Col 0** is file `a`, **col 7** is file `h`
//! - White pawns therefore advance toward row 0, Black pawns toward row 7
//!
//! Scanning rows and then columns in increasing order gives the "board-scan
//! order" that move lists are produced in (a8, b8, ..., h8, a7, ..., h1).
//!
//! ## Cell Representation
//!
//! A cell is `Option<Piece>`, two bytes per square. The whole board is 128
//! bytes and is cloned for every hypothetical move.

use std::fmt;
use std::str::FromStr;

use crate::constants::*;
use crate::error::{ChessEngineError, ChessEngineResult};

/// Signed evaluation score: positive favours White, negative favours Black
pub type Score = i32;

/// Side to move / owner of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The other side
    #[inline]
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn step for this side
    #[inline]
    pub fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row this side's pawns start on (and may double-step from)
    #[inline]
    pub fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Farthest row from this side, where its pawns promote
    #[inline]
    pub fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

impl FromStr for Color {
    type Err = ChessEngineError;

    fn from_str(s: &str) -> ChessEngineResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "white" | "w" => Ok(Color::White),
            "black" | "b" => Ok(Color::Black),
            _ => Err(ChessEngineError::InvalidBoardText {
                message: format!("unknown color '{s}'"),
            }),
        }
    }
}

/// Kind of a chess piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Fixed material value used by the evaluator
    #[inline]
    pub fn value(self) -> Score {
        match self {
            PieceKind::Pawn => PAWN_VALUE,
            PieceKind::Knight => KNIGHT_VALUE,
            PieceKind::Bishop => BISHOP_VALUE,
            PieceKind::Rook => ROOK_VALUE,
            PieceKind::Queen => QUEEN_VALUE,
            PieceKind::King => KING_VALUE,
        }
    }

    /// Lowercase letter used in diagrams, FEN and UCI promotion suffixes
    pub fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Parse a piece letter, case-insensitive
    pub fn from_symbol(symbol: char) -> Option<PieceKind> {
        match symbol.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Whether a pawn may promote to this kind
    #[inline]
    pub fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }
}

/// A piece: kind plus owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }

    /// FEN letter: uppercase for White, lowercase for Black
    pub fn symbol(self) -> char {
        let symbol = self.kind.symbol();
        match self.color {
            Color::White => symbol.to_ascii_uppercase(),
            Color::Black => symbol,
        }
    }

    /// Parse a FEN letter
    pub fn from_symbol(symbol: char) -> Option<Piece> {
        let kind = PieceKind::from_symbol(symbol)?;
        let color = if symbol.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color))
    }
}

/// A board coordinate, always in bounds once constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Create a square from row/column, rejecting anything outside `0..8`
    pub fn new(row: i32, col: i32) -> ChessEngineResult<Square> {
        if Self::in_bounds(row, col) {
            Ok(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(ChessEngineError::InvalidSquare { row, col })
        }
    }

    /// Const constructor for compile-time squares; caller guarantees bounds
    pub(crate) const fn at(row: u8, col: u8) -> Square {
        Square { row, col }
    }

    #[inline]
    fn in_bounds(row: i32, col: i32) -> bool {
        (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub fn col(self) -> u8 {
        self.col
    }

    /// Row-major index 0-63 (a8 = 0, h1 = 63)
    #[inline]
    pub fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Step by a (row, col) offset; `None` when the result leaves the board
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i32 + d_row as i32;
        let col = self.col as i32 + d_col as i32;
        if Self::in_bounds(row, col) {
            Some(Square::at(row as u8, col as u8))
        } else {
            None
        }
    }

    /// All 64 squares in board-scan (row-major) order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Square::at(row, col)))
    }

    /// Parse algebraic notation such as `e4`
    pub fn from_algebraic(name: &str) -> ChessEngineResult<Square> {
        let invalid = || ChessEngineError::InvalidSquareName {
            name: name.to_string(),
        };
        let bytes = name.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(invalid());
        }
        Ok(Square::at(b'8' - rank, file - b'a'))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.col) as char,
            (b'8' - self.row) as char
        )
    }
}

impl FromStr for Square {
    type Err = ChessEngineError;

    fn from_str(s: &str) -> ChessEngineResult<Self> {
        Square::from_algebraic(s)
    }
}

/// A move from one square to another
///
/// `promotion` only matters when a pawn lands on its promotion row; when it
/// is `None` the pawn becomes a queen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    pub fn with_promotion(from: Square, to: Square, kind: PieceKind) -> Self {
        Move {
            from,
            to,
            promotion: Some(kind),
        }
    }

    /// Kind a promoting pawn turns into
    #[inline]
    pub fn promotion_kind(&self) -> PieceKind {
        self.promotion.unwrap_or(DEFAULT_PROMOTION)
    }

    /// Parse coordinate notation: `e2e4`, or `e7e8n` with a promotion suffix
    pub fn from_uci(text: &str) -> ChessEngineResult<Move> {
        let text = text.trim();
        if !text.is_ascii() || !(4..=5).contains(&text.len()) {
            return Err(ChessEngineError::InvalidSquareName {
                name: text.to_string(),
            });
        }
        let from = Square::from_algebraic(&text[0..2])?;
        let to = Square::from_algebraic(&text[2..4])?;
        match text[4..].chars().next() {
            None => Ok(Move::new(from, to)),
            Some(symbol) => {
                let kind = PieceKind::from_symbol(symbol).ok_or_else(|| {
                    ChessEngineError::InvalidSquareName {
                        name: text.to_string(),
                    }
                })?;
                if !kind.is_promotion_target() {
                    return Err(ChessEngineError::InvalidPromotionKind { kind });
                }
                Ok(Move::with_promotion(from, to, kind))
            }
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.symbol())?;
        }
        Ok(())
    }
}
