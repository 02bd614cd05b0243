//! Board representation and utilities
//!
//! Provides the 8×8 position and the fundamental operations on it:
//! - Cell queries and piece placement
//! - Standard starting position
//! - Applying a move (with pawn promotion)
//! - Text rendering and FEN placement parsing
//!
//! `Board` is a plain value. Cloning it yields an independent position,
//! which is how legality checks and search branches simulate moves without
//! touching the live game.

use std::fmt;
use std::str::FromStr;

use crate::constants::*;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::types::*;

type Cells = [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE];

/// An 8×8 chess position: each square holds a piece or nothing
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: Cells,
}

impl Default for Board {
    fn default() -> Self {
        Board::initial()
    }
}

impl Board {
    /// Board with no pieces at all
    pub fn empty() -> Self {
        Board {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Standard chess starting arrangement
    pub fn initial() -> Self {
        let mut board = Board::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.cells[0][col] = Some(Piece::new(kind, Color::Black));
            board.cells[1][col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            board.cells[6][col] = Some(Piece::new(PieceKind::Pawn, Color::White));
            board.cells[7][col] = Some(Piece::new(kind, Color::White));
        }
        board
    }

    /// Piece on `square`, if any
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Put `piece` on `square` (or clear it with `None`)
    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.row() as usize][square.col() as usize] = piece;
    }

    /// Occupied squares in board-scan order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.piece_at(square).map(|p| (square, p)))
    }

    /// Occupied squares of one color in board-scan order
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// Locate `color`'s king; `None` on a degenerate, kingless board
    pub fn find_king(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        self.pieces()
            .find(|&(_, piece)| piece == king)
            .map(|(square, _)| square)
    }

    /// Move the piece on `from` to `to`, capturing whatever stands there
    ///
    /// A pawn that lands on its promotion row becomes `promotion`, or a
    /// queen when `promotion` is `None`. Any requested kind is honoured here;
    /// validation of the kind belongs to the checked entry points
    /// ([`crate::api::Game::play`]).
    ///
    /// # Returns
    ///
    /// The piece now standing on `to` (after promotion), or `None` when
    /// `from` was empty, in which case the board is left untouched.
    ///
    /// # Errors
    ///
    /// This function does not validate move legality. Use
    /// [`crate::move_gen::legal_moves`] first.
    pub fn apply_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Option<Piece> {
        let mut piece = self.piece_at(from)?;
        self.set_piece(from, None);

        if piece.kind == PieceKind::Pawn && to.row() == piece.color.promotion_row() {
            piece.kind = promotion.unwrap_or(DEFAULT_PROMOTION);
        }

        self.set_piece(to, Some(piece));
        Some(piece)
    }

    /// Apply a [`Move`] in place
    #[inline]
    pub fn make_move(&mut self, mv: Move) -> Option<Piece> {
        self.apply_move(mv.from, mv.to, mv.promotion)
    }

    /// Copy of this board with `mv` applied; `self` is unchanged
    pub fn with_move(&self, mv: Move) -> Board {
        let mut next = self.clone();
        next.make_move(mv);
        next
    }

    /// Parse the piece-placement field of a FEN string
    ///
    /// Only the first whitespace-separated field is read, so a full FEN
    /// record is accepted too. Side to move, castling and en passant fields
    /// are ignored.
    pub fn from_fen_placement(fen: &str) -> ChessEngineResult<Board> {
        let placement = fen.split_whitespace().next().unwrap_or("");
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != BOARD_SIZE {
            return Err(ChessEngineError::InvalidBoardText {
                message: format!("expected 8 ranks, found {}", ranks.len()),
            });
        }

        let mut board = Board::empty();
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for symbol in rank.chars() {
                if let Some(skip) = symbol.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                let piece =
                    Piece::from_symbol(symbol).ok_or_else(|| ChessEngineError::InvalidBoardText {
                        message: format!("unknown piece '{symbol}' on rank {}", 8 - row),
                    })?;
                if col >= BOARD_SIZE {
                    return Err(ChessEngineError::InvalidBoardText {
                        message: format!("rank {} has more than 8 files", 8 - row),
                    });
                }
                board.cells[row][col] = Some(piece);
                col += 1;
            }
            if col != BOARD_SIZE {
                return Err(ChessEngineError::InvalidBoardText {
                    message: format!("rank {} does not describe 8 files", 8 - row),
                });
            }
        }
        Ok(board)
    }

    /// Piece placement as a FEN field
    pub fn to_fen_placement(&self) -> String {
        let mut out = String::with_capacity(64);
        for (row, cells) in self.cells.iter().enumerate() {
            let mut empty = 0;
            for cell in cells {
                match cell {
                    Some(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.symbol());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if row + 1 < BOARD_SIZE {
                out.push('/');
            }
        }
        out
    }
}

/// Standard starting position
pub fn create_initial_board() -> Board {
    Board::initial()
}

/// Apply a move to `board` in place; see [`Board::apply_move`]
pub fn apply_move(
    board: &mut Board,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> Option<Piece> {
    board.apply_move(from, to, promotion)
}

impl FromStr for Board {
    type Err = ChessEngineError;

    fn from_str(s: &str) -> ChessEngineResult<Self> {
        Board::from_fen_placement(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{} ", BOARD_SIZE - row)?;
            for cell in cells {
                let symbol = cell.map(Piece::symbol).unwrap_or('.');
                write!(f, " {symbol}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
