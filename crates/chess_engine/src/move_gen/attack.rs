//! Attack detection and check detection
//!
//! Provides functions to check if squares are under attack and if kings are
//! in check. This module is critical for move legality validation and game
//! state classification.
//!
//! ## Algorithm
//!
//! To check if a square is attacked, we iterate through all pieces of the
//! attacking color and generate their attacks-only (pseudo-legal) moves. The
//! square is attacked if it appears in any of those sets. This never calls
//! the legality filter, so there is no mutual recursion.
//!
//! ## Performance
//!
//! O(64) piece scans times per-piece generation. This runs for every
//! candidate move inside the search and dominates its runtime.

use tracing::trace;

use super::pseudo_moves;
use crate::board::Board;
use crate::types::*;

/// Check if a square is under attack by pieces of the specified color
///
/// # Arguments
///
/// * `board` - The position to inspect
/// * `square` - Target square to check
/// * `by_color` - Color of pieces that might attack
///
/// # Returns
///
/// `true` if any piece of `by_color` has `square` among its pseudo-legal
/// destinations
pub fn is_square_attacked(board: &Board, square: Square, by_color: Color) -> bool {
    board
        .pieces_of(by_color)
        .any(|(from, _)| pseudo_moves(board, from, by_color).contains(&square))
}

/// Check if `color`'s king is attacked
///
/// A board without a king for `color` counts as in check. Such a position is
/// malformed and must never be treated as safe.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    match board.find_king(color) {
        Some(king_square) => is_square_attacked(board, king_square, color.opposite()),
        None => {
            trace!(%color, "no king on board, treating as in check");
            true
        }
    }
}
