//! Alpha-beta search (two-sided minimax)
//!
//! Unlike negamax, scores are always from White's point of view: White
//! nodes take the maximum of their children and raise `alpha`, Black nodes
//! take the minimum and lower `beta`. The side alternates on every ply
//! regardless of who started the search.
//!
//! Recursion depth equals the search depth, which is small (a handful of
//! plies), so plain recursion is used.

use tracing::trace;

use super::SearchStats;
use crate::board::Board;
use crate::constants::{DRAW_SCORE, SCORE_INFINITY};
use crate::evaluation::evaluate;
use crate::move_gen::{is_in_check, legal_move_list};
use crate::types::*;

/// Minimax value of `board` with `side` to move
///
/// # Arguments
///
/// * `board` - Position to search; it is never modified
/// * `depth` - Remaining plies; at 0 the static evaluation is returned
/// * `alpha` - Best score White is already guaranteed
/// * `beta` - Best score Black is already guaranteed
/// * `side` - Side to move at this node
///
/// # Returns
///
/// The position's score: `-SCORE_INFINITY` if White is mated,
/// `SCORE_INFINITY` if Black is mated, `0` on stalemate, otherwise the
/// extremal child score (or the material evaluation at depth 0).
pub fn minimax(board: &Board, depth: u32, alpha: Score, beta: Score, side: Color) -> Score {
    let mut stats = SearchStats::default();
    alphabeta(board, depth, alpha, beta, side, &mut stats)
}

/// Score for the side to move having been checkmated
#[inline]
pub(crate) fn mated_score(side: Color) -> Score {
    match side {
        Color::White => -SCORE_INFINITY,
        Color::Black => SCORE_INFINITY,
    }
}

pub(crate) fn alphabeta(
    board: &Board,
    depth: u32,
    mut alpha: Score,
    mut beta: Score,
    side: Color,
    stats: &mut SearchStats,
) -> Score {
    stats.nodes += 1;

    if depth == 0 {
        return evaluate(board);
    }

    let moves = legal_move_list(board, side);
    if moves.is_empty() {
        return if is_in_check(board, side) {
            mated_score(side)
        } else {
            DRAW_SCORE
        };
    }

    match side {
        Color::White => {
            let mut best = -SCORE_INFINITY;
            for mv in moves {
                let child = board.with_move(mv);
                let score = alphabeta(&child, depth - 1, alpha, beta, Color::Black, stats);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    stats.cutoffs += 1;
                    trace!(depth, alpha, beta, "white node cutoff");
                    break;
                }
            }
            best
        }
        Color::Black => {
            let mut best = SCORE_INFINITY;
            for mv in moves {
                let child = board.with_move(mv);
                let score = alphabeta(&child, depth - 1, alpha, beta, Color::White, stats);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    stats.cutoffs += 1;
                    trace!(depth, alpha, beta, "black node cutoff");
                    break;
                }
            }
            best
        }
    }
}
