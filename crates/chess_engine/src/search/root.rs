//! Root move selection
//!
//! Enumerates the legal moves of the side to move, shuffles them, scores
//! each with [`alphabeta`] at `depth - 1` after applying it, and keeps the
//! first candidate that strictly improves on the best score so far.
//!
//! ## Tie-breaking
//!
//! Among equally scored moves the winner is whichever the shuffle put
//! first, not a uniform draw among all tied moves. The random source is
//! injectable so tests and replays can fix it.
//!
//! ## Forced losses
//!
//! When every candidate scores as the mover being mated, none strictly
//! improves on the initial bound and no move is returned, even though
//! legal moves exist.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::alphabeta::alphabeta;
use super::{SearchConfig, SearchStats};
use crate::board::Board;
use crate::constants::SCORE_INFINITY;
use crate::error::ChessEngineResult;
use crate::move_gen::legal_move_list;
use crate::types::*;

/// A root move together with its minimax score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: Score,
}

/// Choose a move for `side`
///
/// `None` when `side` has no legal move, or when every legal move scores
/// as `side` being mated.
///
/// # Arguments
///
/// * `board` - Current position; it is cloned, never modified
/// * `depth` - Plies searched from the root (0 is treated as 1)
/// * `side` - Side to move
/// * `rng` - Source for the candidate shuffle
///
/// # Examples
///
/// ```rust,ignore
/// let mut rng = StdRng::seed_from_u64(7);
/// let mv = select_move(&board, 2, Color::White, &mut rng);
/// ```
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    depth: u32,
    side: Color,
    rng: &mut R,
) -> Option<Move> {
    select_move_scored(board, depth, side, rng).map(|scored| scored.mv)
}

/// Like [`select_move`], but also returns the chosen move's score
pub fn select_move_scored<R: Rng + ?Sized>(
    board: &Board,
    depth: u32,
    side: Color,
    rng: &mut R,
) -> Option<ScoredMove> {
    let mut stats = SearchStats::default();
    search_root(board, depth, side, rng, &mut stats)
}

fn search_root<R: Rng + ?Sized>(
    board: &Board,
    depth: u32,
    side: Color,
    rng: &mut R,
    stats: &mut SearchStats,
) -> Option<ScoredMove> {
    let mut candidates = legal_move_list(board, side);
    if candidates.is_empty() {
        debug!(%side, "no legal moves at root");
        return None;
    }
    candidates.shuffle(rng);

    let child_depth = depth.max(1) - 1;
    let mut best_score = match side {
        Color::White => -SCORE_INFINITY,
        Color::Black => SCORE_INFINITY,
    };
    let mut best: Option<ScoredMove> = None;

    for mv in candidates {
        let child = board.with_move(mv);
        let score = alphabeta(
            &child,
            child_depth,
            -SCORE_INFINITY,
            SCORE_INFINITY,
            side.opposite(),
            stats,
        );
        debug!(%side, candidate = %mv, score, "root candidate scored");

        let improves = match side {
            Color::White => score > best_score,
            Color::Black => score < best_score,
        };
        if improves {
            best_score = score;
            best = Some(ScoredMove { mv, score });
        }
    }

    best
}

/// Automated player: search configuration plus its own seeded random source
#[derive(Debug, Clone)]
pub struct AiPlayer {
    config: SearchConfig,
    rng: StdRng,
    last_stats: SearchStats,
}

impl AiPlayer {
    /// Build a player from a validated configuration
    ///
    /// # Errors
    ///
    /// [`ChessEngineError::InvalidDepth`](crate::error::ChessEngineError::InvalidDepth)
    /// when `config.depth` is 0.
    pub fn new(config: SearchConfig) -> ChessEngineResult<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(AiPlayer {
            config,
            rng,
            last_stats: SearchStats::default(),
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Counters from the most recent [`AiPlayer::choose`]
    pub fn last_stats(&self) -> SearchStats {
        self.last_stats
    }

    /// Pick a move for `side` on `board`
    pub fn choose(&mut self, board: &Board, side: Color) -> Option<ScoredMove> {
        let mut stats = SearchStats::default();
        let chosen = search_root(board, self.config.depth, side, &mut self.rng, &mut stats);
        self.last_stats = stats;

        match &chosen {
            Some(scored) => info!(
                %side,
                mv = %scored.mv,
                score = scored.score,
                depth = self.config.depth,
                nodes = stats.nodes,
                cutoffs = stats.cutoffs,
                "move selected"
            ),
            None => info!(%side, "no move available"),
        }
        chosen
    }
}
