//! Depth-limited minimax search with alpha-beta pruning
//!
//! This module implements the automated player:
//! - Two-sided minimax where White always maximizes and Black always minimizes
//! - Alpha-beta pruning that cuts siblings once `beta <= alpha`
//! - Terminal detection (checkmate scores ±infinity, stalemate scores 0)
//! - Root move selection over a shuffled candidate list
//!
//! Every node works on its own cloned [`Board`](crate::board::Board); no
//! branch can observe another branch's moves. There is no transposition
//! table, no move ordering and no time control: a search at a given depth
//! always runs to completion.
//!
//! ## Module Organization
//!
//! - `alphabeta` - Core recursive alpha-beta search
//! - `root` - Root candidate enumeration, tie-breaking and the [`AiPlayer`]

mod alphabeta;
mod root;

pub use alphabeta::minimax;
pub use root::{select_move, select_move_scored, AiPlayer, ScoredMove};

use crate::constants::DEFAULT_SEARCH_DEPTH;
use crate::error::{ChessEngineError, ChessEngineResult};

/// Search parameters supplied by the embedding application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched from the root, at least 1
    pub depth: u32,
    /// Seed for root tie-breaking; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_SEARCH_DEPTH,
            seed: None,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject a zero depth
    pub fn validate(&self) -> ChessEngineResult<()> {
        if self.depth == 0 {
            return Err(ChessEngineError::InvalidDepth { depth: self.depth });
        }
        Ok(())
    }
}

/// Node counters gathered during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, leaves included
    pub nodes: u64,
    /// Sibling lists abandoned because `beta <= alpha`
    pub cutoffs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.depth, 2);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_depth_rejected() {
        let config = SearchConfig::default().with_depth(0);
        assert_eq!(
            config.validate(),
            Err(ChessEngineError::InvalidDepth { depth: 0 })
        );
    }
}
