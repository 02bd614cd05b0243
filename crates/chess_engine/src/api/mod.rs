//! Public API for the chess engine
//!
//! Provides the high-level entry points a presentation layer consumes:
//! game state classification, checked move execution and the game session.
//!
//! ## Module Organization
//!
//! - `state` - Game state classification (Normal / Check / Checkmate / Stalemate)
//! - `moves` - Checked move execution and promotion validation
//! - `game` - Game session owning the live board and side to move

mod game;
mod moves;
mod state;

pub use game::{Game, Outcome};
pub use moves::{play_move, validate_promotion};
pub use state::{classify_state, GameState};
