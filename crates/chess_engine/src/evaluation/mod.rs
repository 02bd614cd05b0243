//! Position evaluation
//!
//! The evaluator is deliberately crude: a signed material count with no
//! positional, mobility or king-safety terms. Playing strength comes from
//! search depth.
//!
//! ## Module Organization
//!
//! - `material` - Material balance evaluation

mod material;

pub use material::evaluate_material;

use crate::board::Board;
use crate::types::Score;

/// Static score of `board`: positive favours White, negative favours Black
#[inline]
pub fn evaluate(board: &Board) -> Score {
    evaluate_material(board)
}
