//! Command-line arguments

use chess_engine::constants::DEFAULT_SEARCH_DEPTH;
use chess_engine::Color;
use clap::{Parser, ValueEnum};

/// Who moves for a side
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlayerKind {
    /// Moves typed on stdin
    Human,
    /// Alpha-beta search
    Ai,
}

/// Play chess in the terminal against a minimax player
#[derive(Debug, Clone, Parser)]
#[command(name = "minimax-chess", version, about)]
pub struct Args {
    /// Search depth in plies for automated players
    #[arg(long, default_value_t = DEFAULT_SEARCH_DEPTH)]
    pub depth: u32,

    /// Controller for White
    #[arg(long, value_enum, default_value_t = PlayerKind::Ai)]
    pub white: PlayerKind,

    /// Controller for Black
    #[arg(long, value_enum, default_value_t = PlayerKind::Ai)]
    pub black: PlayerKind,

    /// Seed for reproducible tie-breaking; Black's player uses seed + 1
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop after this many plies even if the game is not over
    #[arg(long)]
    pub max_plies: Option<u32>,

    /// Start from a FEN piece placement instead of the initial position
    #[arg(long)]
    pub fen: Option<String>,

    /// Side to move when starting from --fen
    #[arg(long, default_value_t = Color::White)]
    pub to_move: Color,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
