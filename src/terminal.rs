//! Terminal game loop
//!
//! Renders the board as text, reads human moves line by line and lets
//! [`AiPlayer`]s move for automated sides. Input and output are generic so
//! scripted sessions can run in tests.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use chess_engine::{AiPlayer, Board, Color, Game, GameState, Move, Outcome, SearchConfig};
use tracing::{debug, info};

use crate::cli::{Args, PlayerKind};

/// Controller for one side
enum Controller {
    Human,
    Ai(AiPlayer),
}

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finish {
    /// Checkmate or stalemate
    Over(Outcome),
    /// `--max-plies` reached
    PlyLimit,
    /// Human typed `quit` or input ended
    Quit,
    /// Both automated sides passed in a row on the same board
    Stalled,
}

/// A game plus the controllers of both sides
pub struct Session {
    game: Game,
    white: Controller,
    black: Controller,
    max_plies: Option<u32>,
}

impl Session {
    /// Build a session from command-line arguments
    pub fn from_args(args: &Args) -> Result<Self> {
        let game = match &args.fen {
            Some(fen) => {
                let board = Board::from_fen_placement(fen).context("parsing --fen")?;
                Game::from_board(board, args.to_move)
            }
            None => Game::new(),
        };

        let white = controller(args.white, args.depth, args.seed)?;
        let black = controller(args.black, args.depth, args.seed.map(|s| s.wrapping_add(1)))?;

        Ok(Session {
            game,
            white,
            black,
            max_plies: args.max_plies,
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Play until the game ends, the ply limit is hit or a human quits
    ///
    /// A turn an automated side passes counts toward `--max-plies`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<Finish> {
        writeln!(out, "{}", self.game.board())?;
        let mut turns = 0usize;
        let mut passes = 0u32;

        loop {
            writeln!(out, "{}", status_line(&self.game))?;
            if let Some(outcome) = self.game.outcome() {
                info!(?outcome, plies = self.game.history().len(), "game over");
                return Ok(Finish::Over(outcome));
            }
            if let Some(limit) = self.max_plies {
                if turns >= limit as usize {
                    info!(limit, "ply limit reached");
                    return Ok(Finish::PlyLimit);
                }
            }

            let side = self.game.side_to_move();
            let controller = match side {
                Color::White => &mut self.white,
                Color::Black => &mut self.black,
            };

            let played = match controller {
                Controller::Ai(ai) => {
                    let played = self.game.play_ai(ai)?;
                    match played {
                        Some(mv) => writeln!(out, "{side} plays {mv}")?,
                        None => writeln!(out, "{side} found no move")?,
                    }
                    played
                }
                Controller::Human => match read_human_move(&mut self.game, input, out)? {
                    Some(mv) => Some(mv),
                    None => return Ok(Finish::Quit),
                },
            };

            turns += 1;
            if played.is_some() {
                passes = 0;
                writeln!(out, "{}", self.game.board())?;
            } else {
                passes += 1;
                if passes >= 2 {
                    info!(turns, "both sides passed");
                    return Ok(Finish::Stalled);
                }
            }
        }
    }
}

fn controller(kind: PlayerKind, depth: u32, seed: Option<u64>) -> Result<Controller> {
    match kind {
        PlayerKind::Human => Ok(Controller::Human),
        PlayerKind::Ai => {
            let mut config = SearchConfig::default().with_depth(depth);
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            let ai = AiPlayer::new(config).context("configuring automated player")?;
            Ok(Controller::Ai(ai))
        }
    }
}

/// One-line status for the side to move
pub fn status_line(game: &Game) -> String {
    let side = game.side_to_move();
    match game.state() {
        GameState::Checkmate => format!("Checkmate! {} wins.", side.opposite()),
        GameState::Stalemate => "Stalemate! It's a draw.".to_string(),
        GameState::Check => format!("{side} to move (check!)"),
        GameState::Normal => format!("{side} to move"),
    }
}

/// Prompt until a legal move is entered; `None` on quit or end of input
fn read_human_move<R: BufRead, W: Write>(
    game: &mut Game,
    input: &mut R,
    out: &mut W,
) -> Result<Option<Move>> {
    loop {
        write!(out, "{}> ", game.side_to_move().to_string().to_lowercase())?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).context("reading move")? == 0 {
            return Ok(None);
        }

        match line.trim() {
            "" => continue,
            "quit" | "resign" => return Ok(None),
            "help" => {
                writeln!(out, "enter moves like e2e4, or e7e8n to underpromote")?;
                writeln!(out, "commands: moves, board, quit")?;
            }
            "moves" => {
                let moves: Vec<String> =
                    game.legal_move_list().iter().map(Move::to_string).collect();
                writeln!(out, "{}", moves.join(" "))?;
            }
            "board" => writeln!(out, "{}", game.board())?,
            text => {
                let result = Move::from_uci(text).and_then(|mv| game.play(mv).map(|_| mv));
                match result {
                    Ok(mv) => return Ok(Some(mv)),
                    Err(err) => {
                        debug!(input = text, %err, "rejected human move");
                        writeln!(out, "{err}")?;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Cursor;

    fn session(argv: &[&str]) -> Session {
        let mut full = vec!["minimax-chess"];
        full.extend_from_slice(argv);
        Session::from_args(&Args::parse_from(full)).unwrap()
    }

    #[test]
    fn test_humans_play_fools_mate() {
        let mut session = session(&["--white", "human", "--black", "human"]);
        let mut input = Cursor::new("f2f3\ne7e5\ng2g4\nd8h4\n");
        let mut out = Vec::new();

        let finish = session.run(&mut input, &mut out).unwrap();
        assert_eq!(finish, Finish::Over(Outcome::Winner(Color::Black)));

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Checkmate! Black wins."));
    }

    #[test]
    fn test_bad_input_reprompts() {
        //! Garbage and illegal moves are reported, then the same side retries
        let mut session = session(&["--white", "human", "--black", "human"]);
        let mut input = Cursor::new("zz\ne2e5\ne2e4\nquit\n");
        let mut out = Vec::new();

        let finish = session.run(&mut input, &mut out).unwrap();
        assert_eq!(finish, Finish::Quit);
        assert_eq!(session.game().history().len(), 1);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Invalid square name"));
        assert!(text.contains("Illegal move"));
    }

    #[test]
    fn test_self_play_honours_ply_limit() {
        let mut session = session(&["--depth", "1", "--seed", "3", "--max-plies", "4"]);
        let mut out = Vec::new();

        let finish = session.run(&mut Cursor::new(""), &mut out).unwrap();
        assert_eq!(finish, Finish::PlyLimit);
        assert_eq!(session.game().history().len(), 4);
    }

    #[test]
    fn test_ai_mates_from_fen() {
        let mut session = session(&["--fen", "k7/8/1K6/8/8/8/8/7R", "--seed", "1"]);
        let mut out = Vec::new();

        let finish = session.run(&mut Cursor::new(""), &mut out).unwrap();
        assert_eq!(finish, Finish::Over(Outcome::Winner(Color::White)));
        assert_eq!(session.game().history().len(), 1);
    }

    #[test]
    fn test_ai_without_move_passes_turn() {
        //! Black sees mate behind its only move and passes; White then mates
        let mut session = session(&[
            "--fen",
            "k7/8/1K6/8/8/8/8/7R",
            "--to-move",
            "black",
            "--depth",
            "3",
            "--seed",
            "1",
        ]);
        let mut out = Vec::new();

        let finish = session.run(&mut Cursor::new(""), &mut out).unwrap();
        assert_eq!(finish, Finish::Over(Outcome::Winner(Color::White)));
        assert_eq!(session.game().history(), &[Move::from_uci("h1h8").unwrap()]);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Black found no move"));
        assert!(text.contains("White plays h1h8"));
    }

    #[test]
    fn test_bad_fen_is_reported() {
        let args = Args::parse_from(["minimax-chess", "--fen", "8/8"]);
        assert!(Session::from_args(&args).is_err());
    }
}
