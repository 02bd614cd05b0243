//! Terminal driver for the chess engine
//!
//! Both sides are automated by default; pass `--white human` or
//! `--black human` to play from the keyboard.

mod cli;
mod terminal;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Args;
use terminal::{Finish, Session};

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .context("parsing log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut session = Session::from_args(&args)?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    match session.run(&mut input, &mut out)? {
        Finish::Over(_) => {}
        Finish::PlyLimit => println!("Stopped after {} plies.", session.game().history().len()),
        Finish::Quit => println!("Game abandoned."),
        Finish::Stalled => println!("Neither side found a move; stopping."),
    }
    Ok(())
}
