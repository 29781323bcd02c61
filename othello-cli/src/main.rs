//! Play Othello in the terminal.

use anyhow::Context;
use clap::Parser;
use othello_cli::session::Session;
use othello_engine::{Game, DEFAULT_EDGE_LENGTH};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "othello")]
#[command(about = "Two-player Othello on an N×N board")]
struct Args {
    /// Board edge length: an even number from 4 to 26
    #[arg(short, long, default_value_t = DEFAULT_EDGE_LENGTH)]
    size: usize,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let game = Game::new(args.size).with_context(|| format!("cannot start a {0}x{0} game", args.size))?;
    info!(edge_length = args.size, "starting game");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(game, stdin.lock(), stdout.lock()).run()?;
    Ok(())
}
