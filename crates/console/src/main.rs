//! chess_console
//!
//! Play, browse and self-play from a terminal. Logs go to stderr so stdout
//! only carries the game.

use std::env;
use std::io;

use anyhow::{Context, Result};
use chess_console::{run_selfplay, CliArgs, Console, ConsoleConfig};
use chess_rules::{GameState, Session};
use greedy_engine::GreedyEngine;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("chess_console");
    println!();
    println!("Usage:");
    println!("  chess_console [--config <file.toml>] [--fen <setup>] [--selfplay N]");
    println!();
    println!("Without --selfplay, commands are read from stdin; type 'help' for the list.");
    println!();
    println!("Examples:");
    println!("  chess_console --config console.toml");
    println!("  chess_console --selfplay 3");
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let cli = CliArgs::parse(&args)?;
    if cli.help {
        print_usage();
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => ConsoleConfig::load(path)?,
        None => ConsoleConfig::default(),
    };
    init_tracing(&config.log_level);

    let start = match cli.fen.as_deref().or(config.start_fen.as_deref()) {
        Some(fen) => GameState::from_fen(fen).context("bad start position")?,
        None => GameState::startpos(),
    };

    if let Some(games) = cli.selfplay {
        return selfplay(games, start, config.max_selfplay_plies);
    }

    let mut console = Console::new(
        Session::from_state(start),
        Box::new(GreedyEngine::new()),
        config,
    );
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    console.run(stdin.lock(), &mut stdout)
}

fn selfplay(games: u32, start: GameState, max_plies: u32) -> Result<()> {
    let mut white = GreedyEngine::new();
    let mut black = GreedyEngine::new();
    for game in 1..=games {
        let outcome = run_selfplay(&mut white, &mut black, start.clone(), max_plies)?;
        println!(
            "Game {}/{}: {} after {} plies",
            game, games, outcome.status, outcome.plies
        );
        println!("{}", serde_json::to_string(&outcome.log)?);
    }
    Ok(())
}
