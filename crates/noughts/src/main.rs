//! Noughts - terminal tic-tac-toe.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use noughts::{GameMode, Session, SessionConfig, console, simulate};
use std::path::PathBuf;
use tokio::io::BufReader;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so the board on stdout stays readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            mode,
            player_one,
            player_two,
            delay_ms,
            seed,
        } => {
            let config = build_config(config, mode, player_one, player_two, delay_ms, seed)?;
            run_play(config).await
        }
        Command::Simulate { games, seed, json } => run_simulate(games, seed, json),
    }
}

/// Merges the optional config file with command-line overrides.
#[instrument]
fn build_config(
    path: Option<PathBuf>,
    mode: Option<GameMode>,
    player_one: Option<String>,
    player_two: Option<String>,
    delay_ms: Option<u64>,
    seed: Option<u64>,
) -> Result<SessionConfig> {
    let mut config = match path {
        Some(path) => SessionConfig::from_file(&path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => SessionConfig::default(),
    };

    if let Some(mode) = mode {
        config = config.with_mode(mode);
    }
    let vs_computer = *config.mode() == GameMode::PlayerVsComputer;
    if let Some(name) = player_one {
        config = if vs_computer {
            config.with_user_name(name)
        } else {
            config.with_player_one(name)
        };
    }
    if let Some(name) = player_two {
        config = if vs_computer {
            config.with_computer_name(name)
        } else {
            config.with_player_two(name)
        };
    }
    if let Some(delay_ms) = delay_ms {
        config = config.with_move_delay_ms(delay_ms);
    }
    if seed.is_some() {
        config = config.with_seed(seed);
    }

    Ok(config)
}

/// Run the interactive console game
async fn run_play(config: SessionConfig) -> Result<()> {
    info!(mode = %config.mode(), "Starting console game");

    let session = Session::new(config);
    println!("Tic Tac Toe");
    match session.computer_player() {
        Some(computer) => println!(
            "{} ({}) vs {} ({})",
            session.display_name(computer.opponent()),
            computer.opponent(),
            session.display_name(computer),
            computer
        ),
        None => println!(
            "{} (X) vs {} (O)",
            session.config().player_one(),
            session.config().player_two()
        ),
    }
    println!("{}", console::HELP);

    let stdin = BufReader::new(tokio::io::stdin());
    console::run(session, stdin, std::io::stdout()).await
}

/// Run computer-versus-computer games
fn run_simulate(games: u32, seed: u64, json: bool) -> Result<()> {
    let tally = simulate(games, seed).context("Simulation failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tally)?);
    } else {
        println!("{tally}");
    }
    Ok(())
}
