//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts::GameMode;
use std::path::PathBuf;

/// Noughts - tic-tac-toe against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Path to a TOML session config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Game mode: pvp or pvc
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// Name for X (player-vs-player) or for you (player-vs-computer)
        #[arg(long)]
        player_one: Option<String>,

        /// Name for O (player-vs-player) or for the computer (player-vs-computer)
        #[arg(long)]
        player_two: Option<String>,

        /// Pause before the computer moves, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Seed for the computer's tie-breaking
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Let the computer play itself and report the results
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Random seed
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
}
