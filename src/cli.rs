//! Command-line interface for notie.

use clap::{Parser, Subcommand};
use notie_games::{Difficulty, GameMode};

/// No-tie tic-tac-toe - three pieces each, the oldest one slides off
#[derive(Parser, Debug)]
#[command(name = "notie")]
#[command(about = "Tic-tac-toe where nobody keeps more than three pieces", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on the terminal
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Game mode (pvp or pve); overrides the config file
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// Computer strength (easy, medium or hard); overrides the config file
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Pause before the computer moves, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Seed for reproducible games
        #[arg(long)]
        seed: Option<u64>,
    },
}
