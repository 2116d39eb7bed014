//! Command-line interface for tictactoe.

use crate::mode::GameMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe against a perfect-play minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with an unbeatable computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Opponent: "ai" or "human" (overrides the config file)
        #[arg(long)]
        mode: Option<GameMode>,

        /// Engine pause in milliseconds (overrides the config file)
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Prefer quicker wins and slower losses
        #[arg(long)]
        depth_aware: bool,

        /// Path to the TOML config file
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: PathBuf,
    },

    /// Print the status and best move for a board, e.g. "XX./OO./..."
    Analyze {
        /// Nine squares: X, O, or . for empty; "/" and spaces are ignored
        board: String,

        /// Prefer quicker wins and slower losses
        #[arg(long)]
        depth_aware: bool,
    },

    /// Let the engine play both sides
    Selfplay {
        /// Prefer quicker wins and slower losses
        #[arg(long)]
        depth_aware: bool,
    },
}
