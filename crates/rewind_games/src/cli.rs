//! Command-line interface for rewind_games.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::Language;

/// Rewind - tic-tac-toe with time-travel through the move history
#[derive(Parser, Debug)]
#[command(name = "rewind_games")]
#[command(about = "Tic-tac-toe with a rewindable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML). Defaults to rewind_games.toml if present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Label language, overrides the settings file
    #[arg(long, global = true, value_enum)]
    pub language: Option<Language>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Start with the move list newest first
        #[arg(long)]
        descending: bool,

        /// Log file, overrides the settings file
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Play cell indices (0-8) without a UI and print the result
    Replay {
        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,

        /// Cells to click, in order
        #[arg(required = true, value_parser = clap::value_parser!(u8).range(0..=8))]
        moves: Vec<u8>,
    },
}
