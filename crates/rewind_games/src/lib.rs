//! Rewind games - terminal tic-tac-toe with a rewindable move history.
//!
//! # Architecture
//!
//! - **Game logic**: [`rewind_tictactoe`] (board, rules, history controller)
//! - **TUI**: ratatui board and move list driven by keyboard and mouse
//! - **Replay**: headless command that clicks a list of cells
//! - **Settings**: optional TOML file plus command-line overrides

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
mod replay;
mod text;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, Settings};
pub use logging::{init_file_logging, init_stderr_logging};
pub use replay::{ReplayReport, SkippedClick, render_text, replay, report, run_replay};
pub use text::Language;
