//! Rewind games - unified CLI.

use anyhow::{Context, Result};
use clap::Parser;
use rewind_games::{
    Cli, Command, Settings, init_file_logging, init_stderr_logging, run_replay, tui::run_tui,
};
use rewind_tictactoe::SortOrder;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;
    if let Some(language) = cli.language {
        settings = settings.with_language(language);
    }

    match cli.command {
        Command::Play {
            descending,
            log_file,
        } => {
            if descending {
                settings = settings.with_sort_order(SortOrder::Descending);
            }
            if let Some(path) = log_file {
                settings = settings.with_log_file(path);
            }
            init_file_logging(settings.log_file(), settings.log_filter())?;
            info!(?settings, "Settings resolved");
            run_tui(&settings).await
        }
        Command::Replay { json, moves } => {
            init_stderr_logging(settings.log_filter());
            run_replay(&moves, json, *settings.language(), *settings.sort_order())
        }
    }
}
