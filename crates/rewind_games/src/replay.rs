//! Headless replay: click a sequence of cells and report the position.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use rewind_tictactoe::{
    ClickOutcome, Game, GameError, IgnoredClick, Mark, Outcome, Position, SortOrder, Square,
};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::Language;

/// A click that did not place a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkippedClick {
    /// Cell index that was clicked.
    pub index: usize,
    /// Why nothing happened.
    #[serde(serialize_with = "serialize_reason")]
    pub reason: IgnoredClick,
}

fn serialize_reason<S: serde::Serializer>(reason: &IgnoredClick, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(reason)
}

/// Machine-readable summary of a replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// Cells in row-major order, `null` when empty.
    pub board: [Option<Mark>; 9],
    /// `None` while the game is in progress.
    pub outcome: Option<Outcome>,
    /// Indices of the winning line, empty otherwise.
    pub winning_line: Vec<usize>,
    /// Number of snapshots, including the empty board.
    pub history_len: usize,
    /// Clicks that changed nothing.
    pub skipped: Vec<SkippedClick>,
}

/// Clicks each index in order on a fresh game listing its moves in `sort_order`.
///
/// Ignored clicks are collected rather than treated as failures.
///
/// # Errors
///
/// Returns [`GameError::InvalidPosition`] for an index outside 0-8.
#[instrument]
pub fn replay(
    indices: &[usize],
    sort_order: SortOrder,
) -> Result<(Game, Vec<SkippedClick>), GameError> {
    let mut game = Game::with_sort_order(sort_order);
    let mut skipped = Vec::new();
    for &index in indices {
        let position = Position::try_from(index)?;
        if let ClickOutcome::Ignored(reason) = game.click(position) {
            warn!(index, %reason, "Click ignored during replay");
            skipped.push(SkippedClick { index, reason });
        }
    }
    info!(history_len = game.history().len(), "Replay finished");
    Ok((game, skipped))
}

/// Builds the JSON-facing summary of `game`.
pub fn report(game: &Game, skipped: Vec<SkippedClick>) -> ReplayReport {
    let result = game.result();
    ReplayReport {
        board: game.current_board().squares().map(Square::mark),
        outcome: result.map(|r| r.outcome()),
        winning_line: result.map(|r| r.line_indices()).unwrap_or_default(),
        history_len: game.history().len(),
        skipped,
    }
}

/// Board, status line and move list as plain text.
pub fn render_text(game: &Game, language: Language) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", game.current_board().display());
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", language.status(game.result(), game.next_mark()));
    if let Some(line) = game.result().and_then(|r| r.line()) {
        let labels: Vec<&str> = line.iter().map(|pos| pos.label()).collect();
        let _ = writeln!(out, "{}", labels.join(", "));
    }
    let _ = writeln!(out);
    for entry in game.moves() {
        let _ = writeln!(out, "{:>2}. {}", entry.index(), language.move_label(&entry));
    }
    out
}

/// Runs the `replay` command and prints to stdout.
pub fn run_replay(
    moves: &[u8],
    json: bool,
    language: Language,
    sort_order: SortOrder,
) -> Result<()> {
    let indices: Vec<usize> = moves.iter().map(|&m| usize::from(m)).collect();
    let (game, skipped) = replay(&indices, sort_order).context("Replay failed")?;

    for click in &skipped {
        eprintln!("Ignored click on cell {}: {}", click.index, click.reason);
    }

    if json {
        let report = report(&game, skipped);
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to encode report")?
        );
    } else {
        print!("{}", render_text(&game, language));
    }
    Ok(())
}
