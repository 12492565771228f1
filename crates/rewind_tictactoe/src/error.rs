//! Errors raised by the game controller.

use derive_more::{Display, Error};

/// Requests the controller refuses.
///
/// Clicks on occupied cells or finished games are not errors; they come back
/// as [`ClickOutcome::Ignored`](crate::ClickOutcome::Ignored).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Jump target is past the end of the history.
    #[display("Move #{requested} is out of range (history has {len} entries)")]
    MoveOutOfRange {
        /// Requested history index.
        requested: usize,
        /// Current history length.
        len: usize,
    },
    /// Cell index outside 0-8.
    #[display("Position index {index} is out of bounds (must be 0-8)")]
    InvalidPosition {
        /// Offending index.
        index: usize,
    },
    /// Board handed to `play` is not one legal placement after the current one.
    #[display("Board is not a single {expected} placement after move #{current_move}")]
    NotASuccessor {
        /// Mark that was due to play.
        expected: crate::Mark,
        /// History index the board was meant to follow.
        current_move: usize,
    },
    /// Snapshot that `click` could not have produced from the one before it.
    #[display("History entry #{index} does not follow from the previous entry")]
    InvalidHistory {
        /// Offending history index.
        index: usize,
    },
}
