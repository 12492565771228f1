//! Rewind tic-tac-toe - game rules with a rewindable move history.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{Game, Mark, Position};
//!
//! let mut game = Game::new();
//! for index in [0, 4, 1, 7, 2] {
//!     game.click(Position::from_index(index).unwrap());
//! }
//! let result = game.result().unwrap();
//! assert_eq!(result.winner(), Some(Mark::X));
//! assert_eq!(result.line_indices(), vec![0, 1, 2]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod moves;
mod position;
pub mod rules;
mod types;

pub use error::GameError;
pub use game::{ClickOutcome, Game, IgnoredClick};
pub use moves::{MoveEntry, SortOrder};
pub use position::Position;
pub use rules::{GameResult, Outcome, evaluate};
pub use types::{Board, Mark, Square};
