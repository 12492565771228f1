//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Nothing here is stored;
//! the result of a position is recomputed from the board every time.

pub mod draw;
pub mod outcome;
pub mod win;

pub use draw::{is_draw, is_full};
pub use outcome::{GameResult, Outcome, evaluate};
pub use win::{LINES, check_winner, winning_line};
