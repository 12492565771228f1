//! History-keeping game controller.
//!
//! [`Game`] owns every board snapshot since the start, the index of the one
//! on screen, and the move-list sort order. Jumping back never discards
//! anything; the tail is dropped only when a new move is played from an
//! earlier position.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::moves::{MoveEntry, SortOrder};
use crate::rules::{GameResult, evaluate};
use crate::{Board, GameError, Mark, Position, Square};

/// Why a click did not place a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum IgnoredClick {
    /// The cell already holds a mark.
    #[display("square is already occupied")]
    Occupied,
    /// The position on the board is already won or drawn.
    #[display("game is already over")]
    GameOver,
}

/// What a click on a cell did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClickOutcome {
    /// A mark was placed and appended to the history.
    Placed {
        /// Mark that was placed.
        mark: Mark,
        /// Where it went.
        position: Position,
    },
    /// Nothing changed.
    Ignored(IgnoredClick),
}

/// Tic-tac-toe game with a rewindable history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameRepr")]
pub struct Game {
    history: Vec<Board>,
    current_move: usize,
    sort_order: SortOrder,
}

impl Game {
    /// Creates a new game at the empty board, move list ascending.
    #[instrument]
    pub fn new() -> Self {
        Self::with_sort_order(SortOrder::default())
    }

    /// Creates a new game with the given move-list order.
    #[instrument]
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
            sort_order,
        }
    }

    /// All snapshots, index 0 being the empty board.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the snapshot on screen.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// The board on screen.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Mark due to play on the current board.
    pub fn next_mark(&self) -> Mark {
        Mark::for_move(self.current_move)
    }

    /// Result of the board on screen, `None` while in progress.
    pub fn result(&self) -> Option<GameResult> {
        evaluate(self.current_board())
    }

    /// Current move-list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Handles a click on a cell of the current board.
    ///
    /// Occupied cells and finished positions are ignored. Otherwise the
    /// next mark is placed and the new board is played.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn click(&mut self, position: Position) -> ClickOutcome {
        if self.result().is_some() {
            debug!("Click ignored, game over");
            return ClickOutcome::Ignored(IgnoredClick::GameOver);
        }
        if !self.current_board().is_empty(position) {
            debug!("Click ignored, square occupied");
            return ClickOutcome::Ignored(IgnoredClick::Occupied);
        }

        let mark = self.next_mark();
        let next = self.current_board().with_mark(position, mark);
        self.push(next);
        info!(%mark, %position, current_move = self.current_move, "Mark placed");
        ClickOutcome::Placed { mark, position }
    }

    /// Plays `board` as the move after the current one.
    ///
    /// Everything past the current index is discarded first. The board must
    /// differ from the current one by exactly one placement of
    /// [`Game::next_mark`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotASuccessor`] if the board is not such a
    /// placement; the history is left untouched.
    #[instrument(skip(self, board), fields(current_move = self.current_move))]
    pub fn play(&mut self, board: Board) -> Result<(), GameError> {
        let expected = self.next_mark();
        if self.result().is_some() || !is_single_placement(self.current_board(), &board, expected) {
            warn!(%expected, "Rejected board that is not a single placement");
            return Err(GameError::NotASuccessor {
                expected,
                current_move: self.current_move,
            });
        }
        self.push(board);
        Ok(())
    }

    /// Moves the board on screen to history entry `target`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::MoveOutOfRange`] when `target` is past the end
    /// of the history; the current move is unchanged.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, target: usize) -> Result<(), GameError> {
        if target >= self.history.len() {
            warn!(len = self.history.len(), "Jump target out of range");
            return Err(GameError::MoveOutOfRange {
                requested: target,
                len: self.history.len(),
            });
        }
        debug!(from = self.current_move, "Time-travel");
        self.current_move = target;
        Ok(())
    }

    /// Flips the move-list order.
    #[instrument(skip(self))]
    pub fn toggle_sort_order(&mut self) {
        self.sort_order = self.sort_order.toggle();
        debug!(sort_order = ?self.sort_order, "Sort order toggled");
    }

    /// The move list in render order.
    pub fn moves(&self) -> Vec<MoveEntry> {
        let entries =
            (0..self.history.len()).map(|index| MoveEntry::new(index, index == self.current_move));
        match self.sort_order {
            SortOrder::Ascending => entries.collect(),
            SortOrder::Descending => entries.rev().collect(),
        }
    }

    fn push(&mut self, board: Board) {
        self.history.truncate(self.current_move + 1);
        self.history.push(board);
        self.current_move = self.history.len() - 1;
    }
}

/// Unchecked wire form of [`Game`].
#[derive(Deserialize)]
struct GameRepr {
    history: Vec<Board>,
    current_move: usize,
    sort_order: SortOrder,
}

impl TryFrom<GameRepr> for Game {
    type Error = GameError;

    /// Accepts only histories `click` could have built: an empty first
    /// board, one placement per entry by turn parity, nothing after a result.
    fn try_from(repr: GameRepr) -> Result<Self, Self::Error> {
        let GameRepr {
            history,
            current_move,
            sort_order,
        } = repr;
        if current_move >= history.len() {
            return Err(GameError::MoveOutOfRange {
                requested: current_move,
                len: history.len(),
            });
        }
        if history[0] != Board::new() {
            return Err(GameError::InvalidHistory { index: 0 });
        }
        for (i, pair) in history.windows(2).enumerate() {
            let legal = evaluate(&pair[0]).is_none()
                && is_single_placement(&pair[0], &pair[1], Mark::for_move(i));
            if !legal {
                return Err(GameError::InvalidHistory { index: i + 1 });
            }
        }
        Ok(Self {
            history,
            current_move,
            sort_order,
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// True when `next` is `prev` plus exactly one `mark` on an empty square.
fn is_single_placement(prev: &Board, next: &Board, mark: Mark) -> bool {
    let mut changed = prev
        .squares()
        .iter()
        .zip(next.squares())
        .filter(|(before, after)| before != after);
    matches!(
        (changed.next(), changed.next()),
        (Some((Square::Empty, Square::Occupied(placed))), None) if *placed == mark
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_starts_at_empty_board() {
        let game = Game::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.current_move(), 0);
        assert_eq!(game.current_board(), &Board::new());
        assert_eq!(game.next_mark(), Mark::X);
        assert_eq!(game.result(), None);
    }

    #[test]
    fn test_play_rejects_two_placements() {
        let mut game = Game::new();
        let board = Board::new()
            .with_mark(Position::TopLeft, Mark::X)
            .with_mark(Position::Center, Mark::O);
        assert!(matches!(game.play(board), Err(GameError::NotASuccessor { .. })));
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_play_rejects_wrong_mark() {
        let mut game = Game::new();
        let board = Board::new().with_mark(Position::Center, Mark::O);
        assert!(game.play(board).is_err());
    }

    #[test]
    fn test_play_accepts_single_placement() {
        let mut game = Game::new();
        let board = Board::new().with_mark(Position::Center, Mark::X);
        game.play(board).expect("single X placement");
        assert_eq!(game.current_move(), 1);
        assert_eq!(game.current_board(), &board);
    }

    #[test]
    fn test_jump_out_of_range_keeps_state() {
        let mut game = Game::new();
        game.click(Position::Center);
        let err = game.jump_to(5).unwrap_err();
        assert_eq!(err, GameError::MoveOutOfRange { requested: 5, len: 2 });
        assert_eq!(game.current_move(), 1);
    }

    #[test]
    fn test_sort_order_does_not_touch_history() {
        let mut game = Game::new();
        game.click(Position::TopLeft);
        let before = game.history().to_vec();
        game.toggle_sort_order();
        assert_eq!(game.sort_order(), SortOrder::Descending);
        assert_eq!(game.history(), before.as_slice());
    }
}
