//! Derived result of a board position.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{draw::is_draw, win::winning_line};
use crate::{Board, Mark, Position};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Three in a row for this mark.
    Winner(Mark),
    /// Full board, no line.
    Draw,
}

/// Result of a finished position: the outcome and, for a win, the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    outcome: Outcome,
    line: Option<[Position; 3]>,
}

impl GameResult {
    /// How the game ended.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Winning mark, `None` for a draw.
    pub fn winner(&self) -> Option<Mark> {
        match self.outcome {
            Outcome::Winner(mark) => Some(mark),
            Outcome::Draw => None,
        }
    }

    /// The winning triple, `None` for a draw.
    pub fn line(&self) -> Option<[Position; 3]> {
        self.line
    }

    /// Indices of the winning line; empty for a draw.
    pub fn line_indices(&self) -> Vec<usize> {
        self.line
            .iter()
            .flatten()
            .map(|pos| pos.to_index())
            .collect()
    }

    /// Whether `pos` is part of the winning line.
    pub fn highlights(&self, pos: Position) -> bool {
        self.line.is_some_and(|line| line.contains(&pos))
    }
}

/// Computes the result of `board`, `None` while the game is still going.
///
/// A line always takes precedence over a full board.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<GameResult> {
    if let Some((line, mark)) = winning_line(board) {
        return Some(GameResult {
            outcome: Outcome::Winner(mark),
            line: Some(line),
        });
    }
    is_draw(board).then_some(GameResult {
        outcome: Outcome::Draw,
        line: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_progress_has_no_result() {
        let board = Board::new().with_mark(Position::Center, Mark::X);
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_win_reports_line() {
        let board = Board::new()
            .with_mark(Position::TopCenter, Mark::O)
            .with_mark(Position::Center, Mark::O)
            .with_mark(Position::BottomCenter, Mark::O);
        let result = evaluate(&board).expect("column should win");
        assert_eq!(result.winner(), Some(Mark::O));
        assert_eq!(result.line_indices(), vec![1, 4, 7]);
        assert!(result.highlights(Position::Center));
        assert!(!result.highlights(Position::TopLeft));
    }

    #[test]
    fn test_draw_has_empty_line() {
        use Mark::{O, X};
        let board = Position::ALL
            .iter()
            .zip([X, O, X, X, O, O, O, X, X])
            .fold(Board::new(), |b, (pos, mark)| b.with_mark(*pos, mark));
        let result = evaluate(&board).expect("full board should finish");
        assert_eq!(result.outcome(), Outcome::Draw);
        assert!(result.line_indices().is_empty());
        assert!(!result.highlights(Position::Center));
    }
}
