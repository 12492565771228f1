//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Position};
use tracing::instrument;

/// The eight winning triples: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line holding three equal marks, with that mark.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<([Position; 3], Mark)> {
    LINES.into_iter().find_map(|line @ [a, b, c]| {
        let mark = board.get(a).mark()?;
        (board.get(b).mark() == Some(mark) && board.get(c).mark() == Some(mark))
            .then_some((line, mark))
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if a mark has three in a row, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(_, mark)| mark)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Mark::X)
            .with_mark(Position::TopCenter, Mark::X)
            .with_mark(Position::TopRight, Mark::X);
        assert_eq!(check_winner(&board), Some(Mark::X));
        assert_eq!(
            winning_line(&board).map(|(line, _)| line),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = Board::new()
            .with_mark(Position::TopRight, Mark::O)
            .with_mark(Position::Center, Mark::O)
            .with_mark(Position::BottomLeft, Mark::O);
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            for mark in [Mark::X, Mark::O] {
                let board = line
                    .iter()
                    .fold(Board::new(), |board, pos| board.with_mark(*pos, mark));
                assert_eq!(winning_line(&board), Some((line, mark)));
            }
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Mark::X)
            .with_mark(Position::TopCenter, Mark::O)
            .with_mark(Position::TopRight, Mark::X);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Mark::X)
            .with_mark(Position::TopCenter, Mark::X);
        assert_eq!(check_winner(&board), None);
    }
}
