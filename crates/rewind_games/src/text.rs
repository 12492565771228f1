//! Localized labels for the status line, move list and sort toggle.

use rewind_tictactoe::{GameResult, Mark, MoveEntry, Outcome, SortOrder};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Language of the on-screen labels.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    #[default]
    En,
    /// Russian.
    Ru,
}

impl Language {
    /// Status line above the board.
    #[instrument]
    pub fn status(self, result: Option<GameResult>, next: Mark) -> String {
        match (self, result.map(|r| r.outcome())) {
            (Self::En, Some(Outcome::Winner(mark))) => format!("Winner: {mark}"),
            (Self::Ru, Some(Outcome::Winner(mark))) => format!("Победитель: {mark}"),
            (Self::En, Some(Outcome::Draw)) => "Draw".to_string(),
            (Self::Ru, Some(Outcome::Draw)) => "Ничья".to_string(),
            (Self::En, None) => format!("Next player: {next}"),
            (Self::Ru, None) => format!("Следующий игрок: {next}"),
        }
    }

    /// Label of one move-list row.
    pub fn move_label(self, entry: &MoveEntry) -> String {
        let n = entry.index();
        match self {
            Self::En if entry.is_current() => format!("You are at move #{n}"),
            Self::En if entry.is_game_start() => "Go to game start".to_string(),
            Self::En => format!("Go to move #{n}"),
            Self::Ru if entry.is_current() => format!("Вы на ходу №…{n}"),
            Self::Ru if entry.is_game_start() => "Перейти к началу игры".to_string(),
            Self::Ru => format!("Перейти к ходу #{n}"),
        }
    }

    /// Caption of the sort toggle; names the order a press switches to.
    pub fn sort_toggle(self, order: SortOrder) -> &'static str {
        match (self, order) {
            (Self::En, SortOrder::Ascending) => "Sort descending",
            (Self::En, SortOrder::Descending) => "Sort ascending",
            (Self::Ru, SortOrder::Ascending) => "Сортировать по убыванию",
            (Self::Ru, SortOrder::Descending) => "Сортировать по возрастанию",
        }
    }

    /// Window title.
    pub fn title(self) -> &'static str {
        match self {
            Self::En => "Rewind - Tic Tac Toe",
            Self::Ru => "Rewind - Крестики-нолики",
        }
    }

    /// Title of the move-list panel.
    pub fn moves_title(self) -> &'static str {
        match self {
            Self::En => "Moves",
            Self::Ru => "Ходы",
        }
    }

    /// Key help for the bottom line.
    pub fn help(self) -> &'static str {
        match self {
            Self::En => {
                "Arrows: move | Enter/1-9/click: play | Tab: moves | s: sort | r: restart | q: quit"
            }
            Self::Ru => {
                "Стрелки: выбор | Enter/1-9/клик: ход | Tab: ходы | s: порядок | r: заново | q: выход"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_tictactoe::{Game, Position};

    fn won_by_x() -> Game {
        let mut game = Game::new();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomCenter,
            Position::TopRight,
        ] {
            game.click(pos);
        }
        game
    }

    #[test]
    fn test_status_lines() {
        let game = won_by_x();
        assert_eq!(Language::En.status(game.result(), game.next_mark()), "Winner: X");
        assert_eq!(Language::En.status(None, Mark::O), "Next player: O");
        assert_eq!(Language::Ru.status(None, Mark::X), "Следующий игрок: X");
    }

    #[test]
    fn test_move_labels() {
        let mut game = won_by_x();
        game.jump_to(2).unwrap();
        let labels: Vec<String> = game
            .moves()
            .iter()
            .map(|entry| Language::En.move_label(entry))
            .collect();
        assert_eq!(labels[0], "Go to game start");
        assert_eq!(labels[1], "Go to move #1");
        assert_eq!(labels[2], "You are at move #2");

        let start = Game::new().moves()[0];
        assert_eq!(Language::En.move_label(&start), "You are at move #0");
        assert_eq!(Language::Ru.move_label(&start), "Вы на ходу №…0");
    }

    #[test]
    fn test_sort_toggle_names_next_order() {
        assert_eq!(Language::En.sort_toggle(SortOrder::Ascending), "Sort descending");
        assert_eq!(Language::Ru.sort_toggle(SortOrder::Descending), "Сортировать по возрастанию");
    }
}
