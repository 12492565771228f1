//! Application state: the game controller plus cursor and focus.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use derive_getters::Getters;
use ratatui::layout::Rect;
use rewind_tictactoe::{ClickOutcome, Game, Position, SortOrder};
use tracing::{debug, info, instrument, warn};

use super::input::{digit_position, move_cursor};
use super::layout::{GameLayout, list_offset};
use crate::Language;

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrows move the board cursor.
    #[default]
    Board,
    /// Arrows move the move-list selection.
    Moves,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Self::Board => Self::Moves,
            Self::Moves => Self::Board,
        }
    }
}

/// Whether the event loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep going.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    game: Game,
    language: Language,
    cursor: Position,
    focus: Focus,
    /// Selected row of the rendered move list.
    selected_row: usize,
    initial_order: SortOrder,
}

impl App {
    /// Creates a new application at the empty board.
    #[instrument]
    pub fn new(language: Language, initial_order: SortOrder) -> Self {
        let mut app = Self {
            game: Game::with_sort_order(initial_order),
            language,
            cursor: Position::Center,
            focus: Focus::Board,
            selected_row: 0,
            initial_order,
        };
        app.select_current();
        app
    }

    /// Scroll offset of the move list for `visible` rows.
    pub fn moves_offset(&self, visible: usize) -> usize {
        list_offset(self.selected_row, visible)
    }

    /// Handles a key press.
    #[instrument(skip(self, key), fields(code = ?key.code, focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                info!("User quit");
                return Control::Quit;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('s') => self.toggle_sort_order(),
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                if self.focus == Focus::Moves {
                    self.select_current();
                }
            }
            KeyCode::Char(' ') => self.activate(),
            KeyCode::Char(c) => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.click(pos);
                }
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::Moves => self.handle_moves_key(code),
            },
        }
        Control::Continue
    }

    /// Handles a mouse event against the layout of `area`.
    #[instrument(skip(self, mouse), fields(column = mouse.column, row = mouse.row))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let layout = GameLayout::new(area);
        let (column, row) = (mouse.column, mouse.row);

        if let Some(pos) = layout.cell_at(column, row) {
            self.focus = Focus::Board;
            self.cursor = pos;
            self.click(pos);
        } else if layout.on_sort_button(column, row) {
            self.toggle_sort_order();
        } else if let Some(row) = layout.move_row_at(
            column,
            row,
            self.moves_offset(layout.visible_moves()),
            self.game.history().len(),
        ) {
            self.focus = Focus::Moves;
            self.selected_row = row;
            self.jump_to_selected();
        }
    }

    /// Enter and Space: play the cursor cell, or jump to the selected move.
    fn activate(&mut self) {
        match self.focus {
            Focus::Board => self.click(self.cursor),
            Focus::Moves => self.jump_to_selected(),
        }
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => self.activate(),
            other => self.cursor = move_cursor(self.cursor, other),
        }
    }

    fn handle_moves_key(&mut self, code: KeyCode) {
        let count = self.game.history().len();
        match code {
            KeyCode::Up => {
                self.selected_row = match self.selected_row {
                    0 => count - 1,
                    i => i - 1,
                };
            }
            KeyCode::Down => self.selected_row = (self.selected_row + 1) % count,
            KeyCode::Enter => self.activate(),
            _ => {}
        }
    }

    fn click(&mut self, pos: Position) {
        match self.game.click(pos) {
            ClickOutcome::Placed { .. } => self.select_current(),
            ClickOutcome::Ignored(reason) => debug!(%reason, position = %pos, "Click ignored"),
        }
    }

    fn jump_to_selected(&mut self) {
        let Some(entry) = self.game.moves().get(self.selected_row).copied() else {
            return;
        };
        if let Err(e) = self.game.jump_to(entry.index()) {
            warn!(error = %e, "Jump failed");
        }
    }

    fn toggle_sort_order(&mut self) {
        self.game.toggle_sort_order();
        let last = self.game.history().len() - 1;
        self.selected_row = last - self.selected_row.min(last);
    }

    /// Points the move-list selection at the entry on screen.
    fn select_current(&mut self) {
        self.selected_row = self
            .game
            .moves()
            .iter()
            .position(|entry| entry.is_current())
            .unwrap_or(0);
    }

    fn restart(&mut self) {
        debug!("Restarting game");
        self.game = Game::with_sort_order(self.initial_order);
        self.cursor = Position::Center;
        self.select_current();
    }
}
