//! Screen layout shared by rendering and mouse hit-testing.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use rewind_tictactoe::Position;

/// Width of one board cell.
pub const CELL_WIDTH: u16 = 12;
/// Height of one board cell.
pub const CELL_HEIGHT: u16 = 3;
const GRID_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const GRID_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;
const INFO_WIDTH: u16 = 34;

/// Rectangles of every widget on the game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameLayout {
    /// Title bar.
    pub title: Rect,
    /// Status line above the board.
    pub status: Rect,
    /// The 3x3 grid including separators.
    pub grid: Rect,
    /// Cells in row-major order.
    pub cells: [Rect; 9],
    /// Horizontal separators between rows.
    pub row_separators: [Rect; 2],
    /// Sort toggle button.
    pub sort_button: Rect,
    /// Move list, including its border.
    pub moves: Rect,
    /// Key help line.
    pub help: Rect,
}

impl GameLayout {
    /// Splits `area` into the game screen.
    pub fn new(area: Rect) -> Self {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(GRID_HEIGHT + 3),
                Constraint::Length(1),
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(GRID_WIDTH + 2), Constraint::Length(INFO_WIDTH)])
            .split(outer[1]);

        let board_panel = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(GRID_HEIGHT)])
            .split(body[0]);

        let info_panel = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3)])
            .split(body[1]);

        let grid = center_rect(board_panel[1], GRID_WIDTH, GRID_HEIGHT);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(CELL_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(CELL_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(CELL_HEIGHT),
            ])
            .split(grid);

        let mut cells = [Rect::default(); 9];
        for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(CELL_WIDTH),
                    Constraint::Length(1),
                    Constraint::Length(CELL_WIDTH),
                    Constraint::Length(1),
                    Constraint::Length(CELL_WIDTH),
                ])
                .split(row_area);
            for (col, cell) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
                cells[row * 3 + col] = cell;
            }
        }

        Self {
            title: outer[0],
            status: board_panel[0],
            grid,
            cells,
            row_separators: [rows[1], rows[3]],
            sort_button: info_panel[0],
            moves: info_panel[1],
            help: outer[2],
        }
    }

    /// Rectangle of one cell.
    pub fn cell(&self, pos: Position) -> Rect {
        self.cells[pos.to_index()]
    }

    /// Cell under the terminal coordinate, if any.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        Position::ALL
            .into_iter()
            .find(|pos| contains(self.cell(*pos), column, row))
    }

    /// Whether the coordinate is on the sort toggle.
    pub fn on_sort_button(&self, column: u16, row: u16) -> bool {
        contains(self.sort_button, column, row)
    }

    /// Number of move-list rows visible inside the border.
    pub fn visible_moves(&self) -> usize {
        self.moves.height.saturating_sub(2) as usize
    }

    /// Rendered move-list row under the coordinate, accounting for scroll.
    pub fn move_row_at(&self, column: u16, row: u16, offset: usize, len: usize) -> Option<usize> {
        let inner = self.moves_inner();
        if !contains(inner, column, row) {
            return None;
        }
        let index = offset + usize::from(row - inner.y);
        (index < len).then_some(index)
    }

    fn moves_inner(&self) -> Rect {
        Rect {
            x: self.moves.x + 1,
            y: self.moves.y + 1,
            width: self.moves.width.saturating_sub(2),
            height: self.moves.height.saturating_sub(2),
        }
    }
}

/// First visible move-list row that keeps `selected` on screen.
pub fn list_offset(selected: usize, visible: usize) -> usize {
    (selected + 1).saturating_sub(visible.max(1))
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    rect.contains(ratatui::layout::Position::new(column, row))
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
