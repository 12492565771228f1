//! Stateless rendering of the game screen.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use rewind_tictactoe::{GameResult, Mark, Position, Square};

use super::app::{App, Focus};
use super::layout::GameLayout;

/// Style of cells on the winning line.
pub const WINNING_STYLE: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Green)
    .add_modifier(Modifier::BOLD);

/// Style of the keyboard cursor cell.
pub const CURSOR_STYLE: Style = Style::new().fg(Color::Black).bg(Color::White);

/// Renders the whole game screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = GameLayout::new(frame.area());
    let language = *app.language();

    let title = Paragraph::new(language.title())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout.title);

    draw_board(frame, &layout, app);
    draw_moves(frame, &layout, app);

    let help = Paragraph::new(language.help())
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);
}

/// Status line plus the nine cells.
fn draw_board(frame: &mut Frame, layout: &GameLayout, app: &App) {
    let game = app.game();
    let result = game.result();

    let status_style = match result {
        Some(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::Yellow),
    };
    let status = Paragraph::new(app.language().status(result, game.next_mark()))
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout.status);

    let cursor = (*app.focus() == Focus::Board).then_some(*app.cursor());
    for pos in Position::ALL {
        let square = game.current_board().get(pos);
        draw_cell(frame, layout.cell(pos), pos, square, result.as_ref(), cursor);
    }

    for sep in layout.row_separators {
        let line = Paragraph::new("─".repeat(sep.width as usize))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(line, sep);
    }
    for row in 0..3 {
        let left = layout.cells[row * 3];
        let right = layout.cells[row * 3 + 1];
        for x in [left.right(), right.right()] {
            let sep = Rect::new(x, left.y, 1, left.height);
            let bar = Paragraph::new(vec![Line::raw("│"); sep.height as usize])
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(bar, sep);
        }
    }
}

/// One cell: its mark, highlighted when on the winning line.
pub fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    pos: Position,
    square: Square,
    result: Option<&GameResult>,
    cursor: Option<Position>,
) {
    let (symbol, mark_style) = match square {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let cell_style = if result.is_some_and(|r| r.highlights(pos)) {
        WINNING_STYLE
    } else if cursor == Some(pos) {
        CURSOR_STYLE
    } else {
        Style::default()
    };

    let padding = area.height.saturating_sub(1) / 2;
    let mut lines = vec![Line::raw(""); padding as usize];
    lines.push(Line::from(Span::styled(symbol, mark_style.patch(cell_style))));

    let paragraph = Paragraph::new(lines)
        .style(cell_style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Sort toggle and the move list.
fn draw_moves(frame: &mut Frame, layout: &GameLayout, app: &App) {
    let game = app.game();
    let language = *app.language();

    let toggle = Paragraph::new(format!("[ {} ]", language.sort_toggle(game.sort_order())))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(toggle, layout.sort_button);

    let items: Vec<ListItem> = game
        .moves()
        .iter()
        .map(|entry| {
            let style = if entry.is_current() {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(language.move_label(entry)).style(style)
        })
        .collect();

    let focused = *app.focus() == Focus::Moves;
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(language.moves_title()),
        )
        .highlight_style(if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        })
        .highlight_symbol(if focused { "> " } else { "  " });

    let mut list_state = ListState::default()
        .with_selected(Some(*app.selected_row()))
        .with_offset(app.moves_offset(layout.visible_moves()));
    frame.render_stateful_widget(list, layout.moves, &mut list_state);
}
