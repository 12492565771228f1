//! Terminal UI for rewind tic-tac-toe.

mod app;
mod input;
mod layout;
mod ui;

pub use app::{App, Control, Focus};
pub use layout::{CELL_HEIGHT, CELL_WIDTH, GameLayout};
pub use ui::{CURSOR_STYLE, WINNING_STYLE, draw};

use std::io;

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend, layout::Rect};
use tokio::time::{Duration, sleep};
use tracing::{debug, error, info, instrument, warn};

use crate::Settings;

/// Restores the terminal when dropped, however far setup got.
///
/// Created right after raw mode is enabled, so an error in any later setup
/// step or in the UI loop still leaves the shell usable.
struct TerminalGuard;

impl TerminalGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(e) = restore_terminal() {
            warn!(error = %e, "Terminal restore incomplete");
        }
    }
}

/// Leaves raw mode, the alternate screen and mouse capture.
///
/// Every step runs even if an earlier one fails; the first error is returned.
/// Safe to call when setup never happened.
fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        cursor::Show
    );
    raw.and(screen)
}

/// Runs the terminal UI until the user quits.
#[instrument(skip_all)]
pub async fn run_tui(settings: &Settings) -> Result<()> {
    info!("Starting rewind TUI");

    let guard = TerminalGuard::enable()?;
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(*settings.language(), *settings.sort_order());
    let res = run_app(&mut terminal, &mut app).await;
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "UI loop error");
    }
    info!(moves = app.game().history().len() - 1, "Leaving rewind TUI");
    res
}

/// Draw, then apply at most one input event, until quit.
async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        let mut area = Rect::default();
        terminal.draw(|f| {
            area = f.area();
            draw(f, app);
        })?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                // Skip key release events (crossterm fires both press and release).
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if app.handle_key(key) == Control::Quit {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse, area),
                _ => {}
            }
        }

        sleep(Duration::from_millis(10)).await;
    }
}
