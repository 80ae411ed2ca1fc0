//! Terminal setup and event loop for perch.
//!
//! Handles setup/teardown of raw mode and the alternate screen, and runs
//! the blocking event loop: redraw, wait for one event, dispatch. The loop
//! blocks on input between frames, so idle CPU usage is zero.

use crate::app::{AppState, KeypressResult};
use crate::ui;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::Rect;
use std::io;

/// Initializes the terminal in raw mode and the alternate screen and runs
/// the main event loop.
///
/// Blocks until quit. The terminal is restored whether the loop returns
/// normally or with an error; a panic is covered by the hook installed in
/// `main`.
pub fn run_terminal(app: &mut AppState) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = event_loop(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, Show)?;
    result
}

/// Main event loop: consume the resize flag, reload if requested, draw,
/// block for one event, dispatch. Returns on quit.
fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut AppState) -> io::Result<()>
where
    io::Error: From<<B as Backend>::Error>,
{
    loop {
        if app.take_resize() {
            let (width, height) = probe_size();
            terminal.resize(Rect::new(0, 0, width, height))?;
            app.request_refresh();
        }

        if app.take_refresh() {
            app.reload();
        }

        terminal.draw(|f| ui::render(f, app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let KeypressResult::Quit = app.handle_keypress(key) {
                    break;
                }
            }
            // Recorded as a flag only; consumed at the top of the next
            // iteration, never mutating session state from here.
            Event::Resize(_, _) => app.note_resize(),
            _ => {}
        }
    }
    Ok(())
}

/// Window-size query with the documented 80x24 fallback for terminals
/// that cannot report their size.
fn probe_size() -> (u16, u16) {
    crossterm::terminal::size().unwrap_or((80, 24))
}
