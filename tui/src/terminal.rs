use std::io::{self, BufWriter, Stdout, Write};

use crossterm::cursor::Show;
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use termsweeper_core::{App, MineGenerator};

use crate::render;

/// Raw-mode alternate screen owned for the lifetime of the game.
///
/// Dropping it hands the terminal back in the state it was found, also when unwinding.
pub(crate) struct TerminalSession {
    out: BufWriter<Stdout>,
}

impl TerminalSession {
    pub(crate) fn start() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut session = Self {
            out: BufWriter::new(io::stdout()),
        };
        execute!(session.out, EnterAlternateScreen)?;
        Ok(session)
    }

    /// Draws one frame sized after the current terminal.
    pub(crate) fn draw<G: MineGenerator>(&mut self, app: &App<G>) -> io::Result<()> {
        let size = terminal::size()?;
        render::draw(&mut self.out, app, size)?;
        self.out.flush()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = execute!(self.out, Show, LeaveAlternateScreen) {
            log::warn!("Could not leave the alternate screen: {}", err);
        }
        if let Err(err) = terminal::disable_raw_mode() {
            log::warn!("Could not disable raw mode: {}", err);
        }
    }
}
