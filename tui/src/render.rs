use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use termsweeper_core::*;

const HELP_LINE: &str = "Press `Esc` to display the menu.";

const HIDDEN: char = '▒';
const MINE: char = 'M';
const FLAG: char = 'X';
const QUESTION: char = 'O';

const MENU_SIZE: (u16, u16) = (30, 14);
const PAUSE_MENU_SIZE: (u16, u16) = (31, 15);

const MANUAL: &[&str] = &[
    "MANUAL",
    "======",
    "",
    "Arrows       move the cursor",
    "Space/Enter  reveal the cell",
    "x            toggle a mine flag",
    "o            toggle a question mark",
    "Esc          open the menu",
    "q / Ctrl-C   quit",
    "",
    "Press any key to go back.",
];

/// Rectangle on screen, positions inside it are relative to its top-left corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Window {
    left: u16,
    top: u16,
    width: u16,
    height: u16,
}

impl Window {
    fn centered((center_x, center_y): (u16, u16), (width, height): (u16, u16)) -> Self {
        Self {
            left: center_x.saturating_sub(width / 2),
            top: center_y.saturating_sub(height / 2),
            width,
            height,
        }
    }

    fn absolute(&self, x: u16, y: u16) -> (u16, u16) {
        (self.left.saturating_add(x), self.top.saturating_add(y))
    }

    fn print(&self, out: &mut impl Write, x: u16, y: u16, text: &str) -> io::Result<()> {
        let (column, row) = self.absolute(x, y);
        queue!(out, MoveTo(column, row), Print(text))
    }

    /// Box-drawn border, the inside is blanked so nothing underneath shows through.
    fn frame(&self, out: &mut impl Write) -> io::Result<()> {
        if self.width < 2 || self.height < 2 {
            return Ok(());
        }
        let inner = usize::from(self.width - 2);
        let horizontal = "─".repeat(inner);
        self.print(out, 0, 0, &format!("┌{horizontal}┐"))?;
        for y in 1..self.height - 1 {
            self.print(out, 0, y, &format!("│{:inner$}│", ""))?;
        }
        self.print(out, 0, self.height - 1, &format!("└{horizontal}┘"))
    }
}

/// Draws one full frame of `app` on a terminal of `size` columns and rows.
///
/// Only reads from `app`. The caller flushes `out`.
pub(crate) fn draw<G: MineGenerator>(
    out: &mut impl Write,
    app: &App<G>,
    (columns, rows): (u16, u16),
) -> io::Result<()> {
    let center = (columns / 2, rows / 2);
    queue!(out, Hide, Clear(ClearType::All), MoveTo(0, 0), Print(HELP_LINE))?;

    let mut cursor = None;
    match (app.overlay(), app.state(), app.game()) {
        (Some(Overlay::Pause(selection)), _, _) => draw_pause_menu(out, center, selection)?,
        (Some(Overlay::Manual), _, _) => draw_manual(out, center)?,
        (None, AppState::Menu(selection), _) => draw_difficulty_menu(out, center, selection)?,
        (None, AppState::InGame, Some(game)) => {
            cursor = Some(draw_game(out, center, game, false)?);
        }
        (None, AppState::GameOver, Some(game)) => {
            draw_game(out, center, game, true)?;
            draw_banner(out, center, " GAME OVER ")?;
        }
        (None, AppState::GameWon, Some(game)) => {
            draw_game(out, center, game, true)?;
            draw_banner(out, center, " YOU WON ")?;
        }
        (None, state, _) => log::trace!("Nothing to draw for {:?}", state),
    }

    if let Some((column, row)) = cursor {
        queue!(out, MoveTo(column, row), Show)?;
    }
    Ok(())
}

fn draw_difficulty_menu(
    out: &mut impl Write,
    center: (u16, u16),
    selection: Difficulty,
) -> io::Result<()> {
    let window = Window::centered(center, MENU_SIZE);
    window.frame(out)?;

    let title_x = window.width / 2 - 11;
    window.print(out, title_x, 3, "CHOOSE YOUR DIFFICULTY")?;
    window.print(out, title_x, 4, "======================")?;

    for difficulty in Difficulty::ALL {
        window.print(out, 12, 6 + 2 * difficulty.index() as u16, difficulty.name())?;
    }
    window.print(out, 10, 6 + 2 * selection.index() as u16, ">")
}

fn draw_pause_menu(
    out: &mut impl Write,
    center: (u16, u16),
    selection: PauseSelection,
) -> io::Result<()> {
    let window = Window::centered(center, PAUSE_MENU_SIZE);
    window.frame(out)?;

    let title = "MENU";
    let title_x = (window.width - title.len() as u16) / 2;
    window.print(out, title_x, 2, title)?;
    window.print(out, title_x, 3, "====")?;

    for entry in PauseSelection::ALL {
        window.print(out, 12, 5 + 2 * entry.index() as u16, entry.label())?;
    }
    window.print(out, 9, 5 + 2 * selection.index() as u16, ">")
}

fn draw_manual(out: &mut impl Write, center: (u16, u16)) -> io::Result<()> {
    let widest = MANUAL.iter().map(|line| line.len()).max().unwrap_or_default() as u16;
    let window = Window::centered(center, (widest + 4, MANUAL.len() as u16 + 4));
    window.frame(out)?;
    for (y, line) in MANUAL.iter().enumerate() {
        window.print(out, 2, 2 + y as u16, line)?;
    }
    Ok(())
}

fn draw_banner(out: &mut impl Write, center: (u16, u16), text: &str) -> io::Result<()> {
    let window = Window::centered(center, (text.chars().count() as u16 + 2, 3));
    window.frame(out)?;
    window.print(out, 1, 1, text)
}

/// Draws the framed board and a status line, returning where the terminal cursor should sit.
fn draw_game(
    out: &mut impl Write,
    center: (u16, u16),
    game: &Game,
    show_mines: bool,
) -> io::Result<(u16, u16)> {
    let board = game.board();
    let (width, height) = board.size();
    let window = Window::centered(center, (u16::from(width) + 2, u16::from(height) + 2));
    window.frame(out)?;

    for (y, row) in board_rows(board, show_mines).iter().enumerate() {
        window.print(out, 1, 1 + y as u16, row)?;
    }

    let status = format!(
        "Mines: {}  Flags: {}",
        board.mine_count(),
        board.flag_count()
    );
    window.print(out, 0, window.height, &status)?;

    let (x, y) = game.cursor().position();
    Ok(window.absolute(1 + u16::from(x), 1 + u16::from(y)))
}

fn board_rows(board: &Board, show_mines: bool) -> Vec<String> {
    let (width, height) = board.size();
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| cell_glyph(board, (x, y), show_mines))
                .collect()
        })
        .collect()
}

fn cell_glyph(board: &Board, coords: Coord2, show_mines: bool) -> char {
    let cell = board.cell_at(coords);
    if board.is_revealed(coords) || (show_mines && cell.is_mine()) {
        return match cell {
            Cell::Empty => ' ',
            Cell::Mine => MINE,
            Cell::Adjacent(count) => char::from(b'0' + count),
        };
    }
    match board.marker_at(coords) {
        Marker::Flagged => FLAG,
        Marker::QuestionMarked => QUESTION,
        Marker::None => HIDDEN,
    }
}
