use core::ops::ControlFlow;

use serde::{Deserialize, Serialize};

use crate::*;
pub use input::*;
pub use menu::*;

mod input;
mod menu;

/// Top-level screen of the application.
///
/// Valid transitions:
/// - Menu -> InGame
/// - InGame -> GameOver
/// - InGame -> GameWon
/// - InGame/GameOver/GameWon -> Menu (through the pause menu)
/// - any -> Terminated
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppState {
    /// Difficulty selection, holding the highlighted preset.
    Menu(Difficulty),
    InGame,
    /// A mine was revealed.
    GameOver,
    /// Every safe cell was revealed.
    GameWon,
    /// No further input is accepted.
    Terminated,
}

impl AppState {
    /// States that own a board.
    pub const fn has_game(self) -> bool {
        matches!(self, Self::InGame | Self::GameOver | Self::GameWon)
    }

    pub const fn is_terminated(self) -> bool {
        matches!(self, Self::Terminated)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::Menu(Difficulty::default())
    }
}

/// A board being played and the cursor moving over it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    difficulty: Difficulty,
    board: Board,
    cursor: Cursor,
}

impl Game {
    pub fn new(difficulty: Difficulty, generator: impl MineGenerator) -> Result<Self> {
        let config = difficulty.config();
        let mut board = Board::new(&config)?;
        board.setup(config.mine_percent, generator);
        Ok(Self {
            difficulty,
            board,
            cursor: Cursor::default(),
        })
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }
}

/// Owns everything the control loop works on and turns inputs into state transitions.
///
/// The renderer only ever gets a shared reference to this.
#[derive(Debug)]
pub struct App<G = RandomMineGenerator> {
    state: AppState,
    overlay: Option<Overlay>,
    game: Option<Game>,
    generator: G,
}

impl App<RandomMineGenerator> {
    pub fn new(seed: u64) -> Self {
        Self::with_generator(RandomMineGenerator::new(seed))
    }
}

impl<G: MineGenerator> App<G> {
    pub fn with_generator(generator: G) -> Self {
        Self {
            state: AppState::default(),
            overlay: None,
            game: None,
            generator,
        }
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn overlay(&self) -> Option<Overlay> {
        self.overlay
    }

    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    pub fn is_terminated(&self) -> bool {
        self.state.is_terminated()
    }

    /// Processes one input. Breaks once the application is terminated.
    pub fn handle(&mut self, input: Input) -> ControlFlow<()> {
        if self.state.is_terminated() {
            return ControlFlow::Break(());
        }

        match input {
            Input::Quit => self.terminate(),
            Input::Resize => log::debug!("Window resized."),
            _ => match (self.overlay, self.state) {
                (Some(overlay), _) => self.handle_overlay(overlay, input),
                (None, AppState::Menu(selection)) => self.handle_menu(selection, input),
                (None, AppState::InGame) => self.handle_in_game(input),
                (None, AppState::GameOver | AppState::GameWon) => self.open_pause_menu(),
                (None, AppState::Terminated) => {}
            },
        }

        if self.state.is_terminated() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    fn handle_menu(&mut self, selection: Difficulty, input: Input) {
        match input {
            Input::Up => self.set_state(AppState::Menu(selection.prev())),
            Input::Down => self.set_state(AppState::Menu(selection.next())),
            Input::Activate => self.start_game(selection),
            _ => {}
        }
    }

    fn start_game(&mut self, difficulty: Difficulty) {
        match Game::new(difficulty, &mut self.generator) {
            Ok(game) => {
                log::info!(
                    "Starting {} game, {:?} board with {} mines",
                    difficulty.name(),
                    game.board.size(),
                    game.board.mine_count()
                );
                self.game = Some(game);
                self.set_state(AppState::InGame);
            }
            Err(err) => log::error!("Cannot start {} game: {}", difficulty.name(), err),
        }
    }

    fn handle_in_game(&mut self, input: Input) {
        if input == Input::Escape {
            self.open_pause_menu();
            return;
        }

        let Some(game) = self.game.as_mut() else {
            log::error!("In game without a board, back to the menu");
            self.set_state(AppState::default());
            return;
        };
        if let Some(delta) = input.direction() {
            game.cursor.move_by(delta, game.board.size());
            return;
        }

        let coords = game.cursor.position();
        let board_changed = match input {
            Input::Activate => {
                let outcome = game.board.reveal(coords);
                if let RevealOutcome::Revealed { cells } = outcome {
                    log::info!("Revealed {} cells from {:?}", cells, coords);
                }
                outcome.has_update()
            }
            Input::ToggleFlag => game.board.toggle_flag(coords).has_update(),
            Input::ToggleQuestion => game.board.toggle_question(coords).has_update(),
            _ => false,
        };
        if !board_changed {
            log::trace!("{:?} left the board at {:?} unchanged", input, coords);
            return;
        }

        match game.board.verdict() {
            Verdict::Lost => self.set_state(AppState::GameOver),
            Verdict::Won => self.set_state(AppState::GameWon),
            Verdict::Ongoing => {}
        }
    }

    fn handle_overlay(&mut self, overlay: Overlay, input: Input) {
        match (overlay, input) {
            (Overlay::Manual, _) => self.set_overlay(Some(Overlay::Pause(PauseSelection::Manual))),
            (Overlay::Pause(selection), Input::Up) => {
                self.set_overlay(Some(Overlay::Pause(selection.prev())))
            }
            (Overlay::Pause(selection), Input::Down) => {
                self.set_overlay(Some(Overlay::Pause(selection.next())))
            }
            (Overlay::Pause(_), Input::Escape) => self.set_overlay(None),
            (Overlay::Pause(selection), Input::Activate) => {
                log::info!("`{}` validated.", selection.label());
                self.run_pause_command(selection)
            }
            (Overlay::Pause(_), _) => {}
        }
    }

    fn run_pause_command(&mut self, selection: PauseSelection) {
        match selection {
            PauseSelection::Resume => self.set_overlay(None),
            PauseSelection::NewGame => {
                let difficulty = self
                    .game
                    .take()
                    .map(|game| game.difficulty)
                    .unwrap_or_default();
                self.set_overlay(None);
                self.set_state(AppState::Menu(difficulty));
            }
            PauseSelection::Manual => self.set_overlay(Some(Overlay::Manual)),
            PauseSelection::Quit => self.terminate(),
        }
    }

    fn open_pause_menu(&mut self) {
        if self.state.has_game() {
            self.set_overlay(Some(Overlay::Pause(PauseSelection::default())));
        }
    }

    fn terminate(&mut self) {
        self.overlay = None;
        self.game = None;
        self.set_state(AppState::Terminated);
    }

    fn set_state(&mut self, state: AppState) {
        if self.state != state {
            log::debug!("State {:?} -> {:?}", self.state, state);
            self.state = state;
        }
    }

    fn set_overlay(&mut self, overlay: Option<Overlay>) {
        log::debug!("Overlay {:?} -> {:?}", self.overlay, overlay);
        self.overlay = overlay;
    }
}
