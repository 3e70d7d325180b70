//! Minesweeper engine driving the terminal game: board setup, flood-fill reveal, markers, win/loss
//! evaluation and the menu/game/pause state machine.

#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use app::*;
pub use board::*;
pub use cursor::*;
pub use error::*;
pub use generator::*;
pub use tile::*;
pub use types::*;
pub use verdict::*;

mod app;
mod board;
mod cursor;
mod engine;
mod error;
mod generator;
mod tile;
mod types;
mod verdict;

/// Largest supported board width.
pub const MAX_WIDTH: Coord = 64;
/// Largest supported board height.
pub const MAX_HEIGHT: Coord = 64;

/// Board dimensions and mine density, validated against the board capacity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mine_percent: u8,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mine_percent: u8) -> Self {
        Self { size, mine_percent }
    }

    pub fn new(size: Coord2, mine_percent: u8) -> Result<Self> {
        let config = Self::new_unchecked(size, mine_percent);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let (width, height) = self.size;
        if width == 0 || height == 0 {
            return Err(GameError::EmptyBoard);
        }
        if width > MAX_WIDTH || height > MAX_HEIGHT {
            return Err(GameError::BoardTooLarge { width, height });
        }
        if self.mine_percent > 100 {
            return Err(GameError::InvalidDensity(self.mine_percent));
        }
        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    /// Mines requested by the density, rounded down.
    pub const fn mine_count(&self) -> CellCount {
        mines_for_density(self.total_cells(), self.mine_percent)
    }
}

pub(crate) const fn mines_for_density(total_cells: CellCount, percent: u8) -> CellCount {
    (total_cells as u32 * percent as u32 / 100) as CellCount
}

/// The three built-in presets offered by the difficulty menu.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    const MINE_PERCENT: u8 = 10;

    pub const fn config(self) -> GameConfig {
        use Difficulty::*;
        let size = match self {
            Easy => (9, 5),
            Medium => (17, 9),
            Hard => (31, 15),
        };
        GameConfig::new_unchecked(size, Self::MINE_PERCENT)
    }

    pub const fn name(self) -> &'static str {
        use Difficulty::*;
        match self {
            Easy => "Easy",
            Medium => "Medium",
            Hard => "Hard",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Next preset in menu order, wrapping from the last to the first.
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous preset in menu order, wrapping from the first to the last.
    pub const fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Medium
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    /// `cells` were newly revealed, the targeted one included.
    Revealed { cells: CellCount },
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Revealed { .. } => true,
        }
    }
}
