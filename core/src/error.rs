use thiserror::Error;

use crate::{Coord, MAX_HEIGHT, MAX_WIDTH};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board must be at least 1x1")]
    EmptyBoard,
    #[error("Board {width}x{height} exceeds the {}x{} capacity", MAX_WIDTH, MAX_HEIGHT)]
    BoardTooLarge { width: Coord, height: Coord },
    #[error("Mine density {0}% is above 100%")]
    InvalidDensity(u8),
}

pub type Result<T> = core::result::Result<T, GameError>;
