use alloc::string::String;
use thiserror::Error;

use crate::Coord;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates are outside the board")]
    OutOfBounds,
    #[error("Unknown difficulty {0:?}, expected one of easy, medium, hard, expert")]
    InvalidDifficulty(String),
    #[error("Board dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: Coord, height: Coord },
}

pub type Result<T> = core::result::Result<T, GameError>;
