use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates outside the board")]
    OutOfBounds,
    #[error("Mine count must be smaller than the cell count")]
    TooManyMines,
}

pub type Result<T> = core::result::Result<T, GameError>;
