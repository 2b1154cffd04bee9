use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("coordinates out of bounds")]
    OutOfBounds,
    #[error("mine count must be positive and below the cell count")]
    BadMineCount,
    #[error("game already ended, no new moves are accepted")]
    GameOver,
}

pub type Result<T> = core::result::Result<T, GameError>;
