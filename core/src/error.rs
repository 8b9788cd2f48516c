use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates are outside the grid")]
    OutOfBounds,
    #[error("Malformed stage, expected exactly one player but found {players}")]
    MalformedStage { players: CellCount },
    #[error("Stage dimensions exceed the supported maximum")]
    StageTooLarge,
    #[error("Stage has no cells")]
    EmptyStage,
    #[error("Session already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
