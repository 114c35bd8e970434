use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Invalid board shape")]
    InvalidShape,
    #[error("Operation requires a two-dimensional board")]
    NotTwoDimensional,
}

pub type Result<T> = core::result::Result<T, GameError>;
