use crate::types::{Color, Position};

pub type OthelloResult<T> = Result<T, OthelloError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OthelloError {
    #[error("position ({row}, {col}) is outside the 8x8 board")]
    OutOfBounds { row: u8, col: u8 },
    #[error("{color} cannot play at {position}")]
    IllegalMove { position: Position, color: Color },
    #[error("it is {expected}'s turn, not {got}'s")]
    OutOfTurn { expected: Color, got: Color },
    #[error("game is already over")]
    GameOver,
}
