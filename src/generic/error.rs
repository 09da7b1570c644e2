use thiserror::Error;

/// Reasons a move is rejected. A rejected move leaves the board untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("That's not a valid move.")]
    InvalidMove,
    #[error("That spot is taken.")]
    CellTaken,
}
