use std::fmt::Display;

use crate::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Won { winner: Player },
    Draw,
    InProgress { next_player: Player },
}

impl GameState {
    pub fn is_in_progress(&self) -> bool {
        matches!(self, GameState::InProgress { .. })
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameState::Won { winner } => write!(f, "{} has won", winner),
            GameState::Draw => write!(f, "Cat's Game"),
            GameState::InProgress { next_player } => write!(f, "{}'s turn", next_player),
        }
    }
}
