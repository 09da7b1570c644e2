use crate::MoveLabel;
use serde::{Deserialize, Serialize};

/// Transcript of a game: the labels played, oldest first.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameData {
    pub moves: Vec<MoveLabel>,
}

impl Default for GameData {
    fn default() -> Self {
        Self::new()
    }
}

impl GameData {
    pub fn new() -> Self {
        Self { moves: vec![] }
    }

    pub fn add_move(&mut self, label: MoveLabel) {
        self.moves.push(label);
    }
}
