use itertools::Itertools;
use log::debug;
use ndarray::Array2;
use std::fmt::Display;

use crate::{
    generic::boards::check_matrix, Cell, Coordinates, GameData, GameState, Move, MoveError,
    MoveLabel, Player,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    data: Array2<Cell>,
    turn: Player,
    moves: Vec<Move>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<GameData> for Board {
    type Error = MoveError;

    /// Replays a recorded game from an empty board. Every move goes through
    /// the regular validation, so a corrupt transcript is rejected.
    fn try_from(game_data: GameData) -> Result<Self, Self::Error> {
        let mut board = Board::new();
        for label in game_data.moves {
            board.insert_move(label)?;
        }
        Ok(board)
    }
}

impl From<&Board> for GameData {
    fn from(board: &Board) -> Self {
        GameData {
            moves: board.moves.iter().map(|m| m.label).collect(),
        }
    }
}

impl Board {
    pub const SIZE: Coordinates = (3, 3);

    pub fn new() -> Self {
        Self {
            data: Array2::from_elem((Self::SIZE.0, Self::SIZE.1), Cell::Empty),
            turn: Player::X,
            moves: Vec::new(),
        }
    }

    /// The player whose move is next.
    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn last_move(&self) -> Option<MoveLabel> {
        self.moves.last().map(|last_move| last_move.label)
    }

    /// All moves applied so far, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn cells(&self) -> &Array2<Cell> {
        &self.data
    }

    pub fn cell(&self, label: MoveLabel) -> Cell {
        self.data[label.coordinates()]
    }

    pub fn available_moves(&self) -> Vec<MoveLabel> {
        MoveLabel::ALL
            .into_iter()
            .filter(|label| self.cell(*label).is_empty())
            .collect()
    }

    pub fn status(&self) -> GameState {
        check_matrix(&self.data, self.turn)
    }

    /// Parses `label` and places the current player's mark on the named cell.
    pub fn apply_move(&mut self, label: &str) -> Result<(), MoveError> {
        let label = label.parse::<MoveLabel>()?;
        self.insert_move(label)
    }

    pub fn insert_move(&mut self, label: MoveLabel) -> Result<(), MoveError> {
        self.validate_move(label)?;
        let new_move = Move::new(label, self.turn);
        self.render_move(&new_move);
        self.moves.push(new_move);
        self.turn = self.turn.other();
        debug!(
            "{} played {}, {} to move",
            new_move.player, new_move.label, self.turn
        );
        Ok(())
    }

    pub fn validate_move(&self, label: MoveLabel) -> Result<(), MoveError> {
        // CellTaken
        if !self.cell(label).is_empty() {
            return Err(MoveError::CellTaken);
        }
        Ok(())
    }

    fn render_move(&mut self, m: &Move) {
        self.data[m.label.coordinates()] = Cell::from(m.player);
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let separator = format!("{}\n", "-".repeat(11));
        let rows = self
            .data
            .rows()
            .into_iter()
            .map(|row| format!(" {} \n", row.iter().join(" | ")))
            .join(&separator);
        write!(f, "{}", rows)
    }
}
