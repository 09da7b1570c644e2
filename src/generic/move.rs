use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{MoveError, Player};

pub type Coordinates = (usize, usize);

/// One of the nine named positions on the board.
///
/// The variants are declared in row-major order, so the index of a label in
/// [`MoveLabel::ALL`] maps to `(index / 3, index % 3)`.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MoveLabel {
    #[serde(rename = "upper left")]
    UpperLeft,
    #[serde(rename = "upper center")]
    UpperCenter,
    #[serde(rename = "upper right")]
    UpperRight,
    #[serde(rename = "middle left")]
    MiddleLeft,
    #[serde(rename = "center")]
    Center,
    #[serde(rename = "middle right")]
    MiddleRight,
    #[serde(rename = "lower left")]
    LowerLeft,
    #[serde(rename = "lower center")]
    LowerCenter,
    #[serde(rename = "lower right")]
    LowerRight,
}

impl MoveLabel {
    pub const ALL: [MoveLabel; 9] = [
        MoveLabel::UpperLeft,
        MoveLabel::UpperCenter,
        MoveLabel::UpperRight,
        MoveLabel::MiddleLeft,
        MoveLabel::Center,
        MoveLabel::MiddleRight,
        MoveLabel::LowerLeft,
        MoveLabel::LowerCenter,
        MoveLabel::LowerRight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoveLabel::UpperLeft => "upper left",
            MoveLabel::UpperCenter => "upper center",
            MoveLabel::UpperRight => "upper right",
            MoveLabel::MiddleLeft => "middle left",
            MoveLabel::Center => "center",
            MoveLabel::MiddleRight => "middle right",
            MoveLabel::LowerLeft => "lower left",
            MoveLabel::LowerCenter => "lower center",
            MoveLabel::LowerRight => "lower right",
        }
    }

    /// Returns the `(row, column)` of the cell this label names.
    /// Example: `center` is index 4 -> (4 / 3, 4 % 3) = (1, 1)
    pub fn coordinates(&self) -> Coordinates {
        let index = *self as usize;
        (index / 3, index % 3)
    }
}

impl Display for MoveLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MoveLabel {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MoveLabel::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or(MoveError::InvalidMove)
    }
}

/// A move that has been applied to a board.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub label: MoveLabel,
    pub player: Player,
}

impl Move {
    pub fn new(label: MoveLabel, player: Player) -> Self {
        Self { label, player }
    }
}
