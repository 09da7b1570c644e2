mod boards;
mod cell;
mod error;
mod game_data;
mod gamestate;
mod r#move;
mod player;

pub use boards::{check_matrix, Board};
pub use cell::Cell;
pub use error::MoveError;
pub use game_data::GameData;
pub use gamestate::GameState;
pub use player::Player;
pub use r#move::{Coordinates, Move, MoveLabel};
