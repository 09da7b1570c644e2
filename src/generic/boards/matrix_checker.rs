use crate::{Cell, GameState, Player};
use ndarray::{s, Array2, ArrayView1};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct WinnerRegisterer {
    winner: Option<Player>,
}
impl WinnerRegisterer {
    pub fn register(&mut self, player: Option<Player>) {
        if self.winner.is_none() && player.is_some() {
            self.winner = player;
        }
    }
    pub fn get_winner(&self) -> Option<Player> {
        self.winner
    }
}

/// Checks if a matrix of cells contains a winner
///
/// if one player has all cells in a row, column or diagonal, they win.
/// Lines are scanned rows first (top to bottom), then columns (left to right),
/// then the main diagonal and finally the anti-diagonal. The first complete
/// line found decides the winner.
///
/// Usage:
/// ```
/// use ndarray::array;
/// use tictactoe::{Cell, Player, GameState, check_matrix};
///
/// // O X X
/// // O O O <-- O wins
/// // X O X
/// let matrix = array![
///    [Cell::Occupied{ player: Player::O}, Cell::Occupied{ player: Player::X}, Cell::Occupied{ player: Player::X}],
///    [Cell::Occupied{ player: Player::O}, Cell::Occupied{ player: Player::O}, Cell::Occupied{ player: Player::O}],
///    [Cell::Occupied{ player: Player::X}, Cell::Occupied{ player: Player::O}, Cell::Occupied{ player: Player::X}],
/// ];
///
/// assert_eq!(check_matrix(&matrix, Player::X), GameState::Won{ winner: Player::O});
///
/// ```
///
pub fn check_matrix(matrix: &Array2<Cell>, next_player: Player) -> GameState {
    let mut winner_registerer = WinnerRegisterer::default();

    // check rows
    for row in matrix.rows() {
        winner_registerer.register(get_winner_in_line(row));
    }

    // check columns
    for column in matrix.columns() {
        winner_registerer.register(get_winner_in_line(column));
    }

    // check diagonal
    winner_registerer.register(get_winner_in_line(matrix.diag()));

    // check anti-diagonal
    winner_registerer.register(get_winner_in_line(matrix.slice(s![..;-1, ..]).diag()));

    if let Some(winner) = winner_registerer.get_winner() {
        GameState::Won { winner }
    } else if matrix.iter().all(|cell| !cell.is_empty()) {
        GameState::Draw
    } else {
        GameState::InProgress { next_player }
    }
}

/// Checks if a line of cells is held entirely by one player
///
/// This function is used by check_matrix to check rows, columns and diagonals.
fn get_winner_in_line(line: ArrayView1<Cell>) -> Option<Player> {
    let potential_winner = line.get(0)?.player()?;

    line.iter()
        .all(|cell| cell.player() == Some(potential_winner))
        .then_some(potential_winner)
}
