use std::io::{BufRead, Write};

use itertools::Itertools;
use log::{debug, info, warn};
use thiserror::Error;

use crate::{Board, MoveLabel};

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("could not talk to the terminal: {0}")]
    Io(#[from] std::io::Error),
    #[error("input closed before the game ended")]
    InputClosed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleArgs {
    pub show_moves: bool,
    pub prompt: String,
}

impl Default for ConsoleArgs {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleArgs {
    const DEFAULT_SHOW_MOVES: bool = true;
    const DEFAULT_PROMPT: &'static str = "Enter your move: ";

    pub fn new() -> Self {
        Self {
            show_moves: Self::DEFAULT_SHOW_MOVES,
            prompt: Self::DEFAULT_PROMPT.to_string(),
        }
    }

    // loads environment variables or uses default values if not set
    pub fn from_env() -> Self {
        let show_moves = std::env::var("TICTACTOE_SHOW_MOVES")
            .ok()
            .and_then(|x| x.parse().ok())
            .unwrap_or(Self::DEFAULT_SHOW_MOVES);
        let prompt = std::env::var("TICTACTOE_PROMPT")
            .unwrap_or_else(|_| Self::DEFAULT_PROMPT.to_string());

        Self { show_moves, prompt }
    }
}

/// Plays one game over a line-based terminal.
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
    args: ConsoleArgs,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, args: ConsoleArgs) -> Self {
        Self {
            input,
            output,
            args,
        }
    }

    /// Runs the prompt loop until the game is won or drawn and returns the
    /// final board. Rejected moves are reported and asked for again.
    pub fn run(&mut self) -> Result<Board, ConsoleError> {
        writeln!(self.output, "Welcome to TicTacToe!")?;
        if self.args.show_moves {
            writeln!(
                self.output,
                "Valid moves: {}",
                MoveLabel::ALL.iter().join(", ")
            )?;
        }
        writeln!(self.output)?;

        let mut board = Board::new();
        loop {
            write!(self.output, "{}", board)?;
            let state = board.status();
            writeln!(self.output, "{}", state)?;
            if !state.is_in_progress() {
                info!("game over: {}", state);
                return Ok(board);
            }

            let line = self.read_move()?;
            match board.apply_move(line.trim()) {
                Ok(()) => debug!("accepted {:?}", line.trim()),
                Err(err) => {
                    warn!("rejected move {:?}: {}", line.trim(), err);
                    writeln!(self.output, "Error: {}", err)?;
                    writeln!(self.output, "Please try again.")?;
                    writeln!(self.output)?;
                }
            }
        }
    }

    fn read_move(&mut self) -> Result<String, ConsoleError> {
        write!(self.output, "{}", self.args.prompt)?;
        self.output.flush()?;

        // bytes that are not UTF-8 become an unknown label instead of an I/O failure
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{GameData, GameState, Player};
    use std::io::Cursor;

    fn run_game(
        input: impl AsRef<[u8]>,
        args: ConsoleArgs,
    ) -> (Result<Board, ConsoleError>, String) {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut output = Vec::new();
        let result = Console::new(Cursor::new(input.as_ref()), &mut output, args).run();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn plays_to_a_win() {
        let input = "upper left\nmiddle left\nupper center\nmiddle right\nupper right\n";
        let (result, output) = run_game(input, ConsoleArgs::new());

        let board = result.unwrap();
        assert_eq!(board.status(), GameState::Won { winner: Player::X });
        assert!(output.starts_with("Welcome to TicTacToe!\nValid moves: upper left, upper center, upper right, middle left, center, middle right, lower left, lower center, lower right\n\n"));
        assert!(output.ends_with(concat!(
            " X | X | X \n",
            "-----------\n",
            " O |   | O \n",
            "-----------\n",
            "   |   |   \n",
            "X has won\n",
        )));
        assert_eq!(output.matches("Enter your move: ").count(), 5);
    }

    #[test]
    fn reprompts_after_rejected_moves() {
        let input = "  center  \ncenter\nnowhere\nupper left\n";
        let (result, output) = run_game(input, ConsoleArgs::new());

        // the game is still going when input runs out
        assert!(matches!(result, Err(ConsoleError::InputClosed)));
        assert!(output.contains("Error: That spot is taken.\nPlease try again.\n"));
        assert!(output.contains("Error: That's not a valid move.\nPlease try again.\n"));
        assert_eq!(output.matches("O's turn").count(), 3);
        assert_eq!(output.matches("Enter your move: ").count(), 5);
    }

    #[test]
    fn plays_to_a_draw() {
        let moves = [
            "upper left",
            "upper center",
            "upper right",
            "center",
            "middle left",
            "middle right",
            "lower center",
            "lower left",
            "lower right",
        ];
        let input = moves.join("\n");
        let (result, output) = run_game(&input, ConsoleArgs::new());

        let board = result.unwrap();
        assert_eq!(board.status(), GameState::Draw);
        assert_eq!(
            GameData::from(&board).moves,
            moves
                .iter()
                .map(|m| m.parse::<MoveLabel>().unwrap())
                .collect::<Vec<_>>()
        );
        assert!(output.ends_with("Cat's Game\n"));
    }

    #[test]
    fn custom_args() {
        let args = ConsoleArgs {
            show_moves: false,
            prompt: "> ".to_string(),
        };
        let (result, output) = run_game("", args);

        assert!(matches!(result, Err(ConsoleError::InputClosed)));
        assert!(!output.contains("Valid moves"));
        assert!(output.ends_with("X's turn\n> "));
    }

    #[test]
    fn non_utf8_line_is_an_invalid_move() {
        let mut input = b"center\n".to_vec();
        input.extend_from_slice(&[0xff, 0xfe, b'\n']);
        input.extend_from_slice(b"upper left\n");
        let (result, output) = run_game(input, ConsoleArgs::new());

        assert!(
            matches!(result, Err(ConsoleError::InputClosed)),
            "expected the game to continue until input ran out, got {:?}",
            result
        );
        assert_eq!(
            output
                .matches("Error: That's not a valid move.\nPlease try again.\n")
                .count(),
            1
        );
        // upper left was still played by O after the rejected line
        assert!(output.contains(concat!(
            " O |   |   \n",
            "-----------\n",
            "   | X |   \n",
        )));
        assert!(output.ends_with("X's turn\nEnter your move: "));
    }

    // all environment cases live in one test so they never race each other
    #[test]
    fn args_from_env() {
        std::env::remove_var("TICTACTOE_SHOW_MOVES");
        std::env::remove_var("TICTACTOE_PROMPT");
        assert_eq!(ConsoleArgs::from_env(), ConsoleArgs::new());
        assert!(ConsoleArgs::from_env().show_moves);
        assert_eq!(ConsoleArgs::from_env().prompt, "Enter your move: ");

        std::env::set_var("TICTACTOE_SHOW_MOVES", "false");
        std::env::set_var("TICTACTOE_PROMPT", "> ");
        assert_eq!(
            ConsoleArgs::from_env(),
            ConsoleArgs {
                show_moves: false,
                prompt: "> ".to_string(),
            }
        );

        std::env::set_var("TICTACTOE_SHOW_MOVES", "sometimes");
        std::env::remove_var("TICTACTOE_PROMPT");
        assert_eq!(
            ConsoleArgs::from_env(),
            ConsoleArgs::new(),
            "unparsable values must fall back to the defaults"
        );

        std::env::remove_var("TICTACTOE_SHOW_MOVES");
    }
}
