use std::io;

use log::{debug, error, info};
use tictactoe::{Console, ConsoleArgs, GameData};

fn main() {
    env_logger::init();

    let args = ConsoleArgs::from_env();
    debug!("console args: {:?}", args);

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock(), args);
    match console.run() {
        Ok(board) => {
            info!("finished after {} moves: {}", board.moves().len(), board.status());
            match serde_json::to_string(&GameData::from(&board)) {
                Ok(transcript) => debug!("transcript: {}", transcript),
                Err(err) => error!("could not serialize transcript: {}", err),
            }
        }
        Err(err) => {
            error!("{}", err);
            std::process::exit(1);
        }
    }
}
