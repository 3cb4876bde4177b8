//! Console front end: board printing (plain or ANSI-colorized) and the
//! blocking coordinate prompt loop.

mod input;
mod render;

pub use input::{read_move, read_move_from};
pub use render::{board_to_string, print_board};

use std::io;

use crate::config::DisplayConfig;
use crate::game::{GameOutcome, GameState};

/// Play a full game on stdin/stdout.
pub fn run(config: &DisplayConfig) -> io::Result<()> {
    let mut state = GameState::initial();

    loop {
        println!();
        println!("Current player: {}", state.current_player().name());
        print_board(state.board(), config);

        if let Some(outcome) = state.outcome() {
            println!("No valid moves for both players. Game over.");
            match outcome {
                GameOutcome::Winner(player) => println!("{} wins!", player.name()),
                GameOutcome::Draw => println!("It's a draw!"),
            }
            return Ok(());
        }

        let legal = state.legal_moves();
        let (x, y) = read_move(&legal)?;

        // The coordinate was validated against the legal set, so this can
        // only fail if the rule engine disagrees with its own move list.
        if let Err(err) = state.apply_move_mut(x as i32, y as i32) {
            println!("Invalid move: {err}");
            continue;
        }

        if let Some(passed) = state.last_pass() {
            println!(
                "No valid moves for {}. Switching to {}.",
                passed.name(),
                passed.other().name()
            );
        }
    }
}
