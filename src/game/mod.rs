//! Core Othello game logic: board representation, the capture rule, and the
//! turn state machine with automatic passes and end-of-game detection.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, MoveError as PlaceError, BOARD_SIZE, DIRECTIONS};
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveError};

/// Format a legal-move list the way the console variants print it:
/// `[(2, 3), (3, 2)]`.
pub fn format_moves(moves: &[(usize, usize)]) -> String {
    let pairs = moves
        .iter()
        .map(|&(x, y)| format!("({}, {})", x, y))
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_moves() {
        assert_eq!(format_moves(&[]), "[]");
        assert_eq!(format_moves(&[(2, 3)]), "[(2, 3)]");
        assert_eq!(format_moves(&[(2, 3), (3, 2)]), "[(2, 3), (3, 2)]");
    }
}
