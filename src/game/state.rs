use super::{board, Board, Cell, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("coordinate is outside the board")]
    OutOfBounds,
    #[error("cell is already occupied")]
    Occupied,
    #[error("move captures no pieces")]
    NoCapture,
    #[error("game is already over")]
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
    last_pass: Option<Player>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::Black, // Black starts
            outcome: None,
            last_pass: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// The player whose turn was skipped by the last applied move, if any.
    pub fn last_pass(&self) -> Option<Player> {
        self.last_pass
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get the legal moves for the current player
    pub fn legal_moves(&self) -> Vec<(usize, usize)> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_moves(self.current_player)
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, x: i32, y: i32) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.apply_move_mut(x, y)?;
        Ok(next)
    }

    /// Apply move mutably (for UI efficiency)
    pub fn apply_move_mut(&mut self, x: i32, y: i32) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        self.board
            .place(x, y, self.current_player)
            .map_err(|e| match e {
                board::MoveError::OutOfBounds => MoveError::OutOfBounds,
                board::MoveError::Occupied => MoveError::Occupied,
                board::MoveError::NoCapture => MoveError::NoCapture,
            })?;

        self.current_player = self.current_player.other();
        self.last_pass = None;
        self.resolve_turn();

        Ok(())
    }

    /// Hand the turn to a player who can move, or end the game.
    ///
    /// A player with no legal moves passes without consuming input; when
    /// neither player can move the outcome is decided by the piece tally.
    fn resolve_turn(&mut self) {
        if !self.board.legal_moves(self.current_player).is_empty() {
            return;
        }

        if self.board.legal_moves(self.current_player.other()).is_empty() {
            self.outcome = Some(self.tally());
        } else {
            self.last_pass = Some(self.current_player);
            self.current_player = self.current_player.other();
        }
    }

    fn tally(&self) -> GameOutcome {
        let black = self.board.count(Cell::Black);
        let white = self.board.count(Cell::White);
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => GameOutcome::Winner(Player::Black),
            std::cmp::Ordering::Less => GameOutcome::Winner(Player::White),
            std::cmp::Ordering::Equal => GameOutcome::Draw,
        }
    }

    /// Build a state from an arbitrary position, resolving passes and
    /// termination the same way a move would.
    #[cfg(test)]
    pub(crate) fn from_board(board: Board, player: Player) -> Self {
        let mut state = GameState {
            board,
            current_player: player,
            outcome: None,
            last_pass: None,
        };
        state.resolve_turn();
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::Black);
        assert!(!state.is_terminal());
        assert_eq!(state.last_pass(), None);
        assert_eq!(state.legal_moves().len(), 4);
    }

    #[test]
    fn test_apply_move_advances_turn() {
        let state = GameState::initial();
        let next = state.apply_move(2, 3).unwrap();

        assert_eq!(next.current_player(), Player::White);
        assert_eq!(next.board().get(2, 3), Cell::Black);
        assert_eq!(next.board().get(3, 3), Cell::Black);
    }

    #[test]
    fn test_illegal_move_leaves_state_unchanged() {
        let state = GameState::initial();

        assert_eq!(state.apply_move(3, 3), Err(MoveError::Occupied));
        assert_eq!(state.apply_move(0, 0), Err(MoveError::NoCapture));
        assert_eq!(state.apply_move(-1, 5), Err(MoveError::OutOfBounds));

        let mut mutated = state;
        assert!(mutated.apply_move_mut(0, 0).is_err());
        assert_eq!(mutated, state);
    }

    #[test]
    fn test_pass_transfers_turn_without_mutation() {
        // After black plays (2, 0), white's lone piece at (2, 7) gives
        // white no legal move while black can still play (3, 7).
        let board = Board::from_pieces(&[
            (0, 0, Cell::Black),
            (1, 0, Cell::White),
            (0, 7, Cell::Black),
            (1, 7, Cell::Black),
            (2, 7, Cell::White),
        ]);
        let mut state = GameState::from_board(board, Player::Black);
        assert_eq!(state.last_pass(), None);

        let before_pieces = (
            state.board().count(Cell::Black),
            state.board().count(Cell::White),
        );
        state.apply_move_mut(2, 0).unwrap();

        assert_eq!(state.last_pass(), Some(Player::White));
        assert_eq!(state.current_player(), Player::Black);
        assert!(!state.is_terminal());
        assert!(state.legal_moves().contains(&(3, 7)));

        // The pass itself placed nothing beyond black's own move.
        assert_eq!(state.board().count(Cell::Black), before_pieces.0 + 2);
        assert_eq!(state.board().count(Cell::White), before_pieces.1 - 1);
    }

    #[test]
    fn test_game_over_when_neither_player_can_move() {
        // Black captures white's only piece; nobody can move afterwards.
        let board = Board::from_pieces(&[(0, 0, Cell::Black), (1, 0, Cell::White)]);
        let mut state = GameState::from_board(board, Player::Black);

        state.apply_move_mut(2, 0).unwrap();

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Black)));
        assert!(state.legal_moves().is_empty());
        assert_eq!(state.apply_move(5, 5), Err(MoveError::GameOver));
    }

    #[test]
    fn test_constructed_stalemate_is_terminal() {
        // Two lone pieces in opposite corners: no captures exist for anyone.
        let board = Board::from_pieces(&[(0, 0, Cell::Black), (7, 7, Cell::White)]);
        let state = GameState::from_board(board, Player::Black);

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_tally_prefers_majority() {
        let board = Board::from_pieces(&[
            (0, 0, Cell::White),
            (1, 0, Cell::White),
            (7, 7, Cell::Black),
        ]);
        let state = GameState::from_board(board, Player::Black);

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::White)));
    }
}
