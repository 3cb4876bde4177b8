pub const BOARD_SIZE: usize = 8;

/// The eight compass offsets used by the capture scan.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("coordinate is outside the board")]
    OutOfBounds,
    #[error("cell is already occupied")]
    Occupied,
    #[error("move captures no pieces")]
    NoCapture,
}

impl Board {
    /// Create a board with the standard Othello opening position.
    pub fn new() -> Self {
        let mut board = Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        };
        board.cells[3][3] = Cell::White;
        board.cells[3][4] = Cell::Black;
        board.cells[4][3] = Cell::Black;
        board.cells[4][4] = Cell::White;
        board
    }

    /// Get the cell at a position. `x` is the column, `y` the row;
    /// (0, 0) is the top-left corner.
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[y][x]
    }

    /// Check whether a coordinate pair lies on the board.
    pub fn is_on_board(x: i32, y: i32) -> bool {
        (0..BOARD_SIZE as i32).contains(&x) && (0..BOARD_SIZE as i32).contains(&y)
    }

    /// Count the cells holding the given value.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == cell)
            .count()
    }

    /// Find every direction in which placing `player`'s piece at (x, y)
    /// captures at least one opponent piece.
    ///
    /// Occupied cells never yield capture directions. A direction counts
    /// only when an unbroken run of one or more opponent pieces is
    /// terminated by one of `player`'s own pieces within the board.
    pub fn capture_directions(&self, x: usize, y: usize, player: super::Player) -> Vec<(i32, i32)> {
        let mut captures = Vec::new();

        if self.get(x, y) != Cell::Empty {
            return captures;
        }

        let own = player.to_cell();
        let opponent = player.other().to_cell();

        for &(dx, dy) in &DIRECTIONS {
            let mut opponent_run = 0;

            for step in 1..BOARD_SIZE as i32 {
                let cx = x as i32 + dx * step;
                let cy = y as i32 + dy * step;

                if !Self::is_on_board(cx, cy) {
                    break;
                }

                let cell = self.get(cx as usize, cy as usize);
                if cell == opponent {
                    opponent_run += 1;
                } else {
                    if cell == own && opponent_run > 0 {
                        captures.push((dx, dy));
                    }
                    break;
                }
            }
        }

        captures
    }

    /// List every cell where `player` has a legal move.
    pub fn legal_moves(&self, player: super::Player) -> Vec<(usize, usize)> {
        let mut moves = Vec::new();
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                if !self.capture_directions(x, y, player).is_empty() {
                    moves.push((x, y));
                }
            }
        }
        moves
    }

    /// Place a piece for `player` at (x, y) and flip every captured run.
    ///
    /// The board is left untouched when the move is illegal.
    pub fn place(&mut self, x: i32, y: i32, player: super::Player) -> Result<(), MoveError> {
        if !Self::is_on_board(x, y) {
            return Err(MoveError::OutOfBounds);
        }
        let (x, y) = (x as usize, y as usize);

        if self.get(x, y) != Cell::Empty {
            return Err(MoveError::Occupied);
        }

        let directions = self.capture_directions(x, y, player);
        if directions.is_empty() {
            return Err(MoveError::NoCapture);
        }

        let own = player.to_cell();
        let opponent = player.other().to_cell();
        self.cells[y][x] = own;

        for (dx, dy) in directions {
            // Walk outward flipping opponent pieces; the scan already
            // guarantees an own-color terminator inside the board.
            for step in 1..BOARD_SIZE as i32 {
                let cx = (x as i32 + dx * step) as usize;
                let cy = (y as i32 + dy * step) as usize;
                if self.cells[cy][cx] == opponent {
                    self.cells[cy][cx] = own;
                } else {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Build a board holding only the given pieces.
    #[cfg(test)]
    pub(crate) fn from_pieces(pieces: &[(usize, usize, Cell)]) -> Self {
        let mut board = Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        };
        for &(x, y, cell) in pieces {
            board.cells[y][x] = cell;
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
