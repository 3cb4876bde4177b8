use crate::config::AppConfig;
use crate::game::{format_moves, GameOutcome, GameState, MoveError, BOARD_SIZE};
use crossterm::event::{self, Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::Backend, layout::Rect, Terminal};
use std::io;

pub struct App {
    game_state: GameState,
    cursor: (usize, usize),
    board_area: Rect,
    should_quit: bool,
    message: Option<String>,
    config: AppConfig,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        App {
            game_state: GameState::initial(),
            cursor: (3, 3), // Start in the middle
            board_area: Rect::default(),
            should_quit: false,
            message: None,
            config,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard and mouse events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.cursor.0 > 0 {
                    self.cursor.0 -= 1;
                }
            }
            KeyCode::Right => {
                if self.cursor.0 < BOARD_SIZE - 1 {
                    self.cursor.0 += 1;
                }
            }
            KeyCode::Up => {
                if self.cursor.1 > 0 {
                    self.cursor.1 -= 1;
                }
            }
            KeyCode::Down => {
                if self.cursor.1 < BOARD_SIZE - 1 {
                    self.cursor.1 += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.place_at_cursor();
            }
            KeyCode::Char('r') => {
                // Reset game
                self.game_state = GameState::initial();
                self.cursor = (3, 3);
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Handle a left-button press: move the cursor to the clicked cell and
    /// try to place there. Clicks outside the board are ignored.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return;
        }
        let Some(cell) = self.cell_at(mouse.column, mouse.row) else {
            return;
        };

        self.message = None;
        self.cursor = cell;
        self.place_at_cursor();
    }

    /// Map a terminal position to a board cell: the offset into the board
    /// rectangle divided by the tile size.
    fn cell_at(&self, column: u16, row: u16) -> Option<(usize, usize)> {
        let area = self.board_area;
        if column < area.x
            || row < area.y
            || column >= area.x + area.width
            || row >= area.y + area.height
        {
            return None;
        }

        let x = ((column - area.x) / self.config.tui.tile_width) as usize;
        let y = ((row - area.y) / self.config.tui.tile_height) as usize;
        (x < BOARD_SIZE && y < BOARD_SIZE).then_some((x, y))
    }

    /// Place the current player's piece at the cursor
    fn place_at_cursor(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        let (x, y) = self.cursor;
        match self.game_state.apply_move_mut(x as i32, y as i32) {
            Ok(()) => {
                if let Some(passed) = self.game_state.last_pass() {
                    self.message = Some(format!(
                        "No valid moves for {}. Switching to {}.",
                        passed.name(),
                        passed.other().name()
                    ));
                }
                if let Some(outcome) = self.game_state.outcome() {
                    self.message = Some(match outcome {
                        GameOutcome::Winner(player) => {
                            format!("No valid moves for both players. {} wins!", player.name())
                        }
                        GameOutcome::Draw => {
                            "No valid moves for both players. It's a draw!".to_string()
                        }
                    });
                }
            }
            Err(MoveError::Occupied) | Err(MoveError::NoCapture) => {
                self.message = Some(format!(
                    "Invalid move. Possible moves: {}",
                    format_moves(&self.game_state.legal_moves())
                ));
            }
            Err(MoveError::OutOfBounds) => {
                self.message = Some("That cell is outside the board.".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut ratatui::Frame) {
        self.board_area = super::game_view::render(
            frame,
            &self.game_state,
            self.cursor,
            &self.message,
            &self.config.tui,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
