use crate::config::TuiConfig;
use crate::game::{Cell, GameState, Player, BOARD_SIZE};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the full game view and return the rectangle the board occupies,
/// which the app uses to map mouse clicks back to cells.
pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    cursor: (usize, usize),
    message: &Option<String>,
    tui: &TuiConfig,
) -> Rect {
    let board_width = BOARD_SIZE as u16 * tui.tile_width;
    let board_height = BOARD_SIZE as u16 * tui.tile_height;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Length(board_height), // Board
            Constraint::Length(3),            // Message
            Constraint::Length(3),            // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, chunks[0]);

    // Center the board horizontally at an exact, known position.
    let board_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(board_width),
            Constraint::Min(0),
        ])
        .split(chunks[1])[1];
    render_board(frame, game_state, cursor, tui, board_area);

    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);

    board_area
}

fn render_header(frame: &mut Frame, game_state: &GameState, area: Rect) {
    let current_player = game_state.current_player();
    let color = match current_player {
        Player::Black => Color::DarkGray,
        Player::White => Color::White,
    };

    let tally = format!(
        "black: {}  white: {}",
        game_state.board().count(Cell::Black),
        game_state.board().count(Cell::White)
    );
    let status = if game_state.is_terminal() {
        format!("Game Over  |  {}", tally)
    } else {
        format!("Current player: {}  |  {}", current_player.name(), tally)
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Othello"));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    game_state: &GameState,
    cursor: (usize, usize),
    tui: &TuiConfig,
    area: Rect,
) {
    let tile_width = tui.tile_width as usize;
    let glyph_line = tui.tile_height / 2;

    let mut lines = Vec::new();
    for y in 0..BOARD_SIZE {
        for tile_line in 0..tui.tile_height {
            let mut spans = Vec::new();
            for x in 0..BOARD_SIZE {
                let (glyph, fg) = match game_state.board().get(x, y) {
                    Cell::Black => ("\u{25cf}", Color::Black),
                    Cell::White => ("\u{25cf}", Color::White),
                    Cell::Empty => (" ", Color::White),
                };

                let text = if tile_line == glyph_line {
                    format!("{:^width$}", glyph, width = tile_width)
                } else {
                    " ".repeat(tile_width)
                };

                let bg = if (x, y) == cursor {
                    Color::LightGreen
                } else if (x + y) % 2 == 0 {
                    Color::Rgb(0, 128, 0)
                } else {
                    Color::Rgb(0, 100, 0)
                };
                spans.push(Span::styled(text, Style::default().fg(fg).bg(bg)));
            }
            lines.push(Line::from(spans));
        }
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls =
        Paragraph::new("Click/Enter: Place  |  \u{2190}\u{2191}\u{2193}\u{2192}: Move  |  R: Restart  |  Q: Quit")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
