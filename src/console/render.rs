use crossterm::style::{Color, Stylize};

use crate::config::DisplayConfig;
use crate::game::{Board, Cell, BOARD_SIZE};

// Palette for the colorized variant.
const BLACK_COLOR: Color = Color::Rgb { r: 0, g: 0, b: 0 };
const WHITE_COLOR: Color = Color::Rgb { r: 0, g: 255, b: 255 };
const EMPTY_COLOR: Color = Color::Rgb { r: 150, g: 150, b: 150 };
const LABEL_COLOR: Color = Color::Rgb { r: 255, g: 255, b: 0 };

fn glyph<'a>(cell: Cell, config: &'a DisplayConfig) -> &'a str {
    match cell {
        Cell::Black => &config.black_char,
        Cell::White => &config.white_char,
        Cell::Empty => &config.empty_char,
    }
}

fn paint(text: &str, color: Color, config: &DisplayConfig) -> String {
    if config.color {
        text.with(color).to_string()
    } else {
        text.to_string()
    }
}

fn cell_color(cell: Cell) -> Color {
    match cell {
        Cell::Black => BLACK_COLOR,
        Cell::White => WHITE_COLOR,
        Cell::Empty => EMPTY_COLOR,
    }
}

/// Render the board in the console format: piece tallies, a column header,
/// then one glyph row per board row prefixed with its index.
pub fn board_to_string(board: &Board, config: &DisplayConfig) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "black ({}): {}\n",
        paint(&config.black_char, cell_color(Cell::Black), config),
        board.count(Cell::Black)
    ));
    out.push_str(&format!(
        "white ({}): {}\n",
        paint(&config.white_char, cell_color(Cell::White), config),
        board.count(Cell::White)
    ));

    out.push_str(&paint("  0 1 2 3 4 5 6 7", LABEL_COLOR, config));
    out.push('\n');

    for y in 0..BOARD_SIZE {
        out.push_str(&paint(&y.to_string(), LABEL_COLOR, config));
        for x in 0..BOARD_SIZE {
            let cell = board.get(x, y);
            out.push(' ');
            out.push_str(&paint(glyph(cell, config), cell_color(cell), config));
        }
        out.push('\n');
    }

    out
}

pub fn print_board(board: &Board, config: &DisplayConfig) {
    print!("{}", board_to_string(board, config));
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_opening_board() {
        let board = Board::new();
        let config = DisplayConfig::default();
        let text = board_to_string(&board, &config);

        let expected = "\
black (\u{25cb}): 2
white (\u{25cf}): 2
  0 1 2 3 4 5 6 7
0 * * * * * * * *
1 * * * * * * * *
2 * * * * * * * *
3 * * * \u{25cf} \u{25cb} * * *
4 * * * \u{25cb} \u{25cf} * * *
5 * * * * * * * *
6 * * * * * * * *
7 * * * * * * * *
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_custom_glyphs() {
        let board = Board::new();
        let config = DisplayConfig {
            black_char: "B".to_string(),
            white_char: "W".to_string(),
            empty_char: ".".to_string(),
            color: false,
        };
        let text = board_to_string(&board, &config);

        assert!(text.contains("black (B): 2"));
        assert!(text.contains("3 . . . W B . . ."));
        assert!(text.contains("4 . . . B W . . ."));
    }

    #[test]
    fn test_colorized_output_contains_escapes() {
        let board = Board::new();
        let config = DisplayConfig {
            color: true,
            ..DisplayConfig::default()
        };
        let text = board_to_string(&board, &config);
        assert!(text.contains("\u{1b}["));
    }
}
