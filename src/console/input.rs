use std::io::{self, BufRead, Write};

use crate::game::format_moves;

/// Prompt until the reader yields an integer line.
///
/// Malformed input re-prompts; a closed reader is the only failure.
fn read_coordinate<R: BufRead>(input: &mut R, prompt: &str) -> io::Result<i32> {
    loop {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }

        match line.trim().parse() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Invalid input. Please enter a number."),
        }
    }
}

/// Prompt for coordinate pairs until one is in the legal-move set.
pub fn read_move_from<R: BufRead>(
    input: &mut R,
    legal: &[(usize, usize)],
) -> io::Result<(usize, usize)> {
    loop {
        let x = read_coordinate(input, "Enter x coordinate (0-7): ")?;
        let y = read_coordinate(input, "Enter y coordinate (0-7): ")?;

        if x >= 0 && y >= 0 && legal.contains(&(x as usize, y as usize)) {
            return Ok((x as usize, y as usize));
        }
        println!("Invalid move. Possible moves: {}", format_moves(legal));
    }
}

pub fn read_move(legal: &[(usize, usize)]) -> io::Result<(usize, usize)> {
    read_move_from(&mut io::stdin().lock(), legal)
}
