//! Plain-text board format: one line per row, one character per cell,
//! newline terminated, no header.
//!
//! Rows of different widths are rejected rather than padded.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::info;

use crate::board::Board;
use crate::error::{Result, SnakeError};
use crate::glyph::Glyph;

pub fn parse_board(text: &str) -> Result<Board> {
    let mut rows = Vec::new();
    // `lines` strips both "\n" and "\r\n"
    for (index, line) in text.lines().enumerate() {
        let mut row = Vec::new();
        row.try_reserve_exact(line.len())?;
        for (column, ch) in line.chars().enumerate() {
            let glyph = Glyph::from_char(ch).ok_or_else(|| {
                SnakeError::malformed(index + 1, format!("unknown glyph {ch:?} at column {column}"))
            })?;
            row.push(glyph);
        }
        rows.push(row);
    }
    Board::from_rows(rows)
}

pub fn render_board(board: &Board) -> String {
    let mut text = String::with_capacity((board.width() + 1) * board.height());
    for row in board.rows() {
        text.extend(row.iter().map(|glyph| glyph.to_char()));
        text.push('\n');
    }
    text
}

pub fn load_board(path: impl AsRef<Path>) -> Result<Board> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SnakeError::io(path, source))?;
    let board = parse_board(&text)?;
    info!(
        path = %path.display(),
        width = board.width(),
        height = board.height(),
        "Loaded board"
    );
    Ok(board)
}

pub fn save_board(board: &Board, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, render_board(board)).map_err(|source| SnakeError::io(path, source))?;
    info!(path = %path.display(), "Saved board");
    Ok(())
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}

impl FromStr for Board {
    type Err = SnakeError;

    fn from_str(text: &str) -> Result<Self> {
        parse_board(text)
    }
}
