//! Board file loading.
//!
//! A board file holds 81 whitespace-separated integers in row-major
//! order, `0` for blanks. All the validation this program performs lives
//! here; the solver itself never questions a grid it is handed.

use std::fmt;
use std::fs;
use std::path::Path;
use sudoku_core::Grid;

/// Result type for board loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors that can occur while loading a board file.
#[derive(Debug, Clone)]
pub enum LoadError {
    /// The file could not be opened or read
    Io(String),
    /// A token in the file was not an integer
    BadToken(String),
    /// A cell value was outside 0..=9
    OutOfRange(String),
    /// The file did not hold exactly 81 values
    WrongCount(usize),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "could not read file: {}", e),
            Self::BadToken(token) => write!(f, "not a number: {:?}", token),
            Self::OutOfRange(token) => write!(f, "cell value out of range 0-9: {}", token),
            Self::WrongCount(count) => write!(f, "expected 81 cell values, found {}", count),
        }
    }
}

impl std::error::Error for LoadError {}

/// Read a board from a file.
pub fn load_board(path: &Path) -> LoadResult<Grid> {
    let text = fs::read_to_string(path).map_err(|e| LoadError::Io(e.to_string()))?;
    parse_board(&text)
}

/// Parse a board from 81 whitespace-separated integers.
pub fn parse_board(text: &str) -> LoadResult<Grid> {
    let mut cells = Vec::with_capacity(81);
    for token in text.split_whitespace() {
        let value: u32 = token
            .parse()
            .map_err(|_| LoadError::BadToken(token.to_string()))?;
        if value > 9 {
            return Err(LoadError::OutOfRange(token.to_string()));
        }
        cells.push(value as u8);
    }
    Grid::from_values(&cells).ok_or(LoadError::WrongCount(cells.len()))
}
