use serde::{Deserialize, Serialize};
use std::fmt;

/// Side length of the board.
pub const SIZE: usize = 9;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = SIZE * SIZE;

/// Side length of a 3x3 block.
const BLOCK: usize = 3;

/// A cell coordinate on the board, row and column each in `0..9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a position. Debug-asserts that both coordinates are in range.
    pub fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < SIZE && col < SIZE);
        Self { row, col }
    }

    /// Position for a flat row-major index in `0..81`.
    pub fn from_index(index: usize) -> Self {
        Self::new(index / SIZE, index % SIZE)
    }

    /// Flat row-major index, `row * 9 + col`.
    pub fn index(&self) -> usize {
        self.row * SIZE + self.col
    }

    /// Top-left corner of the 3x3 block containing this position.
    pub fn block_corner(&self) -> Self {
        Self::new((self.row / BLOCK) * BLOCK, (self.col / BLOCK) * BLOCK)
    }
}

/// A 9x9 Sudoku board.
///
/// Cells hold digits `0..=9`, where `0` means blank. Stored as a flat
/// 81-byte buffer in row-major order; serialized as the 81-character
/// compact string form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Grid {
    cells: [u8; CELL_COUNT],
}

impl Grid {
    /// Create a fully blank grid.
    pub fn empty() -> Self {
        Self {
            cells: [0; CELL_COUNT],
        }
    }

    /// Build a grid from exactly 81 row-major values in `0..=9`.
    ///
    /// Returns `None` on a wrong count or an out-of-range value.
    pub fn from_values(values: &[u8]) -> Option<Self> {
        if values.len() != CELL_COUNT || values.iter().any(|&v| v > 9) {
            return None;
        }
        let mut cells = [0; CELL_COUNT];
        cells.copy_from_slice(values);
        Some(Self { cells })
    }

    /// Parse the compact 81-character form: digits `1`-`9` for clues,
    /// `0` or `.` for blanks. Whitespace is ignored.
    pub fn from_string(s: &str) -> Option<Self> {
        let mut cells = [0; CELL_COUNT];
        let mut count = 0;
        for ch in s.chars().filter(|c| !c.is_whitespace()) {
            let value = match ch {
                '0' | '.' => 0,
                '1'..='9' => ch as u8 - b'0',
                _ => return None,
            };
            if count == CELL_COUNT {
                return None;
            }
            cells[count] = value;
            count += 1;
        }
        if count != CELL_COUNT {
            return None;
        }
        Some(Self { cells })
    }

    /// The compact 81-character string form, `0` for blanks.
    pub fn to_string_compact(&self) -> String {
        self.cells.iter().map(|&v| (v + b'0') as char).collect()
    }

    /// Value at a position, `0` if blank.
    pub fn get(&self, pos: Position) -> u8 {
        self.cells[pos.index()]
    }

    /// Set a cell to a value in `0..=9` (`0` clears it).
    pub fn set(&mut self, pos: Position, value: u8) {
        debug_assert!(value <= 9);
        self.cells[pos.index()] = value;
    }

    /// Whether the cell at a position is blank.
    pub fn is_blank(&self, pos: Position) -> bool {
        self.get(pos) == 0
    }

    /// Number of filled (non-blank) cells.
    pub fn given_count(&self) -> usize {
        CELL_COUNT - self.empty_count()
    }

    /// Number of blank cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    /// Whether every cell is filled (says nothing about validity).
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// Whether no row, column, or block contains a duplicate digit.
    /// Blank cells never conflict.
    pub fn is_valid(&self) -> bool {
        for i in 0..SIZE {
            let mut row_seen = [false; SIZE + 1];
            let mut col_seen = [false; SIZE + 1];
            for j in 0..SIZE {
                let r = self.get(Position::new(i, j)) as usize;
                if r != 0 {
                    if row_seen[r] {
                        return false;
                    }
                    row_seen[r] = true;
                }
                let c = self.get(Position::new(j, i)) as usize;
                if c != 0 {
                    if col_seen[c] {
                        return false;
                    }
                    col_seen[c] = true;
                }
            }
        }
        for corner_row in (0..SIZE).step_by(BLOCK) {
            for corner_col in (0..SIZE).step_by(BLOCK) {
                let mut seen = [false; SIZE + 1];
                for row in corner_row..corner_row + BLOCK {
                    for col in corner_col..corner_col + BLOCK {
                        let v = self.get(Position::new(row, col)) as usize;
                        if v != 0 {
                            if seen[v] {
                                return false;
                            }
                            seen[v] = true;
                        }
                    }
                }
            }
        }
        true
    }

    /// Whether the grid is both complete and valid.
    pub fn is_solved(&self) -> bool {
        self.is_complete() && self.is_valid()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Grid> for String {
    fn from(grid: Grid) -> Self {
        grid.to_string_compact()
    }
}

impl TryFrom<String> for Grid {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Grid::from_string(&s).ok_or_else(|| format!("invalid grid string: {:?}", s))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIZE {
            if row == 3 || row == 6 {
                writeln!(f, "------+-------+------")?;
            }
            for col in 0..SIZE {
                if col == 3 || col == 6 {
                    write!(f, "| ")?;
                }
                let value = self.get(Position::new(row, col));
                if value == 0 {
                    write!(f, ".")?;
                } else {
                    write!(f, "{}", value)?;
                }
                if col < SIZE - 1 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
