//! Core Sudoku engine: the 9x9 grid model and a backtracking solver.
//!
//! The grid is a plain 9x9 board of digits with `0` marking blank cells.
//! [`Solver::solve`] fills the blanks in place by depth-first backtracking
//! and reports success through its boolean return; clue cells are never
//! altered. Reading board files and rendering boards belong to the
//! front-end, not this crate.

mod grid;
mod solver;

pub use grid::{Grid, Position, CELL_COUNT, SIZE};
pub use solver::Solver;
