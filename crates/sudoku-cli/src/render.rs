//! Console board rendering.
//!
//! Boards print in a bordered box with the 3x3 bands separated by rules,
//! blanks shown as `-`. On a terminal, solver-filled cells are colored so
//! they stand apart from the clues.

use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::{self, IsTerminal, Write};
use sudoku_core::{Grid, Position, SIZE};

const RULE: &str = "-----------------------------------";

/// Print a board to stdout, styled when stdout is a terminal.
///
/// `givens` is the board as loaded, before solving; cells blank there but
/// filled in `grid` are the solver's work.
pub fn show_board(grid: &Grid, givens: &Grid) -> io::Result<()> {
    let mut stdout = io::stdout();
    if stdout.is_terminal() {
        print_styled(&mut stdout, grid, givens)
    } else {
        write!(stdout, "{}", format_board(grid))
    }
}

/// Render a board as plain text, one string, trailing newline included.
pub fn format_board(grid: &Grid) -> String {
    let mut text = String::new();
    text.push_str(RULE);
    text.push('\n');
    for row in 0..SIZE {
        text.push('|');
        for col in 0..SIZE {
            if col == 3 || col == 6 {
                text.push_str(" | ");
            }
            match grid.get(Position::new(row, col)) {
                0 => text.push_str(" - "),
                value => {
                    text.push(' ');
                    text.push((value + b'0') as char);
                    text.push(' ');
                }
            }
        }
        text.push('|');
        text.push('\n');
        if row == 2 || row == 5 || row == 8 {
            text.push_str(RULE);
            text.push('\n');
        }
    }
    text
}

fn print_styled(out: &mut io::Stdout, grid: &Grid, givens: &Grid) -> io::Result<()> {
    writeln!(out, "{}", RULE)?;
    for row in 0..SIZE {
        write!(out, "|")?;
        for col in 0..SIZE {
            if col == 3 || col == 6 {
                write!(out, " | ")?;
            }
            let pos = Position::new(row, col);
            let value = grid.get(pos);
            if value == 0 {
                execute!(
                    out,
                    SetForegroundColor(Color::DarkGrey),
                    Print(" - "),
                    ResetColor
                )?;
            } else if givens.is_blank(pos) {
                execute!(
                    out,
                    SetForegroundColor(Color::Green),
                    Print(format!(" {} ", value)),
                    ResetColor
                )?;
            } else {
                write!(out, " {} ", value)?;
            }
        }
        writeln!(out, "|")?;
        if row == 2 || row == 5 {
            writeln!(out, "{}", RULE)?;
        }
    }
    writeln!(out, "{}", RULE)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EASY: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

    #[test]
    fn test_format_board_layout() {
        let grid = Grid::from_string(EASY).unwrap();
        let text = format_board(&grid);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], RULE);
        assert_eq!(lines[1], "| 5  3  -  |  -  7  -  |  -  -  - |");
        assert_eq!(lines[4], RULE);
        assert_eq!(lines[8], RULE);
        assert_eq!(lines[12], RULE);
        for line in &lines {
            assert_eq!(line.len(), RULE.len());
        }
    }

    #[test]
    fn test_format_board_full_grid_has_no_blanks() {
        let mut grid = Grid::from_string(EASY).unwrap();
        assert!(sudoku_core::Solver::new().solve(&mut grid));
        assert!(!format_board(&grid).contains(" - "));
    }
}
