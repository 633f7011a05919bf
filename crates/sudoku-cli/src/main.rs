mod loader;
mod render;

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use sudoku_core::{Grid, Solver};

/// Solve 9x9 Sudoku boards read from text files.
///
/// A board file holds 81 whitespace-separated digits in row-major order,
/// with 0 marking blank cells.
#[derive(Parser)]
#[command(name = "sudoku", version)]
struct Cli {
    /// Board file to solve; without it, an interactive prompt runs
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = match cli.file {
        Some(path) => run_once(&path),
        None => run_session(),
    };
    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Load, solve, and print a single board file.
fn run_once(path: &Path) -> io::Result<ExitCode> {
    let grid = match loader::load_board(path) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("ERROR: file {:?}: {}", path, e);
            return Ok(ExitCode::from(2));
        }
    };
    let solved = solve_and_report(grid)?;
    Ok(if solved {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Prompt for board files until the user enters `NO` or closes stdin.
fn run_session() -> io::Result<ExitCode> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("Enter initial sudoku board file: ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let name = line.trim();
        println!();
        if name == "NO" {
            break;
        }
        match loader::load_board(Path::new(name)) {
            Ok(grid) => {
                println!("File read successfully.");
                println!();
                solve_and_report(grid)?;
            }
            Err(e) => {
                eprintln!("ERROR: file \"{}\": {}", name, e);
                eprintln!("Please try again.");
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Print the loaded board, solve it, and print the outcome.
fn solve_and_report(mut grid: Grid) -> io::Result<bool> {
    let givens = grid.clone();
    println!("Initial board read in:");
    render::show_board(&givens, &givens)?;
    println!();

    let solved = Solver::new().solve(&mut grid);
    if solved {
        println!("Sudoku puzzle solved:");
    } else {
        println!("Error solving puzzle, but this is as far as we got:");
    }
    render::show_board(&grid, &givens)?;
    println!();
    Ok(solved)
}
