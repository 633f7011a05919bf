//! Basic example of using the Sudoku engine

use sudoku_core::{Grid, Solver};

fn main() {
    let puzzle_string =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

    let Some(mut grid) = Grid::from_string(puzzle_string) else {
        println!("Invalid puzzle string");
        return;
    };

    println!("Parsed puzzle:");
    println!("{}", grid);

    // Show some stats
    println!("Given cells: {}", grid.given_count());
    println!("Empty cells: {}", grid.empty_count());

    // Solve it in place
    println!("\nSolving...\n");
    if Solver::new().solve(&mut grid) {
        println!("Solution:");
        println!("{}", grid);
    } else {
        println!("No solution found");
    }
}
