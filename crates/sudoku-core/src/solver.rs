//! Backtracking solver.
//!
//! Depth-first search over the 81 cells in row-major order, trying
//! candidates 1 through 9 ascending at each blank. Both orders are fixed
//! so the solver is deterministic: a board with several completions
//! always yields the same one (the empty board yields the
//! lexicographically smallest valid grid).

use crate::{Grid, Position, CELL_COUNT, SIZE};

/// Unit struct solver -- stateless, all state is per-call.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Solve the board in place.
    ///
    /// Returns `true` with every blank filled if a solution is reachable,
    /// or `false` with every speculative assignment unwound, leaving the
    /// grid in its input state. Non-blank cells are treated as clues and
    /// never modified. The input is not validated: an impossible clue set
    /// is not an error, it simply exhausts the search.
    pub fn solve(&self, grid: &mut Grid) -> bool {
        solve_from(grid, 0)
    }
}

/// Search from the cell at flat index `index`, all earlier cells settled.
fn solve_from(grid: &mut Grid, index: usize) -> bool {
    if index == CELL_COUNT {
        return true;
    }
    let pos = Position::from_index(index);
    if !grid.is_blank(pos) {
        return solve_from(grid, index + 1);
    }
    for candidate in 1..=9 {
        if block_allows(grid, pos, candidate) && lines_allow(grid, pos, candidate) {
            grid.set(pos, candidate);
            if solve_from(grid, index + 1) {
                return true;
            }
            grid.set(pos, 0);
        }
    }
    false
}

/// Whether `candidate` is absent from the 3x3 block containing `pos`.
fn block_allows(grid: &Grid, pos: Position, candidate: u8) -> bool {
    let corner = pos.block_corner();
    for row in corner.row..corner.row + 3 {
        for col in corner.col..corner.col + 3 {
            if grid.get(Position::new(row, col)) == candidate {
                return false;
            }
        }
    }
    true
}

/// Whether `candidate` is absent from both the row and the column of `pos`.
fn lines_allow(grid: &Grid, pos: Position, candidate: u8) -> bool {
    for i in 0..SIZE {
        if grid.get(Position::new(pos.row, i)) == candidate
            || grid.get(Position::new(i, pos.col)) == candidate
        {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    const EASY: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    const EASY_SOLVED: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    // 17-clue puzzle with a unique solution.
    const SEVENTEEN: &str =
        "000000010400000000020000000000050407008000300001090000300400200050100000000806000";

    fn clues_preserved(input: &Grid, output: &Grid) -> bool {
        (0..CELL_COUNT).all(|index| {
            let pos = Position::from_index(index);
            input.is_blank(pos) || input.get(pos) == output.get(pos)
        })
    }

    #[test]
    fn test_solves_easy_puzzle() {
        let mut grid = Grid::from_string(EASY).unwrap();
        assert!(Solver::new().solve(&mut grid));
        assert_eq!(grid.to_string_compact(), EASY_SOLVED);
    }

    #[test]
    fn test_solves_seventeen_clue_puzzle() {
        let input = Grid::from_string(SEVENTEEN).unwrap();
        let mut grid = input.clone();
        assert!(Solver::new().solve(&mut grid));
        assert!(grid.is_solved());
        assert!(clues_preserved(&input, &grid));
    }

    #[test]
    fn test_empty_grid_yields_canonical_solution() {
        let mut grid = Grid::empty();
        assert!(Solver::new().solve(&mut grid));
        // Row-major cell order with ascending candidates makes the first
        // solution found the lexicographically smallest valid grid.
        assert_eq!(
            grid.to_string_compact(),
            concat!(
                "123456789",
                "456789123",
                "789123456",
                "214365897",
                "365897214",
                "897214365",
                "531642978",
                "642978531",
                "978531642",
            )
        );
    }

    #[test]
    fn test_solved_grid_is_left_unchanged() {
        let mut grid = Grid::from_string(EASY_SOLVED).unwrap();
        assert!(Solver::new().solve(&mut grid));
        assert_eq!(grid.to_string_compact(), EASY_SOLVED);
    }

    #[test]
    fn test_deterministic() {
        // A near-empty board has many completions; repeated runs must
        // pick the same one.
        let mut first = Grid::empty();
        first.set(Position::new(0, 0), 9);
        let mut second = first.clone();
        assert!(Solver::new().solve(&mut first));
        assert!(Solver::new().solve(&mut second));
        assert_eq!(first, second);
        assert!(first.is_solved());
        assert_eq!(first.get(Position::new(0, 0)), 9);
    }

    #[test]
    fn test_duplicate_clue_makes_search_fail() {
        // Row 0 carries a duplicated 5, so its one blank needs 8 or 9,
        // and both already sit in column 8. The clues themselves are
        // never questioned; the search just finds no candidate.
        let board = concat!(
            "123456750", //
            "000000008", //
            "000000009", //
            "000000000000000000000000000000000000000000000000000000",
        );
        let input = Grid::from_string(board).unwrap();
        let mut grid = input.clone();
        assert!(!Solver::new().solve(&mut grid));
        // Every frame resets its own cell before reporting failure, so
        // the leftover state of an unsolvable board is exactly the input.
        // Pinned here as the partial-failure regression contract.
        assert_eq!(grid, input);
    }

    #[test]
    fn test_blank_with_no_candidates_fails_fast() {
        // Row 0 holds 1..=8 around a blank corner whose column holds 9.
        let mut grid = Grid::empty();
        for col in 1..SIZE {
            grid.set(Position::new(0, col), col as u8);
        }
        grid.set(Position::new(1, 0), 9);
        let input = grid.clone();
        assert!(!Solver::new().solve(&mut grid));
        assert_eq!(grid, input);
    }
}
