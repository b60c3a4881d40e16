//! Check a player's grid against a puzzle

use crate::collections::square::{Coord, VectorId};
use crate::collections::Square;
use crate::error::InvalidPuzzle;
use crate::kenken::{Puzzle, Solution, Value};

/// The first problem found in a player's grid, or `Solved`
#[derive(Clone, Debug, PartialEq)]
pub enum CheckResult {
    /// Every cell matches the solution
    Solved,
    /// A value appears twice in a row or column
    Duplicate {
        #[allow(missing_docs)]
        vector: VectorId,
        #[allow(missing_docs)]
        value: Value,
    },
    /// A cage is completely filled but its clue does not hold
    CageMismatch {
        /// Index into the puzzle's cages
        cage: usize,
        /// The values in the cage, in cage cell order
        values: Vec<Value>,
    },
    /// No rule is broken yet, but a cell is empty or differs from the solution
    Unfinished {
        #[allow(missing_docs)]
        coord: Coord,
        #[allow(missing_docs)]
        value: Option<Value>,
        #[allow(missing_docs)]
        expected: Value,
    },
}

impl CheckResult {
    #[allow(missing_docs)]
    pub fn is_solved(&self) -> bool {
        matches!(self, CheckResult::Solved)
    }
}

/// Checks, in order: duplicates in rows and columns, completed cages, then the
/// whole grid against the solution. Rows and columns are scanned together so
/// row `i` and column `i` are checked before row `i + 1`.
pub(crate) fn check_grid(
    puzzle: &Puzzle,
    solution: &Solution,
    grid: &Square<Option<Value>>,
) -> Result<CheckResult, InvalidPuzzle> {
    let width = puzzle.width();
    if grid.width() != width {
        return Err(InvalidPuzzle::new(format!(
            "grid width {} does not match puzzle width {}",
            grid.width(),
            width
        )));
    }
    if let Some(result) = find_duplicate(grid) {
        return Ok(result);
    }
    for (i, cage) in puzzle.cages().iter().enumerate() {
        let values: Option<Vec<Value>> = cage.cells().iter().map(|&c| grid[c]).collect();
        if let Some(values) = values {
            if !cage.clue().is_satisfied_by(&values) {
                return Ok(CheckResult::CageMismatch { cage: i, values });
            }
        }
    }
    for (coord, &expected) in solution.iter_coord() {
        let value = grid[coord];
        if value != Some(expected) {
            return Ok(CheckResult::Unfinished {
                coord,
                value,
                expected,
            });
        }
    }
    Ok(CheckResult::Solved)
}

fn find_duplicate(grid: &Square<Option<Value>>) -> Option<CheckResult> {
    let width = grid.width();
    for i in 0..width {
        let vectors = [VectorId::row(i), VectorId::col(i)];
        let coords: Vec<Vec<Coord>> = vectors.iter().map(|v| v.coords(width).collect()).collect();
        let mut seen = vec![Vec::with_capacity(width); vectors.len()];
        for position in 0..width {
            for (k, &vector) in vectors.iter().enumerate() {
                if let Some(value) = grid[coords[k][position]] {
                    if seen[k].contains(&value) {
                        return Some(CheckResult::Duplicate { vector, value });
                    }
                    seen[k].push(value);
                }
            }
        }
    }
    None
}
