//! KenKen puzzles
//!
//! A KenKen puzzle is a Latin square hidden behind a set of cages. Each cage
//! shows an arithmetic clue that its cells must satisfy.

pub use self::cage::{Cage, Clue, Operator, MAX_CAGE_SIZE};
pub use self::check::CheckResult;
pub use self::generate::{generate, GenerateOptions, KenKen};
pub use self::latin::{is_latin_square, latin_square, seeded_latin_square};
pub use self::solve::{count_solutions, SolutionCount, SolveLimit, Uniqueness};

use std::fmt;
use std::fmt::Display;

use ahash::AHashSet;

use crate::collections::square::Coord;
use crate::collections::Square;
use crate::error::InvalidPuzzle;

mod cage;
mod check;
mod generate;
mod latin;
mod solve;

/// The value of a cell
pub type Value = i32;
/// A filled grid of cell values
pub type Solution = Square<Value>;

/// The largest supported grid width
pub const MAX_WIDTH: usize = 9;

/// An unsolved KenKen puzzle
#[derive(Clone, Debug, PartialEq)]
pub struct Puzzle {
    /// the width and height of the puzzle
    width: usize,
    /// contains all cages in the puzzle
    cages: Vec<Cage>,
    cage_map: Square<usize>,
}

impl Puzzle {
    /// Creates a puzzle after checking that the cages partition the grid
    /// into connected regions of at most `MAX_CAGE_SIZE` cells
    pub fn new(width: usize, cages: Vec<Cage>) -> Result<Self, InvalidPuzzle> {
        if width == 0 || width > MAX_WIDTH {
            return Err(InvalidPuzzle::new(format!("invalid width {}", width)));
        }
        validate_partition(width, &cages)?;
        Ok(Self::from_parts(width, cages))
    }

    /// Used by the generator, whose cages partition the grid by construction
    pub(crate) fn from_parts(width: usize, cages: Vec<Cage>) -> Self {
        debug_assert!(validate_partition(width, &cages).is_ok());
        let cage_map = cage_map(width, &cages);
        Self {
            width,
            cages,
            cage_map,
        }
    }

    /// The width and height of the grid
    pub fn width(&self) -> usize {
        self.width
    }

    /// Every cage, in the order they were created
    pub fn cages(&self) -> &[Cage] {
        &self.cages
    }

    /// The cage containing a cell
    pub fn cage_at(&self, coord: Coord) -> &Cage {
        &self.cages[self.cage_map[coord]]
    }

    /// A square of values where each value is the index of the cage containing that cell
    pub fn cell_cage_indices(&self) -> &Square<usize> {
        &self.cage_map
    }

    /// Returns true if `solution` is a Latin square that satisfies every cage
    pub fn verify_solution(&self, solution: &Solution) -> bool {
        solution.width() == self.width
            && is_latin_square(solution)
            && self.cages.iter().all(|cage| {
                let values: Vec<Value> = cage.cells().iter().map(|&c| solution[c]).collect();
                cage.clue().is_satisfied_by(&values)
            })
    }
}

/**
 * Create a square of values where each value represents the index of the cage
 * containing that position
 */
fn cage_map(width: usize, cages: &[Cage]) -> Square<usize> {
    let mut cage_map = Square::with_width_and_value(width, 0);
    for (i, cage) in cages.iter().enumerate() {
        for &coord in cage.cells() {
            cage_map[coord] = i;
        }
    }
    cage_map
}

fn validate_partition(width: usize, cages: &[Cage]) -> Result<(), InvalidPuzzle> {
    let mut seen: AHashSet<Coord> = AHashSet::default();
    for (i, cage) in cages.iter().enumerate() {
        if cage.is_empty() || cage.len() > MAX_CAGE_SIZE {
            return Err(InvalidPuzzle::new(format!(
                "cage {} has {} cells",
                i,
                cage.len()
            )));
        }
        for &coord in cage.cells() {
            if coord.row() >= width || coord.col() >= width {
                return Err(InvalidPuzzle::new(format!(
                    "cage {} cell {:?} is out of bounds",
                    i, coord
                )));
            }
            if !seen.insert(coord) {
                return Err(InvalidPuzzle::new(format!(
                    "cell {:?} is in more than one cage",
                    coord
                )));
            }
        }
        if !is_connected(cage.cells()) {
            return Err(InvalidPuzzle::new(format!("cage {} is not connected", i)));
        }
    }
    if seen.len() != width.pow(2) {
        return Err(InvalidPuzzle::new(format!(
            "cages cover {} of {} cells",
            seen.len(),
            width.pow(2)
        )));
    }
    Ok(())
}

/// Returns true if the cells form one rook-connected region
pub(crate) fn is_connected(cells: &[Coord]) -> bool {
    let first = match cells.first() {
        Some(&first) => first,
        None => return true,
    };
    let mut reached: AHashSet<Coord> = AHashSet::default();
    reached.insert(first);
    let mut stack = vec![first];
    while let Some(cell) = stack.pop() {
        for &other in cells {
            if cell.is_adjacent(other) && reached.insert(other) {
                stack.push(other);
            }
        }
    }
    reached.len() == cells.len()
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.width)?;
        for row in self.cage_map.rows() {
            for &cage in row {
                let byte = b'A' + (cage % 26) as u8;
                write!(f, "{}", byte as char)?;
            }
            writeln!(f)?;
        }
        for cage in &self.cages {
            writeln!(f, "{}", cage.clue())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(cells: &[(usize, usize)]) -> Vec<Coord> {
        cells.iter().map(|&c| Coord::from(c)).collect()
    }

    fn small_puzzle() -> Result<Puzzle, InvalidPuzzle> {
        // 1 2
        // 2 1
        Puzzle::new(
            2,
            vec![
                Cage::new(coords(&[(0, 0), (0, 1)]), Operator::Add, 3)?,
                Cage::new(coords(&[(1, 0)]), Operator::Nop, 2)?,
                Cage::new(coords(&[(1, 1)]), Operator::Nop, 1)?,
            ],
        )
    }

    #[test]
    fn new_puzzle() {
        let puzzle = small_puzzle().unwrap();
        assert_eq!(2, puzzle.width());
        assert_eq!(Operator::Add, puzzle.cage_at(Coord::new(0, 1)).operator());
        assert_eq!(2, puzzle.cell_cage_indices()[Coord::new(1, 1)]);
        assert_eq!("2\nAA\nBC\n3+\n2\n1\n", puzzle.to_string());
    }

    #[test]
    fn verify_solution() {
        let puzzle = small_puzzle().unwrap();
        let good = Square::from_rows(vec![vec![1, 2], vec![2, 1]]).unwrap();
        let bad = Square::from_rows(vec![vec![2, 1], vec![1, 2]]).unwrap();
        assert!(puzzle.verify_solution(&good));
        assert!(!puzzle.verify_solution(&bad));
    }

    #[test]
    fn rejects_overlap() {
        let result = Puzzle::new(
            2,
            vec![
                Cage::new(coords(&[(0, 0), (0, 1)]), Operator::Add, 3).unwrap(),
                Cage::new(coords(&[(0, 1), (1, 1)]), Operator::Add, 3).unwrap(),
                Cage::new(coords(&[(1, 0)]), Operator::Nop, 2).unwrap(),
            ],
        );
        assert!(result.is_err());
    }

    #[test]
    fn rejects_missing_cell() {
        let result = Puzzle::new(
            2,
            vec![
                Cage::new(coords(&[(0, 0), (0, 1)]), Operator::Add, 3).unwrap(),
                Cage::new(coords(&[(1, 0)]), Operator::Nop, 2).unwrap(),
            ],
        );
        assert!(result.is_err());
    }

    #[test]
    fn rejects_disconnected_cage() {
        let result = Puzzle::new(
            2,
            vec![
                Cage::new(coords(&[(0, 0), (1, 1)]), Operator::Add, 2).unwrap(),
                Cage::new(coords(&[(0, 1), (1, 0)]), Operator::Add, 4).unwrap(),
            ],
        );
        assert!(result.is_err());
    }

    #[test]
    fn rejects_out_of_bounds() {
        let result = Puzzle::new(
            1,
            vec![Cage::new(coords(&[(0, 0), (0, 1)]), Operator::Add, 3).unwrap()],
        );
        assert!(result.is_err());
    }

    #[test]
    fn connected() {
        assert!(is_connected(&coords(&[(0, 0), (1, 0), (1, 1), (2, 1)])));
        assert!(!is_connected(&coords(&[(0, 0), (1, 1)])));
    }
}
