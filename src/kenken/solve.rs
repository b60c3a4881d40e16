//! Count the solutions of a KenKen puzzle by backtracking search

use crate::collections::square::Coord;
use crate::collections::Square;
use crate::kenken::{Puzzle, Solution, Value};

/// How far to count before giving up on the search
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveLimit {
    /// Stop as soon as this many solutions are found
    UpTo(usize),
    /// Visit the whole search space
    Exhaustive,
}

impl SolveLimit {
    fn reached(self, count: usize) -> bool {
        match self {
            SolveLimit::UpTo(limit) => count >= limit,
            SolveLimit::Exhaustive => false,
        }
    }
}

/// Whether a puzzle is a proper puzzle
#[derive(Clone, Debug, PartialEq)]
pub enum Uniqueness {
    /// The puzzle cannot be solved - there may be an error in the puzzle
    NoSolution,
    /// The puzzle has exactly one solution, as it should
    Unique(Solution),
    /// Multiple solutions were found for the puzzle - this is not a proper puzzle
    Multiple,
}

/// The result of a solution count
#[derive(Clone, Debug)]
pub struct SolutionCount {
    count: usize,
    first: Option<Solution>,
    stopped: bool,
}

impl SolutionCount {
    /// The number of solutions found. Only exact if the search was not stopped.
    pub fn count(&self) -> usize {
        self.count
    }

    /// The first solution found, in row-major value order
    pub fn first(&self) -> Option<&Solution> {
        self.first.as_ref()
    }

    /// Returns true if the limit cut the search short
    pub fn stopped(&self) -> bool {
        self.stopped
    }

    #[allow(missing_docs)]
    pub fn uniqueness(self) -> Uniqueness {
        match (self.count, self.first) {
            (1, Some(solution)) => Uniqueness::Unique(solution),
            (0, _) | (1, None) => Uniqueness::NoSolution,
            _ => Uniqueness::Multiple,
        }
    }

    /// Returns true if exactly one solution exists
    pub fn is_unique(&self) -> bool {
        self.count == 1
    }
}

/// Signals whether the search should keep going after a branch returns
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Search {
    Continue,
    Stop,
}

/// Counts the solutions of a puzzle.
///
/// Cells are filled in row-major order with every value that is not already in
/// the cell's row or column. When a value completes a cage, the cage's clue
/// must hold. With `SolveLimit::UpTo(2)` the count answers "none, one, or more
/// than one".
pub fn count_solutions(puzzle: &Puzzle, limit: SolveLimit) -> SolutionCount {
    let mut counter = Counter::new(puzzle, limit);
    let search = counter.search(0);
    debug!(
        "Counted {} solution(s) visiting {} nodes{}",
        counter.count,
        counter.nodes,
        if search == Search::Stop {
            " (stopped)"
        } else {
            ""
        }
    );
    SolutionCount {
        count: counter.count,
        first: counter.first,
        stopped: search == Search::Stop,
    }
}

struct Counter<'a> {
    puzzle: &'a Puzzle,
    limit: SolveLimit,
    grid: Square<Value>,
    /// bit `v` is set if value `v` is used in the row
    rows: Vec<u32>,
    /// bit `v` is set if value `v` is used in the column
    cols: Vec<u32>,
    /// for each cell, the cage that it completes in row-major order
    completes: Vec<Option<usize>>,
    count: usize,
    first: Option<Solution>,
    nodes: u64,
}

impl<'a> Counter<'a> {
    fn new(puzzle: &'a Puzzle, limit: SolveLimit) -> Self {
        let width = puzzle.width();
        let mut completes = vec![None; width.pow(2)];
        for (i, cage) in puzzle.cages().iter().enumerate() {
            if let Some(last) = cage.cells().iter().map(|c| c.to_index(width)).max() {
                completes[last] = Some(i);
            }
        }
        Self {
            puzzle,
            limit,
            grid: Square::with_width_and_value(width, 0),
            rows: vec![0; width],
            cols: vec![0; width],
            completes,
            count: 0,
            first: None,
            nodes: 0,
        }
    }

    fn search(&mut self, index: usize) -> Search {
        self.nodes += 1;
        let width = self.puzzle.width();
        if index == width.pow(2) {
            self.count += 1;
            if self.first.is_none() {
                self.first = Some(self.grid.clone());
            }
            return if self.limit.reached(self.count) {
                Search::Stop
            } else {
                Search::Continue
            };
        }
        let coord = Coord::from_index(index, width);
        for value in 1..=width as Value {
            let bit = 1 << value;
            if self.rows[coord.row()] & bit != 0 || self.cols[coord.col()] & bit != 0 {
                continue;
            }
            self.place(coord, value, bit);
            let search = if self.cage_holds(index) {
                self.search(index + 1)
            } else {
                Search::Continue
            };
            self.clear(coord, bit);
            if search == Search::Stop {
                return Search::Stop;
            }
        }
        Search::Continue
    }

    fn place(&mut self, coord: Coord, value: Value, bit: u32) {
        self.grid[coord] = value;
        self.rows[coord.row()] |= bit;
        self.cols[coord.col()] |= bit;
    }

    fn clear(&mut self, coord: Coord, bit: u32) {
        self.grid[coord] = 0;
        self.rows[coord.row()] &= !bit;
        self.cols[coord.col()] &= !bit;
    }

    /// Checks the cage that the cell at `index` completes, if any.
    /// A cage that still has empty cells is accepted.
    fn cage_holds(&self, index: usize) -> bool {
        let cage = match self.completes[index] {
            Some(cage) => &self.puzzle.cages()[cage],
            None => return true,
        };
        let values: Vec<Value> = cage.cells().iter().map(|&c| self.grid[c]).collect();
        cage.clue().is_satisfied_by(&values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kenken::{Cage, Operator};

    fn cage(cells: &[(usize, usize)], operator: Operator, target: Value) -> Cage {
        let cells: Vec<Coord> = cells.iter().map(|&c| Coord::from(c)).collect();
        Cage::new(cells, operator, target).unwrap()
    }

    fn unique_2x2() -> Puzzle {
        Puzzle::new(
            2,
            vec![
                cage(&[(0, 0)], Operator::Nop, 1),
                cage(&[(0, 1), (1, 1)], Operator::Add, 3),
                cage(&[(1, 0)], Operator::Nop, 2),
            ],
        )
        .unwrap()
    }

    fn ambiguous_2x2() -> Puzzle {
        Puzzle::new(
            2,
            vec![
                cage(&[(0, 0), (0, 1)], Operator::Add, 3),
                cage(&[(1, 0), (1, 1)], Operator::Add, 3),
            ],
        )
        .unwrap()
    }

    #[test]
    fn unique() {
        let count = count_solutions(&unique_2x2(), SolveLimit::UpTo(2));
        assert!(count.is_unique());
        assert!(!count.stopped());
        let expected = Square::from_rows(vec![vec![1, 2], vec![2, 1]]).unwrap();
        assert_eq!(Uniqueness::Unique(expected), count.uniqueness());
    }

    #[test]
    fn stops_at_limit() {
        let count = count_solutions(&ambiguous_2x2(), SolveLimit::UpTo(2));
        assert_eq!(2, count.count());
        assert!(count.stopped());
        assert_eq!(Uniqueness::Multiple, count.uniqueness());
    }

    #[test]
    fn stops_at_first() {
        let count = count_solutions(&ambiguous_2x2(), SolveLimit::UpTo(1));
        assert_eq!(1, count.count());
        assert!(count.stopped());
        let first = Square::from_rows(vec![vec![1, 2], vec![2, 1]]).unwrap();
        assert_eq!(Some(&first), count.first());
    }

    #[test]
    fn no_solution() {
        let puzzle = Puzzle::new(
            2,
            vec![
                cage(&[(0, 0), (0, 1)], Operator::Add, 4),
                cage(&[(1, 0), (1, 1)], Operator::Add, 3),
            ],
        )
        .unwrap();
        let count = count_solutions(&puzzle, SolveLimit::Exhaustive);
        assert_eq!(0, count.count());
        assert_eq!(Uniqueness::NoSolution, count.uniqueness());
    }

    #[test]
    fn exhaustive_counts_all_latin_squares() {
        // every row of a Latin square sums to 6, so all 12 Latin squares
        // of order 3 are counted
        let puzzle = Puzzle::new(
            3,
            vec![
                cage(&[(0, 0), (0, 1), (0, 2)], Operator::Add, 6),
                cage(&[(1, 0), (1, 1), (1, 2)], Operator::Add, 6),
                cage(&[(2, 0), (2, 1), (2, 2)], Operator::Add, 6),
            ],
        )
        .unwrap();
        let count = count_solutions(&puzzle, SolveLimit::Exhaustive);
        assert_eq!(12, count.count());
        assert!(!count.stopped());
    }
}
