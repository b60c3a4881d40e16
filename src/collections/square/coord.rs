use std::fmt;
use std::fmt::Debug;

use serde::{Deserialize, Serialize};

/// A `Coord` struct represents coordinates of an element in a `Square`.
///
/// Serializes as a `[row, col]` pair.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord([usize; 2]);

/// The four rook-adjacent directions as `(row, col)` offsets
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self([row, col])
    }

    pub fn from_index(index: usize, width: usize) -> Self {
        Self::new(index / width, index % width)
    }

    pub fn row(self) -> usize {
        self.0[0]
    }

    pub fn col(self) -> usize {
        self.0[1]
    }

    pub fn to_index(self, width: usize) -> usize {
        self.row() * width + self.col()
    }

    /// The neighboring coordinate in a direction, if it lies inside a square of `width`
    pub fn offset(self, (dr, dc): (isize, isize), width: usize) -> Option<Coord> {
        let row = self.row() as isize + dr;
        let col = self.col() as isize + dc;
        if row < 0 || col < 0 || row >= width as isize || col >= width as isize {
            return None;
        }
        Some(Coord::new(row as usize, col as usize))
    }

    pub fn is_adjacent(self, other: Coord) -> bool {
        let dr = (self.row() as isize - other.row() as isize).abs();
        let dc = (self.col() as isize - other.col() as isize).abs();
        dr + dc == 1
    }
}

impl Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

impl From<[usize; 2]> for Coord {
    fn from(array: [usize; 2]) -> Self {
        Self(array)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::{Coord, DIRECTIONS};

    #[test]
    fn offset_stays_in_bounds() {
        let corner = Coord::new(0, 0);
        let neighbors: Vec<_> = DIRECTIONS
            .iter()
            .filter_map(|&d| corner.offset(d, 3))
            .collect();
        assert_eq!(vec![Coord::new(0, 1), Coord::new(1, 0)], neighbors);
    }

    #[test]
    fn adjacency() {
        assert!(Coord::new(1, 1).is_adjacent(Coord::new(0, 1)));
        assert!(!Coord::new(1, 1).is_adjacent(Coord::new(0, 0)));
        assert!(!Coord::new(1, 1).is_adjacent(Coord::new(1, 1)));
    }

    #[test]
    fn index_conversion() {
        let coord = Coord::from_index(7, 3);
        assert_eq!(Coord::new(2, 1), coord);
        assert_eq!(7, coord.to_index(3));
    }
}
