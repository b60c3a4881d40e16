//! Random Latin squares, the solutions behind KenKen puzzles

use crate::collections::Square;
use crate::kenken::{Solution, Value};
use crate::random::{shuffle, Mulberry32, Seed};

/// Builds a Latin square from its own generator seeded with `seed`
pub fn seeded_latin_square(width: usize, seed: Seed) -> Solution {
    latin_square(width, &mut Mulberry32::new(seed))
}

/// Builds a random Latin square.
///
/// Starts from the cyclic square whose rows are successive rotations of
/// `1..=width`, then permutes its rows and then its columns. Both permutations
/// preserve the Latin property.
pub fn latin_square(width: usize, rng: &mut Mulberry32) -> Solution {
    let mut generate_order = || {
        let mut order = (0..width).collect::<Vec<_>>();
        shuffle(&mut order, rng);
        order
    };
    let row_order = generate_order();
    let col_order = generate_order();
    let mut square: Square<Value> = Square::with_width_and_value(width, 0);
    for (i, row) in square.rows_mut().enumerate() {
        for (j, element) in row.iter_mut().enumerate() {
            *element = ((row_order[i] + col_order[j]) % width + 1) as Value;
        }
    }
    square
}

/// Returns true if every row and column holds each of `1..=width` exactly once
pub fn is_latin_square(square: &Square<Value>) -> bool {
    let width = square.width();
    square
        .rows()
        .all(|row| is_permutation(row.iter().copied(), width))
        && square.cols().all(|col| is_permutation(col.copied(), width))
}

fn is_permutation(values: impl Iterator<Item = Value>, width: usize) -> bool {
    let mut seen = vec![false; width];
    for value in values {
        if value < 1 || value as usize > width || seen[value as usize - 1] {
            return false;
        }
        seen[value as usize - 1] = true;
    }
    seen.into_iter().all(|s| s)
}
