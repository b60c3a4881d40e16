//! Split a solved grid into cages and label each with a clue

use crate::collections::square::{Coord, DIRECTIONS};
use crate::collections::Square;
use crate::kenken::{Cage, Clue, Operator, Solution, Value};
use crate::random::{shuffle, Mulberry32};

/// Target cage sizes and their probabilities
const CAGE_SIZE_DISTRIBUTION: [(usize, f64); 3] = [(2, 0.6), (3, 0.3), (4, 0.1)];

/// Probability that a cage of three or more cells is a sum rather than a product
const SUM_PROBABILITY: f64 = 0.5;

/// Partitions the grid into cages and labels each with a clue that holds for `solution`.
///
/// Cells are visited in row-major order. Each unvisited cell starts a new cage
/// that grows by random walk into unvisited neighbors until it reaches its
/// target size or gets stuck. A stuck cage is kept as is, so cages of a single
/// cell happen.
pub(crate) fn generate_cages(solution: &Solution, rng: &mut Mulberry32) -> Vec<Cage> {
    let width = solution.width();
    let mut visited = Square::with_width_and_value(width, false);
    // the order persists from one step to the next
    let mut directions = DIRECTIONS;
    let mut cages = Vec::new();
    for index in 0..width.pow(2) {
        let start = Coord::from_index(index, width);
        if visited[start] {
            continue;
        }
        visited[start] = true;
        let mut cells = vec![start];
        let target_size = random_cage_size(rng);
        let mut frontier = vec![start];
        while cells.len() < target_size {
            let cell = match frontier.pop() {
                Some(cell) => cell,
                None => break,
            };
            shuffle(&mut directions, rng);
            let next = directions
                .iter()
                .filter_map(|&direction| cell.offset(direction, width))
                .find(|&neighbor| !visited[neighbor]);
            if let Some(next) = next {
                visited[next] = true;
                cells.push(next);
                frontier.push(next);
            }
        }
        let values = cells.iter().map(|&c| solution[c]).collect::<Vec<_>>();
        let clue = random_clue(&values, rng);
        trace!("Cage {:?} {}", cells, clue);
        cages.push(Cage::from_parts(cells.into(), clue));
    }
    cages
}

fn random_cage_size(rng: &mut Mulberry32) -> usize {
    let r = rng.next_f64();
    let mut cumulative = 0.0;
    for &(size, probability) in &CAGE_SIZE_DISTRIBUTION {
        cumulative += probability;
        if r < cumulative {
            return size;
        }
    }
    CAGE_SIZE_DISTRIBUTION[CAGE_SIZE_DISTRIBUTION.len() - 1].0
}

fn random_clue(values: &[Value], rng: &mut Mulberry32) -> Clue {
    match *values {
        [value] => Clue::new(Operator::Nop, value),
        [_, _] => {
            let clues = pair_clues(values);
            clues[rng.next_index(clues.len())]
        }
        _ => {
            if rng.next_f64() < SUM_PROBABILITY {
                Clue::new(Operator::Add, values.iter().sum())
            } else {
                Clue::new(Operator::Multiply, values.iter().product())
            }
        }
    }
}

/// Clues that fit a pair of values, division first and only if it comes out even
fn pair_clues(values: &[Value]) -> Vec<Clue> {
    [
        Operator::Divide,
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
    ]
    .iter()
    .filter_map(|&operator| operator.apply(values).map(|target| Clue::new(operator, target)))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kenken::is_connected;
    use crate::kenken::latin::seeded_latin_square;

    #[test]
    fn golden_cages() {
        let solution = seeded_latin_square(5, 20240101);
        let cages = generate_cages(&solution, &mut Mulberry32::new(20240101));
        let summary: Vec<(Vec<(usize, usize)>, String)> = cages
            .iter()
            .map(|cage| {
                let cells = cage.cells().iter().map(|c| (c.row(), c.col())).collect();
                (cells, cage.label())
            })
            .collect();
        let expected: Vec<(Vec<(usize, usize)>, String)> = vec![
            (vec![(0, 0), (0, 1)], "5÷"),
            (vec![(0, 2), (0, 3), (0, 4), (1, 4)], "24x"),
            (vec![(1, 0), (2, 0)], "1-"),
            (vec![(1, 1), (2, 1)], "12x"),
            (vec![(1, 2), (1, 3)], "1-"),
            (vec![(2, 2), (2, 3)], "2x"),
            (vec![(2, 4), (3, 4), (3, 3)], "75x"),
            (vec![(3, 0), (4, 0)], "5+"),
            (vec![(3, 1), (3, 2), (4, 2)], "10+"),
            (vec![(4, 1)], "2"),
            (vec![(4, 3), (4, 4)], "5+"),
        ]
        .into_iter()
        .map(|(cells, label)| (cells, label.to_string()))
        .collect();
        assert_eq!(expected, summary);
    }

    #[test]
    fn cages_partition_grid_and_match_solution() {
        for width in 1..=7 {
            for seed in 0..30 {
                let solution = seeded_latin_square(width, seed);
                let cages = generate_cages(&solution, &mut Mulberry32::new(seed));
                let mut covered = Square::with_width_and_value(width, 0);
                for cage in &cages {
                    assert!((1..=4).contains(&cage.len()));
                    assert!(is_connected(cage.cells()));
                    let values: Vec<Value> = cage.cells().iter().map(|&c| solution[c]).collect();
                    assert!(cage.clue().is_satisfied_by(&values));
                    for &c in cage.cells() {
                        covered[c] += 1;
                    }
                }
                assert!(covered.iter().all(|&n| n == 1));
            }
        }
    }

    #[test]
    fn clues_for_pairs() {
        assert_eq!(
            vec![
                Clue::new(Operator::Divide, 2),
                Clue::new(Operator::Add, 6),
                Clue::new(Operator::Subtract, 2),
                Clue::new(Operator::Multiply, 8),
            ],
            pair_clues(&[4, 2])
        );
        assert_eq!(
            vec![
                Clue::new(Operator::Add, 5),
                Clue::new(Operator::Subtract, 1),
                Clue::new(Operator::Multiply, 6),
            ],
            pair_clues(&[3, 2])
        );
    }

    #[test]
    fn cage_size_thresholds() {
        // the first draw for seed 42 is 0.601..., just past the size-2 threshold
        assert_eq!(3, random_cage_size(&mut Mulberry32::new(42)));
        // the first draw for seed 20240101 is 0.504...
        assert_eq!(2, random_cage_size(&mut Mulberry32::new(20240101)));
    }
}
