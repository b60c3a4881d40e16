//! Generate KenKen puzzles with a unique solution

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::collections::Square;
use crate::error::{GenerateError, InvalidPuzzle};
use crate::generated::Generated;
use crate::kenken::check::{check_grid, CheckResult};
use crate::kenken::latin::seeded_latin_square;
use crate::kenken::solve::{count_solutions, SolveLimit};
use crate::kenken::{Puzzle, Solution, Value, MAX_WIDTH};
use crate::random::{Mulberry32, Seed};

use self::cages::generate_cages;

mod cages;

const DEFAULT_WIDTH: usize = 5;
const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Parameters for generating a KenKen puzzle
#[derive(Clone, Copy, Debug)]
pub struct GenerateOptions {
    /// The width and height of the grid
    pub width: usize,
    /// Determines the solution and the cages
    pub seed: Seed,
    /// How many cage layouts to try before settling for one without a unique solution
    pub max_attempts: u32,
}

impl GenerateOptions {
    /// Options for a puzzle of the default width
    pub fn new(seed: Seed) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    #[allow(missing_docs)]
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    #[allow(missing_docs)]
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            seed: 0,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// A generated KenKen puzzle along with its solution
#[derive(Clone, Debug, PartialEq)]
pub struct KenKen {
    puzzle: Puzzle,
    solution: Solution,
    seed: Seed,
    attempts: u32,
}

impl KenKen {
    /// Generates a puzzle with the default number of attempts
    pub fn generate(width: usize, seed: Seed) -> Result<Generated<KenKen>, GenerateError> {
        generate(GenerateOptions::new(seed).width(width))
    }

    #[allow(missing_docs)]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// The Latin square the cages were built around
    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    #[allow(missing_docs)]
    pub fn seed(&self) -> Seed {
        self.seed
    }

    /// The number of cage layouts generated, including the returned one
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Checks a partially or completely filled grid against the puzzle.
    /// Fails if the grid is not the same width as the puzzle.
    pub fn check(&self, grid: &Square<Option<Value>>) -> Result<CheckResult, InvalidPuzzle> {
        check_grid(&self.puzzle, &self.solution, grid)
    }
}

impl Serialize for KenKen {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("KenKen", 4)?;
        state.serialize_field("seed", &self.seed)?;
        state.serialize_field("width", &self.puzzle.width())?;
        state.serialize_field("solution", &self.solution)?;
        state.serialize_field("cages", self.puzzle.cages())?;
        state.end()
    }
}

/// Generates a KenKen puzzle.
///
/// The solution is a Latin square built from the seed. Cage layouts are then
/// drawn from a second generator with the same seed until one has a unique
/// solution. Later attempts continue that generator's stream rather than
/// reseeding. If no layout is unique within `max_attempts`, the last layout is
/// returned as a fallback.
pub fn generate(options: GenerateOptions) -> Result<Generated<KenKen>, GenerateError> {
    let GenerateOptions {
        width,
        seed,
        max_attempts,
    } = options;
    if width == 0 || width > MAX_WIDTH {
        return Err(GenerateError::InvalidWidth(width));
    }
    if max_attempts == 0 {
        return Err(GenerateError::InvalidAttempts);
    }
    let solution = seeded_latin_square(width, seed);
    debug!("Solution:\n{}", &solution);
    let mut rng = Mulberry32::new(seed);
    let mut attempt = 1;
    loop {
        debug!("Generating cages, attempt {}/{}", attempt, max_attempts);
        let puzzle = Puzzle::from_parts(width, generate_cages(&solution, &mut rng));
        let unique = count_solutions(&puzzle, SolveLimit::UpTo(2)).is_unique();
        if unique || attempt == max_attempts {
            if unique {
                info!("Generated puzzle for seed {} in {} attempt(s)", seed, attempt);
            } else {
                warn!(
                    "No cage layout with a unique solution for seed {} after {} attempts, using the last one",
                    seed, attempt
                );
            }
            let kenken = KenKen {
                puzzle,
                solution,
                seed,
                attempts: attempt,
            };
            return Ok(Generated::new(kenken, unique));
        }
        debug!("Cages have multiple solutions, retrying");
        attempt += 1;
    }
}
