//! The outcome of a bounded generation search

/// A generated puzzle, tagged with whether it met its structural guarantee.
///
/// Generators search for a puzzle with an ideal property (a unique solution,
/// an exact number of sets) and give up after a bounded number of attempts.
/// When they give up, the last candidate is returned as `Fallback` so the
/// caller decides how to present it.
#[derive(Clone, Debug, PartialEq)]
pub enum Generated<T> {
    /// The puzzle meets its guarantee
    Canonical(T),
    /// The attempt budget ran out; this is the last candidate tried
    Fallback(T),
}

impl<T> Generated<T> {
    /// Returns true if the attempt budget ran out
    pub fn is_fallback(&self) -> bool {
        matches!(self, Generated::Fallback(_))
    }

    /// The puzzle, only if it meets its guarantee
    pub fn canonical(&self) -> Option<&T> {
        match self {
            Generated::Canonical(puzzle) => Some(puzzle),
            Generated::Fallback(_) => None,
        }
    }

    /// The puzzle, regardless of whether it meets its guarantee
    pub fn get(&self) -> &T {
        match self {
            Generated::Canonical(puzzle) | Generated::Fallback(puzzle) => puzzle,
        }
    }

    /// Unwraps the puzzle, regardless of whether it meets its guarantee
    pub fn into_inner(self) -> T {
        match self {
            Generated::Canonical(puzzle) | Generated::Fallback(puzzle) => puzzle,
        }
    }

    /// Converts into a `Result`, with a fallback puzzle as the error
    pub fn into_result(self) -> Result<T, T> {
        match self {
            Generated::Canonical(puzzle) => Ok(puzzle),
            Generated::Fallback(puzzle) => Err(puzzle),
        }
    }

    pub(crate) fn new(puzzle: T, canonical: bool) -> Self {
        if canonical {
            Generated::Canonical(puzzle)
        } else {
            Generated::Fallback(puzzle)
        }
    }
}
