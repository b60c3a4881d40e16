//! Deal a hand of SET cards holding an exact number of sets

use serde::Serialize;

use crate::error::GenerateError;
use crate::generated::Generated;
use crate::random::{shuffle, Mulberry32, Seed};
use crate::set::card::{all_cards, find_sets, SetCard, DECK_SIZE};

const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;
const DEFAULT_TARGET_SETS: usize = 6;
const DEFAULT_HAND_SIZE: usize = 12;

/// Parameters for dealing a SET puzzle
#[derive(Clone, Copy, Debug)]
pub struct SetOptions {
    /// Determines the hands dealt
    pub seed: Seed,
    /// How many hands to deal before settling for one with the wrong number of sets
    pub max_attempts: u32,
    /// The exact number of sets the hand must contain
    pub target_sets: usize,
    /// The number of cards in the hand
    pub hand_size: usize,
}

impl SetOptions {
    /// Default options for a seed
    pub fn new(seed: Seed) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    #[allow(missing_docs)]
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    #[allow(missing_docs)]
    pub fn target_sets(mut self, target_sets: usize) -> Self {
        self.target_sets = target_sets;
        self
    }

    #[allow(missing_docs)]
    pub fn hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }
}

impl Default for SetOptions {
    fn default() -> Self {
        Self {
            seed: 0,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            target_sets: DEFAULT_TARGET_SETS,
            hand_size: DEFAULT_HAND_SIZE,
        }
    }
}

/// A hand of cards and every set in it
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SetPuzzle {
    cards: Vec<SetCard>,
    #[serde(rename = "validTriples")]
    sets: Vec<[usize; 3]>,
    seed: Seed,
    #[serde(skip)]
    attempts: u32,
}

impl SetPuzzle {
    /// Deals a puzzle with the default options
    pub fn generate(seed: Seed) -> Result<Generated<SetPuzzle>, GenerateError> {
        generate(SetOptions::new(seed))
    }

    #[allow(missing_docs)]
    pub fn cards(&self) -> &[SetCard] {
        &self.cards
    }

    /// Index triples into `cards`, each sorted, in lexicographic order
    pub fn sets(&self) -> &[[usize; 3]] {
        &self.sets
    }

    #[allow(missing_docs)]
    pub fn seed(&self) -> Seed {
        self.seed
    }

    /// The number of hands dealt, including this one
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Returns true if the cards at the three indices form one of the sets.
    /// The indices may be given in any order.
    pub fn is_set(&self, i: usize, j: usize, k: usize) -> bool {
        let mut triple = [i, j, k];
        triple.sort_unstable();
        self.sets.binary_search(&triple).is_ok()
    }
}

/// Deals a SET puzzle.
///
/// Each attempt shuffles a fresh copy of the ordered deck and takes the first
/// `hand_size` cards. All attempts draw from one generator, so attempt `n` is
/// fixed by the seed. The first hand with exactly `target_sets` sets is
/// returned. If none is found within `max_attempts`, the last hand is returned
/// as a fallback.
pub fn generate(options: SetOptions) -> Result<Generated<SetPuzzle>, GenerateError> {
    let SetOptions {
        seed,
        max_attempts,
        target_sets,
        hand_size,
    } = options;
    if hand_size < 3 || hand_size > DECK_SIZE {
        return Err(GenerateError::InvalidHandSize(hand_size));
    }
    if max_attempts == 0 {
        return Err(GenerateError::InvalidAttempts);
    }
    let mut rng = Mulberry32::new(seed);
    let mut attempt = 1;
    loop {
        let mut deck = all_cards().to_vec();
        shuffle(&mut deck, &mut rng);
        deck.truncate(hand_size);
        let sets = find_sets(&deck);
        trace!("Attempt {}: {} set(s)", attempt, sets.len());
        let exact = sets.len() == target_sets;
        if exact || attempt == max_attempts {
            if exact {
                info!(
                    "Dealt {} cards with {} sets for seed {} in {} attempt(s)",
                    hand_size, target_sets, seed, attempt
                );
            } else {
                warn!(
                    "No hand with {} sets for seed {} after {} attempts, using one with {}",
                    target_sets,
                    seed,
                    attempt,
                    sets.len()
                );
            }
            let puzzle = SetPuzzle {
                cards: deck,
                sets,
                seed,
                attempts: attempt,
            };
            return Ok(Generated::new(puzzle, exact));
        }
        attempt += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::set::card::is_valid_set;

    fn indices(puzzle: &SetPuzzle) -> Vec<usize> {
        puzzle.cards().iter().map(|c| c.index()).collect()
    }

    #[test]
    fn golden_puzzle() {
        let generated = SetPuzzle::generate(20240101).unwrap();
        let puzzle = generated.canonical().unwrap();
        assert_eq!(14, puzzle.attempts());
        assert_eq!(
            vec![7, 35, 30, 34, 3, 76, 15, 37, 70, 68, 80, 49],
            indices(puzzle)
        );
        assert_eq!(
            &[[0, 5, 7], [3, 6, 10], [3, 7, 11], [4, 7, 10], [4, 9, 11], [6, 7, 9]],
            puzzle.sets()
        );
    }

    #[test]
    fn other_seeds() {
        let puzzle = SetPuzzle::generate(42).unwrap().into_inner();
        assert_eq!(114, puzzle.attempts());
        assert_eq!(
            vec![15, 18, 55, 66, 46, 38, 68, 37, 67, 42, 11, 40],
            indices(&puzzle)
        );
        let puzzle = SetPuzzle::generate(7).unwrap().into_inner();
        assert_eq!(45, puzzle.attempts());
        assert_eq!(
            &[[0, 1, 2], [0, 5, 6], [1, 3, 11], [3, 4, 9], [4, 5, 10], [6, 7, 10]],
            puzzle.sets()
        );
    }

    #[test]
    fn falls_back_after_max_attempts() {
        let generated = generate(SetOptions::new(20240101).max_attempts(1)).unwrap();
        assert!(generated.is_fallback());
        let puzzle = generated.get();
        assert_eq!(
            vec![62, 52, 60, 7, 45, 80, 29, 74, 20, 69, 30, 41],
            indices(puzzle)
        );
        assert_eq!(&[[0, 8, 11]], puzzle.sets());
    }

    #[test]
    fn sets_are_exact() {
        for seed in 0..20 {
            let generated = SetPuzzle::generate(seed).unwrap();
            let puzzle = generated.canonical().unwrap();
            let cards = puzzle.cards();
            assert_eq!(12, cards.len());
            let mut distinct = cards.to_vec();
            distinct.sort();
            distinct.dedup();
            assert_eq!(12, distinct.len());
            assert_eq!(6, puzzle.sets().len());
            for &[i, j, k] in puzzle.sets() {
                assert!(is_valid_set(cards[i], cards[j], cards[k]));
            }
        }
    }

    #[test]
    fn is_set_in_any_order() {
        let puzzle = SetPuzzle::generate(20240101).unwrap().into_inner();
        assert!(puzzle.is_set(0, 5, 7));
        assert!(puzzle.is_set(7, 0, 5));
        assert!(puzzle.is_set(9, 6, 7));
        assert!(!puzzle.is_set(0, 1, 2));
    }

    #[test]
    fn custom_target() {
        let generated = generate(SetOptions::new(3).hand_size(9).target_sets(2)).unwrap();
        let puzzle = generated.canonical().unwrap();
        assert_eq!(9, puzzle.cards().len());
        assert_eq!(2, puzzle.sets().len());
    }

    #[test]
    fn invalid_options() {
        assert_eq!(
            Err(GenerateError::InvalidHandSize(2)),
            generate(SetOptions::new(1).hand_size(2))
        );
        assert_eq!(
            Err(GenerateError::InvalidHandSize(82)),
            generate(SetOptions::new(1).hand_size(82))
        );
        assert_eq!(
            Err(GenerateError::InvalidAttempts),
            generate(SetOptions::new(1).max_attempts(0))
        );
    }

    #[test]
    fn serialize() {
        let puzzle = SetPuzzle::generate(20240101).unwrap().into_inner();
        let json = serde_json::to_value(&puzzle).unwrap();
        assert_eq!(serde_json::json!([0, 5, 7]), json["validTriples"][0]);
        assert_eq!("green", json["cards"][0]["color"]);
        assert_eq!(12, json["cards"].as_array().unwrap().len());
    }
}
