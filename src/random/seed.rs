//! Strategies for turning a calendar date into a puzzle seed

use chrono::{Datelike, Local, NaiveDate};
use enum_dispatch::enum_dispatch;
use rand::Rng;

use crate::random::Seed;

/// Upper bound (exclusive) of seeds drawn by [`RandomSeed`]
pub const RANDOM_SEED_LIMIT: Seed = 1_000_000;

/// Derives the seed for the puzzle of a given day
#[enum_dispatch]
pub trait SeedSource {
    /// The seed for the puzzle on `date`
    fn seed(&self, date: NaiveDate) -> Seed;
}

/// Every supported seed derivation
#[enum_dispatch(SeedSource)]
#[derive(Clone, Debug)]
pub enum SeedStrategy {
    /// `year * 10000 + month * 100 + day`
    CalendarSeed,
    /// Whole days since an epoch
    DaysSinceEpochSeed,
    /// The same seed every day
    FixedSeed,
    /// A fresh random seed on every call
    RandomSeed,
}

impl Default for SeedStrategy {
    fn default() -> Self {
        CalendarSeed.into()
    }
}

/// Reads the date as decimal digits: 2024-01-01 becomes 20240101
#[derive(Clone, Copy, Debug, Default)]
pub struct CalendarSeed;

impl SeedSource for CalendarSeed {
    fn seed(&self, date: NaiveDate) -> Seed {
        date.year() as Seed * 10000 + date.month() * 100 + date.day()
    }
}

/// Counts whole days since `epoch`. Dates before the epoch give 0.
#[derive(Clone, Copy, Debug)]
pub struct DaysSinceEpochSeed {
    epoch: NaiveDate,
}

impl DaysSinceEpochSeed {
    /// Counts days from a custom epoch
    pub fn new(epoch: NaiveDate) -> Self {
        Self { epoch }
    }

    /// The epoch this strategy counts from
    pub fn epoch(&self) -> NaiveDate {
        self.epoch
    }
}

impl Default for DaysSinceEpochSeed {
    /// Counts from 2022-01-01
    fn default() -> Self {
        Self {
            epoch: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap_or(NaiveDate::MIN),
        }
    }
}

impl SeedSource for DaysSinceEpochSeed {
    fn seed(&self, date: NaiveDate) -> Seed {
        let days = date.signed_duration_since(self.epoch).num_days();
        days.max(0).min(i64::from(Seed::MAX)) as Seed
    }
}

/// Ignores the date
#[derive(Clone, Copy, Debug)]
pub struct FixedSeed(pub Seed);

impl SeedSource for FixedSeed {
    fn seed(&self, _date: NaiveDate) -> Seed {
        self.0
    }
}

/// Draws from the thread RNG, for playing puzzles other than today's
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomSeed;

impl SeedSource for RandomSeed {
    fn seed(&self, _date: NaiveDate) -> Seed {
        rand::thread_rng().gen_range(0, RANDOM_SEED_LIMIT)
    }
}

/// The local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn calendar_seed() {
        assert_eq!(20240101, CalendarSeed.seed(date(2024, 1, 1)));
        assert_eq!(20261231, CalendarSeed.seed(date(2026, 12, 31)));
    }

    #[test]
    fn days_since_epoch() {
        let source = DaysSinceEpochSeed::default();
        assert_eq!(0, source.seed(date(2022, 1, 1)));
        assert_eq!(365, source.seed(date(2023, 1, 1)));
        assert_eq!(0, source.seed(date(2021, 6, 1)));
    }

    #[test]
    fn strategy_dispatch() {
        let strategies: Vec<SeedStrategy> = vec![
            CalendarSeed.into(),
            DaysSinceEpochSeed::new(date(2024, 1, 1)).into(),
            FixedSeed(42).into(),
        ];
        let seeds: Vec<Seed> = strategies.iter().map(|s| s.seed(date(2024, 1, 11))).collect();
        assert_eq!(vec![20240111, 10, 42], seeds);
    }

    #[test]
    fn random_seed_in_range() {
        let strategy = SeedStrategy::from(RandomSeed);
        for _ in 0..100 {
            assert!(strategy.seed(date(2024, 1, 1)) < RANDOM_SEED_LIMIT);
        }
    }

    #[test]
    fn default_is_calendar() {
        assert_eq!(20250704, SeedStrategy::default().seed(date(2025, 7, 4)));
    }
}
