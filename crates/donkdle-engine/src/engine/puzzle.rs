use chrono::{Datelike as _, NaiveDate};
use rand::Rng;

use crate::{Catalog, Location};

/// How the target location is chosen.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum PuzzleMode {
    /// One target per calendar day, the same for every player.
    #[default]
    Daily,
    /// A fresh random target every game. Progress is not saved.
    Random,
}

/// A chosen target, identified by its index in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    mode: PuzzleMode,
    date: NaiveDate,
    index: usize,
}

impl Puzzle {
    /// Selects the puzzle of the day.
    #[must_use]
    pub fn daily(catalog: &Catalog, date: NaiveDate) -> Self {
        Self {
            mode: PuzzleMode::Daily,
            date,
            index: daily_index(date, catalog.len()),
        }
    }

    /// Selects a uniformly random puzzle.
    #[must_use]
    pub fn random<R>(catalog: &Catalog, date: NaiveDate, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self {
            mode: PuzzleMode::Random,
            date,
            index: rng.random_range(0..catalog.len()),
        }
    }

    #[must_use]
    pub fn mode(&self) -> PuzzleMode {
        self.mode
    }

    /// Day the puzzle is played on.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the target location.
    ///
    /// # Panics
    ///
    /// Panics if `catalog` is not the catalog the puzzle was selected from.
    #[must_use]
    pub fn target<'a>(&self, catalog: &'a Catalog) -> &'a Location {
        &catalog.locations()[self.index]
    }

    /// Key under which progress on this puzzle is saved.
    ///
    /// Random puzzles are never saved and have no key.
    #[must_use]
    pub fn state_key(&self) -> Option<String> {
        match self.mode {
            PuzzleMode::Daily => Some(format!(
                "donkdle_{}_{}_{}",
                self.date.year(),
                self.date.month(),
                self.date.day()
            )),
            PuzzleMode::Random => None,
        }
    }
}

/// Seed of the daily puzzle: the date written as `YYYYMMDD`.
#[must_use]
pub fn daily_seed(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 10_000 + i64::from(date.month()) * 100 + i64::from(date.day())
}

/// Maps a date onto a catalog index.
///
/// Uses the fractional part of `sin(seed) * 10000` as a uniform-looking value
/// in `[0, 1)`, so every player gets the same target on the same day.
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn daily_index(date: NaiveDate, len: usize) -> usize {
    assert!(len > 0, "cannot pick from an empty catalog");
    let x = (daily_seed(date) as f64).sin() * 10_000.0;
    let fraction = x - x.floor();
    let index = (fraction * len as f64).floor() as usize;
    index % len
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;
    use crate::{LocationId, LocationRecord};

    fn catalog(len: u64) -> Catalog {
        Catalog::from_records((0..len).map(|id| LocationRecord {
            id: LocationId::Number(id),
            name: Some(format!("Location {id}")),
            hint_region: Some("Hillside".to_owned()),
            level: Some("Japes".to_owned()),
            kong: Some("Donkey".to_owned()),
            moves: None,
        }))
        .unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_daily_seed() {
        assert_eq!(daily_seed(date(2025, 7, 4)), 20_250_704);
        assert_eq!(daily_seed(date(2025, 12, 31)), 20_251_231);
    }

    #[test]
    fn test_daily_index_is_stable_and_in_range() {
        let start = date(2025, 1, 1);
        for offset in 0..400 {
            let day = start + chrono::Days::new(offset);
            for len in [1, 2, 7, 250] {
                let index = daily_index(day, len);
                assert!(index < len);
                assert_eq!(index, daily_index(day, len));
            }
        }
    }

    #[test]
    fn test_daily_index_known_values() {
        assert_eq!(daily_index(date(2025, 6, 1), 250), 246);
        assert_eq!(daily_index(date(2025, 12, 31), 97), 27);
    }

    #[test]
    fn test_daily_puzzle() {
        let catalog = catalog(50);
        let day = date(2025, 6, 1);
        let puzzle = Puzzle::daily(&catalog, day);
        assert_eq!(puzzle.mode(), PuzzleMode::Daily);
        assert_eq!(puzzle.index(), daily_index(day, 50));
        assert_eq!(puzzle.target(&catalog).id(), catalog.locations()[puzzle.index()].id());
        assert_eq!(puzzle.state_key().as_deref(), Some("donkdle_2025_6_1"));
    }

    #[test]
    fn test_random_puzzle_has_no_state_key() {
        let catalog = catalog(10);
        let mut rng = Pcg32::seed_from_u64(42);
        let puzzle = Puzzle::random(&catalog, date(2025, 6, 1), &mut rng);
        assert_eq!(puzzle.mode(), PuzzleMode::Random);
        assert!(puzzle.index() < 10);
        assert_eq!(puzzle.state_key(), None);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("daily".parse::<PuzzleMode>().unwrap(), PuzzleMode::Daily);
        assert_eq!("Random".parse::<PuzzleMode>().unwrap(), PuzzleMode::Random);
        assert!("weekly".parse::<PuzzleMode>().is_err());
    }
}
