use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Aggregate results across days.
///
/// Tracks:
///
/// - **Played / won**: number of finished games and how many were won
/// - **Current streak**: consecutive days won, ending on the last day played
/// - **Max streak**: best streak ever reached
///
/// At most one game is counted per calendar day.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use donkdle_engine::PlayerStats;
///
/// let day = |d| NaiveDate::from_ymd_opt(2025, 3, d).unwrap();
/// let mut stats = PlayerStats::new();
///
/// assert!(stats.record_result(true, day(1)));
/// assert!(stats.record_result(true, day(2)));
/// assert!(!stats.record_result(false, day(2))); // second game on the same day
///
/// assert_eq!(stats.current_streak(), 2);
/// assert_eq!(stats.win_percentage(), 100);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerStats {
    played: u32,
    won: u32,
    current_streak: u32,
    max_streak: u32,
    last_played: Option<NaiveDate>,
}

impl PlayerStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn played(&self) -> u32 {
        self.played
    }

    #[must_use]
    pub const fn won(&self) -> u32 {
        self.won
    }

    #[must_use]
    pub const fn current_streak(&self) -> u32 {
        self.current_streak
    }

    #[must_use]
    pub const fn max_streak(&self) -> u32 {
        self.max_streak
    }

    #[must_use]
    pub const fn last_played(&self) -> Option<NaiveDate> {
        self.last_played
    }

    /// Percentage of games won, rounded half up. Zero before the first game.
    #[must_use]
    pub const fn win_percentage(&self) -> u32 {
        if self.played == 0 {
            return 0;
        }
        (200 * self.won + self.played) / (2 * self.played)
    }

    /// Counts a finished game played on `today`.
    ///
    /// Returns `false` without changing anything if a game was already counted
    /// for `today`. A win extends the streak if the previous game was played
    /// yesterday, and restarts it at 1 otherwise. A loss resets the streak.
    pub fn record_result(&mut self, won: bool, today: NaiveDate) -> bool {
        if self.last_played == Some(today) {
            return false;
        }

        self.played += 1;
        if won {
            self.won += 1;
            let played_yesterday = today
                .pred_opt()
                .is_some_and(|yesterday| self.last_played == Some(yesterday));
            self.current_streak = if played_yesterday {
                self.current_streak + 1
            } else {
                1
            };
            self.max_streak = self.max_streak.max(self.current_streak);
        } else {
            self.current_streak = 0;
        }
        self.last_played = Some(today);
        true
    }
}
