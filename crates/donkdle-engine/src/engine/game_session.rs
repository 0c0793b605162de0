use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{Catalog, Feedback, GuessError, Location, LocationId, RestoreError, evaluate};

/// A guessed location paired with its evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    location: Location,
    feedback: Feedback,
}

impl Guess {
    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    #[must_use]
    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    Playing,
    Won,
    Lost,
}

impl SessionState {
    #[must_use]
    pub fn is_over(self) -> bool {
        !self.is_playing()
    }
}

/// Serializable form of a [`GameSession`], without its target.
///
/// The target is derived again from the puzzle when the session is restored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub guesses: Vec<Guess>,
    #[serde(default)]
    pub game_over: bool,
    #[serde(default)]
    pub game_won: bool,
}

/// State of one game: the target, the guesses so far, and the outcome.
///
/// The only mutation is [`submit_guess`](Self::submit_guess). A rejected guess
/// leaves the session untouched.
///
/// # Example
///
/// ```
/// use donkdle_engine::{Catalog, GameSession, GuessError, LocationId, LocationRecord};
///
/// let record = |id: u64, name: &str| LocationRecord {
///     id: LocationId::Number(id),
///     name: Some(name.to_owned()),
///     hint_region: Some("Hillside".to_owned()),
///     level: Some("Japes".to_owned()),
///     kong: Some("Donkey".to_owned()),
///     moves: None,
/// };
/// let catalog = Catalog::from_records([record(1, "Bunch"), record(2, "Crate")]).unwrap();
/// let mut session = GameSession::new(catalog.locations()[1].clone(), None);
///
/// session.submit_guess(&catalog, "bunch").unwrap();
/// assert_eq!(session.submit_guess(&catalog, "Bunch"), Err(GuessError::AlreadyGuessed));
/// session.submit_guess(&catalog, "Crate").unwrap();
/// assert!(session.state().is_won());
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    target: Location,
    guesses: Vec<Guess>,
    max_guesses: Option<usize>,
    state: SessionState,
}

impl GameSession {
    /// Starts a new game.
    ///
    /// `max_guesses` of `None` allows unlimited guesses, so the game only ends
    /// when the target is found.
    #[must_use]
    pub fn new(target: Location, max_guesses: Option<usize>) -> Self {
        Self {
            target,
            guesses: vec![],
            max_guesses,
            state: SessionState::Playing,
        }
    }

    /// Resumes a game from a snapshot taken with [`snapshot`](Self::snapshot).
    ///
    /// The recorded feedback is kept as-is. The snapshot is rejected if it
    /// guesses a location twice, or if its outcome disagrees with its guesses.
    pub fn restore(
        target: Location,
        max_guesses: Option<usize>,
        snapshot: SessionSnapshot,
    ) -> Result<Self, RestoreError> {
        let SessionSnapshot {
            guesses,
            game_over,
            game_won,
        } = snapshot;

        let mut seen = HashSet::new();
        for guess in &guesses {
            if !seen.insert(guess.location.id()) {
                return Err(RestoreError::DuplicateGuess {
                    id: guess.location.id().clone(),
                });
            }
        }

        let found = seen.contains(target.id());
        if found != game_won || (game_won && !game_over) {
            return Err(RestoreError::InconsistentOutcome);
        }

        let limit_reached = max_guesses.is_some_and(|max| guesses.len() >= max);
        let state = if game_won {
            SessionState::Won
        } else if game_over || limit_reached {
            SessionState::Lost
        } else {
            SessionState::Playing
        };

        Ok(Self {
            target,
            guesses,
            max_guesses,
            state,
        })
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            guesses: self.guesses.clone(),
            game_over: self.state.is_over(),
            game_won: self.state.is_won(),
        }
    }

    #[must_use]
    pub fn target(&self) -> &Location {
        &self.target
    }

    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    #[must_use]
    pub fn max_guesses(&self) -> Option<usize> {
        self.max_guesses
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn has_guessed(&self, id: &LocationId) -> bool {
        self.guesses.iter().any(|guess| guess.location.id() == id)
    }

    /// Resolves `input` to a catalog location, evaluates it and records the guess.
    ///
    /// Input is matched against location names ignoring case and surrounding
    /// whitespace.
    pub fn submit_guess(
        &mut self,
        catalog: &Catalog,
        input: &str,
    ) -> Result<&Guess, GuessError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(GuessError::EmptyInput);
        }
        if self.state.is_over() {
            return Err(GuessError::GameOver);
        }
        let location = catalog.find_by_name(input).ok_or(GuessError::NotFound)?;
        if self.has_guessed(location.id()) {
            return Err(GuessError::AlreadyGuessed);
        }

        let feedback = evaluate(location, &self.target);
        let index = self.guesses.len();
        self.guesses.push(Guess {
            location: location.clone(),
            feedback,
        });

        if location.id() == self.target.id() {
            self.state = SessionState::Won;
        } else if self
            .max_guesses
            .is_some_and(|max| self.guesses.len() >= max)
        {
            self.state = SessionState::Lost;
        }

        Ok(&self.guesses[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LocationRecord, Status};

    fn catalog() -> Catalog {
        let records = [
            (1, "Hillside Bunch", "Hillside", "Japes", "Donkey", vec!["Strong Kong"]),
            (2, "Lowlands Coin", "Lowlands", "Japes", "Diddy", vec![]),
            (3, "Storage Crate", "Storage", "Factory", "Any", vec!["Climbing"]),
        ];
        Catalog::from_records(records.into_iter().map(
            |(id, name, region, level, kong, moves)| LocationRecord {
                id: LocationId::Number(id),
                name: Some(name.to_owned()),
                hint_region: Some(region.to_owned()),
                level: Some(level.to_owned()),
                kong: Some(kong.to_owned()),
                moves: Some(moves.into_iter().map(ToOwned::to_owned).collect()),
            },
        ))
        .unwrap()
    }

    fn session(catalog: &Catalog, max_guesses: Option<usize>) -> GameSession {
        GameSession::new(catalog.locations()[0].clone(), max_guesses)
    }

    #[test]
    fn test_rejections_leave_state_unchanged() {
        let catalog = catalog();
        let mut session = session(&catalog, None);

        assert_eq!(session.submit_guess(&catalog, "   "), Err(GuessError::EmptyInput));
        assert_eq!(session.submit_guess(&catalog, "Nowhere"), Err(GuessError::NotFound));
        session.submit_guess(&catalog, "lowlands coin").unwrap();
        assert_eq!(
            session.submit_guess(&catalog, "LOWLANDS COIN"),
            Err(GuessError::AlreadyGuessed)
        );

        assert_eq!(session.guesses().len(), 1);
        assert!(session.state().is_playing());
    }

    #[test]
    fn test_guess_records_feedback() {
        let catalog = catalog();
        let mut session = session(&catalog, None);

        let guess = session.submit_guess(&catalog, "Lowlands Coin").unwrap();
        assert_eq!(guess.location().name(), "Lowlands Coin");
        assert_eq!(guess.feedback().region.status, Status::Present);
        assert_eq!(guess.feedback().kong.status, Status::Absent);
    }

    #[test]
    fn test_finding_target_wins_and_ends_game() {
        let catalog = catalog();
        let mut session = session(&catalog, None);

        let guess = session.submit_guess(&catalog, "Hillside Bunch").unwrap();
        assert!(guess.feedback().is_all_correct());
        assert!(session.state().is_won());
        assert_eq!(
            session.submit_guess(&catalog, "Storage Crate"),
            Err(GuessError::GameOver)
        );
    }

    #[test]
    fn test_guess_limit_loses() {
        let catalog = catalog();
        let mut session = session(&catalog, Some(2));

        session.submit_guess(&catalog, "Lowlands Coin").unwrap();
        assert!(session.state().is_playing());
        session.submit_guess(&catalog, "Storage Crate").unwrap();
        assert!(session.state().is_lost());
    }

    #[test]
    fn test_snapshot_restore() {
        let catalog = catalog();
        let mut session = session(&catalog, None);
        session.submit_guess(&catalog, "Storage Crate").unwrap();
        session.submit_guess(&catalog, "Hillside Bunch").unwrap();

        let json = serde_json::to_string(&session.snapshot()).unwrap();
        assert!(json.contains("\"gameOver\":true"));
        assert!(json.contains("\"gameWon\":true"));

        let snapshot: SessionSnapshot = serde_json::from_str(&json).unwrap();
        let restored = GameSession::restore(session.target().clone(), None, snapshot).unwrap();
        assert!(restored.state().is_won());
        assert_eq!(restored.guesses(), session.guesses());
    }

    #[test]
    fn test_restore_rejects_inconsistent_snapshots() {
        let catalog = catalog();
        let mut session = session(&catalog, None);
        session.submit_guess(&catalog, "Storage Crate").unwrap();

        let mut claims_win = session.snapshot();
        claims_win.game_won = true;
        claims_win.game_over = true;
        let err = GameSession::restore(session.target().clone(), None, claims_win).unwrap_err();
        assert!(matches!(err, RestoreError::InconsistentOutcome));

        let mut duplicated = session.snapshot();
        duplicated.guesses.push(duplicated.guesses[0].clone());
        let err = GameSession::restore(session.target().clone(), None, duplicated).unwrap_err();
        assert!(matches!(err, RestoreError::DuplicateGuess { .. }));
    }

    #[test]
    fn test_restore_applies_current_limit() {
        let catalog = catalog();
        let mut session = session(&catalog, None);
        session.submit_guess(&catalog, "Storage Crate").unwrap();

        let restored =
            GameSession::restore(session.target().clone(), Some(1), session.snapshot()).unwrap();
        assert!(restored.state().is_lost());
    }
}
