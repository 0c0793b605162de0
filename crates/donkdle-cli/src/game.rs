use std::ops::Deref;

use chrono::NaiveDate;
use donkdle_engine::{
    Catalog, GameSession, GuessError, PlayerStats, Puzzle, PuzzleMode, SessionSnapshot,
    SessionState,
};
use rand::SeedableRng as _;
use rand_pcg::Pcg32;

use crate::store::{STATS_KEY, Store};

/// Options that decide which puzzle is played and how.
#[derive(Debug, Clone)]
pub struct GameOptions {
    pub mode: PuzzleMode,
    pub date: NaiveDate,
    pub seed: Option<u64>,
    pub max_guesses: Option<usize>,
}

/// Outcome of an accepted guess.
#[derive(Debug)]
pub struct SubmitOutcome {
    pub state: SessionState,
    /// Set when the guess was accepted but saving progress or stats failed.
    pub persist_error: Option<anyhow::Error>,
}

/// A [`GameSession`] bound to its catalog, puzzle, and store.
///
/// Every accepted guess is saved right away (daily puzzles only), and the
/// outcome is added to the player statistics once the game ends.
#[derive(Debug)]
pub struct GameContext {
    catalog: Catalog,
    store: Store,
    puzzle: Puzzle,
    session: GameSession,
    rng: Pcg32,
}

/// Read-only access to the underlying session.
///
/// Guesses go through [`GameContext::submit_guess`], which persists them.
impl Deref for GameContext {
    type Target = GameSession;

    fn deref(&self) -> &Self::Target {
        &self.session
    }
}

impl GameContext {
    /// Selects the puzzle and resumes today's saved game, if any.
    ///
    /// A saved game that cannot be read or does not fit the puzzle is discarded
    /// with a warning on stderr.
    pub fn open(catalog: Catalog, store: Store, options: &GameOptions) -> Self {
        let mut rng = match options.seed {
            Some(seed) => Pcg32::seed_from_u64(seed),
            None => Pcg32::from_os_rng(),
        };
        let puzzle = match options.mode {
            PuzzleMode::Daily => Puzzle::daily(&catalog, options.date),
            PuzzleMode::Random => Puzzle::random(&catalog, options.date, &mut rng),
        };
        let session = load_session(&catalog, &store, &puzzle, options.max_guesses);

        let this = Self {
            catalog,
            store,
            puzzle,
            session,
            rng,
        };
        if this.session.state().is_over()
            && let Err(e) = this.record_outcome()
        {
            eprintln!("Warning: failed to update statistics: {e:#}");
        }
        this
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn submit_guess(&mut self, input: &str) -> Result<SubmitOutcome, GuessError> {
        self.session.submit_guess(&self.catalog, input)?;
        let state = self.session.state();

        let saved = self.save();
        let recorded = if state.is_over() {
            self.record_outcome().map(drop)
        } else {
            Ok(())
        };
        let persist_error = saved.and(recorded).err();
        Ok(SubmitOutcome {
            state,
            persist_error,
        })
    }

    /// Starts over with a new random target.
    ///
    /// Returns `false` for daily puzzles, which cannot be replayed.
    pub fn restart(&mut self) -> bool {
        if self.puzzle.mode() != PuzzleMode::Random {
            return false;
        }
        let max_guesses = self.session.max_guesses();
        self.puzzle = Puzzle::random(&self.catalog, self.puzzle.date(), &mut self.rng);
        self.session = GameSession::new(self.puzzle.target(&self.catalog).clone(), max_guesses);
        true
    }

    pub fn load_stats(&self) -> anyhow::Result<PlayerStats> {
        Ok(self.store.get(STATS_KEY)?.unwrap_or_default())
    }

    pub fn share_text(&self) -> String {
        donkdle_engine::share_text(&self.session, self.puzzle.date())
    }

    fn save(&self) -> anyhow::Result<()> {
        let Some(key) = self.puzzle.state_key() else {
            return Ok(());
        };
        self.store.put(&key, &self.session.snapshot())
    }

    fn record_outcome(&self) -> anyhow::Result<PlayerStats> {
        let mut stats = self.load_stats()?;
        if stats.record_result(self.session.state().is_won(), self.puzzle.date()) {
            self.store.put(STATS_KEY, &stats)?;
        }
        Ok(stats)
    }
}

fn load_session(
    catalog: &Catalog,
    store: &Store,
    puzzle: &Puzzle,
    max_guesses: Option<usize>,
) -> GameSession {
    let target = puzzle.target(catalog).clone();
    let Some(key) = puzzle.state_key() else {
        return GameSession::new(target, max_guesses);
    };

    let restored = store
        .get::<SessionSnapshot>(&key)
        .and_then(|snapshot| match snapshot {
            Some(snapshot) => {
                let session = GameSession::restore(target.clone(), max_guesses, snapshot)?;
                Ok(Some(session))
            }
            None => Ok(None),
        });

    match restored {
        Ok(Some(session)) => {
            eprintln!("Resuming saved game with {} guesses", session.guesses().len());
            session
        }
        Ok(None) => GameSession::new(target, max_guesses),
        Err(e) => {
            eprintln!("Warning: discarding saved game {key}: {e:#}");
            if let Err(e) = store.remove(&key) {
                eprintln!("Warning: {e:#}");
            }
            GameSession::new(target, max_guesses)
        }
    }
}
