//! Game rules and state management.
//!
//! - [`evaluate`] - Scores a guess against the target across four channels
//! - [`Feedback`] - The per-channel result of one guess
//! - [`GameSession`] - One game: target, guesses so far, and outcome
//! - [`PlayerStats`] - Played / won counts and daily streaks across games
//! - [`Puzzle`] - Daily or random selection of the target
//! - [`share_text`] - Spoiler-free summary of a finished game
//!
//! # Game Flow
//!
//! 1. Load a [`Catalog`](crate::Catalog) and pick a [`Puzzle`]
//! 2. Create a [`GameSession`] for the puzzle's target
//! 3. Submit guesses by name until the target is found (or the guess limit is hit)
//! 4. Record the outcome in [`PlayerStats`] and build the [`share_text`]

pub use self::{
    evaluator::*, feedback::*, game_session::*, player_stats::*, puzzle::*, share::*,
};

mod evaluator;
mod feedback;
mod game_session;
mod player_stats;
mod puzzle;
mod share;
