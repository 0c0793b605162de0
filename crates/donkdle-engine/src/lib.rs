pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// A location record that cannot be turned into a playable [`Location`].
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum LocationError {
    #[display("location {id} has no name")]
    MissingName { id: LocationId },
    #[display("location {id} has no hint region")]
    MissingHintRegion { id: LocationId },
    #[display("location {id} has no level")]
    MissingLevel { id: LocationId },
    #[display("location {id} has no kong")]
    MissingKong { id: LocationId },
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum CatalogError {
    #[display("invalid location: {_0}")]
    InvalidLocation(LocationError),
    #[display("duplicate location id {id}")]
    DuplicateId { id: LocationId },
    #[display("duplicate location name {name:?}")]
    DuplicateName { name: String },
    #[display("catalog contains no playable locations")]
    Empty,
}

/// Reasons a guess is rejected. Session state is unchanged when any of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GuessError {
    #[display("please enter a location name")]
    EmptyInput,
    #[display("location not found, please select from the list")]
    NotFound,
    #[display("you already guessed this location")]
    AlreadyGuessed,
    #[display("the game is already over")]
    GameOver,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum RestoreError {
    #[display("saved game guesses location {id} more than once")]
    DuplicateGuess { id: LocationId },
    #[display("saved game outcome does not match its guesses")]
    InconsistentOutcome,
}
