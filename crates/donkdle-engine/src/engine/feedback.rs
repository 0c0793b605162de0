use serde::{Deserialize, Serialize};

/// Result of comparing one attribute channel of a guess against the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::IsVariant)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Exact match.
    Correct,
    /// Partial or related match.
    Present,
    /// No match.
    Absent,
}

/// Which way the target's requirement count lies from the guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// The target requires more moves than the guess.
    Higher,
    /// The target requires fewer moves than the guess.
    Lower,
}

impl Direction {
    #[must_use]
    pub const fn arrow(self) -> &'static str {
        match self {
            Direction::Higher => "↑",
            Direction::Lower => "↓",
        }
    }
}

/// The four independently scored comparison axes, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Region,
    Kong,
    Requirement,
    Moves,
}

impl Channel {
    pub const ALL: [Channel; 4] = [
        Channel::Region,
        Channel::Kong,
        Channel::Requirement,
        Channel::Moves,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Channel::Region => "REGION",
            Channel::Kong => "KONG",
            Channel::Requirement => "REQS",
            Channel::Moves => "MOVES",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionFeedback {
    pub status: Status,
    /// Hint region label of the guess.
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KongFeedback {
    pub status: Status,
    /// Raw kong list of the guess.
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementFeedback {
    /// Either [`Status::Correct`] or [`Status::Absent`].
    pub status: Status,
    /// Number of moves the guess requires.
    pub value: usize,
    /// Set only when the counts differ.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
}

/// Move comparison as shown to the player.
///
/// Moves the target needs but the guess lacks are deliberately absent: listing
/// them would give the answer away.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovesFeedback {
    pub status: Status,
    /// Moves required by both the guess and the target.
    pub common: Vec<String>,
    /// Moves required by the guess but not by the target.
    pub extra: Vec<String>,
}

impl MovesFeedback {
    /// Returns whether there is nothing to list, which is displayed as "None".
    ///
    /// This is unrelated to [`status`](Self::status): two locations requiring no
    /// moves at all match exactly and are [`Status::Correct`].
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.common.is_empty() && self.extra.is_empty()
    }
}

/// Per-channel evaluation of one guess. Created once by [`evaluate`](crate::evaluate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub region: RegionFeedback,
    pub kong: KongFeedback,
    pub requirement: RequirementFeedback,
    pub moves: MovesFeedback,
}

impl Feedback {
    #[must_use]
    pub fn status(&self, channel: Channel) -> Status {
        match channel {
            Channel::Region => self.region.status,
            Channel::Kong => self.kong.status,
            Channel::Requirement => self.requirement.status,
            Channel::Moves => self.moves.status,
        }
    }

    /// Channel statuses in [`Channel::ALL`] order.
    #[must_use]
    pub fn statuses(&self) -> [Status; 4] {
        Channel::ALL.map(|channel| self.status(channel))
    }

    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        self.statuses().iter().all(Status::is_correct)
    }
}
