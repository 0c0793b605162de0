use std::cmp::Ordering;

use crate::{
    Direction, Feedback, KongFeedback, Location, MoveSet, MovesFeedback, RegionFeedback,
    RequirementFeedback, Status,
};

/// Scores a guessed location against the target, channel by channel.
///
/// | Channel     | Correct                 | Present                                  |
/// |-------------|-------------------------|------------------------------------------|
/// | region      | same hint region        | same level                               |
/// | kong        | same set of kongs       | any kong in common, or either is `"Any"` |
/// | requirement | same number of moves    | (never)                                  |
/// | moves       | same set of moves       | at least one move in common              |
///
/// Everything else is [`Status::Absent`]. The function is pure: the same inputs
/// always produce the same feedback.
///
/// # Example
///
/// ```
/// use donkdle_engine::{Direction, LocationId, LocationRecord, Location, Status, evaluate};
///
/// let location = |id, region: &str, moves: &[&str]| -> Location {
///     LocationRecord {
///         id: LocationId::Number(id),
///         name: Some(format!("Location {id}")),
///         hint_region: Some(region.to_owned()),
///         level: Some("Japes".to_owned()),
///         kong: Some("Donkey".to_owned()),
///         moves: Some(moves.iter().map(|m| (*m).to_owned()).collect()),
///     }
///     .try_into()
///     .unwrap()
/// };
///
/// let target = location(1, "Hillside", &["Strong Kong"]);
/// let guess = location(2, "Lowlands", &["Strong Kong", "Climbing"]);
/// let feedback = evaluate(&guess, &target);
///
/// assert_eq!(feedback.region.status, Status::Present);
/// assert_eq!(feedback.kong.status, Status::Correct);
/// assert_eq!(feedback.requirement.direction, Some(Direction::Lower));
/// assert_eq!(feedback.moves.status, Status::Present);
/// assert_eq!(feedback.moves.extra, vec!["Climbing".to_owned()]);
/// ```
#[must_use]
pub fn evaluate(guessed: &Location, target: &Location) -> Feedback {
    Feedback {
        region: evaluate_region(guessed, target),
        kong: evaluate_kong(guessed, target),
        requirement: evaluate_requirement(guessed, target),
        moves: MoveComparison::new(guessed.moves(), target.moves()).into_feedback(),
    }
}

fn evaluate_region(guessed: &Location, target: &Location) -> RegionFeedback {
    let status = if guessed.hint_region() == target.hint_region() {
        Status::Correct
    } else if guessed.level() == target.level() {
        Status::Present
    } else {
        Status::Absent
    };
    RegionFeedback {
        status,
        value: guessed.hint_region().to_owned(),
    }
}

fn evaluate_kong(guessed: &Location, target: &Location) -> KongFeedback {
    let (guessed_kong, target_kong) = (guessed.kong(), target.kong());
    let status = if guessed_kong.same_labels(target_kong) {
        Status::Correct
    } else if guessed_kong.intersects(target_kong)
        || guessed_kong.is_wildcard()
        || target_kong.is_wildcard()
    {
        Status::Present
    } else {
        Status::Absent
    };
    KongFeedback {
        status,
        value: guessed_kong.raw().to_owned(),
    }
}

fn evaluate_requirement(guessed: &Location, target: &Location) -> RequirementFeedback {
    let guessed_count = guessed.requirement_count();
    let (status, direction) = match guessed_count.cmp(&target.requirement_count()) {
        Ordering::Equal => (Status::Correct, None),
        Ordering::Less => (Status::Absent, Some(Direction::Higher)),
        Ordering::Greater => (Status::Absent, Some(Direction::Lower)),
    };
    RequirementFeedback {
        status,
        value: guessed_count,
        direction,
    }
}

/// Full set comparison of two move sets.
///
/// `missing` takes part in the status decision but never leaves this type.
#[derive(Debug)]
struct MoveComparison {
    common: Vec<String>,
    missing: Vec<String>,
    extra: Vec<String>,
    guessed_len: usize,
    target_len: usize,
}

impl MoveComparison {
    fn new(guessed: &MoveSet, target: &MoveSet) -> Self {
        let partition = |from: &MoveSet, other: &MoveSet, keep_shared: bool| -> Vec<String> {
            from.iter()
                .filter(|m| other.contains(m) == keep_shared)
                .map(ToOwned::to_owned)
                .collect()
        };
        Self {
            common: partition(guessed, target, true),
            missing: partition(target, guessed, false),
            extra: partition(guessed, target, false),
            guessed_len: guessed.len(),
            target_len: target.len(),
        }
    }

    fn status(&self) -> Status {
        let exact = self.guessed_len == self.target_len
            && self.common.len() == self.target_len
            && self.missing.is_empty()
            && self.extra.is_empty();
        if exact {
            Status::Correct
        } else if !self.common.is_empty() {
            Status::Present
        } else {
            Status::Absent
        }
    }

    fn into_feedback(self) -> MovesFeedback {
        MovesFeedback {
            status: self.status(),
            common: self.common,
            extra: self.extra,
        }
    }
}
