use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::LocationError;

/// Kong label meaning the location can be done by any kong.
pub const WILDCARD_KONG: &str = "Any";

/// Hint region the source data uses for locations it could not classify.
pub const UNKNOWN_REGION: &str = "Unknown";

/// Identifier of a location, stable across a session.
///
/// Catalog files use either integers or strings for ids, so both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(untagged)]
pub enum LocationId {
    #[display("{_0}")]
    Number(u64),
    #[display("{_0}")]
    Text(String),
}

/// Location as it appears in a catalog file or a saved game.
///
/// Every attribute except `id` may be missing; [`Location::try_from`] decides
/// which gaps are acceptable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub id: LocationId,
    pub name: Option<String>,
    pub hint_region: Option<String>,
    pub level: Option<String>,
    pub kong: Option<String>,
    pub moves: Option<Vec<String>>,
}

impl LocationRecord {
    /// Returns whether the record describes a location that can appear in a game.
    ///
    /// Records without a name, or whose hint region is missing, blank or [`UNKNOWN_REGION`],
    /// are silently left out of the catalog rather than reported as errors.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        let has_name = self.name.as_deref().is_some_and(|name| !name.trim().is_empty());
        let has_region = self
            .hint_region
            .as_deref()
            .is_some_and(|region| {
                let region = region.trim();
                !region.is_empty() && region != UNKNOWN_REGION
            });
        has_name && has_region
    }
}

/// Character-affinity labels of a location.
///
/// Parsed from a comma-separated list. The raw string is kept as-is for display,
/// while comparisons use the set of trimmed, non-empty labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KongSet {
    raw: String,
    labels: BTreeSet<String>,
}

impl KongSet {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let labels = raw
            .split(',')
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(ToOwned::to_owned)
            .collect();
        Self {
            raw: raw.to_owned(),
            labels,
        }
    }

    /// Returns the list exactly as it was written in the catalog.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.contains(WILDCARD_KONG)
    }

    /// Returns whether both lists name the same kongs, ignoring order and spacing.
    #[must_use]
    pub fn same_labels(&self, other: &Self) -> bool {
        self.labels == other.labels
    }

    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        !self.labels.is_disjoint(&other.labels)
    }
}

/// Moves required to reach a location.
///
/// Behaves as a set: duplicates collapse on construction. The first-occurrence
/// order is kept so feedback lists moves in the order the catalog wrote them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveSet(Vec<String>);

impl MoveSet {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|m| m == label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(String::as_str)
    }
}

impl<S> FromIterator<S> for MoveSet
where
    S: Into<String>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let mut moves: Vec<String> = vec![];
        for label in iter {
            let label = label.into();
            if !moves.contains(&label) {
                moves.push(label);
            }
        }
        Self(moves)
    }
}

/// A guessable location.
///
/// Constructed from a [`LocationRecord`]; a missing `moves` list becomes an
/// empty set, while a missing name, hint region, level or kong is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LocationRecord", into = "LocationRecord")]
pub struct Location {
    id: LocationId,
    name: String,
    hint_region: String,
    level: String,
    kong: KongSet,
    moves: MoveSet,
}

impl Location {
    #[must_use]
    pub fn id(&self) -> &LocationId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sub-area label, the finer of the two region attributes.
    #[must_use]
    pub fn hint_region(&self) -> &str {
        &self.hint_region
    }

    /// Parent area label, the coarser of the two region attributes.
    #[must_use]
    pub fn level(&self) -> &str {
        &self.level
    }

    #[must_use]
    pub fn kong(&self) -> &KongSet {
        &self.kong
    }

    #[must_use]
    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// Number of distinct moves required.
    #[must_use]
    pub fn requirement_count(&self) -> usize {
        self.moves.len()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl TryFrom<LocationRecord> for Location {
    type Error = LocationError;

    fn try_from(record: LocationRecord) -> Result<Self, Self::Error> {
        let LocationRecord {
            id,
            name,
            hint_region,
            level,
            kong,
            moves,
        } = record;

        let Some(name) = non_blank(name) else {
            return Err(LocationError::MissingName { id });
        };
        let Some(hint_region) = non_blank(hint_region) else {
            return Err(LocationError::MissingHintRegion { id });
        };
        let Some(level) = non_blank(level) else {
            return Err(LocationError::MissingLevel { id });
        };
        let kong = kong.as_deref().map(KongSet::parse);
        let Some(kong) = kong.filter(|kong| !kong.is_empty()) else {
            return Err(LocationError::MissingKong { id });
        };
        let moves = moves.unwrap_or_default().into_iter().collect();

        Ok(Self {
            id,
            name,
            hint_region,
            level,
            kong,
            moves,
        })
    }
}

impl From<Location> for LocationRecord {
    fn from(location: Location) -> Self {
        Self {
            id: location.id,
            name: Some(location.name),
            hint_region: Some(location.hint_region),
            level: Some(location.level),
            kong: Some(location.kong.raw),
            moves: Some(location.moves.0),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64) -> LocationRecord {
        LocationRecord {
            id: LocationId::Number(id),
            name: Some("Japes Hillside Bunch".to_owned()),
            hint_region: Some("Hillside".to_owned()),
            level: Some("Japes".to_owned()),
            kong: Some("Donkey".to_owned()),
            moves: Some(vec!["Strong Kong".to_owned()]),
        }
    }

    #[test]
    fn test_kong_set_ignores_order_and_spacing() {
        let a = KongSet::parse("Donkey, Diddy");
        let b = KongSet::parse("Diddy,Donkey");
        assert!(a.same_labels(&b));
        assert_eq!(a.raw(), "Donkey, Diddy");
        assert_eq!(a.labels().collect::<Vec<_>>(), vec!["Diddy", "Donkey"]);
    }

    #[test]
    fn test_kong_set_wildcard_is_a_literal_label() {
        let any = KongSet::parse("Any");
        assert!(any.is_wildcard());
        assert!(!any.intersects(&KongSet::parse("Diddy")));
        assert!(!KongSet::parse("any").is_wildcard());
    }

    #[test]
    fn test_move_set_collapses_duplicates_in_order() {
        let moves: MoveSet = ["Climbing", "Strong Kong", "Climbing"].into_iter().collect();
        assert_eq!(moves.len(), 2);
        assert_eq!(moves.iter().collect::<Vec<_>>(), vec!["Climbing", "Strong Kong"]);
    }

    #[test]
    fn test_missing_moves_become_empty_set() {
        let mut record = record(1);
        record.moves = None;
        let location = Location::try_from(record).unwrap();
        assert!(location.moves().is_empty());
        assert_eq!(location.requirement_count(), 0);
    }

    #[test]
    fn test_missing_kong_is_rejected() {
        let mut record = record(7);
        record.kong = Some(" , ".to_owned());
        let err = Location::try_from(record).unwrap_err();
        assert!(matches!(err, LocationError::MissingKong { .. }));
        assert_eq!(err.to_string(), "location 7 has no kong");
    }

    #[test]
    fn test_playable_filter() {
        assert!(record(1).is_playable());

        let mut unknown = record(2);
        unknown.hint_region = Some(UNKNOWN_REGION.to_owned());
        assert!(!unknown.is_playable());

        let mut blank_name = record(3);
        blank_name.name = Some("   ".to_owned());
        assert!(!blank_name.is_playable());

        let mut no_region = record(4);
        no_region.hint_region = None;
        assert!(!no_region.is_playable());
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{
            "id": "bfi-1",
            "name": "Banana Fairy Island",
            "hint_region": "Mainisles",
            "level": "Isles",
            "kong": "Any",
            "extra_field": 3
        }"#;
        let location: Location = serde_json::from_str(json).unwrap();
        assert_eq!(location.id(), &LocationId::Text("bfi-1".to_owned()));
        assert!(location.kong().is_wildcard());
        assert!(location.moves().is_empty());

        let value = serde_json::to_value(&location).unwrap();
        assert_eq!(value["kong"], "Any");
        assert_eq!(value["moves"], serde_json::json!([]));
    }
}
