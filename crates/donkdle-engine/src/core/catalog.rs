use std::collections::{HashMap, HashSet};

use super::search;
use crate::{CatalogError, Location, LocationRecord, SearchHit};

/// Ordered collection of playable locations, loaded once at startup.
///
/// # Invariants
///
/// - At least one location
/// - Ids are unique
/// - Names are unique, compared case-insensitively (they are the guess lookup key)
///
/// # Example
///
/// ```
/// use donkdle_engine::{Catalog, LocationId, LocationRecord};
///
/// let record = LocationRecord {
///     id: LocationId::Number(1),
///     name: Some("Japes Hillside Bunch".to_owned()),
///     hint_region: Some("Hillside".to_owned()),
///     level: Some("Japes".to_owned()),
///     kong: Some("Donkey".to_owned()),
///     moves: None,
/// };
/// let catalog = Catalog::from_records([record]).unwrap();
///
/// assert_eq!(catalog.len(), 1);
/// assert!(catalog.find_by_name("japes hillside bunch").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    locations: Vec<Location>,
    by_name: HashMap<String, usize>,
    skipped: usize,
}

impl Catalog {
    /// Builds a catalog from raw records.
    ///
    /// Records that are not [playable](LocationRecord::is_playable) are skipped.
    /// Any other invalid record fails the whole load.
    pub fn from_records<I>(records: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = LocationRecord>,
    {
        let mut locations = vec![];
        let mut by_name = HashMap::new();
        let mut ids = HashSet::new();
        let mut skipped = 0;

        for record in records {
            if !record.is_playable() {
                skipped += 1;
                continue;
            }
            let location = Location::try_from(record).map_err(CatalogError::InvalidLocation)?;
            if !ids.insert(location.id().clone()) {
                return Err(CatalogError::DuplicateId {
                    id: location.id().clone(),
                });
            }
            let key = name_key(location.name());
            if by_name.insert(key, locations.len()).is_some() {
                return Err(CatalogError::DuplicateName {
                    name: location.name().to_owned(),
                });
            }
            locations.push(location);
        }

        if locations.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(Self {
            locations,
            by_name,
            skipped,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Number of records dropped because they were not playable.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Location> {
        self.locations.get(index)
    }

    /// Looks a location up by name, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Location> {
        let index = *self.by_name.get(&name_key(name))?;
        Some(&self.locations[index])
    }

    /// Ranks locations whose names match every word of `query`, best first.
    ///
    /// Queries shorter than two characters match nothing.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<SearchHit<'_>> {
        search::rank(&self.locations, query, search::MAX_HITS)
    }
}

fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LocationError, LocationId, UNKNOWN_REGION};

    fn record(id: u64, name: &str) -> LocationRecord {
        LocationRecord {
            id: LocationId::Number(id),
            name: Some(name.to_owned()),
            hint_region: Some("Lowlands".to_owned()),
            level: Some("Japes".to_owned()),
            kong: Some("Diddy".to_owned()),
            moves: Some(vec![]),
        }
    }

    #[test]
    fn test_skips_unplayable_records() {
        let mut unknown = record(2, "Somewhere");
        unknown.hint_region = Some(UNKNOWN_REGION.to_owned());
        let mut unnamed = record(3, "");
        unnamed.kong = None;
        let mut blank_region = record(4, "Blank");
        blank_region.hint_region = Some("   ".to_owned());

        let catalog = Catalog::from_records([
            record(1, "Japes Lowlands Bunch"),
            unknown,
            unnamed,
            blank_region,
        ])
        .unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.skipped(), 3);
        assert_eq!(catalog.locations()[0].name(), "Japes Lowlands Bunch");
    }

    #[test]
    fn test_rejects_missing_kong_on_playable_record() {
        let mut broken = record(1, "Broken");
        broken.kong = None;
        let err = Catalog::from_records([broken]).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidLocation(LocationError::MissingKong { .. })
        ));
    }

    #[test]
    fn test_rejects_duplicates() {
        let err = Catalog::from_records([record(1, "A"), record(1, "B")]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { .. }));

        let err = Catalog::from_records([record(1, "Same"), record(2, "SAME")]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateName { .. }));
    }

    #[test]
    fn test_rejects_empty_catalog() {
        let mut unknown = record(1, "Somewhere");
        unknown.hint_region = None;
        let err = Catalog::from_records([unknown]).unwrap_err();
        assert!(matches!(err, CatalogError::Empty));
    }

    #[test]
    fn test_find_by_name_is_case_insensitive() {
        let catalog = Catalog::from_records([record(1, "Factory Storage Crate")]).unwrap();
        let found = catalog.find_by_name("  factory STORAGE crate ").unwrap();
        assert_eq!(found.id(), &LocationId::Number(1));
        assert!(catalog.find_by_name("Factory Storage").is_none());
    }
}
