//! Immutable city catalog.
//!
//! The catalog is built once per session from raw loader records, validated
//! up front, and shared read-only by the turn resolver and the opponent
//! strategy. It never changes after construction: which cities have been
//! used lives in `GameState`, not here, so two sessions over one catalog
//! cannot corrupt each other.

pub mod attributes;
pub mod record;

pub use attributes::{AttributeKey, AttributeValue, Attributes};
pub use record::{CityRecord, RawCity};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::rules::normalize;
use crate::state::GameState;

/// Validated lookup table of all cities available in a session.
///
/// Keys are normalized (case-folded, trimmed) names. Iteration order is
/// input order. Duplicate normalized names are rejected at build time -
/// the reference behavior left this undefined, and rejecting loudly beats
/// silently keeping one of the two records.
///
/// ## Example
///
/// ```
/// use city_chain::catalog::{CityCatalog, RawCity};
///
/// let catalog = CityCatalog::build(vec![
///     RawCity::new("Reno", 264_165),
///     RawCity::new("Omaha", 486_051),
/// ])
/// .unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.lookup("RENO").unwrap().name(), "Reno");
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CityCatalog {
    /// Records in input order.
    records: Vec<CityRecord>,
    /// Normalized name -> position in `records`.
    index: FxHashMap<String, usize>,
}

impl CityCatalog {
    /// Build a catalog from raw loader records.
    ///
    /// Fails on the first invalid record: empty name, non-positive
    /// population, or a name that normalizes to one already present.
    /// Building the same input twice yields catalogs with identical
    /// lookup results.
    pub fn build(raw: impl IntoIterator<Item = RawCity>) -> Result<Self, CatalogError> {
        let mut records = Vec::new();
        let mut index = FxHashMap::default();

        for (i, raw_record) in raw.into_iter().enumerate() {
            let record = CityRecord::from_raw(i, raw_record)?;
            if index.contains_key(record.normalized()) {
                return Err(CatalogError::DuplicateName {
                    index: i,
                    name: record.normalized().to_string(),
                });
            }
            index.insert(record.normalized().to_string(), records.len());
            records.push(record);
        }

        Ok(Self { records, index })
    }

    /// Look up a city by name (any case, surrounding whitespace ignored).
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&CityRecord> {
        self.index.get(&normalize(name)).map(|&i| &self.records[i])
    }

    /// Check whether a name is in the catalog.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&normalize(name))
    }

    /// Number of cities in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all records in input order.
    ///
    /// The iterator is finite and restartable; call again for a fresh pass.
    pub fn iter(&self) -> impl Iterator<Item = &CityRecord> {
        self.records.iter()
    }

    /// Iterate over the available pool: catalog minus the state's used set.
    ///
    /// Computed on demand; nothing about availability is stored here.
    pub fn available<'a>(
        &'a self,
        state: &'a GameState,
    ) -> impl Iterator<Item = &'a CityRecord> + 'a {
        self.records.iter().filter(move |r| !state.is_used(r.normalized()))
    }

    /// Iterate over available cities that satisfy a first-letter constraint.
    ///
    /// `letter = None` means no constraint, so every available city
    /// qualifies (the whole-name-excluded edge case).
    pub fn candidates<'a>(
        &'a self,
        state: &'a GameState,
        letter: Option<char>,
    ) -> impl Iterator<Item = &'a CityRecord> + 'a {
        self.available(state)
            .filter(move |r| letter.is_none() || r.first_letter() == letter)
    }

    /// Count of cities still available in the given state.
    #[must_use]
    pub fn remaining(&self, state: &GameState) -> usize {
        self.available(state).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_catalog() -> CityCatalog {
        CityCatalog::build(vec![
            RawCity::new("Reno", 1),
            RawCity::new("Omaha", 2),
            RawCity::new("Austin", 3),
        ])
        .unwrap()
    }

    #[test]
    fn test_build_and_lookup() {
        let catalog = small_catalog();

        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.lookup("omaha").unwrap().name(), "Omaha");
        assert_eq!(catalog.lookup("  OMAHA  ").unwrap().name(), "Omaha");
        assert!(catalog.lookup("Paris").is_none());
    }

    #[test]
    fn test_build_empty() {
        let catalog = CityCatalog::build(vec![]).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn test_build_fails_on_first_invalid_record() {
        let err = CityCatalog::build(vec![
            RawCity::new("Reno", 1),
            RawCity::new("", 2),
            RawCity::new("Omaha", -1),
        ])
        .unwrap_err();

        assert_eq!(err, CatalogError::EmptyName { index: 1 });
    }

    #[test]
    fn test_build_rejects_duplicates() {
        let err = CityCatalog::build(vec![
            RawCity::new("Omaha", 1),
            RawCity::new("OMAHA", 2),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            CatalogError::DuplicateName {
                index: 1,
                name: "omaha".to_string(),
            }
        );
    }

    #[test]
    fn test_iter_preserves_input_order() {
        let catalog = small_catalog();
        let names: Vec<_> = catalog.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Reno", "Omaha", "Austin"]);

        // Restartable
        assert_eq!(catalog.iter().count(), 3);
        assert_eq!(catalog.iter().count(), 3);
    }

    #[test]
    fn test_build_is_idempotent() {
        let raw = || {
            vec![
                RawCity::new("Казань", 1_308_660),
                RawCity::new("Нальчик", 239_054),
            ]
        };
        let a = CityCatalog::build(raw()).unwrap();
        let b = CityCatalog::build(raw()).unwrap();

        for record in a.iter() {
            let other = b.lookup(record.name()).unwrap();
            assert_eq!(other.name(), record.name());
            assert_eq!(other.population(), record.population());
        }
        assert_eq!(a.len(), b.len());
    }

    #[test]
    fn test_available_and_remaining() {
        let catalog = small_catalog();
        let state = GameState::new();

        assert_eq!(catalog.remaining(&state), 3);
        assert_eq!(catalog.available(&state).count(), 3);
    }

    #[test]
    fn test_candidates_by_letter() {
        let catalog = small_catalog();
        let state = GameState::new();

        let o: Vec<_> = catalog.candidates(&state, Some('o')).map(|r| r.name()).collect();
        assert_eq!(o, vec!["Omaha"]);

        let none: Vec<_> = catalog.candidates(&state, Some('z')).collect();
        assert!(none.is_empty());

        // No constraint: every available city qualifies
        assert_eq!(catalog.candidates(&state, None).count(), 3);
    }
}
