//! Fatal error taxonomy.
//!
//! Only two conditions are real errors: a bad dataset record at catalog
//! build time, and a session configured with nothing to play with. Both
//! occur before the first move. Everything that happens during a game -
//! unknown names, reused names, wrong letters, a stranded opponent - is
//! outcome data (`MoveOutcome`, `MoveReport`), never an `Err`.

use thiserror::Error;

/// Dataset record rejected during catalog construction.
///
/// Raised at most once, for the first offending record. `index` is the
/// position of the record in the raw input sequence.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The record's name is empty or whitespace-only.
    #[error("record {index}: city name must be a non-empty string")]
    EmptyName { index: usize },

    /// The record's population is zero or negative.
    #[error("record {index} ({name}): population must be positive, got {population}")]
    InvalidPopulation {
        index: usize,
        name: String,
        population: i64,
    },

    /// Two records normalize to the same name.
    ///
    /// The reference behavior is undefined here; this crate rejects at
    /// build time rather than silently keeping one of the records.
    #[error("record {index}: duplicate city name '{name}'")]
    DuplicateName { index: usize, name: String },
}

/// Session configuration rejected before any move was accepted.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The catalog has no cities, so no game can be played.
    #[error("city catalog is empty")]
    EmptyCatalog,
}
