//! City records: raw input and validated form.
//!
//! `RawCity` is what the (out-of-scope) dataset loader hands over - already
//! deserialized, not yet trusted. `CityRecord` is the validated, immutable
//! form the rest of the engine works with. Validation happens exactly once,
//! at catalog build time; after that a record can never fail.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::rules::normalize;

use super::attributes::{AttributeKey, AttributeValue, Attributes};

/// Raw city record as supplied by the dataset loader.
///
/// Population is kept signed here so that a negative value in the input
/// reaches validation instead of failing deserialization with a less
/// useful message.
///
/// ## Example
///
/// ```
/// use city_chain::catalog::RawCity;
///
/// let raw = RawCity::new("Омск", 1_125_695)
///     .with_attr("subject", "Омская область")
///     .with_attr("lat", 54.99);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawCity {
    /// City name, original spelling.
    pub name: String,

    /// Population; must be positive to pass validation.
    pub population: i64,

    /// Opaque descriptive metadata (region, coordinates, ...).
    #[serde(default)]
    pub attributes: Attributes,
}

impl RawCity {
    /// Create a raw record.
    #[must_use]
    pub fn new(name: impl Into<String>, population: i64) -> Self {
        Self {
            name: name.into(),
            population,
            attributes: Attributes::default(),
        }
    }

    /// Add an attribute (builder pattern).
    #[must_use]
    pub fn with_attr(
        mut self,
        key: impl Into<AttributeKey>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// Validated, immutable city record.
///
/// Holds both the original spelling (for display) and the normalized name
/// (the catalog key). The first letter of the normalized name is
/// precomputed because strategy selection filters on it every turn.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CityRecord {
    name: String,
    normalized: String,
    first_letter: Option<char>,
    population: u64,
    attributes: Attributes,
}

impl CityRecord {
    /// Validate a raw record at catalog build time.
    ///
    /// `index` is the record's position in the raw input, reported back in
    /// the error.
    pub(crate) fn from_raw(index: usize, raw: RawCity) -> Result<Self, CatalogError> {
        let name = raw.name.trim().to_string();
        if name.is_empty() {
            return Err(CatalogError::EmptyName { index });
        }
        if raw.population <= 0 {
            return Err(CatalogError::InvalidPopulation {
                index,
                name,
                population: raw.population,
            });
        }

        let normalized = normalize(&name);
        let first_letter = normalized.chars().next();

        Ok(Self {
            name,
            normalized,
            first_letter,
            population: raw.population as u64,
            attributes: raw.attributes,
        })
    }

    /// City name, original spelling.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalized (case-folded, trimmed) name - the catalog key.
    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// First letter of the normalized name.
    #[must_use]
    pub fn first_letter(&self) -> Option<char> {
        self.first_letter
    }

    /// Population (always positive).
    #[must_use]
    pub fn population(&self) -> u64 {
        self.population
    }

    /// Opaque descriptive metadata.
    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Get an attribute value.
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(&AttributeKey::new(key))
    }
}
