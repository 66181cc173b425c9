//! Opaque descriptive attributes carried on city records.
//!
//! The dataset ships more than the engine needs: federal subject, district,
//! coordinates. The engine never interprets any of it, but hosts may want
//! it back for display, so records carry it as an opaque key-value map.
//!
//! ## AttributeValue Types
//!
//! - `Int`: whole numbers
//! - `Float`: coordinates (latitude, longitude)
//! - `Text`: region names and the like
//! - `Bool`: flags

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Key for accessing record attributes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeKey(pub String);

impl AttributeKey {
    /// Create a new attribute key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

impl From<&str> for AttributeKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AttributeKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Value of a record attribute.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// Integer value.
    Int(i64),
    /// Floating-point value (coordinates).
    Float(f64),
    /// Text value (region, district).
    Text(String),
    /// Boolean flag.
    Bool(bool),
}

impl AttributeValue {
    /// Get as integer if this is an Int value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttributeValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as float if this is a Float value.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            AttributeValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as string reference if this is a Text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as bool if this is a Bool value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

// Convenient From implementations
impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        AttributeValue::Int(v)
    }
}

impl From<i32> for AttributeValue {
    fn from(v: i32) -> Self {
        AttributeValue::Int(v as i64)
    }
}

impl From<f64> for AttributeValue {
    fn from(v: f64) -> Self {
        AttributeValue::Float(v)
    }
}

impl From<bool> for AttributeValue {
    fn from(v: bool) -> Self {
        AttributeValue::Bool(v)
    }
}

impl From<String> for AttributeValue {
    fn from(v: String) -> Self {
        AttributeValue::Text(v)
    }
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        AttributeValue::Text(v.to_string())
    }
}

/// Collection of attributes.
pub type Attributes = FxHashMap<AttributeKey, AttributeValue>;
