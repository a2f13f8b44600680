//! Value types flowing through the pipeline

use std::fmt;
use serde::{Serialize, Deserialize};

use crate::Category;

/// One numeric value with its raw unit token, as typed by the user.
/// Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: String,
}

impl Quantity {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Quantity { value, unit: unit.into() }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// A fully split query: quantity tokens plus a resolved target.
///
/// Invariant: `target_category` classified successfully, or the query
/// never parsed in the first place.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuery {
    pub tokens: Vec<Quantity>,
    /// Normalized target unit token.
    pub target_unit: String,
    pub target_category: Category,
}

/// Final converted value handed to the renderer. Created per query,
/// discarded after rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub value: f64,
    /// Render label of the target unit, post alias normalization.
    pub unit: String,
    pub category: Category,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
