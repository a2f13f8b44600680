//! Unit categories

use std::fmt;
use serde::{Serialize, Deserialize};

/// A family of mutually convertible units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Mass,
    Temperature,
    Speed,
}

impl Category {
    /// Lookup priority for alias resolution. A token present in more
    /// than one category resolves to the first category listed here.
    pub const LOOKUP_ORDER: [Category; 4] = [
        Category::Length,
        Category::Mass,
        Category::Temperature,
        Category::Speed,
    ];

    /// Canonical token of the category's base unit.
    pub fn base(&self) -> &'static str {
        match self {
            Category::Length => "m",
            Category::Mass => "kg",
            Category::Temperature => "c",
            Category::Speed => "mps",
        }
    }

    /// Whether several tokens of this category may be summed into one
    /// quantity (feet + inches). Only length is additive in the query
    /// grammar.
    pub fn summable(&self) -> bool {
        matches!(self, Category::Length)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Mass => "mass",
            Category::Temperature => "temperature",
            Category::Speed => "speed",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
