//! Query parsing - "5 ft 7 in to cm" into tokens and a target

use std::sync::LazyLock;

use regex::Regex;

use crate::units::normalize;
use crate::{ParsedQuery, Quantity, UNITS};

/// Separator between the quantity expression and the target unit: the
/// arrow, the word "to", or the connector "в".
static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*(?:->|to|в)\s*").unwrap());

/// A signed number immediately followed by a unit-symbol run.
static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(-?\d+(?:\.\d+)?)\s*([A-Za-z°/"']+)"#).unwrap());

/// Split a raw query into quantity tokens and a classified target.
///
/// Returns `None` for anything that is not a well-formed query; a
/// failed parse is an expected outcome, not an error. The separator
/// must occur exactly once, the left side must yield at least one
/// value+unit token, and the target must classify.
pub fn parse_query(input: &str) -> Option<ParsedQuery> {
    let parts: Vec<&str> = SEPARATOR.split(input.trim()).collect();
    if parts.len() != 2 {
        return None;
    }

    let mut tokens = Vec::new();
    for caps in TOKEN.captures_iter(parts[0]) {
        let value: f64 = caps[1].parse().ok()?;
        tokens.push(Quantity::new(value, &caps[2]));
    }
    if tokens.is_empty() {
        return None;
    }

    let target_unit = normalize(parts[1]);
    let target_category = UNITS.category_of(&target_unit)?;

    Some(ParsedQuery {
        tokens,
        target_unit,
        target_category,
    })
}
