//! Compound quantities - "5 ft 7 in" style sums

use crate::convert::convert_value;
use crate::units::normalize;
use crate::{Category, Quantity, UNITS};

/// Try to collapse a multi-token quantity into a single value in the
/// target unit.
///
/// Succeeds only when every token classifies into the same summable
/// category (length, at present): each token is converted to the base
/// unit, the base values are summed, and the sum is converted to the
/// target. Any other combination yields `None`, including a same-class
/// non-length quantity and mixed categories.
pub fn try_compound(tokens: &[Quantity], target_unit: &str) -> Option<(f64, Category)> {
    if tokens.len() < 2 {
        return None;
    }

    let units: Vec<String> = tokens.iter().map(|t| normalize(&t.unit)).collect();
    let category = UNITS.category_of(&units[0])?;
    if !category.summable() {
        return None;
    }
    if !units.iter().all(|u| UNITS.category_of(u) == Some(category)) {
        return None;
    }

    let mut base_total = 0.0;
    for (token, unit) in tokens.iter().zip(&units) {
        base_total += convert_value(token.value, unit, category.base()).ok()?;
    }
    let value = convert_value(base_total, category.base(), target_unit).ok()?;
    Some((value, category))
}
