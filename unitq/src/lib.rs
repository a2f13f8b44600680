//! unitq - free-text unit conversion queries
//!
//! Turns a query like "5 ft 7 in to cm" into a converted, rounded
//! value. The pipeline is pure and synchronous: split the query into a
//! quantity expression and a target, classify the units, aggregate
//! compound lengths, convert, round.
//!
//! Categories:
//! - Length (m, cm, mm, km, in, ft, yd, mi)
//! - Mass (kg, g, mg, lb, oz)
//! - Temperature (C, F, K)
//! - Speed (m/s, km/h, mph, ft/s)
//!
//! The crate holds no mutable state: the unit table is built once and
//! read-only afterwards, so callers may invoke it concurrently without
//! coordination. Rendering, persistence and other bookkeeping belong
//! to the caller.

mod category;
mod compound;
mod convert;
mod error;
mod parse;
mod quantity;
mod round;
mod units;

pub use category::Category;
pub use compound::try_compound;
pub use convert::{convert_value, from_celsius, to_celsius};
pub use error::{ErrorReport, QueryError};
pub use parse::parse_query;
pub use quantity::{Conversion, ParsedQuery, Quantity};
pub use round::{round_by_category, round_to};
pub use units::{normalize, UnitTable, UNITS};

/// Answer a free-text conversion query.
///
/// Multi-token quantities go through the compound path (summable
/// lengths only); single tokens convert directly. Failure paths have
/// no side effects, so success and its bookkeeping stay atomic for the
/// caller.
pub fn answer(input: &str) -> Result<Conversion, QueryError> {
    let ParsedQuery {
        tokens,
        target_unit,
        target_category,
    } = parse_query(input).ok_or(QueryError::Parse)?;

    if tokens.len() > 1 {
        let (value, category) = try_compound(&tokens, &target_unit)
            .ok_or(QueryError::UnsupportedCompound)?;
        return Ok(Conversion {
            value: round_by_category(value, Some(category)),
            unit: UNITS.display_alias(&target_unit).to_string(),
            category,
        });
    }

    let token = &tokens[0];
    let from = normalize(&token.unit);
    match UNITS.category_of(&from) {
        Some(category) if category == target_category => {}
        _ => {
            return Err(QueryError::Incompatible {
                from,
                to: target_unit,
            })
        }
    }

    let converted = convert_value(token.value, &from, &target_unit)?;
    Ok(Conversion {
        value: round_by_category(converted, Some(target_category)),
        unit: UNITS.display_alias(&target_unit).to_string(),
        category: target_category,
    })
}
