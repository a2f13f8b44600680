//! Conversion math
//!
//! Linear categories scale through the category base unit. Temperature
//! is affine (scale plus offset), so it gets dedicated to/from-celsius
//! functions instead of factors.

use crate::error::QueryError;
use crate::{Category, UNITS};

/// Convert a temperature reading to celsius.
pub fn to_celsius(value: f64, unit: &str) -> Result<f64, QueryError> {
    match unit.to_lowercase().as_str() {
        "c" | "°c" | "celsius" => Ok(value),
        "f" | "°f" | "fahrenheit" => Ok((value - 32.0) * 5.0 / 9.0),
        "k" | "kelvin" => Ok(value - 273.15),
        _ => Err(QueryError::UnknownUnit(unit.to_string())),
    }
}

/// Convert a celsius reading to the given temperature unit.
pub fn from_celsius(celsius: f64, unit: &str) -> Result<f64, QueryError> {
    match unit.to_lowercase().as_str() {
        "c" | "°c" | "celsius" => Ok(celsius),
        "f" | "°f" | "fahrenheit" => Ok(celsius * 9.0 / 5.0 + 32.0),
        "k" | "kelvin" => Ok(celsius + 273.15),
        _ => Err(QueryError::UnknownUnit(unit.to_string())),
    }
}

/// Convert `value` between two units of the same category.
pub fn convert_value(value: f64, from: &str, to: &str) -> Result<f64, QueryError> {
    let category = match (UNITS.category_of(from), UNITS.category_of(to)) {
        (Some(a), Some(b)) if a == b => a,
        _ => {
            return Err(QueryError::Incompatible {
                from: from.to_string(),
                to: to.to_string(),
            })
        }
    };

    if category == Category::Temperature {
        return from_celsius(to_celsius(value, from)?, to);
    }

    // Linear categories: into the base unit, then out of it.
    let from_scale = UNITS
        .factor(category, from)
        .ok_or_else(|| QueryError::UnknownUnit(from.to_string()))?;
    let to_scale = UNITS
        .factor(category, to)
        .ok_or_else(|| QueryError::UnknownUnit(to.to_string()))?;
    Ok(value * from_scale / to_scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_freezing_point_is_exact() {
        assert_eq!(to_celsius(32.0, "F").unwrap(), 0.0);
        assert_eq!(convert_value(32.0, "f", "c").unwrap(), 0.0);
    }

    #[test]
    fn test_temperature_formulas() {
        assert_close(to_celsius(212.0, "F").unwrap(), 100.0);
        assert_close(to_celsius(273.15, "K").unwrap(), 0.0);
        assert_close(from_celsius(100.0, "F").unwrap(), 212.0);
        assert_close(from_celsius(0.0, "kelvin").unwrap(), 273.15);
    }

    #[test]
    fn test_temperature_round_trip() {
        for unit in ["C", "F", "K"] {
            let v = -12.5;
            let back = from_celsius(to_celsius(v, unit).unwrap(), unit).unwrap();
            assert_close(back, v);
        }
    }

    #[test]
    fn test_unknown_temperature_unit() {
        assert_eq!(
            to_celsius(1.0, "rankine"),
            Err(QueryError::UnknownUnit("rankine".to_string()))
        );
        assert_eq!(
            from_celsius(1.0, "x"),
            Err(QueryError::UnknownUnit("x".to_string()))
        );
    }

    #[test]
    fn test_linear_conversion() {
        assert_close(convert_value(2.4, "kg", "lb").unwrap(), 2.4 / 0.453_592_37);
        assert_close(convert_value(1.0, "mi", "km").unwrap(), 1.609_344);
        assert_close(convert_value(100.0, "km/h", "m/s").unwrap(), 100.0 / 3.6);
    }

    #[test]
    fn test_linear_round_trip() {
        let pairs = [("ft", "cm"), ("kg", "oz"), ("mph", "m/s")];
        for (u1, u2) in pairs {
            let v = 3.7;
            let back = convert_value(convert_value(v, u1, u2).unwrap(), u2, u1).unwrap();
            assert_close(back, v);
        }
    }

    #[test]
    fn test_identity_conversion() {
        for unit in ["m", "ft", "kg", "km/h"] {
            let back = convert_value(5.0, unit, unit).unwrap();
            assert!((back - 5.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_incompatible_categories() {
        assert_eq!(
            convert_value(5.0, "kg", "m"),
            Err(QueryError::Incompatible {
                from: "kg".to_string(),
                to: "m".to_string(),
            })
        );
    }

    #[test]
    fn test_unresolved_unit_is_incompatible() {
        assert!(matches!(
            convert_value(5.0, "furlong", "m"),
            Err(QueryError::Incompatible { .. })
        ));
    }
}
