//! Unit table - accepted aliases and scale factors per category
//!
//! Factors are relative to each category's base unit (meter, kilogram,
//! celsius, meters per second). Temperature rows carry a placeholder
//! factor and are used for classification only; its conversions are
//! affine and live in `convert`.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::Category;

/// Process-wide unit table, built once and read-only afterwards.
pub static UNITS: LazyLock<UnitTable> = LazyLock::new(UnitTable::new);

/// Canonicalize a raw unit token: drop all whitespace, lowercase.
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace().collect::<String>().to_lowercase()
}

/// Registry of accepted unit tokens grouped by category, plus the
/// preferred render label for canonical tokens.
pub struct UnitTable {
    scales: HashMap<Category, HashMap<&'static str, f64>>,
    display: HashMap<&'static str, &'static str>,
}

impl UnitTable {
    fn new() -> Self {
        let mut table = UnitTable {
            scales: HashMap::new(),
            display: HashMap::new(),
        };
        table.register_length_units();
        table.register_mass_units();
        table.register_temperature_units();
        table.register_speed_units();
        table.register_display_aliases();
        table
    }

    /// Classify a unit token, checking categories in
    /// [`Category::LOOKUP_ORDER`]. Temperature is looked up both as
    /// given and lowercased: its single-letter aliases ("C", "F", "K")
    /// are registered in both cases.
    pub fn category_of(&self, token: &str) -> Option<Category> {
        let lower = token.to_lowercase();
        for category in Category::LOOKUP_ORDER {
            let Some(map) = self.scales.get(&category) else {
                continue;
            };
            let hit = if category == Category::Temperature {
                map.contains_key(token) || map.contains_key(lower.as_str())
            } else {
                map.contains_key(lower.as_str())
            };
            if hit {
                return Some(category);
            }
        }
        None
    }

    /// Scale factor of `token` relative to the category base unit.
    /// Temperature has no usable factor; use the affine converters.
    pub fn factor(&self, category: Category, token: &str) -> Option<f64> {
        if category == Category::Temperature {
            return None;
        }
        self.scales
            .get(&category)?
            .get(token.to_lowercase().as_str())
            .copied()
    }

    /// Preferred render label for a canonical token ("c" -> "C");
    /// unknown tokens render as themselves.
    pub fn display_alias<'a>(&self, token: &'a str) -> &'a str {
        self.display.get(token).copied().unwrap_or(token)
    }

    fn register(&mut self, category: Category, entries: &[(&'static str, f64)]) {
        let map = self.scales.entry(category).or_default();
        for &(alias, scale) in entries {
            map.insert(alias, scale);
        }
    }

    fn register_length_units(&mut self) {
        self.register(Category::Length, &[
            ("m", 1.0),
            ("meter", 1.0),
            ("meters", 1.0),
            ("metre", 1.0),
            ("cm", 0.01),
            ("centimeter", 0.01),
            ("centimeters", 0.01),
            ("mm", 0.001),
            ("kilometer", 1000.0),
            ("km", 1000.0),
            ("inch", 0.0254),
            ("in", 0.0254),
            ("\"", 0.0254),
            ("foot", 0.3048),
            ("ft", 0.3048),
            ("'", 0.3048),
            ("yard", 0.9144),
            ("yd", 0.9144),
            ("mile", 1609.344),
            ("mi", 1609.344),
        ]);
    }

    fn register_mass_units(&mut self) {
        self.register(Category::Mass, &[
            ("kg", 1.0),
            ("kilogram", 1.0),
            ("g", 0.001),
            ("gram", 0.001),
            ("mg", 0.000_001),
            ("lb", 0.453_592_37),
            ("pound", 0.453_592_37),
            ("oz", 0.028_349_523_125),
        ]);
    }

    fn register_temperature_units(&mut self) {
        // Both case forms are registered: single letters collide with
        // lowercase tokens if only one form were checked.
        self.register(Category::Temperature, &[
            ("c", 1.0),
            ("C", 1.0),
            ("°C", 1.0),
            ("celsius", 1.0),
            ("f", 1.0),
            ("F", 1.0),
            ("°F", 1.0),
            ("fahrenheit", 1.0),
            ("k", 1.0),
            ("K", 1.0),
            ("kelvin", 1.0),
        ]);
    }

    fn register_speed_units(&mut self) {
        self.register(Category::Speed, &[
            ("m/s", 1.0),
            ("mps", 1.0),
            ("km/h", 1000.0 / 3600.0),
            ("kmh", 1000.0 / 3600.0),
            ("kmph", 1000.0 / 3600.0),
            ("mph", 1609.344 / 3600.0),
            ("ft/s", 0.3048),
            ("fps", 0.3048),
        ]);
    }

    fn register_display_aliases(&mut self) {
        let labels = [
            ("m", "m"), ("cm", "cm"), ("mm", "mm"), ("km", "km"),
            ("in", "in"), ("ft", "ft"), ("yd", "yd"), ("mi", "mi"),
            ("kg", "kg"), ("g", "g"), ("mg", "mg"), ("lb", "lb"), ("oz", "oz"),
            ("c", "C"), ("f", "F"), ("k", "K"),
            ("m/s", "m/s"), ("km/h", "km/h"), ("mph", "mph"), ("ft/s", "ft/s"),
        ];
        for (token, label) in labels {
            self.display.insert(token, label);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  FT "), "ft");
        assert_eq!(normalize("km / h"), "km/h");
        assert_eq!(normalize("°C"), "°c");
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        assert_eq!(UNITS.category_of("FT"), Some(Category::Length));
        assert_eq!(UNITS.category_of("ft"), Some(Category::Length));
        assert_eq!(UNITS.category_of("Kg"), Some(Category::Mass));
    }

    #[test]
    fn test_classification_per_category() {
        assert_eq!(UNITS.category_of("mi"), Some(Category::Length));
        assert_eq!(UNITS.category_of("oz"), Some(Category::Mass));
        assert_eq!(UNITS.category_of("kelvin"), Some(Category::Temperature));
        assert_eq!(UNITS.category_of("km/h"), Some(Category::Speed));
        assert_eq!(UNITS.category_of("parsec"), None);
    }

    #[test]
    fn test_temperature_accepts_both_case_forms() {
        assert_eq!(UNITS.category_of("C"), Some(Category::Temperature));
        assert_eq!(UNITS.category_of("c"), Some(Category::Temperature));
        assert_eq!(UNITS.category_of("°F"), Some(Category::Temperature));
    }

    #[test]
    fn test_factor_lookup() {
        assert_eq!(UNITS.factor(Category::Length, "km"), Some(1000.0));
        assert_eq!(UNITS.factor(Category::Length, "IN"), Some(0.0254));
        assert_eq!(UNITS.factor(Category::Mass, "lb"), Some(0.453_592_37));
        assert_eq!(UNITS.factor(Category::Length, "lb"), None);
        // Temperature never yields a linear factor.
        assert_eq!(UNITS.factor(Category::Temperature, "c"), None);
    }

    #[test]
    fn test_quote_marks_are_length_aliases() {
        assert_eq!(UNITS.factor(Category::Length, "\""), Some(0.0254));
        assert_eq!(UNITS.factor(Category::Length, "'"), Some(0.3048));
    }

    #[test]
    fn test_display_alias() {
        assert_eq!(UNITS.display_alias("c"), "C");
        assert_eq!(UNITS.display_alias("k"), "K");
        assert_eq!(UNITS.display_alias("cm"), "cm");
        assert_eq!(UNITS.display_alias("furlong"), "furlong");
    }
}
