//! Output rounding policy

use crate::Category;

/// Round to a fixed number of decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

/// Category precision policy: temperature gets 2 places; the linear
/// categories get 3, widened to 4 below one unit; values with no
/// resolved category get 4, widened to 6. Sub-unit magnitudes keep
/// extra digits on purpose.
pub fn round_by_category(value: f64, category: Option<Category>) -> f64 {
    let abs = value.abs();
    match category {
        Some(Category::Temperature) => round_to(value, 2),
        Some(Category::Length) | Some(Category::Mass) | Some(Category::Speed) => {
            round_to(value, if abs >= 1.0 { 3 } else { 4 })
        }
        None => round_to(value, if abs >= 1.0 { 4 } else { 6 }),
    }
}
