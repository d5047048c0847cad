//! Decimal rendering of coordinates.

use config::constants::EXPORT_DECIMALS;

/// Rounds `value` half-up to `EXPORT_DECIMALS` fractional digits.
///
/// Halfway cases round toward positive infinity.
pub fn round_to_export_precision(value: f64) -> f64 {
    let scale = 10f64.powi(EXPORT_DECIMALS);
    let scaled = value * scale;
    let floor = scaled.floor();
    let rounded = if scaled - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded / scale
}

/// Formats a coordinate for OBJ output.
///
/// The value is rounded to `EXPORT_DECIMALS` places and printed as the
/// shortest decimal text that reads back to the rounded value: no exponent,
/// no trailing zeros, and no sign on zero.
///
/// # Example
///
/// ```rust
/// use building_mesh::format_number;
///
/// assert_eq!(format_number(6.0), "6");
/// assert_eq!(format_number(0.70710678), "0.7071");
/// assert_eq!(format_number(-1.0e-17), "0");
/// ```
pub fn format_number(value: f64) -> String {
    let rounded = round_to_export_precision(value);
    if rounded == 0.0 {
        return "0".to_string();
    }
    rounded.to_string()
}
