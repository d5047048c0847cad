//! # Positional Arguments
//!
//! Turns up to four loosely typed positional arguments into validated
//! [`BuildingParams`].
//!
//! Each argument is handled on its own:
//! - missing, empty, unparsable, non-finite or zero values use the default
//! - `sides` is truncated to an integer and clamped to `MIN_SIDES..=MAX_SIDES`
//! - negative lengths use the default

use building_mesh::{BuildingParams, MeshResult};
use config::constants::{BuildingDefaults, MAX_SIDES, MIN_SIDES};
use log::{debug, warn};

/// Parses a raw argument, returning `None` when the default should apply.
pub fn parse_number(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v != 0.0)
}

/// Resolves the side count.
pub fn resolve_sides(raw: Option<&str>, default: u32) -> u32 {
    let Some(value) = parse_number(raw) else {
        return default;
    };

    let truncated = value.trunc();
    let clamped = truncated.clamp(MIN_SIDES as f64, MAX_SIDES as f64);
    if clamped != value {
        warn!("sides {value} adjusted to {clamped}");
    }
    clamped as u32
}

/// Resolves a length (height or radius).
pub fn resolve_length(name: &str, raw: Option<&str>, default: f64) -> f64 {
    match parse_number(raw) {
        Some(value) if value > 0.0 => value,
        Some(value) => {
            warn!("{name} {value} is not positive, using {default}");
            default
        }
        None => default,
    }
}

/// Resolves building parameters from positional arguments.
///
/// Arguments beyond the fourth are ignored.
pub fn resolve_params<S: AsRef<str>>(
    args: &[S],
    defaults: &BuildingDefaults,
) -> MeshResult<BuildingParams> {
    let arg = |i: usize| args.get(i).map(AsRef::<str>::as_ref);

    let sides = resolve_sides(arg(0), defaults.sides);
    let height = resolve_length("height", arg(1), defaults.height);
    let bottom_radius = resolve_length("bottom radius", arg(2), defaults.bottom_radius);
    let top_radius = resolve_length("top radius", arg(3), defaults.top_radius);
    debug!("resolved sides={sides} height={height} bottom={bottom_radius} top={top_radius}");

    BuildingParams::new(sides, height, bottom_radius, top_radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(args: &[&str]) -> BuildingParams {
        resolve_params(args, &BuildingDefaults::default()).unwrap()
    }

    #[test]
    fn no_arguments_gives_defaults() {
        let params = resolve(&[]);
        assert_eq!(params, BuildingParams::new(8, 6.0, 1.0, 0.8).unwrap());
    }

    #[test]
    fn all_arguments_used() {
        let params = resolve(&["12", "3.5", "2", "1.25"]);
        assert_eq!(params, BuildingParams::new(12, 3.5, 2.0, 1.25).unwrap());
    }

    #[test]
    fn partial_arguments_keep_remaining_defaults() {
        let params = resolve(&["5", "10"]);
        assert_eq!(params, BuildingParams::new(5, 10.0, 1.0, 0.8).unwrap());
    }

    #[test]
    fn extra_arguments_are_ignored() {
        let params = resolve(&["4", "1", "1", "1", "99", "abc"]);
        assert_eq!(params, BuildingParams::new(4, 1.0, 1.0, 1.0).unwrap());
    }

    #[test]
    fn unusable_values_fall_back_independently() {
        let params = resolve(&["abc", "", "0", "NaN"]);
        assert_eq!(params, BuildingParams::new(8, 6.0, 1.0, 0.8).unwrap());

        let params = resolve(&["inf", " 2.5 ", "x", "3"]);
        assert_eq!(params, BuildingParams::new(8, 2.5, 1.0, 3.0).unwrap());
    }

    #[test]
    fn sides_are_clamped() {
        assert_eq!(resolve_sides(Some("1"), 8), 3);
        assert_eq!(resolve_sides(Some("-7"), 8), 3);
        assert_eq!(resolve_sides(Some("0.5"), 8), 3);
        assert_eq!(resolve_sides(Some("37"), 8), 36);
        assert_eq!(resolve_sides(Some("1e9"), 8), 36);
        assert_eq!(resolve_sides(Some("36"), 8), 36);
        assert_eq!(resolve_sides(Some("3"), 8), 3);
    }

    #[test]
    fn fractional_sides_are_truncated() {
        assert_eq!(resolve_sides(Some("6.9"), 8), 6);
        assert_eq!(resolve_sides(Some("36.5"), 8), 36);
    }

    #[test]
    fn zero_sides_uses_default() {
        assert_eq!(resolve_sides(Some("0"), 8), 8);
        assert_eq!(resolve_sides(None, 8), 8);
    }

    #[test]
    fn negative_lengths_use_defaults() {
        assert_eq!(resolve_length("height", Some("-2"), 6.0), 6.0);
        assert_eq!(resolve_length("height", Some("2"), 6.0), 2.0);
        assert_eq!(resolve_length("top radius", Some("-0.1"), 0.8), 0.8);
    }

    #[test]
    fn parse_number_filters() {
        assert_eq!(parse_number(Some("1.5")), Some(1.5));
        assert_eq!(parse_number(Some(" 7 ")), Some(7.0));
        assert_eq!(parse_number(Some("1e2")), Some(100.0));
        assert_eq!(parse_number(Some("0")), None);
        assert_eq!(parse_number(Some("-0")), None);
        assert_eq!(parse_number(Some("infinity")), None);
        assert_eq!(parse_number(Some("")), None);
        assert_eq!(parse_number(None), None);
    }

    #[test]
    fn custom_defaults_apply() {
        let defaults = BuildingDefaults::new(6, 2.0, 3.0, 4.0).unwrap();
        let params = resolve_params::<&str>(&[], &defaults).unwrap();
        assert_eq!(params, BuildingParams::new(6, 2.0, 3.0, 4.0).unwrap());
    }
}
