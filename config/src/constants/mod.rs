//! Centralized configuration values shared by the building mesh generator.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance for unit-length checks on computed face normals.
///
/// # Examples
/// ```
/// use config::constants::NORMAL_LENGTH_TOLERANCE;
/// let length: f64 = 1.0 + 1.0e-8;
/// assert!((length - 1.0).abs() < NORMAL_LENGTH_TOLERANCE);
/// ```
pub const NORMAL_LENGTH_TOLERANCE: f64 = 1.0e-6;

// =============================================================================
// BUILDING PARAMETER CONSTANTS
// =============================================================================

/// Smallest side count that still forms a closed polygon.
///
/// # Examples
/// ```
/// use config::constants::MIN_SIDES;
/// assert_eq!(MIN_SIDES, 3);
/// ```
pub const MIN_SIDES: u32 = 3;

/// Largest side count accepted from the command line.
///
/// # Examples
/// ```
/// use config::constants::{MAX_SIDES, MIN_SIDES};
/// assert_eq!(100u32.clamp(MIN_SIDES, MAX_SIDES), MAX_SIDES);
/// ```
pub const MAX_SIDES: u32 = 36;

/// Side count used when none (or an unusable one) is supplied.
pub const DEFAULT_SIDES: u32 = 8;

/// Height used when none (or a non-positive one) is supplied.
pub const DEFAULT_HEIGHT: f64 = 6.0;

/// Bottom ring radius used when none (or a non-positive one) is supplied.
pub const DEFAULT_BOTTOM_RADIUS: f64 = 1.0;

/// Top ring radius used when none (or a non-positive one) is supplied.
pub const DEFAULT_TOP_RADIUS: f64 = 0.8;

// =============================================================================
// EXPORT CONSTANTS
// =============================================================================

/// Number of fractional digits kept when rendering OBJ coordinates.
///
/// # Examples
/// ```
/// use config::constants::EXPORT_DECIMALS;
/// let scale = 10f64.powi(EXPORT_DECIMALS);
/// assert_eq!(scale, 10_000.0);
/// ```
pub const EXPORT_DECIMALS: i32 = 4;

/// Prefix of every generated file name.
pub const OUTPUT_FILE_PREFIX: &str = "building";

/// Extension of every generated file name, without the dot.
pub const OUTPUT_FILE_EXTENSION: &str = "obj";

/// Environment variable read by the command-line adapter to pick a log level.
///
/// # Examples
/// ```
/// use config::constants::LOG_LEVEL_ENV;
/// assert_eq!(LOG_LEVEL_ENV, "BUILDING_LOG");
/// ```
pub const LOG_LEVEL_ENV: &str = "BUILDING_LOG";

// =============================================================================
// DEFAULTS SNAPSHOT
// =============================================================================

/// Immutable snapshot of the parameter defaults applied by the
/// command-line adapter.
///
/// # Examples
/// ```
/// use config::constants::BuildingDefaults;
/// let defaults = BuildingDefaults::default();
/// assert_eq!(defaults.sides, 8);
/// assert!(defaults.height > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildingDefaults {
    /// Number of polygon sides.
    pub sides: u32,
    /// Height along the Y axis.
    pub height: f64,
    /// Radius of the bottom ring.
    pub bottom_radius: f64,
    /// Radius of the top ring.
    pub top_radius: f64,
}

impl BuildingDefaults {
    /// Builds a defaults snapshot, rejecting values the mesh generator could
    /// not accept.
    ///
    /// # Examples
    /// ```
    /// use config::constants::BuildingDefaults;
    /// let defaults = BuildingDefaults::new(12, 3.0, 2.0, 1.5).expect("valid defaults");
    /// assert_eq!(defaults.sides, 12);
    /// ```
    pub fn new(
        sides: u32,
        height: f64,
        bottom_radius: f64,
        top_radius: f64,
    ) -> Result<Self, ConfigError> {
        if !(MIN_SIDES..=MAX_SIDES).contains(&sides) {
            return Err(ConfigError::InvalidSides(sides));
        }
        for (name, value) in [
            ("height", height),
            ("bottom_radius", bottom_radius),
            ("top_radius", top_radius),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        Ok(Self {
            sides,
            height,
            bottom_radius,
            top_radius,
        })
    }
}

impl Default for BuildingDefaults {
    fn default() -> Self {
        Self {
            sides: DEFAULT_SIDES,
            height: DEFAULT_HEIGHT,
            bottom_radius: DEFAULT_BOTTOM_RADIUS,
            top_radius: DEFAULT_TOP_RADIUS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the side count falls outside `MIN_SIDES..=MAX_SIDES`.
    InvalidSides(u32),
    /// Raised when a length is zero, negative or not finite.
    NonPositive {
        /// Name of the offending field.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSides(value) => {
                write!(f, "sides must be within {MIN_SIDES}..={MAX_SIDES}: {value}")
            }
            ConfigError::NonPositive { name, value } => {
                write!(f, "{name} must be positive and finite: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
