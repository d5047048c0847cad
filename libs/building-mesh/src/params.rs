//! # Building Parameters
//!
//! The four numbers that fully describe a building.

use crate::error::{MeshError, MeshResult};
use config::constants::MIN_SIDES;
use std::f64::consts::PI;

/// Validated input of the mesh generator.
///
/// Construction is the only place preconditions are checked; every stage
/// downstream relies on `sides >= 3` and strictly positive, finite lengths.
///
/// # Example
///
/// ```rust
/// use building_mesh::BuildingParams;
///
/// let params = BuildingParams::new(8, 6.0, 1.0, 0.8).unwrap();
/// assert_eq!(params.sides(), 8);
///
/// assert!(BuildingParams::new(2, 6.0, 1.0, 0.8).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildingParams {
    sides: u32,
    height: f64,
    bottom_radius: f64,
    top_radius: f64,
}

impl BuildingParams {
    /// Creates building parameters.
    ///
    /// # Arguments
    ///
    /// * `sides` - Number of polygon sides (at least 3)
    /// * `height` - Distance between the bottom and top rings along Y
    /// * `bottom_radius` - Circumradius of the bottom polygon
    /// * `top_radius` - Circumradius of the top polygon
    pub fn new(sides: u32, height: f64, bottom_radius: f64, top_radius: f64) -> MeshResult<Self> {
        if sides < MIN_SIDES {
            return Err(MeshError::invalid_parameter(
                "sides",
                format!("must be at least {MIN_SIDES}, got {sides}"),
            ));
        }

        for (name, value) in [
            ("height", height),
            ("bottom_radius", bottom_radius),
            ("top_radius", top_radius),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(MeshError::invalid_parameter(
                    name,
                    format!("must be positive and finite, got {value}"),
                ));
            }
        }

        Ok(Self {
            sides,
            height,
            bottom_radius,
            top_radius,
        })
    }

    #[inline]
    pub fn sides(&self) -> u32 {
        self.sides
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    pub fn bottom_radius(&self) -> f64 {
        self.bottom_radius
    }

    #[inline]
    pub fn top_radius(&self) -> f64 {
        self.top_radius
    }

    /// Angle of ring step `step`, in radians.
    #[inline]
    pub fn angle(&self, step: u32) -> f64 {
        2.0 * PI * step as f64 / self.sides as f64
    }
}
