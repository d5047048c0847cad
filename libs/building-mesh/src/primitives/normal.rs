//! # Face Normals
//!
//! Flat normals for building faces.

use crate::mesh::{Normal, Vertex};
use glam::DVec3;

/// Normal of every bottom cap face.
pub const BOTTOM_NORMAL: Normal = DVec3::NEG_Y;

/// Normal of every top cap face.
pub const TOP_NORMAL: Normal = DVec3::Y;

/// Computes the unit normal of triangle `(a, b, c)` by the right-hand rule.
///
/// The normal is `(b - a) × (c - a)` scaled to unit length. A zero-length
/// cross product (coincident vertices) yields the zero vector.
///
/// # Example
///
/// ```rust
/// use building_mesh::triangle_normal;
/// use glam::DVec3;
///
/// let n = triangle_normal(DVec3::ZERO, DVec3::X, DVec3::Y);
/// assert_eq!(n, DVec3::Z);
/// ```
pub fn triangle_normal(a: Vertex, b: Vertex, c: Vertex) -> Normal {
    let normal = (b - a).cross(c - a);
    let len = normal.length();
    if len > 0.0 {
        normal / len
    } else {
        DVec3::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_counter_clockwise_points_up() {
        let n = triangle_normal(DVec3::ZERO, DVec3::Z, DVec3::X);
        assert_eq!(n, DVec3::Y);
    }

    #[test]
    fn test_reversed_winding_flips_normal() {
        let a = DVec3::new(0.3, 1.0, -2.0);
        let b = DVec3::new(1.5, 0.2, 0.4);
        let c = DVec3::new(-0.7, 2.2, 1.1);
        assert_eq!(triangle_normal(a, b, c), -triangle_normal(a, c, b));
    }

    #[test]
    fn test_normal_is_unit_length() {
        let n = triangle_normal(
            DVec3::new(10.0, 0.0, 0.0),
            DVec3::new(0.0, 0.0, 10.0),
            DVec3::new(10.0, 25.0, 0.0),
        );
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_triangle_gives_zero() {
        let p = DVec3::new(1.0, 2.0, 3.0);
        assert_eq!(triangle_normal(p, p, DVec3::X), DVec3::ZERO);

        // Collinear points
        let n = triangle_normal(DVec3::ZERO, DVec3::X, DVec3::X * 2.0);
        assert_eq!(n, DVec3::ZERO);
    }

    #[test]
    fn test_cap_normals() {
        assert_eq!(BOTTOM_NORMAL, DVec3::new(0.0, -1.0, 0.0));
        assert_eq!(TOP_NORMAL, DVec3::new(0.0, 1.0, 0.0));
    }
}
