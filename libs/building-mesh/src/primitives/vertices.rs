//! # Vertex Rings
//!
//! Generates the vertex sequence of a building: the two cap centers followed
//! by bottom/top ring vertices interleaved per angular step.

use crate::mesh::Vertex;
use crate::params::BuildingParams;
use glam::DVec3;

/// Index of the bottom cap center, `(0, 0, 0)`.
pub const BOTTOM_CENTER: u32 = 0;

/// Index of the top cap center, `(0, height, 0)`.
pub const TOP_CENTER: u32 = 1;

/// Index of the bottom ring vertex at angular step `step`.
#[inline]
pub fn bottom_ring_index(step: u32) -> u32 {
    2 + 2 * step
}

/// Index of the top ring vertex at angular step `step`.
#[inline]
pub fn top_ring_index(step: u32) -> u32 {
    3 + 2 * step
}

/// Number of vertices a building with `sides` sides has.
#[inline]
pub fn vertex_count(sides: u32) -> usize {
    2 + 2 * sides as usize
}

/// Generates the vertices of a building.
///
/// Layout: bottom center, top center, then for each step `i` the bottom ring
/// vertex followed by the top ring vertex at angle `2π·i/N`.
///
/// # Example
///
/// ```rust
/// use building_mesh::{generate_vertices, BuildingParams};
///
/// let params = BuildingParams::new(3, 2.0, 1.0, 0.5).unwrap();
/// let vertices = generate_vertices(&params);
/// assert_eq!(vertices.len(), 8);
/// assert_eq!(vertices[1].y, 2.0);
/// ```
pub fn generate_vertices(params: &BuildingParams) -> Vec<Vertex> {
    let height = params.height();
    let mut vertices = Vec::with_capacity(vertex_count(params.sides()));

    vertices.push(DVec3::ZERO);
    vertices.push(DVec3::new(0.0, height, 0.0));

    for step in 0..params.sides() {
        let (sin, cos) = params.angle(step).sin_cos();
        vertices.push(DVec3::new(
            params.bottom_radius() * cos,
            0.0,
            params.bottom_radius() * sin,
        ));
        vertices.push(DVec3::new(
            params.top_radius() * cos,
            height,
            params.top_radius() * sin,
        ));
    }

    vertices
}
