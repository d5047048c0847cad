//! # Faces and Normals
//!
//! Builds the flat-shaded faces of a building from its vertex sequence.
//!
//! Faces are emitted in a fixed order that the OBJ output depends on:
//! bottom cap, top cap, then the lateral band (two triangles per step).

use crate::error::{MeshError, MeshResult};
use crate::mesh::{Face, Normal, Vertex};
use crate::primitives::normal::{triangle_normal, BOTTOM_NORMAL, TOP_NORMAL};
use crate::primitives::vertices::{
    bottom_ring_index, top_ring_index, vertex_count, BOTTOM_CENTER, TOP_CENTER,
};
use log::trace;

/// Normals and faces produced for one building.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceSet {
    pub normals: Vec<Normal>,
    pub faces: Vec<Face>,
}

impl FaceSet {
    fn with_capacity(face_count: usize) -> Self {
        Self {
            normals: Vec::with_capacity(face_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Appends a face with its own normal.
    fn push(&mut self, vertices: [u32; 3], normal: Normal) {
        let normal_index = self.normals.len() as u32;
        trace!("face {:?} normal #{normal_index} {normal}", vertices);
        self.normals.push(normal);
        self.faces.push(Face::flat(vertices, normal_index));
    }

    /// Appends a face whose normal is computed from its own winding.
    fn push_computed(&mut self, vertices: &[Vertex], indices: [u32; 3]) {
        let [a, b, c] = indices.map(|i| vertices[i as usize]);
        self.push(indices, triangle_normal(a, b, c));
    }
}

/// Number of faces (and normals) a building with `sides` sides has.
#[inline]
pub fn face_count(sides: u32) -> usize {
    4 * sides as usize
}

/// Builds the faces and per-face normals of a building.
///
/// `vertices` must be the output of
/// [`generate_vertices`](crate::primitives::generate_vertices) for the same
/// side count.
///
/// # Errors
///
/// Returns [`MeshError::InvalidTopology`] if `vertices` does not hold
/// exactly `2 + 2 * sides` entries.
pub fn build_faces(vertices: &[Vertex], sides: u32) -> MeshResult<FaceSet> {
    let expected = vertex_count(sides);
    if vertices.len() != expected {
        return Err(MeshError::invalid_topology(format!(
            "expected {expected} vertices for {sides} sides, got {}",
            vertices.len()
        )));
    }

    let mut set = FaceSet::with_capacity(face_count(sides));
    let next = |step: u32| (step + 1) % sides;

    // Bottom cap, wound to face -Y
    for step in 0..sides {
        let cur = bottom_ring_index(step);
        let nxt = bottom_ring_index(next(step));
        set.push([nxt, BOTTOM_CENTER, cur], BOTTOM_NORMAL);
    }

    // Top cap, wound to face +Y
    for step in 0..sides {
        let cur = top_ring_index(step);
        let nxt = top_ring_index(next(step));
        set.push([cur, TOP_CENTER, nxt], TOP_NORMAL);
    }

    // Lateral band
    for step in 0..sides {
        let b0 = bottom_ring_index(step);
        let t0 = top_ring_index(step);
        let b1 = bottom_ring_index(next(step));
        let t1 = top_ring_index(next(step));

        set.push_computed(vertices, [b1, b0, t0]);
        set.push_computed(vertices, [t0, t1, b1]);
    }

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::BuildingParams;
    use crate::primitives::vertices::generate_vertices;
    use approx::assert_abs_diff_eq;
    use glam::DVec3;

    fn faces_for(sides: u32, height: f64, bottom: f64, top: f64) -> (Vec<Vertex>, FaceSet) {
        let params = BuildingParams::new(sides, height, bottom, top).unwrap();
        let vertices = generate_vertices(&params);
        let set = build_faces(&vertices, sides).unwrap();
        (vertices, set)
    }

    #[test]
    fn test_counts() {
        for sides in [3, 4, 8, 36] {
            let (_, set) = faces_for(sides, 6.0, 1.0, 0.8);
            assert_eq!(set.faces.len(), 4 * sides as usize);
            assert_eq!(set.normals.len(), set.faces.len());
        }
    }

    #[test]
    fn test_one_normal_per_face_in_order() {
        let (_, set) = faces_for(5, 2.0, 1.0, 1.5);
        for (i, face) in set.faces.iter().enumerate() {
            assert!(face.corners().iter().all(|c| c.normal as usize == i));
        }
    }

    #[test]
    fn test_triangular_prism_winding() {
        let (_, set) = faces_for(3, 1.0, 1.0, 1.0);
        let indices: Vec<[u32; 3]> = set.faces.iter().map(Face::vertex_indices).collect();
        assert_eq!(
            indices,
            vec![
                // bottom
                [4, 0, 2],
                [6, 0, 4],
                [2, 0, 6],
                // top
                [3, 1, 5],
                [5, 1, 7],
                [7, 1, 3],
                // lateral
                [4, 2, 3],
                [3, 5, 4],
                [6, 4, 5],
                [5, 7, 6],
                [2, 6, 7],
                [7, 3, 2],
            ]
        );
    }

    #[test]
    fn test_cap_normals_are_exact() {
        let sides = 7;
        let (_, set) = faces_for(sides, 3.0, 2.0, 1.0);
        let n = sides as usize;
        assert!(set.normals[..n].iter().all(|&v| v == DVec3::NEG_Y));
        assert!(set.normals[n..2 * n].iter().all(|&v| v == DVec3::Y));
    }

    #[test]
    fn test_lateral_normals_match_winding() {
        let (vertices, set) = faces_for(6, 2.0, 1.0, 0.4);
        for (face, normal) in set.faces.iter().zip(&set.normals).skip(12) {
            let [a, b, c] = face.vertex_indices().map(|i| vertices[i as usize]);
            assert_eq!(*normal, triangle_normal(a, b, c));
        }
    }

    #[test]
    fn test_cylinder_walls_are_vertical() {
        let (_, set) = faces_for(9, 4.0, 1.5, 1.5);
        for normal in &set.normals[18..] {
            assert_abs_diff_eq!(normal.y, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_mismatched_vertex_count() {
        let params = BuildingParams::new(4, 1.0, 1.0, 1.0).unwrap();
        let vertices = generate_vertices(&params);
        let result = build_faces(&vertices, 5);
        assert!(matches!(result, Err(MeshError::InvalidTopology { .. })));
    }
}
