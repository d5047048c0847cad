//! # Mesh Data Structure
//!
//! Flat-shaded triangle mesh: vertex positions, one normal per face, and
//! faces pairing each corner's vertex index with its normal index.
//!
//! Indices stored here are 0-based. The 1-based OBJ numbering is applied
//! only by the exporter.

use crate::error::{MeshError, MeshResult};
use config::constants::NORMAL_LENGTH_TOLERANCE;
use glam::DVec3;

/// Vertex position. `y` is the height axis.
pub type Vertex = DVec3;

/// Unit-length face normal.
pub type Normal = DVec3;

/// One corner of a face: a vertex index and a normal index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceCorner {
    pub vertex: u32,
    pub normal: u32,
}

/// A triangle. Corner order is the winding order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    corners: [FaceCorner; 3],
}

impl Face {
    /// Creates a flat-shaded face whose three corners share one normal.
    pub fn flat(vertices: [u32; 3], normal: u32) -> Self {
        Self {
            corners: vertices.map(|vertex| FaceCorner { vertex, normal }),
        }
    }

    #[inline]
    pub fn corners(&self) -> &[FaceCorner; 3] {
        &self.corners
    }

    /// Returns the vertex indices in winding order.
    #[inline]
    pub fn vertex_indices(&self) -> [u32; 3] {
        self.corners.map(|c| c.vertex)
    }
}

/// Element counts of a mesh, as written in the OBJ header comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshSummary {
    pub vertex_count: usize,
    pub normal_count: usize,
    pub face_count: usize,
}

/// A finished building mesh.
///
/// Built once from the output of the generation stages and read-only after.
///
/// # Example
///
/// ```rust
/// use building_mesh::{Face, Mesh};
/// use glam::DVec3;
///
/// let mesh = Mesh::from_parts(
///     vec![DVec3::ZERO, DVec3::X, DVec3::Z],
///     vec![DVec3::NEG_Y],
///     vec![Face::flat([0, 1, 2], 0)],
/// );
/// assert_eq!(mesh.face_count(), 1);
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    normals: Vec<Normal>,
    faces: Vec<Face>,
}

impl Mesh {
    /// Assembles a mesh from its three sequences.
    pub fn from_parts(vertices: Vec<Vertex>, normals: Vec<Normal>, faces: Vec<Face>) -> Self {
        Self {
            vertices,
            normals,
            faces,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of normals.
    #[inline]
    pub fn normal_count(&self) -> usize {
        self.normals.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn normals(&self) -> &[Normal] {
        &self.normals
    }

    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Returns the three vertex positions of `face` in winding order.
    pub fn face_positions(&self, face: &Face) -> [Vertex; 3] {
        face.vertex_indices().map(|i| self.vertices[i as usize])
    }

    /// Returns the normal shared by the corners of `face`.
    pub fn face_normal(&self, face: &Face) -> Normal {
        self.normals[face.corners()[0].normal as usize]
    }

    pub fn summary(&self) -> MeshSummary {
        MeshSummary {
            vertex_count: self.vertex_count(),
            normal_count: self.normal_count(),
            face_count: self.face_count(),
        }
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - Every face index points at an existing vertex and normal
    /// - No face repeats a vertex
    /// - Every normal is unit length or exactly zero
    /// - Each face with a non-zero normal has a winding that agrees with it
    ///   (right-hand rule)
    ///
    /// A zero normal marks a face whose cross product vanished at `f64`
    /// precision. The winding check works on edges rescaled to unit size, so
    /// it holds for any finite building dimensions.
    pub fn validate(&self) -> MeshResult<()> {
        let vertex_count = self.vertices.len();
        let normal_count = self.normals.len();

        for (face_index, face) in self.faces.iter().enumerate() {
            for corner in face.corners() {
                if corner.vertex as usize >= vertex_count {
                    return Err(MeshError::invalid_topology(format!(
                        "face {face_index} references vertex {} of {vertex_count}",
                        corner.vertex
                    )));
                }
                if corner.normal as usize >= normal_count {
                    return Err(MeshError::invalid_topology(format!(
                        "face {face_index} references normal {} of {normal_count}",
                        corner.normal
                    )));
                }
            }

            let [a, b, c] = face.vertex_indices();
            if a == b || b == c || a == c {
                return Err(MeshError::invalid_topology(format!(
                    "face {face_index} repeats a vertex: [{a}, {b}, {c}]"
                )));
            }

            let normal = self.face_normal(face);
            if normal == DVec3::ZERO {
                continue;
            }

            let [p0, p1, p2] = self.face_positions(face);
            let orientation = rescaled(p1 - p0).cross(rescaled(p2 - p0));
            if orientation.dot(normal) <= 0.0 {
                return Err(MeshError::degenerate(format!(
                    "face {face_index} winding disagrees with its normal"
                )));
            }
        }

        for (normal_index, normal) in self.normals.iter().enumerate() {
            if *normal != DVec3::ZERO && (normal.length() - 1.0).abs() > NORMAL_LENGTH_TOLERANCE {
                return Err(MeshError::degenerate(format!(
                    "normal {normal_index} is not unit length: {normal}"
                )));
            }
        }

        Ok(())
    }
}

/// Scales `v` so its largest component has magnitude 1.
fn rescaled(v: DVec3) -> DVec3 {
    let largest = v.abs().max_element();
    if largest > 0.0 {
        v / largest
    } else {
        v
    }
}
