//! # Building Primitive
//!
//! Generates the mesh of a tapered prism standing on the XZ plane.

use crate::error::MeshResult;
use crate::mesh::Mesh;
use crate::params::BuildingParams;
use crate::primitives::faces::{build_faces, FaceSet};
use crate::primitives::vertices::generate_vertices;
use log::debug;

/// Creates a building mesh.
///
/// The bottom cap lies at `y = 0`, the top cap at `y = height`, and both
/// polygons are centered on the Y axis. Equal radii give a prism; differing
/// radii give a frustum.
///
/// # Example
///
/// ```rust
/// use building_mesh::{create_building, BuildingParams};
///
/// let params = BuildingParams::new(8, 6.0, 1.0, 0.8).unwrap();
/// let mesh = create_building(&params).unwrap();
/// assert_eq!(mesh.vertex_count(), 18);
/// assert_eq!(mesh.face_count(), 32);
/// ```
pub fn create_building(params: &BuildingParams) -> MeshResult<Mesh> {
    let vertices = generate_vertices(params);
    debug!(
        "generated {} vertices for {} sides",
        vertices.len(),
        params.sides()
    );

    let FaceSet { normals, faces } = build_faces(&vertices, params.sides())?;
    debug!("built {} faces", faces.len());

    Ok(Mesh::from_parts(vertices, normals, faces))
}
