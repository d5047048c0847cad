//! # Building Mesh
//!
//! Procedural mesh generation for tapered prisms ("buildings") and export
//! to Wavefront OBJ text.
//!
//! ## Architecture
//!
//! ```text
//! BuildingParams → vertices → faces + normals → Mesh → OBJ text
//! ```
//!
//! Each stage is a pure function of the previous stage's output. The mesh
//! is flat shaded: every face owns one normal, so normal and face counts
//! are always equal.
//!
//! ## Usage
//!
//! ```rust
//! use building_mesh::{generate_building, BuildingParams};
//!
//! let params = BuildingParams::new(8, 6.0, 1.0, 0.8)?;
//! let export = generate_building(&params)?;
//! assert_eq!(export.filename, "building_8_6_1_0.8.obj");
//! assert!(export.text.starts_with("# OBJ file building_8_6_1_0.8.obj\n"));
//! # Ok::<(), building_mesh::MeshError>(())
//! ```

pub mod error;
pub mod export;
pub mod mesh;
pub mod params;
pub mod primitives;

pub use error::{MeshError, MeshResult};
pub use export::{format_number, suggested_filename, to_obj_string, write_obj, ObjExport};
pub use mesh::{Face, FaceCorner, Mesh, MeshSummary, Normal, Vertex};
pub use params::BuildingParams;
pub use primitives::{build_faces, create_building, generate_vertices, triangle_normal, FaceSet};

use log::debug;

/// Runs the whole pipeline: builds the mesh and serializes it to OBJ text
/// under its suggested file name.
///
/// Any parameters accepted by [`BuildingParams::new`] produce an export,
/// including extreme finite radii whose lateral normals collapse to zero.
///
/// # Errors
///
/// Propagates stage errors from [`create_building`] and the OBJ writer;
/// neither occurs for a validated [`BuildingParams`].
pub fn generate_building(params: &BuildingParams) -> MeshResult<ObjExport> {
    let mesh = create_building(params)?;

    let filename = suggested_filename(params);
    let text = to_obj_string(&mesh, &filename)?;
    let summary = mesh.summary();
    debug!(
        "serialized {filename}: {} vertices, {} normals, {} faces, {} bytes",
        summary.vertex_count,
        summary.normal_count,
        summary.face_count,
        text.len()
    );

    Ok(ObjExport {
        filename,
        text,
        summary,
    })
}
