//! # Export
//!
//! Serialization of building meshes to Wavefront OBJ text.

pub mod number;
pub mod obj;

pub use number::format_number;
pub use obj::{suggested_filename, to_obj_string, write_obj};

use crate::mesh::MeshSummary;

/// A fully serialized building, ready to be written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjExport {
    /// Suggested file name, also quoted in the OBJ header.
    pub filename: String,
    /// Complete OBJ text.
    pub text: String,
    /// Element counts of the serialized mesh.
    pub summary: MeshSummary,
}
