//! Wavefront OBJ writer.
//!
//! Output layout:
//!
//! ```text
//! # OBJ file building_4_1_1_1.obj
//! # 10 vertices
//! v 0 0 0
//! ...
//! # 16 normals
//! vn 0 -1 0
//! ...
//! # 16 faces
//! f 5//1 1//1 3//1
//! ...
//! ```
//!
//! Vertex and normal indices are written 1-based.

use crate::export::number::format_number;
use crate::mesh::Mesh;
use crate::params::BuildingParams;
use config::constants::{OUTPUT_FILE_EXTENSION, OUTPUT_FILE_PREFIX};
use glam::DVec3;
use std::fmt::{self, Write};

/// Returns the file name encoding the building parameters,
/// e.g. `building_8_6_1_0.8.obj`.
pub fn suggested_filename(params: &BuildingParams) -> String {
    format!(
        "{OUTPUT_FILE_PREFIX}_{}_{}_{}_{}.{OUTPUT_FILE_EXTENSION}",
        params.sides(),
        params.height(),
        params.bottom_radius(),
        params.top_radius()
    )
}

fn write_triple<W: Write>(out: &mut W, tag: &str, v: DVec3) -> fmt::Result {
    writeln!(
        out,
        "{tag} {} {} {}",
        format_number(v.x),
        format_number(v.y),
        format_number(v.z)
    )
}

/// Writes `mesh` as OBJ text to `out`, naming `filename` in the header.
pub fn write_obj<W: Write>(mesh: &Mesh, filename: &str, out: &mut W) -> fmt::Result {
    writeln!(out, "# OBJ file {filename}")?;

    writeln!(out, "# {} vertices", mesh.vertex_count())?;
    for v in mesh.vertices() {
        write_triple(out, "v", *v)?;
    }

    writeln!(out, "# {} normals", mesh.normal_count())?;
    for n in mesh.normals() {
        write_triple(out, "vn", *n)?;
    }

    writeln!(out, "# {} faces", mesh.face_count())?;
    for face in mesh.faces() {
        out.write_char('f')?;
        for corner in face.corners() {
            write!(out, " {}//{}", corner.vertex + 1, corner.normal + 1)?;
        }
        out.write_char('\n')?;
    }

    Ok(())
}

/// Renders `mesh` as an OBJ string.
pub fn to_obj_string(mesh: &Mesh, filename: &str) -> Result<String, fmt::Error> {
    // Roughly 24 bytes per line
    let lines = 4 + mesh.vertex_count() + mesh.normal_count() + mesh.face_count();
    let mut text = String::with_capacity(lines * 24);
    write_obj(mesh, filename, &mut text)?;
    Ok(text)
}
