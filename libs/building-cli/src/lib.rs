//! # Building CLI
//!
//! Command-line front end: resolves positional arguments, generates the
//! building, and writes the OBJ file.
//!
//! ## Usage
//!
//! ```text
//! building-maker [sides] [height] [bottom_radius] [top_radius]
//! ```
//!
//! Defaults are `8 6 1 0.8`. The output lands in the working directory as
//! `building_<sides>_<height>_<bottom>_<top>.obj`, replacing any existing
//! file of that name.

pub mod args;

use anyhow::{Context, Result};
use building_mesh::{generate_building, ObjExport};
use config::constants::BuildingDefaults;
use log::info;
use std::fs;
use std::path::Path;

/// Generates a building from positional arguments and writes it into
/// `out_dir`.
pub fn run<S: AsRef<str>>(args: &[S], out_dir: &Path) -> Result<ObjExport> {
    let params = args::resolve_params(args, &BuildingDefaults::default())
        .context("invalid building parameters")?;
    let export = generate_building(&params).context("failed to generate building mesh")?;

    let path = out_dir.join(&export.filename);
    fs::write(&path, &export.text)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(
        "wrote {} ({} vertices, {} faces)",
        path.display(),
        export.summary.vertex_count,
        export.summary.face_count
    );

    Ok(export)
}
