//! # Primitives
//!
//! Mesh generation for the building primitive, split into its stages:
//! vertex rings, then faces with their normals.

pub mod building;
pub mod faces;
pub mod normal;
pub mod vertices;

pub use building::create_building;
pub use faces::{build_faces, FaceSet};
pub use normal::triangle_normal;
pub use vertices::generate_vertices;
