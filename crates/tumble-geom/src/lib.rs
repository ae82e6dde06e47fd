//! Procedural mesh construction for the navigation die.
//!
//! Provides the subdivided cube and UV-sphere generators, the bevel profile
//! that rounds cube vertices onto a spherical corner, and flat-shading-safe
//! normal recomputation.

mod bevel;
mod cube;
mod mesh;
mod sphere;

pub use bevel::BevelProfile;
pub use cube::subdivided_cube;
pub use mesh::MeshData;
pub use sphere::uv_sphere;
