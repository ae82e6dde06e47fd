//! Evenly subdivided cube generator.
//!
//! Each of the six faces is an `(segments + 1)²` vertex grid, giving the
//! bevel pass enough vertices near the edges to pull onto the rounded
//! surface. Faces do not share vertices, so pre-bevel normals stay flat.

use glam::Vec3;

use crate::mesh::MeshData;

/// Normal, tangent, and bitangent per face, with `tangent × bitangent = normal`.
const FACE_BASES: [(Vec3, Vec3, Vec3); 6] = [
    (Vec3::X, Vec3::NEG_Z, Vec3::Y),
    (Vec3::NEG_X, Vec3::Z, Vec3::Y),
    (Vec3::Y, Vec3::X, Vec3::NEG_Z),
    (Vec3::NEG_Y, Vec3::X, Vec3::Z),
    (Vec3::Z, Vec3::X, Vec3::Y),
    (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
];

/// Generates a cube of the given half-extent with each face split into
/// `segments × segments` quads.
///
/// `segments` must be at least 1. The returned mesh has flat per-face
/// normals and CCW winding viewed from outside.
#[must_use]
pub fn subdivided_cube(half_extent: f32, segments: u32) -> MeshData {
    debug_assert!(half_extent > 0.0);
    debug_assert!(segments >= 1);

    let mut mesh = MeshData::new();
    let verts_per_row = segments + 1;

    for (normal, tangent, bitangent) in FACE_BASES {
        let base = mesh.positions.len() as u32;

        for row in 0..verts_per_row {
            for col in 0..verts_per_row {
                let u = (col as f32 / segments as f32) * 2.0 - 1.0;
                let v = (row as f32 / segments as f32) * 2.0 - 1.0;
                let pos = (normal + tangent * u + bitangent * v) * half_extent;
                mesh.positions.push(pos);
                mesh.normals.push(normal);
            }
        }

        for row in 0..segments {
            for col in 0..segments {
                let i00 = base + row * verts_per_row + col;
                let i10 = i00 + 1;
                let i01 = i00 + verts_per_row;
                let i11 = i01 + 1;
                // Two CCW triangles per grid cell.
                mesh.indices.extend_from_slice(&[i00, i10, i11]);
                mesh.indices.extend_from_slice(&[i00, i11, i01]);
            }
        }
    }

    mesh
}
