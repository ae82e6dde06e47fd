//! UV-sphere generator for the die's pip markers.

use glam::Vec3;
use std::f32::consts::{PI, TAU};

use crate::mesh::MeshData;

/// Generates a unit-radius UV sphere with `rings` latitude bands and
/// `sectors` longitude bands. Poles are shared single vertices.
///
/// The sphere's "forward" axis is +Z so a pip oriented with
/// `Quat::from_rotation_arc(Vec3::Z, outward)` faces away from the die.
#[must_use]
pub fn uv_sphere(rings: u32, sectors: u32) -> MeshData {
    debug_assert!(rings >= 2);
    debug_assert!(sectors >= 3);

    let mut mesh = MeshData::new();

    // Interior ring vertices; ring 0 and ring `rings` collapse to the poles.
    for ring in 1..rings {
        let phi = PI * ring as f32 / rings as f32;
        let (sin_phi, cos_phi) = phi.sin_cos();
        for sector in 0..sectors {
            let theta = TAU * sector as f32 / sectors as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();
            let p = Vec3::new(sin_phi * cos_theta, sin_phi * sin_theta, cos_phi);
            mesh.positions.push(p);
            mesh.normals.push(p);
        }
    }

    let north = mesh.positions.len() as u32;
    mesh.positions.push(Vec3::Z);
    mesh.normals.push(Vec3::Z);
    let south = mesh.positions.len() as u32;
    mesh.positions.push(Vec3::NEG_Z);
    mesh.normals.push(Vec3::NEG_Z);

    let ring_at = |ring: u32, sector: u32| (ring - 1) * sectors + (sector % sectors);

    // Pole caps.
    for sector in 0..sectors {
        mesh.indices
            .extend_from_slice(&[north, ring_at(1, sector), ring_at(1, sector + 1)]);
        mesh.indices.extend_from_slice(&[
            south,
            ring_at(rings - 1, sector + 1),
            ring_at(rings - 1, sector),
        ]);
    }

    // Quad strips between interior rings.
    for ring in 1..rings - 1 {
        for sector in 0..sectors {
            let a = ring_at(ring, sector);
            let b = ring_at(ring, sector + 1);
            let c = ring_at(ring + 1, sector);
            let d = ring_at(ring + 1, sector + 1);
            mesh.indices.extend_from_slice(&[a, c, d]);
            mesh.indices.extend_from_slice(&[a, d, b]);
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_count() {
        let mesh = uv_sphere(8, 16);
        // 7 interior rings of 16 vertices, plus two poles.
        assert_eq!(mesh.vertex_count(), 7 * 16 + 2);
    }

    #[test]
    fn test_all_vertices_unit_distance_from_center() {
        let mesh = uv_sphere(6, 12);
        for p in &mesh.positions {
            assert!((p.length() - 1.0).abs() < 1e-6, "vertex off sphere: {p:?}");
        }
    }

    #[test]
    fn test_normals_are_radial() {
        let mesh = uv_sphere(6, 12);
        for (p, n) in mesh.positions.iter().zip(&mesh.normals) {
            assert!((*p - *n).length() < 1e-6);
        }
    }

    #[test]
    fn test_triangles_wind_outward() {
        let mesh = uv_sphere(8, 16);
        for tri in mesh.indices.chunks_exact(3) {
            let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
            let centroid = (mesh.positions[a] + mesh.positions[b] + mesh.positions[c]) / 3.0;
            let face_normal = (mesh.positions[b] - mesh.positions[a])
                .cross(mesh.positions[c] - mesh.positions[a]);
            assert!(
                face_normal.dot(centroid) > 0.0,
                "triangle winds inward at centroid {centroid:?}"
            );
        }
    }

    #[test]
    fn test_closed_surface_triangle_count() {
        let rings = 8;
        let sectors = 16;
        let mesh = uv_sphere(rings, sectors);
        // 2*sectors cap triangles + 2*sectors*(rings-2) strip triangles.
        let expected = 2 * sectors + 2 * sectors * (rings - 2);
        assert_eq!(mesh.triangle_count(), expected as usize);
    }
}
