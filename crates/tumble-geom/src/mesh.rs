//! Indexed triangle mesh with positions and per-vertex normals.

use glam::{Quat, Vec3};

/// An indexed triangle mesh in model space.
///
/// Positions and normals are parallel arrays; `indices` holds CCW triangles
/// as seen from outside the solid.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// Vertex positions.
    pub positions: Vec<Vec3>,
    /// Per-vertex unit normals.
    pub normals: Vec<Vec3>,
    /// Triangle indices, three per face, CCW winding.
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Creates an empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Recomputes smooth per-vertex normals from the current positions.
    ///
    /// Face normals are accumulated unnormalized, so larger triangles weigh
    /// more, then each vertex normal is normalized. Required after any
    /// positional displacement; the flat normals written by the generators
    /// are invalid once vertices move.
    pub fn recompute_normals(&mut self) {
        self.normals.clear();
        self.normals.resize(self.positions.len(), Vec3::ZERO);

        for tri in self.indices.chunks_exact(3) {
            let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
            let face_normal = (self.positions[b] - self.positions[a])
                .cross(self.positions[c] - self.positions[a]);
            self.normals[a] += face_normal;
            self.normals[b] += face_normal;
            self.normals[c] += face_normal;
        }

        for n in &mut self.normals {
            *n = n.normalize_or_zero();
        }
    }

    /// Applies `scale`, then `rotation`, then `translation` to every vertex.
    ///
    /// Normals are rotated only; uniform scaling and translation leave unit
    /// normals unchanged.
    pub fn transform(&mut self, scale: f32, rotation: Quat, translation: Vec3) {
        for p in &mut self.positions {
            *p = rotation * (*p * scale) + translation;
        }
        for n in &mut self.normals {
            *n = rotation * *n;
        }
    }

    /// Appends another mesh, offsetting its indices past this mesh's vertices.
    pub fn append(&mut self, other: &MeshData) {
        let base = self.positions.len() as u32;
        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.indices.extend(other.indices.iter().map(|i| i + base));
    }

    /// Reverses the winding of every triangle, turning the mesh inside out.
    ///
    /// Used for the die's shell, which is drawn as a back-face outline.
    pub fn flip_winding(&mut self) {
        for tri in self.indices.chunks_exact_mut(3) {
            tri.swap(1, 2);
        }
        for n in &mut self.normals {
            *n = -*n;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> MeshData {
        MeshData {
            positions: vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            normals: vec![Vec3::Z; 3],
            indices: vec![0, 1, 2],
        }
    }

    #[test]
    fn test_recomputed_normals_are_unit_length() {
        let mut mesh = unit_triangle();
        mesh.recompute_normals();
        for n in &mesh.normals {
            assert!((n.length() - 1.0).abs() < 1e-6, "normal not unit: {n:?}");
        }
    }

    #[test]
    fn test_ccw_triangle_normal_points_along_plus_z() {
        let mut mesh = unit_triangle();
        mesh.recompute_normals();
        for n in &mesh.normals {
            assert!((Vec3::Z - *n).length() < 1e-6);
        }
    }

    #[test]
    fn test_flip_winding_reverses_normals() {
        let mut mesh = unit_triangle();
        mesh.flip_winding();
        mesh.recompute_normals();
        for n in &mesh.normals {
            assert!((Vec3::NEG_Z - *n).length() < 1e-6);
        }
    }

    #[test]
    fn test_append_offsets_indices() {
        let mut a = unit_triangle();
        let b = unit_triangle();
        a.append(&b);
        assert_eq!(a.vertex_count(), 6);
        assert_eq!(a.indices, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_transform_translates_positions_but_not_normals() {
        let mut mesh = unit_triangle();
        mesh.recompute_normals();
        mesh.transform(1.0, Quat::IDENTITY, Vec3::new(5.0, 0.0, 0.0));
        assert!((mesh.positions[0] - Vec3::new(5.0, 0.0, 0.0)).length() < 1e-6);
        assert!((mesh.normals[0] - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_transform_rotates_normals_with_positions() {
        let mut mesh = unit_triangle();
        mesh.recompute_normals();
        let rot = Quat::from_rotation_x(std::f32::consts::FRAC_PI_2);
        mesh.transform(1.0, rot, Vec3::ZERO);
        // +Z normal rotated 90 degrees about X lands on +Y.
        assert!((mesh.normals[0] - Vec3::Y).length() < 1e-5);
    }
}
