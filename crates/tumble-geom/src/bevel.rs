//! The clamp-and-blend rule that rounds cube vertices onto a spherical bevel.

use glam::Vec3;

use crate::mesh::MeshData;

/// Rounding profile for a cube of half-extent `half_extent` with corners
/// and edges bevelled at `radius`.
///
/// Vertices whose Chebyshev distance from the center stays at or below
/// `half_extent - radius` are untouched. Vertices beyond it are scaled back
/// onto the bevel boundary and the remainder is re-extended along the radial
/// direction, blended by how far past the boundary the vertex sat. The same
/// rule positions both mesh vertices and pip centers, keeping pips flush
/// with the bevelled surface.
///
/// `radius` must satisfy `0 < radius < half_extent`; this is a caller
/// contract, not a runtime check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BevelProfile {
    /// Half-extent of the un-rounded cube.
    pub half_extent: f32,
    /// Bevel radius at edges and corners.
    pub radius: f32,
}

impl BevelProfile {
    /// Creates a profile.
    #[must_use]
    pub fn new(half_extent: f32, radius: f32) -> Self {
        debug_assert!(radius > 0.0 && radius < half_extent);
        Self {
            half_extent,
            radius,
        }
    }

    /// Chebyshev distance past which vertices are displaced.
    #[must_use]
    pub fn boundary(&self) -> f32 {
        self.half_extent - self.radius
    }

    /// Applies the clamp-and-blend rule to one point.
    ///
    /// Deterministic and side-effect free; points at or inside the boundary
    /// are returned bit-identical.
    #[must_use]
    pub fn displace(&self, point: Vec3) -> Vec3 {
        let cheb = point.x.abs().max(point.y.abs()).max(point.z.abs());
        if cheb <= self.boundary() {
            return point;
        }

        let direction = point.normalize();
        let frac = self.boundary() / cheb;
        point * frac + direction * self.radius * (1.0 - frac)
    }

    /// Rounds every vertex of `mesh` and recomputes its normals.
    ///
    /// The flat per-face normals written by the cube generator are invalid
    /// after displacement, so normals are always rebuilt from the new
    /// positions.
    pub fn apply(&self, mesh: &mut MeshData) {
        for p in &mut mesh.positions {
            *p = self.displace(*p);
        }
        mesh.recompute_normals();
    }
}
