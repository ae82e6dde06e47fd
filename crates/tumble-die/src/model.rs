//! One-time die assembly: rounded body, back-face shell, and 21 pips.

use glam::Quat;
use tumble_geom::{BevelProfile, MeshData, subdivided_cube, uv_sphere};

use crate::face::DieFace;
use crate::pips::{PipColor, pip_layout, pip_transform};

/// Cosmetic parameters of the die.
///
/// Defaults reproduce the original widget: a 0.95-unit light-blue cube with
/// a 0.15 bevel, a slightly larger translucent shell drawn inside-out as an
/// outline, and 0.05-radius black/red pips.
#[derive(Debug, Clone, PartialEq)]
pub struct DieStyle {
    /// Half-extent of the body cube.
    pub half_extent: f32,
    /// Bevel radius of the body.
    pub bevel_radius: f32,
    /// Half-extent of the outline shell.
    pub shell_half_extent: f32,
    /// Bevel radius of the shell (slightly larger than the body's).
    pub shell_bevel_radius: f32,
    /// Sphere radius of one pip.
    pub pip_radius: f32,
    /// Distance from a face's center to its off-center pips.
    pub pip_spread: f32,
    /// Grid subdivisions per cube face.
    pub segments: u32,
    /// RGBA body color.
    pub body_color: [f32; 4],
    /// RGBA shell color.
    pub shell_color: [f32; 4],
    /// RGBA for black pips.
    pub pip_black: [f32; 4],
    /// RGBA for red pips.
    pub pip_red: [f32; 4],
}

impl Default for DieStyle {
    fn default() -> Self {
        Self {
            half_extent: 0.475,
            bevel_radius: 0.15,
            shell_half_extent: 0.51,
            shell_bevel_radius: 0.17,
            pip_radius: 0.05,
            pip_spread: 0.25,
            segments: 4,
            body_color: [0.678, 0.847, 0.902, 1.0],
            shell_color: [0.678, 0.847, 0.902, 0.9],
            pip_black: [0.0, 0.0, 0.0, 1.0],
            pip_red: [1.0, 0.0, 0.0, 1.0],
        }
    }
}

/// A uniformly colored piece of the assembled die.
#[derive(Debug, Clone)]
pub struct DiePart {
    /// Geometry in die-local space.
    pub mesh: MeshData,
    /// RGBA color for the whole part.
    pub color: [f32; 4],
}

/// The assembled die: body, shell, and pips, built once and immutable.
#[derive(Debug, Clone)]
pub struct DieModel {
    /// Colored parts in draw order (shell first so the opaque body and
    /// pips overdraw it).
    pub parts: Vec<DiePart>,
    bounding_radius: f32,
}

impl DieModel {
    /// Builds the full die from a style.
    #[must_use]
    pub fn build(style: &DieStyle) -> Self {
        let mut parts = Vec::with_capacity(2 + 21);

        // Outline shell: same rounding rule, inside-out winding so only
        // its back faces render, silhouetting the body.
        let shell_profile = BevelProfile::new(style.shell_half_extent, style.shell_bevel_radius);
        let mut shell = subdivided_cube(style.shell_half_extent, style.segments);
        shell_profile.apply(&mut shell);
        shell.flip_winding();
        parts.push(DiePart {
            mesh: shell,
            color: style.shell_color,
        });

        let body_profile = BevelProfile::new(style.half_extent, style.bevel_radius);
        let mut body = subdivided_cube(style.half_extent, style.segments);
        body_profile.apply(&mut body);
        parts.push(DiePart {
            mesh: body,
            color: style.body_color,
        });

        let pip_sphere = uv_sphere(16, 16);
        for face in DieFace::ALL {
            for &(u, v, color) in pip_layout(face) {
                let placement = pip_transform(face, u, v, style.pip_spread, &body_profile);
                let mut pip = pip_sphere.clone();
                pip.transform(style.pip_radius, placement.rotation, placement.translation);
                parts.push(DiePart {
                    mesh: pip,
                    color: match color {
                        PipColor::Black => style.pip_black,
                        PipColor::Red => style.pip_red,
                    },
                });
            }
        }

        let bounding_radius = parts
            .iter()
            .flat_map(|part| part.mesh.positions.iter())
            .fold(0.0_f32, |acc, p| acc.max(p.length()));

        Self {
            parts,
            bounding_radius,
        }
    }

    /// Radius of the smallest origin-centered sphere containing every
    /// vertex. Used by pointer picking; rotation-invariant by construction.
    #[must_use]
    pub fn bounding_radius(&self) -> f32 {
        self.bounding_radius
    }

    /// Total vertex count across all parts.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.parts.iter().map(|p| p.mesh.vertex_count()).sum()
    }
}

/// Identity orientation helper for tests and initial state.
#[must_use]
pub fn initial_orientation() -> Quat {
    // The original widget starts the die tilted so three faces are visible.
    Quat::from_rotation_x(std::f32::consts::FRAC_PI_4)
        * Quat::from_rotation_y(std::f32::consts::FRAC_PI_6)
}
