//! Canonical pip layout and placement on the bevelled surface.

use glam::{Quat, Vec3};
use tumble_geom::BevelProfile;

use crate::face::DieFace;

/// Extra outward offset applied to every pip to keep it clear of the die
/// surface (avoids z-fighting against the body mesh).
pub const PIP_LIFT: f32 = 0.002;

/// Pip tint. The layout alternates black and red the way the original
/// hand-painted die does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipColor {
    Black,
    Red,
}

/// Face-local pip pattern: `(u, v)` grid coordinates in {-1, 0, 1} plus the
/// pip's tint. Multiplied by the style's pip spread and mapped through the
/// face basis at placement time.
///
/// Every pattern is symmetric about the face's local origin.
#[must_use]
pub fn pip_layout(face: DieFace) -> &'static [(f32, f32, PipColor)] {
    use PipColor::{Black, Red};
    match face {
        DieFace::One => &[(0.0, 0.0, Red)],
        DieFace::Two => &[(0.0, 1.0, Black), (0.0, -1.0, Red)],
        DieFace::Three => &[(0.0, 1.0, Black), (0.0, 0.0, Red), (0.0, -1.0, Black)],
        DieFace::Four => &[
            (1.0, 1.0, Red),
            (-1.0, 1.0, Black),
            (1.0, -1.0, Black),
            (-1.0, -1.0, Red),
        ],
        DieFace::Five => &[
            (0.0, 0.0, Red),
            (1.0, 1.0, Black),
            (1.0, -1.0, Red),
            (-1.0, 1.0, Black),
            (-1.0, -1.0, Red),
        ],
        DieFace::Six => &[
            (1.0, 1.0, Black),
            (1.0, 0.0, Red),
            (1.0, -1.0, Black),
            (-1.0, 1.0, Red),
            (-1.0, 0.0, Black),
            (-1.0, -1.0, Red),
        ],
    }
}

/// Resolved placement of a single pip on the rounded die.
#[derive(Debug, Clone, Copy)]
pub struct PipTransform {
    /// Pip center, on the bevelled surface plus [`PIP_LIFT`].
    pub translation: Vec3,
    /// Rotation aligning the pip's local +Z with the outward direction.
    pub rotation: Quat,
}

/// Places one pip given its face, grid offset, and the die's bevel profile.
///
/// The pip center starts on the un-rounded cube face, runs through the same
/// clamp-and-blend rule the mesh vertices use (so pips near edges follow
/// the bevel down instead of floating), and is finally lifted [`PIP_LIFT`]
/// along the outward radial direction.
#[must_use]
pub fn pip_transform(
    face: DieFace,
    grid_u: f32,
    grid_v: f32,
    spread: f32,
    profile: &BevelProfile,
) -> PipTransform {
    let flat = face.normal() * profile.half_extent
        + face.tangent() * grid_u * spread
        + face.bitangent() * grid_v * spread;

    let outward = flat.normalize();
    let on_surface = profile.displace(flat);

    PipTransform {
        translation: on_surface + outward * PIP_LIFT,
        rotation: Quat::from_rotation_arc(Vec3::Z, outward),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_profile() -> BevelProfile {
        BevelProfile::new(0.475, 0.15)
    }

    #[test]
    fn test_pip_counts_match_face_numbers() {
        for face in DieFace::ALL {
            assert_eq!(
                pip_layout(face).len(),
                face.pip_count() as usize,
                "wrong pip count for {face:?}"
            );
        }
    }

    #[test]
    fn test_layouts_are_symmetric_about_face_origin() {
        for face in DieFace::ALL {
            let layout = pip_layout(face);
            for &(u, v, _) in layout {
                assert!(
                    layout.iter().any(|&(mu, mv, _)| mu == -u && mv == -v),
                    "pip ({u}, {v}) on {face:?} has no mirror"
                );
            }
        }
    }

    #[test]
    fn test_total_pip_count_is_twenty_one() {
        let total: usize = DieFace::ALL.iter().map(|f| pip_layout(*f).len()).sum();
        assert_eq!(total, 21);
    }

    #[test]
    fn test_center_pip_sits_on_face_axis() {
        let profile = test_profile();
        let t = pip_transform(DieFace::One, 0.0, 0.0, 0.25, &profile);
        // The +Z face-center pip stays on the Z axis, pulled inward by the
        // bevel blend and lifted back out by PIP_LIFT.
        assert!(t.translation.x.abs() < 1e-6);
        assert!(t.translation.y.abs() < 1e-6);
        assert!(t.translation.z < profile.half_extent);
        assert!(t.translation.z > profile.boundary());
    }

    #[test]
    fn test_pip_rotation_points_outward() {
        let profile = test_profile();
        for face in DieFace::ALL {
            for &(u, v, _) in pip_layout(face) {
                let t = pip_transform(face, u, v, 0.25, &profile);
                let forward = t.rotation * Vec3::Z;
                let outward = t.translation.normalize();
                assert!(
                    forward.dot(outward) > 0.999,
                    "pip on {face:?} does not face outward"
                );
            }
        }
    }

    #[test]
    fn test_corner_pips_follow_the_bevel() {
        let profile = test_profile();
        // A corner pip on face six sits past the bevel boundary in two
        // axes; it must end up strictly inside the sharp cube corner.
        let t = pip_transform(DieFace::Six, 1.0, 1.0, 0.25, &profile);
        let flat = DieFace::Six.normal() * profile.half_extent
            + DieFace::Six.tangent() * 0.25
            + DieFace::Six.bitangent() * 0.25;
        assert!(t.translation.length() < flat.length());
    }

    #[test]
    fn test_placement_is_deterministic() {
        let profile = test_profile();
        let a = pip_transform(DieFace::Five, 1.0, -1.0, 0.25, &profile);
        let b = pip_transform(DieFace::Five, 1.0, -1.0, 0.25, &profile);
        assert_eq!(a.translation, b.translation);
        assert_eq!(a.rotation, b.rotation);
    }
}
