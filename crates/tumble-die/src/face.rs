//! The six faces of the die and their rest orientations.

use glam::{Quat, Vec3};
use std::f32::consts::{FRAC_PI_2, PI};

/// A die face, numbered by pip count.
///
/// Face assignment matches the pip layout on the model: 1 on +Z, 2 on +X,
/// 3 on −Z, 4 on −X, 5 on +Y, 6 on −Y. Faces pair up by axis rather than
/// by the traditional sum-to-seven rule; sections bind to faces in index
/// order, so the axis pairing is what matters here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum DieFace {
    /// One pip, +Z face.
    One = 0,
    /// Two pips, +X face.
    Two = 1,
    /// Three pips, −Z face.
    Three = 2,
    /// Four pips, −X face.
    Four = 3,
    /// Five pips, +Y face.
    Five = 4,
    /// Six pips, −Y face.
    Six = 5,
}

impl DieFace {
    /// All six faces in canonical order.
    pub const ALL: [DieFace; 6] = [
        DieFace::One,
        DieFace::Two,
        DieFace::Three,
        DieFace::Four,
        DieFace::Five,
        DieFace::Six,
    ];

    /// Number of pips on this face.
    #[must_use]
    pub fn pip_count(self) -> u8 {
        self as u8 + 1
    }

    /// Face at the given canonical index, wrapping out-of-range indices
    /// back to [`DieFace::One`].
    #[must_use]
    pub fn from_index(index: usize) -> DieFace {
        *Self::ALL.get(index).unwrap_or(&DieFace::One)
    }

    /// Outward-pointing unit normal of this face on the un-rotated die.
    #[must_use]
    pub fn normal(self) -> Vec3 {
        match self {
            DieFace::One => Vec3::Z,
            DieFace::Two => Vec3::X,
            DieFace::Three => Vec3::NEG_Z,
            DieFace::Four => Vec3::NEG_X,
            DieFace::Five => Vec3::Y,
            DieFace::Six => Vec3::NEG_Y,
        }
    }

    /// Tangent vector: direction of increasing `u` in the face's pip plane.
    #[must_use]
    pub fn tangent(self) -> Vec3 {
        match self {
            DieFace::One => Vec3::X,
            DieFace::Two => Vec3::NEG_Z,
            DieFace::Three => Vec3::NEG_X,
            DieFace::Four => Vec3::Z,
            DieFace::Five => Vec3::X,
            DieFace::Six => Vec3::X,
        }
    }

    /// Bitangent vector: direction of increasing `v` in the face's pip plane.
    #[must_use]
    pub fn bitangent(self) -> Vec3 {
        match self {
            DieFace::One => Vec3::Y,
            DieFace::Two => Vec3::Y,
            DieFace::Three => Vec3::Y,
            DieFace::Four => Vec3::Y,
            DieFace::Five => Vec3::NEG_Z,
            DieFace::Six => Vec3::Z,
        }
    }

    /// The fixed die orientation that presents this face to the viewer.
    ///
    /// These are the six literal target rotations the roll animator settles
    /// on; the table is total, never mutated, and all six entries are
    /// pairwise distinct.
    #[must_use]
    pub fn rest_orientation(self) -> Quat {
        match self {
            DieFace::One => Quat::IDENTITY,
            DieFace::Two => Quat::from_rotation_z(FRAC_PI_2),
            DieFace::Three => Quat::from_rotation_x(PI),
            DieFace::Four => Quat::from_rotation_z(-FRAC_PI_2),
            DieFace::Five => Quat::from_rotation_x(FRAC_PI_2),
            DieFace::Six => Quat::from_rotation_x(-FRAC_PI_2),
        }
    }
}
