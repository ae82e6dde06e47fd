//! The die model: six faces, canonical pip layout, and mesh assembly.

mod face;
mod model;
mod pips;

pub use face::DieFace;
pub use model::{DieModel, DiePart, DieStyle, initial_orientation};
pub use pips::{PIP_LIFT, PipColor, PipTransform, pip_layout, pip_transform};
