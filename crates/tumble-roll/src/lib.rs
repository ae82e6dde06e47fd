//! The roll animator: a two-state machine that tumbles the die and
//! settles it on a requested face.

mod animator;
mod tumble;

pub use animator::{IDLE_DRIFT_PITCH, IDLE_DRIFT_YAW, ROLL_DURATION, RollAnimator};
pub use tumble::random_tumble;
