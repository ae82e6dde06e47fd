//! Two-phase roll animation and idle drift.

use glam::Quat;
use tracing::{debug, info};
use tumble_nav::Section;

/// Wall-clock length of a roll, in seconds.
pub const ROLL_DURATION: f64 = 2.0;

/// Idle rotation around the x axis, radians per tick.
pub const IDLE_DRIFT_PITCH: f32 = 0.001;

/// Idle rotation around the y axis, radians per tick.
pub const IDLE_DRIFT_YAW: f32 = 0.002;

/// A roll in progress: where it started, the mid-roll tumble, and the
/// section it commits to when it lands.
#[derive(Debug)]
struct RollInFlight {
    started_at: f64,
    from: Quat,
    tumble: Quat,
    target: Quat,
    pending: Section,
}

#[derive(Debug)]
enum Phase {
    Idle,
    Rolling(RollInFlight),
}

/// Owns the die orientation and advances it over time.
///
/// While idle the die drifts slowly; a roll tumbles it toward a random
/// mid-orientation for the first half of [`ROLL_DURATION`] and settles
/// it onto the target face over the second half. The pending section is
/// committed exactly once, on the tick that completes the roll.
#[derive(Debug)]
pub struct RollAnimator {
    orientation: Quat,
    phase: Phase,
}

impl RollAnimator {
    /// Creates an idle animator at the given starting orientation.
    #[must_use]
    pub fn new(orientation: Quat) -> Self {
        Self {
            orientation,
            phase: Phase::Idle,
        }
    }

    /// The current die orientation, valid after every tick.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Whether a roll is currently in flight.
    #[must_use]
    pub fn is_rolling(&self) -> bool {
        matches!(self.phase, Phase::Rolling(_))
    }

    /// Starts a roll toward `target` through the given mid-roll tumble.
    ///
    /// Returns `false` without touching the running animation when a
    /// roll is already in flight: requests during a roll are dropped,
    /// not queued.
    pub fn request_roll(&mut self, now: f64, target: Section, tumble: Quat) -> bool {
        if self.is_rolling() {
            debug!(target = target.id(), "roll request ignored, already rolling");
            return false;
        }

        info!(target = target.id(), "roll started");
        self.phase = Phase::Rolling(RollInFlight {
            started_at: now,
            from: self.orientation,
            tumble,
            target: target.target_orientation(),
            pending: target,
        });
        true
    }

    /// Advances the animation to wall-clock time `now`.
    ///
    /// Returns the section to commit on the tick that finishes a roll,
    /// `None` on every other tick. On completion the orientation is the
    /// exact target, not the last slerp sample.
    pub fn tick(&mut self, now: f64) -> Option<Section> {
        let roll = match &self.phase {
            Phase::Idle => {
                self.orientation = (self.orientation
                    * Quat::from_rotation_x(IDLE_DRIFT_PITCH)
                    * Quat::from_rotation_y(IDLE_DRIFT_YAW))
                .normalize();
                return None;
            }
            Phase::Rolling(roll) => roll,
        };

        let progress = ((now - roll.started_at) / ROLL_DURATION).clamp(0.0, 1.0);
        if progress < 0.5 {
            self.orientation = roll.from.slerp(roll.tumble, progress as f32 * 2.0);
            return None;
        }
        if progress < 1.0 {
            self.orientation = roll
                .tumble
                .slerp(roll.target, (progress as f32 - 0.5) * 2.0);
            return None;
        }

        self.orientation = roll.target;
        let landed = roll.pending;
        self.phase = Phase::Idle;
        info!(section = landed.id(), "roll landed");
        Some(landed)
    }
}
