//! The controller owning all die state: orientation, roll animation,
//! and the active section.
//!
//! Every entry point funnels into the same flow: pick a target section,
//! hand the animator a roll request, and commit the section through the
//! switcher on the tick that lands the roll. The view layer only reads
//! the orientation back.

use glam::Quat;
use rand::Rng;
use tumble_nav::{Section, SectionHost, SectionSwitcher, SwitcherError};
use tumble_roll::{RollAnimator, random_tumble};

/// Owns the animator, the switcher, and the randomness driving rolls.
#[derive(Debug)]
pub struct DieController<R: Rng> {
    animator: RollAnimator,
    switcher: SectionSwitcher,
    rng: R,
}

impl<R: Rng> DieController<R> {
    /// Creates the controller with the default section active.
    ///
    /// Fails when the host cannot show the default section's panel; the
    /// widget refuses to start half-wired.
    pub fn new<H: SectionHost>(
        host: &mut H,
        rng: R,
        orientation: Quat,
    ) -> Result<Self, SwitcherError> {
        let switcher = SectionSwitcher::new(host)?;
        Ok(Self {
            animator: RollAnimator::new(orientation),
            switcher,
            rng,
        })
    }

    /// The currently active section.
    #[must_use]
    pub fn current(&self) -> Section {
        self.switcher.current()
    }

    /// The die orientation to draw this frame.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        self.animator.orientation()
    }

    /// Whether a roll is in flight.
    #[must_use]
    pub fn is_rolling(&self) -> bool {
        self.animator.is_rolling()
    }

    /// The dice-button entry point: rolls toward a random section other
    /// than the current one. Returns whether a roll actually started.
    pub fn roll_random(&mut self, now: f64) -> bool {
        let target = Section::random_other(&mut self.rng, self.switcher.current());
        let tumble = random_tumble(&mut self.rng);
        self.animator.request_roll(now, target, tumble)
    }

    /// The navigation entry point: rolls toward a named section. Asking
    /// for the section already shown does nothing.
    pub fn roll_to(&mut self, now: f64, target: Section) -> bool {
        if target == self.switcher.current() {
            return false;
        }
        let tumble = random_tumble(&mut self.rng);
        self.animator.request_roll(now, target, tumble)
    }

    /// The die-click entry point: rolls toward a uniformly random
    /// section, the current one included, like a real throw.
    pub fn roll_any(&mut self, now: f64) -> bool {
        let target = Section::random(&mut self.rng);
        let tumble = random_tumble(&mut self.rng);
        self.animator.request_roll(now, target, tumble)
    }

    /// Jumps straight to a section without animating, used for the
    /// startup section override.
    pub fn jump_to<H: SectionHost>(&mut self, host: &mut H, target: Section) {
        self.switcher.switch(host, target);
        self.animator = RollAnimator::new(target.target_orientation());
    }

    /// Advances the animation and commits a landed roll to the host.
    /// Returns the newly activated section on the landing tick.
    pub fn tick<H: SectionHost>(&mut self, now: f64, host: &mut H) -> Option<Section> {
        let landed = self.animator.tick(now)?;
        self.switcher.switch(host, landed);
        Some(landed)
    }
}
