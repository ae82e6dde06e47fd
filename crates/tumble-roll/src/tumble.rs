//! Random mid-roll orientations.

use std::f32::consts::PI;

use glam::Quat;
use rand::Rng;

/// Draws a random tumble orientation for the middle of a roll.
///
/// Each Euler angle spans several full turns so consecutive rolls read
/// as a genuine tumble rather than a short arc to the target.
pub fn random_tumble<R: Rng>(rng: &mut R) -> Quat {
    let x = rng.random::<f32>() * PI * 10.0;
    let y = rng.random::<f32>() * PI * 10.0;
    let z = rng.random::<f32>() * PI * 10.0;
    Quat::from_euler(glam::EulerRot::XYZ, x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_tumbles_are_unit_quaternions() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..100 {
            let q = random_tumble(&mut rng);
            assert!((q.length() - 1.0).abs() < 1e-5, "non-unit tumble {q:?}");
        }
    }

    #[test]
    fn test_consecutive_tumbles_differ() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let a = random_tumble(&mut rng);
        let b = random_tumble(&mut rng);
        assert!(a.dot(b).abs() < 1.0 - 1e-4, "tumbles collapsed to one orientation");
    }
}
