use std::f64::consts::TAU;
use na::Vector2;
use rand::Rng;

/// Velocity of magnitude `speed` with a uniformly random heading.
pub fn random_velocity<R: Rng + ?Sized>(rng: &mut R, speed: f64) -> Vector2<f64> {
    let angle: f64 = rng.gen_range(0.0..TAU);
    Vector2::new(speed * angle.cos(), speed * angle.sin())
}
