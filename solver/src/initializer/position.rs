use na::Vector2;
use rand::Rng;

/// Random top-left corner with whole-number coordinates, so the bounding box
/// of a molecule with `radius` starts fully inside the arena.
pub fn random_position<R: Rng + ?Sized>(rng: &mut R, arena_width: f64, arena_height: f64,
                                        radius: f64) -> Vector2<f64> {
    let diameter = 2.0 * radius;
    let max_x = (arena_width - diameter).floor().max(0.0) as i64;
    let max_y = (arena_height - diameter).floor().max(0.0) as i64;
    Vector2::new(rng.gen_range(0..=max_x) as f64, rng.gen_range(0..=max_y) as f64)
}
