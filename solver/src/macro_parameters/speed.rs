use gasviz_core::World;

/// Speed the color gradient is normalized against on this frame: the fastest molecule,
/// or `1` when there is nothing to normalize (empty or fully resting population).
pub fn get_reference_speed(world: &World) -> f64 {
    let (_, max_speed) = world.get_min_max_speed();
    if max_speed > 0.0 {
        max_speed
    } else {
        1.0
    }
}
