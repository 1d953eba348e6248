use log::debug;
use rand::Rng;
use gasviz_core::{Molecule, SimulationConfig};
use crate::initializer::{random_position, random_velocity};

/// Create `count` molecules at random places, all moving with `speed` in random directions.
/// They stay blue until the first frame maps their speeds.
pub fn initialize_molecules<R: Rng + ?Sized>(rng: &mut R, count: usize, speed: f64,
                                             config: &SimulationConfig) -> Vec<Molecule> {
    let radius = config.molecule_radius;
    let molecules: Vec<Molecule> = (0..count)
        .map(|_| {
            let position = random_position(rng, config.arena_width, config.arena_height, radius);
            let velocity = random_velocity(rng, speed);
            Molecule::new(position, velocity, radius)
        })
        .collect();
    debug!("Initialized {} molecules with speed {:.3}", molecules.len(), speed);
    molecules
}
