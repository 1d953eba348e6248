use gasviz_core::{Molecule, World};

/// Sum of `vx² + vy²` over all molecules (twice the kinetic energy at unit mass).
pub fn get_total_energy_proxy(world: &World) -> f64 {
    world.molecules.iter().map(Molecule::energy_proxy).sum()
}

/// Total energy proxy per molecule, `0` for an empty world.
pub fn get_average_energy_proxy(world: &World) -> f64 {
    average_energy_proxy(get_total_energy_proxy(world), world.len())
}

pub fn average_energy_proxy(total_energy_proxy: f64, count: usize) -> f64 {
    total_energy_proxy / count.max(1) as f64
}
