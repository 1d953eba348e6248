use serde::{Deserialize, Serialize};
use crate::molecule::Molecule;
use crate::world::World;

/// Filled circle without outline, given by its bounding box.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CircleSprite {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    /// `#rrggbb`
    pub fill: String,
}

impl From<&Molecule> for CircleSprite {
    fn from(molecule: &Molecule) -> Self {
        let diameter = molecule.diameter();
        CircleSprite {
            x0: molecule.position.x,
            y0: molecule.position.y,
            x1: molecule.position.x + diameter,
            y1: molecule.position.y + diameter,
            fill: molecule.color.to_hex(),
        }
    }
}

/// Everything a renderer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub index: u64,
    pub sprites: Vec<CircleSprite>,
    pub avg_energy_proxy: f64,
}

impl Frame {
    pub fn capture(index: u64, world: &World, avg_energy_proxy: f64) -> Self {
        Frame {
            index,
            sprites: world.molecules.iter().map(CircleSprite::from).collect(),
            avg_energy_proxy,
        }
    }

    /// Average energy proxy as shown next to the arena.
    pub fn energy_label(&self) -> String {
        format!("{:.2}", self.avg_energy_proxy)
    }
}
