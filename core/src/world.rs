use serde::{Deserialize, Serialize};
use crate::config::SimulationConfig;
use crate::molecule::Molecule;

/// Whether the world has a population the driver should keep stepping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    Running,
}

/// Structure that keeps current state of the arena
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct World {
    /// Molecules of the current run. Order only decides which pair is resolved first.
    pub molecules: Vec<Molecule>,
    pub width: f64,
    pub height: f64,
    phase: Phase,
}

impl World {
    /// Empty idle world.
    pub fn new(width: f64, height: f64) -> Self {
        World {
            molecules: vec![],
            width,
            height,
            phase: Phase::Idle,
        }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        World::new(config.arena_width, config.arena_height)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Replace the whole population and start running. The previous molecules
    /// are dropped in the same call, there is no state in between.
    pub fn populate(&mut self, molecules: Vec<Molecule>) {
        self.molecules = molecules;
        self.phase = Phase::Running;
    }

    /// Drop the population and go back to idle.
    pub fn clear(&mut self) {
        self.molecules.clear();
        self.phase = Phase::Idle;
    }

    pub fn len(&self) -> usize {
        self.molecules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.molecules.is_empty()
    }

    /// Get minimal and maximum speed of all molecules. `(0, 0)` for an empty world.
    pub fn get_min_max_speed(&self) -> (f64, f64) {
        if self.molecules.is_empty() {
            return (0.0, 0.0);
        }
        self.molecules
            .iter()
            .map(Molecule::speed)
            .fold((f64::MAX, 0.0f64), |(min, max), speed| (min.min(speed), max.max(speed)))
    }

    /// Count of molecules whose bounding box is outside the arena right now.
    pub fn escaped_count(&self) -> usize {
        self.molecules
            .iter()
            .filter(|m| !m.is_inside(self.width, self.height))
            .count()
    }
}

impl Default for World {
    fn default() -> Self {
        World::from_config(&SimulationConfig::default())
    }
}
