use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::error::{Error, Result};

pub const DEFAULT_ARENA_SIZE: f64 = 400.0;
pub const DEFAULT_MOLECULE_RADIUS: f64 = 3.0;
/// Hard cap on population, collisions are checked for every pair.
pub const DEFAULT_MAX_MOLECULES: usize = 30;
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 20;

/// Settings that stay fixed for the lifetime of a run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub arena_width: f64,
    pub arena_height: f64,
    pub molecule_radius: f64,
    pub max_molecules: usize,
    /// nominal time between two frames of the driver loop
    pub tick_interval_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            arena_width: DEFAULT_ARENA_SIZE,
            arena_height: DEFAULT_ARENA_SIZE,
            molecule_radius: DEFAULT_MOLECULE_RADIUS,
            max_molecules: DEFAULT_MAX_MOLECULES,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.molecule_radius.is_finite() || self.molecule_radius <= 0.0 {
            return Err(Error::InvalidConfig("molecule_radius must be finite and > 0".into()));
        }
        let diameter = 2.0 * self.molecule_radius;
        if !self.arena_width.is_finite() || self.arena_width < diameter {
            return Err(Error::InvalidConfig(format!(
                "arena_width must be finite and at least one diameter ({diameter})"
            )));
        }
        if !self.arena_height.is_finite() || self.arena_height < diameter {
            return Err(Error::InvalidConfig(format!(
                "arena_height must be finite and at least one diameter ({diameter})"
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(Error::InvalidConfig("tick_interval_ms must be > 0".into()));
        }
        Ok(())
    }

    /// Read config from json file. Missing fields take their default values.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let config: SimulationConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }
}
