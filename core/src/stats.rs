use std::fmt;
use serde::{Deserialize, Serialize};

/// Aggregates reported by one simulation frame.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameStats {
    /// 1-based index of the frame that produced these values
    pub frame: u64,
    pub molecules: usize,
    /// reference speed the colors of this frame were mapped against
    pub max_speed: f64,
    pub total_energy_proxy: f64,
    pub avg_energy_proxy: f64,
    /// pairs that exchanged momentum
    pub collisions: usize,
    /// velocity components flipped by walls
    pub wall_bounces: usize,
}

impl fmt::Display for FrameStats {
    /// The display value: average energy proxy with 2 decimals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.avg_energy_proxy)
    }
}
