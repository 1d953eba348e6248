use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use log::info;
use serde::{Deserialize, Serialize};
use crate::config::SimulationConfig;
use crate::error::Result;
use crate::frame::Frame;
use crate::parameters::RunParameters;
use crate::stats::FrameStats;

/// Frames of one run together with what is needed to reproduce it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Recording {
    pub config: SimulationConfig,
    pub parameters: RunParameters,
    pub seed: Option<u64>,
    pub frames: Vec<Frame>,
}

impl Recording {
    pub fn new(config: SimulationConfig, parameters: RunParameters, seed: Option<u64>) -> Self {
        Recording {
            config,
            parameters,
            seed,
            frames: vec![],
        }
    }

    pub fn add_frame(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub fn save_to_file(&self, path: &Path, pretty_print: bool) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        if pretty_print {
            serde_json::to_writer_pretty(writer, self)?;
        } else {
            serde_json::to_writer(writer, self)?;
        }
        info!("Saved {} frames to {}", self.frames.len(), path.to_string_lossy());
        Ok(())
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let recording = serde_json::from_reader(BufReader::new(file))?;
        Ok(recording)
    }
}

/// Write per-frame statistics as csv, one row per frame.
pub fn save_energy_series(path: &Path, series: &[FrameStats]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for stats in series {
        writer.serialize(stats)?;
    }
    writer.flush()?;
    info!("Saved {} rows of statistics to {}", series.len(), path.to_string_lossy());
    Ok(())
}
