use std::path::{Path, PathBuf};
use std::time::Duration;
use indicatif::ProgressBar;
use log::{debug, info, warn};
use rayon::prelude::*;
use serde::Serialize;
use gasviz_core::{save_energy_series, Error, Frame, FrameStats, Recording, Result,
                  RunParameters, SimulationConfig};
use gasviz_solver::initializer::{derive_run, DerivedRun};
use gasviz_solver::macro_parameters::get_average_energy_proxy;
use gasviz_solver::solver::{PairEnumeration, Simulation};
use crate::args::GasInput;
use crate::clock::FrameClock;

pub struct RunOptions {
    pub frames: u64,
    pub seed: Option<u64>,
    pub realtime: bool,
    pub verbose: bool,
    pub record: Option<PathBuf>,
    pub energy_csv: Option<PathBuf>,
    pub pairs: PairEnumeration,
    pub pretty_print: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            frames: 500,
            seed: None,
            realtime: false,
            verbose: false,
            record: None,
            energy_csv: None,
            pairs: PairEnumeration::AllPairs,
            pretty_print: false,
        }
    }
}

/// Result of one run of a temperature sweep.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SweepRow {
    pub temperature: f64,
    pub molecules: usize,
    pub initial_speed: f64,
    pub final_avg_energy_proxy: f64,
    pub mean_avg_energy_proxy: f64,
}

pub fn load_config(path: Option<&Path>) -> Result<SimulationConfig> {
    match path {
        Some(path) => {
            info!("Loading config from {}", path.to_string_lossy());
            SimulationConfig::load_from_file(path)
        }
        None => Ok(SimulationConfig::default()),
    }
}

pub fn read_parameters(input: &GasInput) -> Result<RunParameters> {
    let params = RunParameters::parse(&input.volume, &input.temperature, &input.pressure)?;
    if input.sliders {
        let snapped = RunParameters::from_sliders(params.volume, params.temperature, params.pressure);
        if snapped != params {
            warn!("Parameters moved into slider ranges: {:?}", snapped);
        }
        return Ok(snapped);
    }
    Ok(params)
}

pub fn derive(config: &SimulationConfig, input: &GasInput) -> Result<DerivedRun> {
    let params = read_parameters(input)?;
    let run = derive_run(&params, config.max_molecules)?;
    println!("Moles: {:.4}", run.moles);
    println!("Molecules: {}", run.count);
    println!("Initial speed: {:.2}", run.initial_speed);
    Ok(run)
}

/// Start a run from user input and step it until `options.frames` frames are done.
///
/// Nothing is started and no file is written when the input doesn't parse.
pub fn run(config: &SimulationConfig, input: &GasInput, options: &RunOptions) -> Result<FrameStats> {
    let params = read_parameters(input)?;
    let mut simulation = Simulation::with_pairs(config.clone(), options.pairs)?;
    let derived = simulation.start(&params, options.seed)?;
    println!("Molecules: {}, initial speed: {:.2}", derived.count, derived.initial_speed);

    let mut recording = options
        .record
        .as_ref()
        .map(|_| Recording::new(config.clone(), params, options.seed));
    if let Some(recording) = recording.as_mut() {
        let avg = get_average_energy_proxy(&simulation.world);
        recording.add_frame(Frame::capture(0, &simulation.world, avg));
    }
    let mut series = vec![];
    let mut last = FrameStats {
        molecules: simulation.world.len(),
        avg_energy_proxy: get_average_energy_proxy(&simulation.world),
        ..Default::default()
    };

    let mut clock = FrameClock::new(Duration::from_millis(config.tick_interval_ms), options.realtime);
    if options.realtime {
        info!("Pacing frames every {:?}", clock.interval());
    }
    let pb = if options.verbose {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(options.frames)
    };
    while simulation.is_running() && simulation.frame() < options.frames {
        clock.tick();
        let stats = simulation.step();
        if options.verbose {
            println!("frame {}: average kinetic energy {}", stats.frame, stats);
        }
        if let Some(recording) = recording.as_mut() {
            recording.add_frame(Frame::capture(stats.frame, &simulation.world, stats.avg_energy_proxy));
        }
        if options.energy_csv.is_some() {
            series.push(stats.clone());
        }
        last = stats;
        pb.inc(1);
    }
    pb.finish_and_clear();

    let escaped = simulation.world.escaped_count();
    if escaped > 0 {
        debug!("{} molecules are past a wall after the last frame", escaped);
    }
    if let (Some(recording), Some(path)) = (recording, options.record.as_ref()) {
        recording.save_to_file(path, options.pretty_print)?;
    }
    if let Some(path) = options.energy_csv.as_ref() {
        save_energy_series(path, &series)?;
    }
    println!("Average kinetic energy: {}", last);
    Ok(last)
}

/// Upper bound on the number of runs a single sweep may ask for.
pub const MAX_SWEEP_RUNS: usize = 10_000;

/// Temperatures `t_min, t_min + t_step, ..` up to and including `t_max`.
pub fn sweep_temperatures(t_min: f64, t_max: f64, t_step: f64) -> Result<Vec<f64>> {
    if !t_step.is_finite() || t_step <= 0.0 {
        return Err(Error::invalid_input("t_step", "must be finite and > 0"));
    }
    if !t_min.is_finite() || !t_max.is_finite() || t_min > t_max {
        return Err(Error::invalid_input("t_min", "must be finite and not above t_max"));
    }
    let count = ((t_max - t_min) / t_step + 1e-9).floor() + 1.0;
    if !count.is_finite() || count > MAX_SWEEP_RUNS as f64 {
        return Err(Error::invalid_input(
            "t_step",
            format!("sweep would need more than {} runs", MAX_SWEEP_RUNS),
        ));
    }
    let count = count as usize;
    Ok((0..count).map(|k| t_min + k as f64 * t_step).collect())
}

fn sweep_run(config: &SimulationConfig, params: &RunParameters, frames: u64,
             seed: Option<u64>) -> Result<SweepRow> {
    let mut simulation = Simulation::new(config.clone())?;
    let derived = simulation.start(params, seed)?;
    let mut sum = 0.0;
    let mut last = get_average_energy_proxy(&simulation.world);
    for _ in 0..frames {
        last = simulation.step().avg_energy_proxy;
        sum += last;
    }
    Ok(SweepRow {
        temperature: params.temperature,
        molecules: derived.count,
        initial_speed: derived.initial_speed,
        final_avg_energy_proxy: last,
        mean_avg_energy_proxy: if frames > 0 { sum / frames as f64 } else { last },
    })
}

/// Independent runs over a temperature range, executed in parallel. Each run
/// steps its own world on one thread.
#[allow(clippy::too_many_arguments)]
pub fn sweep(config: &SimulationConfig,
             volume: f64,
             pressure: f64,
             t_min: f64,
             t_max: f64,
             t_step: f64,
             frames: u64,
             seed: Option<u64>,
             out_file: Option<&Path>) -> Result<Vec<SweepRow>> {
    let temperatures = sweep_temperatures(t_min, t_max, t_step)?;
    info!("Sweeping {} temperatures, {} frames each", temperatures.len(), frames);
    let rows: Result<Vec<SweepRow>> = temperatures
        .par_iter()
        .enumerate()
        .map(|(k, &temperature)| {
            let params = RunParameters::new(volume, temperature, pressure);
            sweep_run(config, &params, frames, seed.map(|s| s.wrapping_add(k as u64)))
        })
        .collect();
    let rows = rows?;
    match out_file {
        Some(path) => {
            let mut writer = csv::Writer::from_path(path)?;
            for row in &rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
            info!("Sweep saved to {}", path.to_string_lossy());
        }
        None => {
            for row in &rows {
                println!("T = {:.1} K: {} molecules, average kinetic energy {:.2}",
                         row.temperature, row.molecules, row.final_avg_energy_proxy);
            }
        }
    }
    Ok(rows)
}

pub fn write_default_config(out_file: &Path) -> Result<()> {
    SimulationConfig::default().save_to_file(out_file)?;
    info!("Default config written to {}", out_file.to_string_lossy());
    Ok(())
}
