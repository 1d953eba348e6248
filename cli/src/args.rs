use std::path::PathBuf;
use clap::{Parser, Subcommand};
use clap::ValueEnum;
use gasviz_solver::solver::PairEnumeration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// json file with simulation config, defaults are used without it
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,
    /// write json output human readable
    #[arg(long, default_value_t = false)]
    pub pretty_print: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PairMethod {
    /// check every pair of molecules
    AllPairs,
    /// check only molecules in neighbouring grid cells
    UniformGrid,
}

impl From<PairMethod> for PairEnumeration {
    fn from(method: PairMethod) -> Self {
        match method {
            PairMethod::AllPairs => PairEnumeration::AllPairs,
            PairMethod::UniformGrid => PairEnumeration::UniformGrid,
        }
    }
}

/// Gas parameters as typed by the user. Parsed by the core so bad text is
/// reported instead of rejected by the argument parser.
#[derive(clap::Args, Clone)]
pub struct GasInput {
    /// volume in liters
    #[arg(short = 'L', long, allow_hyphen_values = true)]
    pub volume: String,
    /// temperature in Kelvin
    #[arg(short = 'T', long, allow_hyphen_values = true)]
    pub temperature: String,
    /// pressure in atmospheres
    #[arg(short = 'P', long, allow_hyphen_values = true)]
    pub pressure: String,
    /// clamp values into the slider ranges (10..100 L, 100..1000 K, 0.5..5 atm by 0.1)
    #[arg(long, default_value_t = false)]
    pub sliders: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// run a simulation for a number of frames
    Run {
        #[command(flatten)]
        input: GasInput,
        /// number of frames to step
        #[arg(short = 'n', long, default_value_t = 500)]
        frames: u64,
        /// seed for positions and headings
        #[arg(short = 's', long)]
        seed: Option<u64>,
        /// keep the configured tick interval between frames
        #[arg(long, default_value_t = false)]
        realtime: bool,
        /// print the average energy of every frame
        #[arg(short = 'v', long, default_value_t = false)]
        verbose: bool,
        /// file for recorded frames
        #[arg(short = 'o', long)]
        record: Option<PathBuf>,
        /// csv file for per-frame statistics
        #[arg(short = 'e', long)]
        energy_csv: Option<PathBuf>,
        /// how collision candidates are found
        #[arg(short = 'p', long, value_enum, default_value_t = PairMethod::AllPairs)]
        pairs: PairMethod,
    },
    /// print molecule count and initial speed for the given gas
    Derive {
        #[command(flatten)]
        input: GasInput,
    },
    /// run independent simulations over a temperature range
    Sweep {
        /// volume in liters
        #[arg(short = 'L', long)]
        volume: f64,
        /// pressure in atmospheres
        #[arg(short = 'P', long)]
        pressure: f64,
        /// lowest temperature in Kelvin
        #[arg(long, default_value_t = 100.0)]
        t_min: f64,
        /// highest temperature in Kelvin
        #[arg(long, default_value_t = 1000.0)]
        t_max: f64,
        /// temperature step in Kelvin
        #[arg(long, default_value_t = 100.0)]
        t_step: f64,
        /// frames per run
        #[arg(short = 'n', long, default_value_t = 500)]
        frames: u64,
        /// base seed, run k uses seed + k
        #[arg(short = 's', long)]
        seed: Option<u64>,
        /// csv file for results
        #[arg(short = 'o', long)]
        out_file: Option<PathBuf>,
    },
    /// write default config to file
    Config {
        /// file for output
        #[arg(short = 'o', long)]
        out_file: PathBuf,
    },
}
