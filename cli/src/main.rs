use std::process;
use clap::Parser;
use log::error;
use gasviz_core::Result;
use crate::args::*;
use crate::commands::{derive, load_config, run, sweep, write_default_config, RunOptions};

mod args;
mod clock;
mod commands;


fn execute(args: &Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    match &args.command {
        Commands::Run {
            input,
            frames,
            seed,
            realtime,
            verbose,
            record,
            energy_csv,
            pairs,
        } => {
            let options = RunOptions {
                frames: *frames,
                seed: *seed,
                realtime: *realtime,
                verbose: *verbose,
                record: record.clone(),
                energy_csv: energy_csv.clone(),
                pairs: (*pairs).into(),
                pretty_print: args.pretty_print,
            };
            run(&config, input, &options)?;
        }
        Commands::Derive { input } => {
            derive(&config, input)?;
        }
        Commands::Sweep {
            volume,
            pressure,
            t_min,
            t_max,
            t_step,
            frames,
            seed,
            out_file,
        } => {
            sweep(&config, *volume, *pressure, *t_min, *t_max, *t_step,
                  *frames, *seed, out_file.as_deref())?;
        }
        Commands::Config { out_file } => {
            write_default_config(out_file)?;
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = execute(&args) {
        error!("{}", e);
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
