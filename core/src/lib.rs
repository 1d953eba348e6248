mod color;
mod config;
mod error;
mod frame;
mod molecule;
mod parameters;
mod save_data;
mod stats;
mod world;
extern crate nalgebra as na;
extern crate serde;

pub use color::{color_for, speed_ratio, Rgb};
pub use config::*;
pub use error::{Error, Result};
pub use frame::{CircleSprite, Frame};
pub use molecule::{Contact, Molecule};
pub use parameters::*;
pub use save_data::{save_energy_series, Recording};
pub use stats::FrameStats;
pub use world::{Phase, World};
