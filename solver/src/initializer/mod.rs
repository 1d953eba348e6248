mod derive;
mod population;
mod position;
mod velocity;

pub use derive::*;
pub use population::*;
pub use position::*;
pub use velocity::*;
