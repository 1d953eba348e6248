mod pairs;
mod solver;

pub use pairs::*;
pub use solver::*;
