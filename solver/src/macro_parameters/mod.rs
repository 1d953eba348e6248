mod energy;
mod speed;

pub use energy::*;
pub use speed::*;
