mod error;
mod optimizer;
mod spsa;

pub use error::{Result, SpsaErr};
pub use optimizer::Optimizer;
pub use spsa::{Phase, Spsa};
