mod bernoulli;
mod error;
mod perturbation;
mod segmented_uniform;

pub use bernoulli::Bernoulli;
pub use error::{PerturbationErr, Result};
pub use perturbation::{Perturbation, sample_n};
pub use segmented_uniform::SegmentedUniform;
