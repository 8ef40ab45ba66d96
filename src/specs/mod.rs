mod spsa;

pub use spsa::{ConstraintSpec, GainSpec, LossSpec, PerturbationSpec, SpsaSpec};
