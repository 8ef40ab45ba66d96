use std::{error::Error, fmt};

use crate::{gain::GainErr, perturbation::PerturbationErr, vector::SizeMismatchErr};

/// The optimization module's result type.
pub type Result<T> = std::result::Result<T, SpsaErr>;

/// Failures while building or running an optimizer.
#[derive(Debug, Clone, PartialEq)]
pub enum SpsaErr {
    SizeMismatch(SizeMismatchErr),
    Gain(GainErr),
    Perturbation(PerturbationErr),
    GainExhausted {
        sequence: &'static str,
        round: usize,
    },
    InvalidGain {
        sequence: &'static str,
        round: usize,
        value: f64,
    },
    DegeneratePerturbation {
        round: usize,
        index: usize,
        value: f64,
    },
}

impl fmt::Display for SpsaErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpsaErr::SizeMismatch(e) => write!(f, "{e}"),
            SpsaErr::Gain(e) => write!(f, "{e}"),
            SpsaErr::Perturbation(e) => write!(f, "invalid perturbation distribution: {e}"),
            SpsaErr::GainExhausted { sequence, round } => {
                write!(f, "gain sequence {sequence} exhausted at round {round}")
            }
            SpsaErr::InvalidGain {
                sequence,
                round,
                value,
            } => write!(
                f,
                "gain sequence {sequence} produced non positive value {value} at round {round}"
            ),
            SpsaErr::DegeneratePerturbation {
                round,
                index,
                value,
            } => write!(
                f,
                "perturbation component {index} is {value} at round {round}, the gradient estimate is undefined"
            ),
        }
    }
}

impl Error for SpsaErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SpsaErr::SizeMismatch(e) => Some(e),
            SpsaErr::Gain(e) => Some(e),
            SpsaErr::Perturbation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SizeMismatchErr> for SpsaErr {
    fn from(value: SizeMismatchErr) -> Self {
        Self::SizeMismatch(value)
    }
}

impl From<GainErr> for SpsaErr {
    fn from(value: GainErr) -> Self {
        Self::Gain(value)
    }
}

impl From<PerturbationErr> for SpsaErr {
    fn from(value: PerturbationErr) -> Self {
        Self::Perturbation(value)
    }
}
