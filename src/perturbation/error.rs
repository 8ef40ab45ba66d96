use std::{
    error::Error,
    fmt::{self, Display},
};

use rand_distr::{BernoulliError, uniform::Error as UniformError};

/// The specific result type for the perturbation distribution constructors.
pub type Result<T> = std::result::Result<T, PerturbationErr>;

/// Error returned by the perturbation distribution constructors whenever the requested
/// distribution could put mass at (or arbitrarily close to) zero, or can't be built at all.
#[derive(Debug, Clone, PartialEq)]
pub struct PerturbationErr(String);

impl PerturbationErr {
    pub(super) fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

impl From<BernoulliError> for PerturbationErr {
    fn from(value: BernoulliError) -> Self {
        Self(value.to_string())
    }
}

impl From<UniformError> for PerturbationErr {
    fn from(value: UniformError) -> Self {
        Self(value.to_string())
    }
}

impl Display for PerturbationErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Error for PerturbationErr {}
