use std::{
    error::Error,
    fmt::{self, Display},
};

/// The specific result type for the gain sequence constructors.
pub type Result<T> = std::result::Result<T, GainErr>;

/// Error returned by the `StandardGain` constructors whenever a parameter would make the
/// sequence non-positive or non-decreasing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GainErr {
    pub param: &'static str,
    pub value: f64,
}

impl Display for GainErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid gain sequence parameter {}: {}",
            self.param, self.value
        )
    }
}

impl Error for GainErr {}
