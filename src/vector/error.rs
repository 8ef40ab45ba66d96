use std::{
    error::Error,
    fmt::{self, Display},
};

/// The specific result type for length checks between vectors.
pub type Result<T> = std::result::Result<T, SizeMismatchErr>;

/// Error returned whenever two vectors (or a vector and a set of per-coordinate bounds)
/// that must share a length don't.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeMismatchErr {
    pub expected: usize,
    pub got: usize,
}

impl SizeMismatchErr {
    /// Checks that `got` equals `expected`.
    ///
    /// # Arguments
    /// * `expected` - The required length.
    /// * `got` - The length of the other operand.
    ///
    /// # Returns
    /// An error if both lengths differ.
    pub fn check(expected: usize, got: usize) -> Result<()> {
        if expected != got {
            return Err(Self { expected, got });
        }

        Ok(())
    }
}

impl Display for SizeMismatchErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "vector length mismatch: expected {}, got {}",
            self.expected, self.got
        )
    }
}

impl Error for SizeMismatchErr {}
