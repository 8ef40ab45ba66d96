use std::{
    fmt::{self, Display},
    ops::{Deref, Index},
};

use serde::{Deserialize, Serialize};

use super::{Result, SizeMismatchErr};

/// A point in parameter space (or a gradient estimate).
///
/// Every arithmetic operation is out of place: it returns a new `Vector` and leaves
/// its operands untouched, so the optimizer can keep the pre-update parameters around
/// while it evaluates perturbed copies of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector(Vec<f64>);

impl Vector {
    /// Creates a new `Vector` of `len` zeros.
    pub fn zeros(len: usize) -> Self {
        Self(vec![0.; len])
    }

    /// Returns the underlying values.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Consumes the vector and returns its values.
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }

    /// Multiplies every element by `s`.
    ///
    /// # Arguments
    /// * `s` - The scalar factor.
    ///
    /// # Returns
    /// A new scaled `Vector`.
    pub fn scale(&self, s: f64) -> Self {
        self.0.iter().map(|v| v * s).collect()
    }

    /// Adds `other` to `self` elementwise.
    ///
    /// # Arguments
    /// * `other` - The right hand side operand.
    ///
    /// # Returns
    /// A new `Vector` or a `SizeMismatchErr` if the lengths differ.
    pub fn add(&self, other: &Vector) -> Result<Self> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Subtracts `other` from `self` elementwise.
    ///
    /// # Arguments
    /// * `other` - The right hand side operand.
    ///
    /// # Returns
    /// A new `Vector` or a `SizeMismatchErr` if the lengths differ.
    pub fn subtract(&self, other: &Vector) -> Result<Self> {
        self.zip_with(other, |a, b| a - b)
    }

    fn zip_with<F>(&self, other: &Vector, f: F) -> Result<Self>
    where
        F: Fn(f64, f64) -> f64,
    {
        SizeMismatchErr::check(self.len(), other.len())?;
        Ok(self.0.iter().zip(&other.0).map(|(&a, &b)| f(a, b)).collect())
    }
}

impl Deref for Vector {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<Vec<f64>> for Vector {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl From<&[f64]> for Vector {
    fn from(values: &[f64]) -> Self {
        Self(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(values: [f64; N]) -> Self {
        Self(values.to_vec())
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Two decimals per element, comma separated and bracketed, e.g. `[1.00,2.10,3.00]`.
impl Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;

        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{v:.2}")?;
        }

        f.write_str("]")
    }
}
