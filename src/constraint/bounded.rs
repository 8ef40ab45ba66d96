use serde::{Deserialize, Serialize};

use super::Constraint;
use crate::vector::{Result, SizeMismatchErr, Vector};

/// The inclusive bounds of a single parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub lower: f64,
    pub upper: f64,
}

impl Bounds {
    /// Creates new `Bounds`.
    ///
    /// # Arguments
    /// * `lower` - The inclusive lower bound.
    /// * `upper` - The inclusive upper bound.
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Clamps `value` into `[lower, upper]`, a `NaN` stays `NaN`.
    fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return value;
        }

        value.max(self.lower).min(self.upper)
    }
}

impl From<(f64, f64)> for Bounds {
    fn from((lower, upper): (f64, f64)) -> Self {
        Self::new(lower, upper)
    }
}

/// Box constraints, each coordinate is clamped into its own bounds independently.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoundedConstraints {
    bounds: Vec<Bounds>,
}

impl BoundedConstraints {
    /// Creates a new `BoundedConstraints` projection.
    ///
    /// # Arguments
    /// * `bounds` - One pair of bounds per parameter.
    pub fn new(bounds: Vec<Bounds>) -> Self {
        Self { bounds }
    }

    /// The amount of parameters this projection expects.
    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    /// Whether there are no bounds at all.
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }
}

impl FromIterator<Bounds> for BoundedConstraints {
    fn from_iter<I: IntoIterator<Item = Bounds>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Constraint for BoundedConstraints {
    fn constrain(&self, theta: Vector) -> Result<Vector> {
        SizeMismatchErr::check(self.bounds.len(), theta.len())?;

        Ok(theta
            .iter()
            .zip(&self.bounds)
            .map(|(&t, b)| b.clamp(t))
            .collect())
    }
}
