//! Test functions with a known minimum, used to check that the optimizer converges.

use crate::vector::Vector;

/// `sum(|x_i|)`, minimized at the origin.
pub fn absolute_sum(theta: &Vector) -> f64 {
    theta.iter().map(|t| t.abs()).sum()
}

/// The paired Rosenbrock function `sum(100 (x_{2i}^2 - x_{2i+1})^2 + (x_{2i} - 1)^2)`,
/// minimized at `[1, 1, ..., 1]`.
///
/// Coordinates are taken in consecutive pairs, a trailing unpaired coordinate is ignored.
pub fn rosenbrock(theta: &Vector) -> f64 {
    theta
        .chunks_exact(2)
        .map(|pair| 100. * (pair[0].powi(2) - pair[1]).powi(2) + (pair[0] - 1.).powi(2))
        .sum()
}
