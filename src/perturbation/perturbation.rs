use rand::Rng;
use rand_distr::Distribution;

use crate::vector::Vector;

/// A distribution usable to simultaneously perturb every coordinate of the parameters.
///
/// Implementors must guarantee that `E[1 / |X|]` is bounded, which rules out the normal and
/// the plain uniform distributions (both put density around zero). The asymptotically
/// optimal choice is the symmetric Bernoulli `±1`.
///
/// The condition can't be checked generically, so it's a precondition of the trait; the
/// optimizer only rejects the degenerate case of an exact zero (or non finite) sample.
pub trait Perturbation: Distribution<f64> {}

/// Draws `n` independent samples from `distribution` into a new `Vector`.
///
/// # Arguments
/// * `n` - The amount of samples, one per parameter.
/// * `distribution` - The perturbation distribution.
/// * `rng` - The random source to draw from.
///
/// # Returns
/// A `Vector` of length `n`.
pub fn sample_n<D, R>(n: usize, distribution: &D, rng: &mut R) -> Vector
where
    D: Perturbation,
    R: Rng + ?Sized,
{
    (0..n).map(|_| distribution.sample(&mut *rng)).collect()
}
