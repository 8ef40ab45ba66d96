use rand::Rng;
use rand_distr::{Bernoulli as Coin, Distribution};

use super::{Perturbation, PerturbationErr, Result};

/// The symmetric Bernoulli `±r` distribution, `+r` and `-r` with equal probability.
///
/// It's the asymptotically optimal perturbation for SPSA and the default one used by
/// [`optimize`](crate::optimize).
#[derive(Debug, Clone, Copy)]
pub struct Bernoulli {
    r: f64,
    coin: Coin,
}

impl Bernoulli {
    /// Creates a new `Bernoulli` perturbation distribution.
    ///
    /// # Arguments
    /// * `r` - The magnitude of every sample.
    ///
    /// # Returns
    /// An error if `r` is not positive and finite.
    pub fn new(r: f64) -> Result<Self> {
        if !(r.is_finite() && r > 0.) {
            return Err(PerturbationErr::new(format!(
                "bernoulli magnitude must be positive and finite, got {r}"
            )));
        }

        Ok(Self {
            r,
            coin: Coin::new(0.5)?,
        })
    }

    /// The magnitude of every sample.
    pub fn magnitude(&self) -> f64 {
        self.r
    }
}

impl Distribution<f64> for Bernoulli {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.coin.sample(rng) { self.r } else { -self.r }
    }
}

impl Perturbation for Bernoulli {}
