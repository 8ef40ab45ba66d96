use rand::Rng;
use rand_distr::{Distribution, Uniform};

use super::{Perturbation, PerturbationErr, Result};

/// The segmented (mirrored) uniform distribution over `[a, b] ∪ [-b, -a]` with `0 < a < b`.
///
/// Keeping the samples away from zero satisfies the same bounded inverse moment condition as
/// the Bernoulli distribution.
#[derive(Debug, Clone, Copy)]
pub struct SegmentedUniform {
    magnitude: Uniform<f64>,
}

impl SegmentedUniform {
    /// Creates a new `SegmentedUniform` perturbation distribution.
    ///
    /// # Arguments
    /// * `low` - The inclusive lower limit `a` of the magnitude.
    /// * `high` - The inclusive upper limit `b` of the magnitude.
    ///
    /// # Returns
    /// An error unless `0 < low < high` and both are finite.
    pub fn new(low: f64, high: f64) -> Result<Self> {
        if !(low > 0. && low < high) {
            return Err(PerturbationErr::new(format!(
                "segmented uniform requires 0 < low < high, got [{low}, {high}]"
            )));
        }

        Ok(Self {
            magnitude: Uniform::new_inclusive(low, high)?,
        })
    }
}

impl Distribution<f64> for SegmentedUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let magnitude = self.magnitude.sample(rng);
        if rng.random_bool(0.5) { magnitude } else { -magnitude }
    }
}

impl Perturbation for SegmentedUniform {}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn samples_stay_in_both_segments() {
        let mut rng = StdRng::seed_from_u64(42);
        let dist = SegmentedUniform::new(0.5, 1.5).unwrap();

        let samples: Vec<f64> = (0..1000).map(|_| dist.sample(&mut rng)).collect();

        assert!(samples.iter().all(|s| (0.5..=1.5).contains(&s.abs())));
        assert!(samples.iter().any(|&s| s > 0.));
        assert!(samples.iter().any(|&s| s < 0.));
    }

    #[test]
    fn invalid_range() {
        assert!(SegmentedUniform::new(0., 1.).is_err());
        assert!(SegmentedUniform::new(1., 1.).is_err());
        assert!(SegmentedUniform::new(2., 1.).is_err());
        assert!(SegmentedUniform::new(1., f64::INFINITY).is_err());
    }
}
