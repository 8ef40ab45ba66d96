use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    constraint::BoundedConstraints,
    gain::StandardGain,
    optimization::{Optimizer, Result, Spsa},
    perturbation::{Bernoulli, Perturbation, SegmentedUniform},
    specs::{ConstraintSpec, GainSpec, PerturbationSpec, SpsaSpec},
    vector::{SizeMismatchErr, Vector},
};

/// Resolves the concrete perturbation distribution of `$spec` and hands it to `$callback`.
///
/// `Spsa` is generic over its distribution, so the callback is expanded once per variant
/// instead of boxing the distribution.
///
/// # Arguments
/// * `spec` - A specification for a perturbation distribution.
/// * `callback` - The closure to call passing in the created distribution.
macro_rules! with_perturbation {
    ($spec:expr, $callback:expr) => {
        match $spec {
            PerturbationSpec::Bernoulli { r } => {
                let delta = Bernoulli::new(r)?;
                ($callback)(delta)
            }
            PerturbationSpec::SegmentedUniform { low, high } => {
                let delta = SegmentedUniform::new(low, high)?;
                ($callback)(delta)
            }
        }
    };
}

/// Builds `Optimizer`s given a specification.
#[derive(Debug, Default)]
pub struct SpsaBuilder;

impl SpsaBuilder {
    /// Creates a new `SpsaBuilder`.
    ///
    /// # Returns
    /// A new `SpsaBuilder` instance.
    pub fn new() -> Self {
        Self
    }

    /// Builds a new idle `Optimizer` following a spec.
    ///
    /// # Arguments
    /// * `spec` - The specification of the run.
    ///
    /// # Returns
    /// A new optimizer or an `SpsaErr` if the specification has invalid gain, perturbation
    /// or constraint values.
    pub fn build(&self, spec: SpsaSpec) -> Result<Box<dyn Optimizer>> {
        let SpsaSpec {
            theta0,
            loss,
            ak,
            ck,
            perturbation,
            constraint,
            parallel,
            seed,
            ..
        } = spec;

        let ak = self.resolve_gain(ak)?;
        let ck = self.resolve_gain(ck)?;
        let rng = self.generate_rng(seed);
        let loss = loss.loss();

        with_perturbation!(perturbation, |delta| -> Result<Box<dyn Optimizer>> {
            let spsa = Spsa::new(theta0, loss, ak, ck, delta, rng)
                .with_parallel_evaluation(parallel);
            let spsa = self.resolve_constraint(spsa, constraint)?;
            Ok(Box::new(spsa) as Box<dyn Optimizer>)
        })
    }

    /// Generates a random number generator given (or not) a seed.
    ///
    /// # Arguments
    /// * `seed` - An optional seed for the rng.
    ///
    /// # Returns
    /// A seeded rng, or one seeded from the OS when there's no seed.
    fn generate_rng(&self, seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Resolves a `StandardGain` sequence.
    fn resolve_gain(&self, spec: GainSpec) -> Result<StandardGain> {
        let gain = match spec {
            GainSpec::Ak { a, big_a, alpha } => StandardGain::ak(a, big_a, alpha)?,
            GainSpec::Ck { c, gamma } => StandardGain::ck(c, gamma)?,
            GainSpec::Standard {
                scale,
                offset,
                exponent,
            } => StandardGain::new(scale, offset, exponent)?,
        };

        Ok(gain)
    }

    /// Resolves the constraint of the optimizer, checking the bounds against its dimension.
    ///
    /// # Arguments
    /// * `spsa` - The optimizer to constrain.
    /// * `spec` - The specification of the constraint.
    ///
    /// # Returns
    /// The constrained optimizer or a `SizeMismatchErr` if there isn't exactly one pair of
    /// bounds per parameter.
    fn resolve_constraint<L, D, R>(
        &self,
        spsa: Spsa<L, D, R>,
        spec: ConstraintSpec,
    ) -> Result<Spsa<L, D, R>>
    where
        L: Fn(&Vector) -> f64 + Sync,
        D: Perturbation,
        R: Rng,
    {
        match spec {
            ConstraintSpec::Unconstrained => Ok(spsa),
            ConstraintSpec::Bounded { bounds } => {
                SizeMismatchErr::check(spsa.theta().len(), bounds.len())?;
                Ok(spsa.with_constraint(BoundedConstraints::new(bounds)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        constraint::Bounds,
        optimization::{Phase, SpsaErr},
        specs::LossSpec,
    };

    fn spec() -> SpsaSpec {
        SpsaSpec {
            theta0: Vector::from([1.; 5]),
            loss: LossSpec::AbsoluteSum,
            rounds: 200,
            ak: GainSpec::Ak {
                a: 1.,
                big_a: 20.,
                alpha: 0.602,
            },
            ck: GainSpec::Ck {
                c: 0.1,
                gamma: 0.101,
            },
            perturbation: PerturbationSpec::Bernoulli { r: 1. },
            constraint: ConstraintSpec::Unconstrained,
            parallel: false,
            seed: Some(42),
        }
    }

    #[test]
    fn build_idle() {
        let optimizer = SpsaBuilder::new().build(spec()).unwrap();

        assert_eq!(optimizer.rounds(), 0);
        assert_eq!(optimizer.theta(), &Vector::from([1.; 5]));
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let builder = SpsaBuilder::new();

        let mut a = builder.build(spec()).unwrap();
        let mut b = builder.build(spec()).unwrap();

        assert_eq!(a.run(50).unwrap(), b.run(50).unwrap());
    }

    #[test]
    fn segmented_uniform_parallel() {
        let spec = SpsaSpec {
            perturbation: PerturbationSpec::SegmentedUniform {
                low: 0.5,
                high: 1.5,
            },
            parallel: true,
            ..spec()
        };

        let mut optimizer = SpsaBuilder::new().build(spec).unwrap();
        optimizer.run(200).unwrap();

        assert_eq!(optimizer.rounds(), 200);
        assert!(optimizer.theta().mean_square() < 1.);
    }

    #[test]
    fn bounded_constraint() {
        let spec = SpsaSpec {
            constraint: ConstraintSpec::Bounded {
                bounds: vec![Bounds::new(0.25, 2.); 5],
            },
            ..spec()
        };

        let mut optimizer = SpsaBuilder::new().build(spec).unwrap();
        let theta = optimizer.run(200).unwrap();

        assert!(theta.iter().all(|t| (0.25..=2.).contains(t)));
    }

    #[test]
    fn bounds_size_mismatch() {
        let spec = SpsaSpec {
            constraint: ConstraintSpec::Bounded {
                bounds: vec![Bounds::new(0., 1.); 3],
            },
            ..spec()
        };

        let err = SpsaBuilder::new().build(spec).err().unwrap();
        assert_eq!(err, SpsaErr::SizeMismatch(SizeMismatchErr { expected: 5, got: 3 }));
    }

    #[test]
    fn invalid_gain() {
        let spec = SpsaSpec {
            ck: GainSpec::Ck { c: -1., gamma: 0.1 },
            ..spec()
        };

        let err = SpsaBuilder::new().build(spec).err().unwrap();
        assert!(matches!(err, SpsaErr::Gain(_)));
    }

    #[test]
    fn invalid_perturbation() {
        let spec = SpsaSpec {
            perturbation: PerturbationSpec::SegmentedUniform { low: 2., high: 1. },
            ..spec()
        };

        let err = SpsaBuilder::new().build(spec).err().unwrap();
        assert!(matches!(err, SpsaErr::Perturbation(_)));
    }

    #[test]
    fn seeded_rng_builds_idle_optimizer() {
        let spsa = Spsa::new(
            Vector::from([1.]),
            crate::losses::absolute_sum,
            StandardGain::ck(1., 0.5).unwrap(),
            StandardGain::ck(1., 0.5).unwrap(),
            Bernoulli::new(1.).unwrap(),
            SpsaBuilder::new().generate_rng(Some(1)),
        );

        assert_eq!(spsa.phase(), Phase::Idle);
    }
}
