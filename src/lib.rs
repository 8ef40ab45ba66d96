//! Simultaneous Perturbation Stochastic Approximation.
//!
//! SPSA minimizes a loss `L: R^n -> R` without its gradient, using only two evaluations of
//! `L` per round regardless of `n`. The notation follows Spall's *Introduction to Stochastic
//! Search and Optimization* (Wiley, 2003).
//!
//! The quickest way in is [`optimize`], which wires the standard gain sequences and the
//! Bernoulli `±1` perturbation. [`Spsa`] exposes every knob, and [`SpsaBuilder`] resolves a
//! serializable [`SpsaSpec`] into a ready to run optimizer.

mod builder;
pub mod constraint;
pub mod gain;
pub mod losses;
pub mod optimization;
pub mod perturbation;
pub mod specs;
pub mod vector;

use rand::{SeedableRng, rngs::StdRng};

pub use builder::SpsaBuilder;
pub use constraint::{BoundedConstraints, Bounds, Constraint, Unconstrained};
pub use gain::{GainErr, GainSequence, StandardGain};
pub use optimization::{Optimizer, Phase, Result, Spsa, SpsaErr};
pub use perturbation::{Bernoulli, Perturbation, PerturbationErr, SegmentedUniform, sample_n};
pub use specs::SpsaSpec;
pub use vector::{SizeMismatchErr, Vector};

/// `alpha` recommended for finite runs.
pub const DEFAULT_ALPHA: f64 = 0.602;
/// `gamma` recommended for finite runs.
pub const DEFAULT_GAMMA: f64 = 0.101;

/// Minimizes `loss` with mostly default options.
///
/// Uses `a_k = a / (k + rounds / 10 + 1) ^ 0.602`, `c_k = c / (k + 1) ^ 0.101`, the
/// Bernoulli `±1` perturbation, no constraints and a random source seeded by the OS.
///
/// # Arguments
/// * `loss` - The function to minimize.
/// * `theta0` - The starting point.
/// * `rounds` - The amount of rounds to run.
/// * `a` - The initial step size.
/// * `c` - The initial perturbation size.
///
/// # Returns
/// The optimized parameters or an error if `a` or `c` are not positive.
pub fn optimize<L>(loss: L, theta0: Vector, rounds: usize, a: f64, c: f64) -> Result<Vector>
where
    L: Fn(&Vector) -> f64 + Sync,
{
    optimize_with(
        loss,
        theta0,
        rounds,
        a,
        c,
        Unconstrained,
        StdRng::from_os_rng(),
    )
}

/// Same as [`optimize`] with an explicit constraint and random source.
///
/// # Arguments
/// * `loss` - The function to minimize.
/// * `theta0` - The starting point.
/// * `rounds` - The amount of rounds to run.
/// * `a` - The initial step size.
/// * `c` - The initial perturbation size.
/// * `constraint` - The projection applied after every update.
/// * `rng` - The random source the perturbations are drawn from.
///
/// # Returns
/// The optimized parameters or the first error encountered.
pub fn optimize_with<L, C>(
    loss: L,
    theta0: Vector,
    rounds: usize,
    a: f64,
    c: f64,
    constraint: C,
    rng: StdRng,
) -> Result<Vector>
where
    L: Fn(&Vector) -> f64 + Sync,
    C: Constraint + Send + 'static,
{
    let big_a = (rounds / 10) as f64;
    let ak = StandardGain::ak(a, big_a, DEFAULT_ALPHA)?;
    let ck = StandardGain::ck(c, DEFAULT_GAMMA)?;
    let delta = Bernoulli::new(1.)?;

    let mut spsa = Spsa::new(theta0, loss, ak, ck, delta, rng).with_constraint(constraint);
    spsa.run(rounds)?;

    Ok(spsa.into_theta())
}
