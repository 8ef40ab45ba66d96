use std::iter::Peekable;

use log::{debug, warn};
use rand::{Rng, rngs::StdRng};

use super::{Optimizer, Result, SpsaErr};
use crate::{
    constraint::{Constraint, Unconstrained},
    gain::GainSequence,
    perturbation::{Perturbation, sample_n},
    vector::Vector,
};

/// Whether the optimizer has already run any round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
}

/// Simultaneous Perturbation Stochastic Approximation.
///
/// Every round perturbs all the parameters at once and estimates the whole gradient from
/// just two loss evaluations, no matter the dimension:
///
/// ```text
/// ck    <- next(Ck)
/// ak    <- next(Ak)
/// delta <- ck * sample_n(n, Delta)
/// g[i]  <- (L(theta + delta) - L(theta - delta)) / (2 * delta[i])
/// theta <- C(theta - ak * g)
/// ```
///
/// Loss values are used as is: a `NaN` or infinite loss propagates into `theta`.
///
/// Gain values are only consumed by rounds that commit, so a failed round can be retried
/// with the same `ak` and `ck`.
pub struct Spsa<L, D, R = StdRng> {
    theta: Vector,
    loss: L,
    ak: Peekable<GainSequence>,
    ck: Peekable<GainSequence>,
    delta: D,
    rng: R,
    constraint: Box<dyn Constraint + Send>,
    rounds: usize,
    parallel: bool,
}

impl<L, D, R> Spsa<L, D, R>
where
    L: Fn(&Vector) -> f64 + Sync,
    D: Perturbation,
    R: Rng,
{
    /// Creates a new unconstrained `Spsa` optimizer.
    ///
    /// # Arguments
    /// * `theta0` - The starting point, its length fixes the dimension for the whole run.
    /// * `loss` - The function to minimize, it must be defined outside the feasible region too.
    /// * `ak` - The gain sequence scaling the parameter update.
    /// * `ck` - The gain sequence scaling the perturbation.
    /// * `delta` - The perturbation distribution.
    /// * `rng` - The random source the perturbations are drawn from.
    ///
    /// # Returns
    /// A new idle `Spsa` instance.
    pub fn new<A, C>(theta0: Vector, loss: L, ak: A, ck: C, delta: D, rng: R) -> Self
    where
        A: Iterator<Item = f64> + Send + 'static,
        C: Iterator<Item = f64> + Send + 'static,
    {
        Self {
            theta: theta0,
            loss,
            ak: (Box::new(ak) as GainSequence).peekable(),
            ck: (Box::new(ck) as GainSequence).peekable(),
            delta,
            rng,
            constraint: Box::new(Unconstrained),
            rounds: 0,
            parallel: false,
        }
    }

    /// Sets the projection applied after every update.
    pub fn with_constraint<C>(mut self, constraint: C) -> Self
    where
        C: Constraint + Send + 'static,
    {
        self.constraint = Box::new(constraint);
        self
    }

    /// Evaluates the two perturbed losses of every round concurrently.
    pub fn with_parallel_evaluation(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Consumes the optimizer and returns the current parameters.
    pub fn into_theta(self) -> Vector {
        self.theta
    }

    /// Whether any round has been committed yet.
    pub fn phase(&self) -> Phase {
        match self.rounds {
            0 => Phase::Idle,
            _ => Phase::Running,
        }
    }

    /// Peeks the next value of a gain sequence, rejecting anything that isn't a positive number.
    fn peek_gain(
        sequence: &mut Peekable<GainSequence>,
        name: &'static str,
        round: usize,
    ) -> Result<f64> {
        let value = sequence.peek().copied().ok_or(SpsaErr::GainExhausted {
            sequence: name,
            round,
        })?;

        if !(value.is_finite() && value > 0.) {
            return Err(SpsaErr::InvalidGain {
                sequence: name,
                round,
                value,
            });
        }

        Ok(value)
    }

    /// Draws the scaled perturbation vector for this round.
    fn perturbation(&mut self, ck: f64, round: usize) -> Result<Vector> {
        let delta = sample_n(self.theta.len(), &self.delta, &mut self.rng).scale(ck);

        let degenerate = delta
            .iter()
            .enumerate()
            .find(|(_, d)| **d == 0. || !d.is_finite());

        if let Some((index, &value)) = degenerate {
            return Err(SpsaErr::DegeneratePerturbation {
                round,
                index,
                value,
            });
        }

        Ok(delta)
    }

    /// Evaluates the loss at both perturbed points, always twice and never cached.
    fn evaluate(&self, pos: &Vector, neg: &Vector) -> (f64, f64) {
        let loss = &self.loss;

        if self.parallel {
            rayon::join(|| loss(pos), || loss(neg))
        } else {
            (loss(pos), loss(neg))
        }
    }

    /// Estimates the gradient at the current parameters from a single perturbation.
    fn estimate_gradient(&mut self, ck: f64, round: usize) -> Result<Vector> {
        let delta = self.perturbation(ck, round)?;

        let pos = self.theta.add(&delta)?;
        let neg = self.theta.subtract(&delta)?;
        let (f_pos, f_neg) = self.evaluate(&pos, &neg);

        if !(f_pos.is_finite() && f_neg.is_finite()) {
            warn!(round = round, f_pos = f_pos, f_neg = f_neg; "non finite loss value");
        }

        debug!(round = round, ck = ck, f_pos = f_pos, f_neg = f_neg; "evaluated perturbation");

        let diff = f_pos - f_neg;
        Ok(delta.iter().map(|d| diff / (2. * d)).collect())
    }
}

impl<L, D, R> Optimizer for Spsa<L, D, R>
where
    L: Fn(&Vector) -> f64 + Sync,
    D: Perturbation,
    R: Rng,
{
    fn round(&mut self) -> Result<()> {
        let round = self.rounds + 1;

        let ck = Self::peek_gain(&mut self.ck, "ck", round)?;
        let ak = Self::peek_gain(&mut self.ak, "ak", round)?;

        let grad = self.estimate_gradient(ck, round)?;
        let theta = self.theta.subtract(&grad.scale(ak))?;
        self.theta = self.constraint.constrain(theta)?;
        self.ck.next();
        self.ak.next();
        self.rounds = round;

        debug!(round = round, ak = ak; "updated theta");
        Ok(())
    }

    fn theta(&self) -> &Vector {
        &self.theta
    }

    fn rounds(&self) -> usize {
        self.rounds
    }
}
