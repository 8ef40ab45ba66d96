use log::info;

use super::Result;
use crate::vector::Vector;

/// A stochastic approximation optimizer driven one round at a time.
///
/// Rounds are strictly sequential: round `k + 1` only reads what round `k` committed.
pub trait Optimizer {
    /// Runs a single round, updating the current parameters.
    ///
    /// # Returns
    /// An error if the round can't produce a valid update, in which case the parameters are
    /// left at their last committed value.
    fn round(&mut self) -> Result<()>;

    /// The current parameters.
    fn theta(&self) -> &Vector;

    /// The amount of rounds executed so far.
    fn rounds(&self) -> usize;

    /// Runs `rounds` rounds back to back.
    ///
    /// # Arguments
    /// * `rounds` - The amount of rounds to run, zero leaves the parameters untouched.
    ///
    /// # Returns
    /// The parameters after the last round or the first error encountered.
    fn run(&mut self, rounds: usize) -> Result<&Vector> {
        info!(
            "running {rounds} rounds: dim={} done={}",
            self.theta().len(),
            self.rounds()
        );

        for _ in 0..rounds {
            self.round()?;
        }

        let theta = self.theta();
        info!(
            "run finished: rounds={} mean_square={}",
            self.rounds(),
            theta.mean_square()
        );
        Ok(theta)
    }
}
