use super::{GainErr, Result};

/// The standard gain sequence `scale / (k + offset) ^ exponent` for `k = 1, 2, ...`.
///
/// The sequence is infinite and lazy: every call to `next` computes the value for the
/// current `k` and advances the counter by one, so values are never skipped nor repeated.
#[derive(Debug, Clone)]
pub struct StandardGain {
    scale: f64,
    offset: f64,
    exponent: f64,
    k: u64,
}

impl StandardGain {
    /// Creates a new `StandardGain` sequence.
    ///
    /// # Arguments
    /// * `scale` - The numerator, must be positive.
    /// * `offset` - Added to `k` before exponentiation, must be non negative.
    /// * `exponent` - The decay exponent, must be positive.
    ///
    /// # Returns
    /// An error if any of the parameters is out of range or not finite.
    pub fn new(scale: f64, offset: f64, exponent: f64) -> Result<Self> {
        if !(scale.is_finite() && scale > 0.) {
            return Err(GainErr {
                param: "scale",
                value: scale,
            });
        }
        if !(offset.is_finite() && offset >= 0.) {
            return Err(GainErr {
                param: "offset",
                value: offset,
            });
        }
        if !(exponent.is_finite() && exponent > 0.) {
            return Err(GainErr {
                param: "exponent",
                value: exponent,
            });
        }

        Ok(Self {
            scale,
            offset,
            exponent,
            k: 1,
        })
    }

    /// Creates the `a_k = a / (k + A + 1) ^ alpha` sequence that scales the parameter update.
    ///
    /// Semiautomatic tuning suggests `A` around 10% of the planned rounds and
    /// `alpha = 0.602`; for very long runs `alpha = 1.0` may work better.
    ///
    /// # Arguments
    /// * `a` - The initial step size.
    /// * `big_a` - The stability constant `A`.
    /// * `alpha` - The decay exponent.
    pub fn ak(a: f64, big_a: f64, alpha: f64) -> Result<Self> {
        Self::new(a, big_a + 1., alpha)
    }

    /// Creates the `c_k = c / (k + 1) ^ gamma` sequence that scales the perturbation.
    ///
    /// `c` is usually set near the standard deviation of the loss measurements and
    /// `gamma = 0.101` works well for finite runs (`1/6` asymptotically).
    ///
    /// # Arguments
    /// * `c` - The initial perturbation size.
    /// * `gamma` - The decay exponent.
    pub fn ck(c: f64, gamma: f64) -> Result<Self> {
        Self::new(c, 1., gamma)
    }

    /// The index of the next value to be produced.
    pub fn k(&self) -> u64 {
        self.k
    }
}

impl Iterator for StandardGain {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.scale / (self.k as f64 + self.offset).powf(self.exponent);
        self.k += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
