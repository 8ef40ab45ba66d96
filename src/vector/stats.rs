use super::Vector;

impl Vector {
    /// Sum of all elements.
    pub fn sum(&self) -> f64 {
        self.iter().sum()
    }

    /// Arithmetic mean, `NaN` for an empty vector.
    pub fn mean(&self) -> f64 {
        self.sum() / self.len() as f64
    }

    /// Sample variance with Bessel's correction (divides by `n - 1`).
    ///
    /// # Returns
    /// The variance, `NaN` when the vector holds fewer than two elements.
    pub fn variance(&self) -> f64 {
        if self.len() < 2 {
            return f64::NAN;
        }

        let m = self.mean();
        let ss: f64 = self.iter().map(|v| (v - m).powi(2)).sum();
        ss / (self.len() as f64 - 1.)
    }

    /// Mean of the squared elements, i.e. the squared distance from zero per coordinate.
    pub fn mean_square(&self) -> f64 {
        self.iter().map(|v| v.powi(2)).sum::<f64>() / self.len() as f64
    }
}
