use crate::vector::{Result, Vector};

/// Maps a candidate parameter vector into the feasible region.
///
/// The optimizer applies it after every update. The vector is taken by value, so an
/// implementation is free to modify it in place without anyone else observing the
/// pre-projection values.
pub trait Constraint {
    /// Projects `theta` into the feasible region.
    ///
    /// # Arguments
    /// * `theta` - The unconstrained parameters.
    ///
    /// # Returns
    /// The projected parameters or a `SizeMismatchErr` if the constraint doesn't have the
    /// same dimension as `theta`.
    fn constrain(&self, theta: Vector) -> Result<Vector>;
}

/// The identity constraint, leaves the parameters untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unconstrained;

impl Constraint for Unconstrained {
    fn constrain(&self, theta: Vector) -> Result<Vector> {
        Ok(theta)
    }
}

impl<F> Constraint for F
where
    F: Fn(Vector) -> Vector,
{
    fn constrain(&self, theta: Vector) -> Result<Vector> {
        Ok(self(theta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconstrained_is_identity() {
        let a = Vector::from([1., 2., 3., 4., 5.]);
        assert_eq!(Unconstrained.constrain(a.clone()).unwrap(), a);
    }

    #[test]
    fn closure() {
        let positive = |theta: Vector| theta.iter().map(|t| t.max(0.)).collect::<Vector>();
        let a = Vector::from([-1., 2., -3.]);

        assert_eq!(positive.constrain(a).unwrap(), Vector::from([0., 2., 0.]));
    }
}
