mod bounded;
mod constraint;

pub use bounded::{BoundedConstraints, Bounds};
pub use constraint::{Constraint, Unconstrained};
