mod error;
mod stats;
mod vector;

pub use error::{Result, SizeMismatchErr};
pub use vector::Vector;
