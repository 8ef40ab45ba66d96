mod error;
mod standard;

pub use error::{GainErr, Result};
pub use standard::StandardGain;

/// A boxed gain sequence as held by the optimizer.
///
/// Any iterator of strictly positive, eventually decreasing values can be used as a custom
/// schedule; the optimizer pulls exactly one value per round.
pub type GainSequence = Box<dyn Iterator<Item = f64> + Send>;
