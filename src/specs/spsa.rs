use serde::{Deserialize, Serialize};

use crate::{
    DEFAULT_ALPHA, DEFAULT_GAMMA,
    constraint::Bounds,
    losses::{absolute_sum, rosenbrock},
    vector::Vector,
};

fn default_alpha() -> f64 {
    DEFAULT_ALPHA
}

fn default_gamma() -> f64 {
    DEFAULT_GAMMA
}

/// The specification for a `StandardGain` sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GainSpec {
    Ak {
        a: f64,
        big_a: f64,
        #[serde(default = "default_alpha")]
        alpha: f64,
    },
    Ck {
        c: f64,
        #[serde(default = "default_gamma")]
        gamma: f64,
    },
    Standard {
        scale: f64,
        offset: f64,
        exponent: f64,
    },
}

/// The specification for the `Perturbation` trait.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerturbationSpec {
    Bernoulli { r: f64 },
    SegmentedUniform { low: f64, high: f64 },
}

impl Default for PerturbationSpec {
    fn default() -> Self {
        Self::Bernoulli { r: 1. }
    }
}

/// The specification for the `Constraint` trait.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintSpec {
    #[default]
    Unconstrained,
    Bounded {
        bounds: Vec<Bounds>,
    },
}

/// The built-in loss functions a run can be specified with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossSpec {
    AbsoluteSum,
    Rosenbrock,
}

impl LossSpec {
    /// Returns the loss function this spec refers to.
    pub fn loss(self) -> fn(&Vector) -> f64 {
        match self {
            LossSpec::AbsoluteSum => absolute_sum,
            LossSpec::Rosenbrock => rosenbrock,
        }
    }
}

/// The specification for a full `Spsa` run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpsaSpec {
    pub theta0: Vector,
    pub loss: LossSpec,
    pub rounds: usize,
    pub ak: GainSpec,
    pub ck: GainSpec,
    #[serde(default)]
    pub perturbation: PerturbationSpec,
    #[serde(default)]
    pub constraint: ConstraintSpec,
    #[serde(default)]
    pub parallel: bool,
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_with_defaults() {
        let json = r#"{
            "theta0": [1.0, 1.0],
            "loss": "absolute_sum",
            "rounds": 100,
            "ak": { "ak": { "a": 1.0, "big_a": 10.0 } },
            "ck": { "ck": { "c": 0.1 } },
            "seed": null
        }"#;

        let spec: SpsaSpec = serde_json::from_str(json).unwrap();

        assert_eq!(spec.theta0, Vector::from([1., 1.]));
        assert_eq!(spec.loss, LossSpec::AbsoluteSum);
        assert_eq!(
            spec.ak,
            GainSpec::Ak {
                a: 1.,
                big_a: 10.,
                alpha: DEFAULT_ALPHA
            }
        );
        assert_eq!(
            spec.ck,
            GainSpec::Ck {
                c: 0.1,
                gamma: DEFAULT_GAMMA
            }
        );
        assert_eq!(spec.perturbation, PerturbationSpec::Bernoulli { r: 1. });
        assert_eq!(spec.constraint, ConstraintSpec::Unconstrained);
        assert!(!spec.parallel);
        assert_eq!(spec.seed, None);
    }

    #[test]
    fn deserialize_bounded_segmented() {
        let json = r#"{
            "theta0": [0.5],
            "loss": "rosenbrock",
            "rounds": 10,
            "ak": { "standard": { "scale": 1.0, "offset": 2.0, "exponent": 0.5 } },
            "ck": { "ck": { "c": 0.1, "gamma": 0.2 } },
            "perturbation": { "segmented_uniform": { "low": 0.5, "high": 1.5 } },
            "constraint": { "bounded": { "bounds": [{ "lower": 0.0, "upper": 1.0 }] } },
            "parallel": true,
            "seed": 3
        }"#;

        let spec: SpsaSpec = serde_json::from_str(json).unwrap();

        assert_eq!(
            spec.perturbation,
            PerturbationSpec::SegmentedUniform {
                low: 0.5,
                high: 1.5
            }
        );
        assert_eq!(
            spec.constraint,
            ConstraintSpec::Bounded {
                bounds: vec![Bounds::new(0., 1.)]
            }
        );
        assert!(spec.parallel);
        assert_eq!(spec.seed, Some(3));
    }

    #[test]
    fn unit_variant_constraint() {
        let spec: ConstraintSpec = serde_json::from_str(r#""unconstrained""#).unwrap();
        assert_eq!(spec, ConstraintSpec::Unconstrained);
    }
}
