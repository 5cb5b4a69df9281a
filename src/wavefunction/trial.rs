//! Concrete trial functions and the selector used by configuration.

use std::f64::consts::PI;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use super::traits::TrialFunction;

/// φ(r) = cos(r)
#[derive(Copy, Clone, Debug, Default)]
pub struct Cosine;

impl TrialFunction for Cosine {
    fn evaluate(&self, r: f64) -> f64 {
        r.cos()
    }
}

/// φ(r) = r²
#[derive(Copy, Clone, Debug, Default)]
pub struct Quadratic;

impl TrialFunction for Quadratic {
    fn evaluate(&self, r: f64) -> f64 {
        r * r
    }
}

/// Normalized Gaussian φ(r) = (α/π)^¼ exp(-α r²/2).
///
/// With `alpha = 1` this is the exact oscillator ground state, whose energy
/// is 0.5 in natural units.
#[derive(Copy, Clone, Debug)]
pub struct Gaussian {
    pub alpha: f64,
}

impl Default for Gaussian {
    fn default() -> Self {
        Self { alpha: 1.0 }
    }
}

impl Gaussian {
    /// Analytic ⟨H⟩ for this width: (α + 1/α) / 4.
    pub fn exact_energy(&self) -> f64 {
        0.25 * (self.alpha + 1.0 / self.alpha)
    }
}

impl TrialFunction for Gaussian {
    fn evaluate(&self, r: f64) -> f64 {
        (self.alpha / PI).powf(0.25) * (-0.5 * self.alpha * r * r).exp()
    }
}

/// Trial function selector for config files and the command line.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TrialKind {
    #[default]
    Cosine,
    Quadratic,
    Gaussian,
}

impl TrialKind {
    /// Build the trial function; `alpha` is only read by the Gaussian.
    pub fn build(self, alpha: f64) -> Box<dyn TrialFunction> {
        match self {
            Self::Cosine => Box::new(Cosine),
            Self::Quadratic => Box::new(Quadratic),
            Self::Gaussian => Box::new(Gaussian { alpha }),
        }
    }
}
