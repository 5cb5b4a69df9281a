//! Error types for grid construction, energy evaluation and the search loop.

use thiserror::Error;

/// Errors raised anywhere in the pipeline. All of them are terminal for a run.
#[derive(Debug, Error)]
pub enum QhoError {
    /// Non-positive or non-finite grid parameters, a degenerate grid, or
    /// mismatched array lengths.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Vanishing normalization integral or a non-finite energy.
    #[error("numerical instability: {0}")]
    NumericalInstability(String),

    /// [`SearchFailure`]
    #[error(transparent)]
    Search(Box<SearchFailure>),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl QhoError {
    pub(crate) fn check_positive(name: &str, value: f64) -> Result<(), Self> {
        (value.is_finite() && value > 0.0)
            .then_some(())
            .ok_or_else(|| Self::InvalidConfiguration(format!("{name} must be a positive finite number; got {value}")))
    }

    pub(crate) fn check_lengths(a: usize, b: usize) -> Result<(), Self> {
        (a == b)
            .then_some(())
            .ok_or_else(|| Self::InvalidConfiguration(format!("encountered arrays with incompatible lengths; got {a} and {b}")))
    }

    /// Iteration index at which the run stopped, if the error came out of the
    /// search loop.
    pub fn iteration(&self) -> Option<usize> {
        match self {
            Self::Search(failure) => Some(failure.iteration),
            _ => None,
        }
    }
}

/// Returned when an energy evaluation fails inside the search loop.
///
/// The trajectory recorded up to the failing iteration is kept for
/// diagnostics.
#[derive(Debug, Error)]
#[error("search aborted at iteration {iteration}: {source}")]
pub struct SearchFailure {
    pub iteration: usize,
    pub trajectory: Vec<f64>,
    #[source]
    pub source: QhoError,
}

impl From<SearchFailure> for QhoError {
    fn from(failure: SearchFailure) -> Self {
        Self::Search(Box::new(failure))
    }
}
