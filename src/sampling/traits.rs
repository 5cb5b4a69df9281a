//! Traits for the stochastic search.

use crate::error::QhoError;
use crate::wavefunction::WaveFunction;

/// Scalar objective minimized by the search, typically ⟨φ|H|φ⟩/⟨φ|φ⟩.
pub trait EnergyFunctional {
    fn energy(&self, phi: &WaveFunction) -> Result<f64, QhoError>;

    /// Number of samples a wavefunction must have.
    fn dimension(&self) -> usize;
}
