//! Trial wavefunction trait.

use nalgebra::DVector;
use crate::grid::Grid;

/// Real wavefunction samples, index-aligned with a [`Grid`].
pub type WaveFunction = DVector<f64>;

/// One-dimensional trial function used to seed the search.
pub trait TrialFunction {
    /// Evaluate the trial function at position `r`.
    fn evaluate(&self, r: f64) -> f64;

    /// Sample the trial function at every grid point.
    fn sample(&self, grid: &Grid) -> WaveFunction {
        grid.points().map(|r| self.evaluate(r))
    }
}
