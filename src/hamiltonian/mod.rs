//! Hamiltonian module - finite-difference kinetic operator and energy
//! expectation for the harmonic potential.

mod kinetic;
mod energy;

use nalgebra::DVector;
use crate::error::QhoError;
use crate::grid::Grid;
use crate::sampling::EnergyFunctional;
use crate::wavefunction::WaveFunction;

pub use kinetic::{add_zero_boundary, delete_zero_boundary, kinetic_field};
pub use energy::{energy_expectation, harmonic_potential, trapezoid, DENOMINATOR_EPSILON};

/// H = -½ d²/dr² + ½ r² discretized on a fixed grid.
#[derive(Clone, Debug)]
pub struct HarmonicHamiltonian {
    grid: Grid,
    potential: DVector<f64>,
}

impl HarmonicHamiltonian {
    pub fn new(grid: Grid) -> Self {
        let potential = harmonic_potential(&grid);
        Self { grid, potential }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Kinetic field of `phi` on this grid.
    pub fn kinetic(&self, phi: &WaveFunction) -> DVector<f64> {
        kinetic_field(phi, self.grid.spacing())
    }

    /// Kinetic field followed by the energy expectation.
    pub fn energy(&self, phi: &WaveFunction) -> Result<f64, QhoError> {
        let k = self.kinetic(phi);
        energy::expectation_with_potential(&k, phi, &self.potential, self.grid.spacing())
    }
}

impl EnergyFunctional for HarmonicHamiltonian {
    fn energy(&self, phi: &WaveFunction) -> Result<f64, QhoError> {
        HarmonicHamiltonian::energy(self, phi)
    }

    fn dimension(&self) -> usize {
        self.grid.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wavefunction::{Cosine, TrialFunction};

    #[test]
    fn test_cached_potential_matches_free_function() {
        let grid = Grid::new(3.0, 0.25).unwrap();
        let phi = Cosine.sample(&grid);
        let hamiltonian = HarmonicHamiltonian::new(grid.clone());
        let k = kinetic_field(&phi, grid.spacing());
        assert_eq!(
            hamiltonian.energy(&phi).unwrap(),
            energy_expectation(&k, &phi, &grid).unwrap()
        );
        assert_eq!(hamiltonian.dimension(), grid.len());
    }
}
