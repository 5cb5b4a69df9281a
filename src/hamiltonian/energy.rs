//! Discretized energy expectation ⟨φ|H|φ⟩ / ⟨φ|φ⟩.

use nalgebra::DVector;
use crate::error::QhoError;
use crate::grid::Grid;
use crate::wavefunction::WaveFunction;

/// Normalization integrals at or below this magnitude are treated as zero.
pub const DENOMINATOR_EPSILON: f64 = 1e-12;

/// U(r) = r²/2 at every grid point.
pub fn harmonic_potential(grid: &Grid) -> DVector<f64> {
    grid.points().map(|r| 0.5 * r * r)
}

/// Composite trapezoidal rule with unit sample spacing.
pub fn trapezoid(samples: &[f64]) -> f64 {
    samples.windows(2).map(|w| 0.5 * (w[0] + w[1])).sum()
}

/// Energy estimate from a precomputed kinetic field.
///
/// `dx` is folded into the integrand samples and the trapezoid then runs at
/// unit spacing.
pub fn energy_expectation(kinetic: &DVector<f64>, phi: &WaveFunction, grid: &Grid) -> Result<f64, QhoError> {
    let potential = harmonic_potential(grid);
    expectation_with_potential(kinetic, phi, &potential, grid.spacing())
}

pub(crate) fn expectation_with_potential(
    kinetic: &DVector<f64>,
    phi: &WaveFunction,
    potential: &DVector<f64>,
    dx: f64,
) -> Result<f64, QhoError> {
    QhoError::check_lengths(kinetic.len(), phi.len())?;
    QhoError::check_lengths(potential.len(), phi.len())?;

    let hop = kinetic + potential.component_mul(phi);
    let numerator = phi.component_mul(&hop) * dx;
    let denominator = phi.component_mul(phi) * dx;

    let h1 = trapezoid(numerator.as_slice());
    let h2 = trapezoid(denominator.as_slice());
    if !h2.is_finite() || h2.abs() <= DENOMINATOR_EPSILON {
        return Err(QhoError::NumericalInstability(format!(
            "normalization integral is {h2:e}"
        )));
    }

    let energy = h1 / h2;
    if !energy.is_finite() {
        return Err(QhoError::NumericalInstability(format!(
            "energy evaluated to {energy} ({h1:e} / {h2:e})"
        )));
    }
    Ok(energy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::hamiltonian::kinetic_field;
    use crate::wavefunction::{Cosine, Gaussian, TrialFunction};

    fn energy_of(trial: &dyn TrialFunction, grid: &Grid) -> Result<f64, QhoError> {
        let phi = trial.sample(grid);
        let k = kinetic_field(&phi, grid.spacing());
        energy_expectation(&k, &phi, grid)
    }

    #[test]
    fn test_trapezoid() {
        assert_eq!(trapezoid(&[]), 0.0);
        assert_eq!(trapezoid(&[3.0]), 0.0);
        assert_relative_eq!(trapezoid(&[1.0, 2.0, 3.0, 4.0]), 7.5);
    }

    #[test]
    fn test_potential() {
        let grid = Grid::new(1.0, 0.5).unwrap();
        assert_eq!(harmonic_potential(&grid).as_slice(), &[0.5, 0.125, 0.0, 0.125, 0.5]);
    }

    #[test]
    fn test_ground_state_energy() {
        let grid = Grid::new(6.0, 0.1).unwrap();
        let e = energy_of(&Gaussian::default(), &grid).unwrap();
        assert_relative_eq!(e, 0.5, epsilon = 1e-3);
    }

    #[test]
    fn test_gaussian_width_energy() {
        let grid = Grid::new(8.0, 0.02).unwrap();
        let trial = Gaussian { alpha: 0.6 };
        let e = energy_of(&trial, &grid).unwrap();
        assert_relative_eq!(e, trial.exact_energy(), epsilon = 1e-3);
    }

    #[test]
    fn test_cosine_is_above_ground_state() {
        let grid = Grid::new(6.0, 0.1).unwrap();
        let e = energy_of(&Cosine, &grid).unwrap();
        assert!(e > 0.5);
        assert_relative_eq!(e, 6.9974208, epsilon = 1e-5);
    }

    #[test]
    fn test_zero_wavefunction_is_unstable() {
        let grid = Grid::new(1.0, 0.1).unwrap();
        let phi = DVector::zeros(grid.len());
        let k = kinetic_field(&phi, grid.spacing());
        let err = energy_expectation(&k, &phi, &grid).unwrap_err();
        assert!(matches!(err, QhoError::NumericalInstability(_)));
    }

    #[test]
    fn test_non_finite_wavefunction_is_unstable() {
        let grid = Grid::new(1.0, 0.1).unwrap();
        let mut phi = DVector::from_element(grid.len(), 1.0);
        phi[3] = f64::NAN;
        let k = kinetic_field(&phi, grid.spacing());
        let err = energy_expectation(&k, &phi, &grid).unwrap_err();
        assert!(matches!(err, QhoError::NumericalInstability(_)));
    }

    #[test]
    fn test_length_mismatch() {
        let grid = Grid::new(1.0, 0.1).unwrap();
        let phi = DVector::from_element(grid.len() - 1, 1.0);
        let k = kinetic_field(&phi, grid.spacing());
        let err = energy_expectation(&k, &phi, &grid).unwrap_err();
        assert!(matches!(err, QhoError::InvalidConfiguration(_)));
    }
}
