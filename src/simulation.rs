//! End-to-end pipeline: grid, trial wavefunction, Hamiltonian, search.

use tracing::{info, warn};
use crate::error::QhoError;
use crate::grid::Grid;
use crate::hamiltonian::HarmonicHamiltonian;
use crate::io::RunConfig;
use crate::sampling::{GreedySearch, SearchResults};
use crate::wavefunction::TrialFunction;

/// Everything a reporter needs after a run.
#[derive(Clone, Debug)]
pub struct RunOutput {
    pub initial_grid: Grid,
    pub search: SearchResults,
}

/// Run the full pipeline for `config`.
pub fn run(config: &RunConfig) -> Result<RunOutput, QhoError> {
    run_with_cancel(config, |_| false)
}

/// Like [`run`], polling `cancel` once per iteration.
pub fn run_with_cancel<F>(config: &RunConfig, cancel: F) -> Result<RunOutput, QhoError>
where
    F: FnMut(usize) -> bool,
{
    config.validate()?;
    let grid = Grid::new(config.x, config.dx)?;
    info!(x = config.x, dx = config.dx, n_points = grid.len(), trial = ?config.trial, "grid ready");

    let initial = config.trial.build(config.alpha).sample(&grid);
    let hamiltonian = HarmonicHamiltonian::new(grid.clone());
    let params = config.search_params();

    let search = match config.seed {
        Some(seed) => GreedySearch::with_seed(hamiltonian, params, seed).run_with_cancel(initial, cancel),
        None => {
            warn!("no seed configured, results will not be reproducible");
            GreedySearch::from_entropy(hamiltonian, params).run_with_cancel(initial, cancel)
        }
    }?;

    Ok(RunOutput { initial_grid: grid, search })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::wavefunction::TrialKind;

    #[test]
    fn test_invalid_grid_stops_before_search() {
        let config = RunConfig { x: 1.0, dx: 0.0, ..RunConfig::default() };
        assert!(matches!(run(&config), Err(QhoError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_huge_perturbation_is_rejected() {
        let config = RunConfig { iterations: 3, max_perturbation: 1e308, seed: Some(1), ..RunConfig::default() };
        let err = run(&config).unwrap_err();
        assert!(matches!(err, QhoError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_exact_ground_state_initial_energy() {
        let config = RunConfig {
            trial: TrialKind::Gaussian,
            iterations: 0,
            seed: Some(1),
            ..RunConfig::default()
        };
        let output = run(&config).unwrap();
        assert_eq!(output.initial_grid.len(), 121);
        assert_relative_eq!(output.search.initial_energy, 0.5, epsilon = 1e-3);
    }
}
