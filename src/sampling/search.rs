//! Greedy stochastic search over wavefunction samples.
//!
//! Each iteration nudges one randomly chosen sample by a small random amount
//! and keeps the change only if it strictly lowers the energy. There is no
//! Metropolis acceptance, so the best-so-far energy never increases.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};
use tracing::{debug, info};
use crate::error::{QhoError, SearchFailure};
use crate::wavefunction::WaveFunction;
use super::traits::EnergyFunctional;

/// Parameters for the greedy search.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SearchParams {
    /// Fixed number of iterations; there is no convergence test
    pub n_iterations: usize,
    /// Half-width of the uniform perturbation
    pub max_perturbation: f64,
    /// Iterations between progress log events
    pub progress_interval: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            n_iterations: 1_500_000,
            max_perturbation: 0.09,
            progress_interval: 100_000,
        }
    }
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_n_iterations(mut self, n: usize) -> Self {
        self.n_iterations = n;
        self
    }

    pub fn with_max_perturbation(mut self, delta: f64) -> Self {
        self.max_perturbation = delta;
        self
    }

    pub fn with_progress_interval(mut self, n: usize) -> Self {
        self.progress_interval = n;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), QhoError> {
        // the uniform sampler scales the width 2m by 1 / (1 - ε), which must stay finite
        let scaled_width = 2.0 * self.max_perturbation / (1.0 - f64::EPSILON);
        if !scaled_width.is_finite() || self.max_perturbation < 0.0 {
            return Err(QhoError::InvalidConfiguration(format!(
                "max_perturbation must be non-negative with a finite range 2m; got {}",
                self.max_perturbation
            )));
        }
        if self.progress_interval == 0 {
            return Err(QhoError::InvalidConfiguration("progress_interval must be greater than 0".into()));
        }
        Ok(())
    }
}

/// Where the search currently is.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchPhase {
    Initializing,
    Running,
    Done,
}

/// Current best wavefunction and its energy. Replaced wholesale on every
/// accepted move.
#[derive(Clone, Debug)]
pub struct SearchState {
    pub wavefunction: WaveFunction,
    pub energy: f64,
}

/// Output of a completed (or cancelled) search.
#[derive(Clone, Debug)]
pub struct SearchResults {
    pub initial_wavefunction: WaveFunction,
    pub initial_energy: f64,
    pub final_wavefunction: WaveFunction,
    pub final_energy: f64,
    /// Energy held at the start of each iteration
    pub trajectory: Vec<f64>,
    /// Number of accepted moves
    pub accepted: usize,
    pub completed_iterations: usize,
    pub cancelled: bool,
}

impl SearchResults {
    pub fn acceptance_rate(&self) -> f64 {
        if self.completed_iterations == 0 {
            return 0.0;
        }
        self.accepted as f64 / self.completed_iterations as f64
    }
}

/// Greedy single-sample search engine.
pub struct GreedySearch<H: EnergyFunctional, R: Rng = StdRng> {
    hamiltonian: H,
    params: SearchParams,
    rng: R,
    phase: SearchPhase,
}

impl<H: EnergyFunctional> GreedySearch<H, StdRng> {
    /// Search with a reproducible random stream.
    pub fn with_seed(hamiltonian: H, params: SearchParams, seed: u64) -> Self {
        Self::new(hamiltonian, params, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(hamiltonian: H, params: SearchParams) -> Self {
        Self::new(hamiltonian, params, StdRng::from_entropy())
    }
}

impl<H: EnergyFunctional, R: Rng> GreedySearch<H, R> {
    pub fn new(hamiltonian: H, params: SearchParams, rng: R) -> Self {
        Self {
            hamiltonian,
            params,
            rng,
            phase: SearchPhase::Initializing,
        }
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// Run all `n_iterations` iterations starting from `initial`.
    pub fn run(&mut self, initial: WaveFunction) -> Result<SearchResults, SearchFailure> {
        self.run_with_cancel(initial, |_| false)
    }

    /// Run the search, calling `cancel` with the iteration index before each
    /// iteration. Returning `true` stops the loop and yields the results
    /// gathered so far with `cancelled` set.
    pub fn run_with_cancel<F>(&mut self, initial: WaveFunction, mut cancel: F) -> Result<SearchResults, SearchFailure>
    where
        F: FnMut(usize) -> bool,
    {
        self.phase = SearchPhase::Initializing;
        let n = self.params.n_iterations;
        let fail = |iteration: usize, trajectory: Vec<f64>, source: QhoError| SearchFailure {
            iteration,
            trajectory,
            source,
        };

        if let Err(source) = self.params.validate() {
            return Err(fail(0, Vec::new(), source));
        }
        let dimension = self.hamiltonian.dimension();
        if dimension == 0 || initial.len() != dimension {
            let source = QhoError::InvalidConfiguration(format!(
                "initial wavefunction has {} samples, expected {dimension} (> 0)",
                initial.len()
            ));
            return Err(fail(0, Vec::new(), source));
        }

        let initial_energy = self.hamiltonian.energy(&initial).map_err(|e| fail(0, Vec::new(), e))?;
        info!(initial_energy, n_iterations = n, max_perturbation = self.params.max_perturbation, "starting greedy search");

        let index_dist = Uniform::new(0, dimension);
        let delta_dist = Uniform::new_inclusive(-self.params.max_perturbation, self.params.max_perturbation);

        let mut state = SearchState { wavefunction: initial.clone(), energy: initial_energy };
        let mut trajectory = Vec::with_capacity(n);
        let mut accepted = 0;
        let mut cancelled = false;

        self.phase = SearchPhase::Running;
        for iteration in 0..n {
            if cancel(iteration) {
                info!(iteration, "search cancelled");
                cancelled = true;
                break;
            }

            let index = index_dist.sample(&mut self.rng);
            let delta = round_hundredths(delta_dist.sample(&mut self.rng));

            let mut candidate = state.wavefunction.clone();
            candidate[index] += delta;
            let candidate_energy = match self.hamiltonian.energy(&candidate) {
                Ok(e) => e,
                Err(source) => {
                    self.phase = SearchPhase::Done;
                    return Err(fail(iteration, trajectory, source));
                }
            };

            trajectory.push(state.energy);
            if candidate_energy < state.energy {
                state = SearchState { wavefunction: candidate, energy: candidate_energy };
                accepted += 1;
            }

            if (iteration + 1) % self.params.progress_interval == 0 {
                debug!(iteration = iteration + 1, energy = state.energy, accepted, "search progress");
            }
        }
        self.phase = SearchPhase::Done;

        let completed_iterations = trajectory.len();
        info!(final_energy = state.energy, accepted, completed_iterations, "greedy search finished");

        Ok(SearchResults {
            initial_wavefunction: initial,
            initial_energy,
            final_wavefunction: state.wavefunction,
            final_energy: state.energy,
            trajectory,
            accepted,
            completed_iterations,
            cancelled,
        })
    }
}

fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
