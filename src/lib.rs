//! Rust QHO - greedy stochastic ground-state search for the 1D quantum
//! harmonic oscillator.
//!
//! A trial wavefunction is sampled on a uniform grid, its energy is evaluated
//! with a three-point finite-difference Hamiltonian and trapezoidal
//! integration, and single-sample random perturbations are kept whenever they
//! lower that energy.

pub mod error;
pub mod grid;
pub mod wavefunction;
pub mod hamiltonian;
pub mod sampling;
pub mod io;
pub mod simulation;

// Re-export commonly used types at crate root
pub use error::{QhoError, SearchFailure};
pub use grid::Grid;
pub use wavefunction::{TrialFunction, WaveFunction, Cosine, Quadratic, Gaussian, TrialKind};
pub use hamiltonian::{HarmonicHamiltonian, kinetic_field, energy_expectation, add_zero_boundary, delete_zero_boundary};
pub use sampling::{EnergyFunctional, GreedySearch, SearchParams, SearchPhase, SearchResults, SearchState};
pub use io::{read_run_config, RunConfig, Reporter, ConsoleReporter, DataFileReporter};
pub use simulation::{run, run_with_cancel, RunOutput};
