//! Sampling module - greedy stochastic search over the wavefunction.

mod traits;
mod search;

pub use traits::EnergyFunctional;
pub use search::{GreedySearch, SearchParams, SearchPhase, SearchResults, SearchState};
