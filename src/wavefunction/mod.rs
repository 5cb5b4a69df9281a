//! Wavefunction module - trial functions sampled on the grid.

mod traits;
mod trial;

pub use traits::{TrialFunction, WaveFunction};
pub use trial::{Cosine, Quadratic, Gaussian, TrialKind};
