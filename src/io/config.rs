// Run configuration read from a YAML file, e.g.
//
// x: 6.0
// dx: 0.1
// iterations: 1500000
// max_perturbation: 0.09
// trial: gaussian
// alpha: 1.0
// seed: 42

use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::error::QhoError;
use crate::sampling::SearchParams;
use crate::wavefunction::TrialKind;

/// Every recognized option of a run, with documented defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Half-range of the grid
    pub x: f64,
    /// Grid spacing
    pub dx: f64,
    pub iterations: usize,
    /// Half-width of the uniform perturbation
    pub max_perturbation: f64,
    pub trial: TrialKind,
    /// Gaussian width, ignored by the other trial functions
    pub alpha: f64,
    /// Unseeded runs draw from OS entropy
    pub seed: Option<u64>,
    pub progress_interval: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        let search = SearchParams::default();
        Self {
            x: 6.0,
            dx: 0.1,
            iterations: search.n_iterations,
            max_perturbation: search.max_perturbation,
            trial: TrialKind::Cosine,
            alpha: 1.0,
            seed: None,
            progress_interval: search.progress_interval,
        }
    }
}

impl RunConfig {
    pub fn search_params(&self) -> SearchParams {
        SearchParams::new()
            .with_n_iterations(self.iterations)
            .with_max_perturbation(self.max_perturbation)
            .with_progress_interval(self.progress_interval)
    }

    /// Checks the options the grid does not check itself.
    pub fn validate(&self) -> Result<(), QhoError> {
        self.search_params().validate()?;
        if self.trial == TrialKind::Gaussian {
            QhoError::check_positive("alpha", self.alpha)?;
        }
        Ok(())
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, QhoError> {
        Ok(serde_yaml::from_str(s)?)
    }
}

/// Deserialize a [`RunConfig`] from a YAML file.
pub fn read_run_config<P: AsRef<Path>>(filename: P) -> Result<RunConfig, QhoError> {
    let file = std::fs::File::open(filename)?;
    let reader = std::io::BufReader::new(file);
    let config: RunConfig = serde_yaml::from_reader(reader)?;
    Ok(config)
}
