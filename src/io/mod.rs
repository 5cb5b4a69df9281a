//! IO module - run configuration and result reporting.

mod config;
mod report;

pub use config::{read_run_config, RunConfig};
pub use report::{ConsoleReporter, DataFileReporter, Reporter, EXACT_GROUND_STATE_ENERGY};
