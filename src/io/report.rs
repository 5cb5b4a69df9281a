//! Post-run reporters. They only see finished results; plotting is left to
//! whatever reads the data files.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use crate::error::QhoError;
use crate::simulation::RunOutput;

/// Analytic ground-state energy in natural units.
pub const EXACT_GROUND_STATE_ENERGY: f64 = 0.5;

/// Observer invoked once a run has finished.
pub trait Reporter {
    fn report(&mut self, output: &RunOutput) -> Result<(), QhoError>;
}

/// Prints the headline numbers to stdout.
#[derive(Copy, Clone, Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&mut self, output: &RunOutput) -> Result<(), QhoError> {
        let search = &output.search;
        println!("Greedy search for the 1D harmonic oscillator ground state");
        println!("---------------------------------------------------------");
        println!("Grid points:      {}", output.initial_grid.len());
        println!("Iterations:       {}{}", search.completed_iterations,
            if search.cancelled { " (cancelled)" } else { "" });
        println!("Accepted moves:   {} ({:.3}%)", search.accepted, 100.0 * search.acceptance_rate());
        println!("E_initial = {:.8}", search.initial_energy);
        println!("E_final   = {:.8}", search.final_energy);
        println!("E_final - E_exact = {:.3e}", search.final_energy - EXACT_GROUND_STATE_ENERGY);
        Ok(())
    }
}

/// Writes plot-ready whitespace separated columns:
///
/// - `wavefunction.dat`: `r phi_initial phi_final`
/// - `trajectory.dat`: `iteration energy`, every `stride`-th entry plus the last
pub struct DataFileReporter {
    output_dir: PathBuf,
    stride: usize,
}

impl DataFileReporter {
    pub fn new<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self { output_dir: output_dir.into(), stride: 1 }
    }

    /// Keep one trajectory line every `stride` iterations; 0 is treated as 1.
    pub fn with_stride(mut self, stride: usize) -> Self {
        self.stride = stride.max(1);
        self
    }

    pub fn wavefunction_path(&self) -> PathBuf {
        self.output_dir.join("wavefunction.dat")
    }

    pub fn trajectory_path(&self) -> PathBuf {
        self.output_dir.join("trajectory.dat")
    }

    fn create(path: &Path) -> Result<BufWriter<File>, QhoError> {
        Ok(BufWriter::new(File::create(path)?))
    }
}

impl Reporter for DataFileReporter {
    fn report(&mut self, output: &RunOutput) -> Result<(), QhoError> {
        fs::create_dir_all(&self.output_dir)?;
        let search = &output.search;

        let mut writer = Self::create(&self.wavefunction_path())?;
        writeln!(writer, "# r phi_initial phi_final")?;
        for ((r, phi0), phi) in output.initial_grid.iter()
            .zip(search.initial_wavefunction.iter())
            .zip(search.final_wavefunction.iter())
        {
            writeln!(writer, "{} {} {}", r, phi0, phi)?;
        }
        writer.flush()?;

        let mut writer = Self::create(&self.trajectory_path())?;
        writeln!(writer, "# iteration energy")?;
        let last = search.trajectory.len().saturating_sub(1);
        for (i, e) in search.trajectory.iter().enumerate() {
            if i % self.stride == 0 || i == last {
                writeln!(writer, "{} {}", i, e)?;
            }
        }
        writer.flush()?;

        info!(dir = %self.output_dir.display(), "data files written");
        Ok(())
    }
}
