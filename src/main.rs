use std::path::PathBuf;
use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use rust_qho::{read_run_config, ConsoleReporter, DataFileReporter, QhoError, Reporter, RunConfig, TrialKind};

/// Greedy stochastic search for the harmonic oscillator ground state
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// YAML config file; command line options override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Half-range of the grid
    #[arg(long)]
    x: Option<f64>,

    /// Grid spacing
    #[arg(long)]
    dx: Option<f64>,

    /// Number of search iterations
    #[arg(short = 'n', long)]
    iterations: Option<usize>,

    /// Half-width of the uniform perturbation
    #[arg(short = 'd', long)]
    max_perturbation: Option<f64>,

    /// Trial wavefunction
    #[arg(short, long, value_enum)]
    trial: Option<TrialKind>,

    /// Gaussian width
    #[arg(short, long)]
    alpha: Option<f64>,

    /// Random seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Directory for wavefunction.dat and trajectory.dat
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Keep every N-th trajectory entry in trajectory.dat
    #[arg(long, default_value_t = 100)]
    trajectory_stride: usize,

    /// Log search progress
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn run_config(&self) -> anyhow::Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => read_run_config(path)
                .with_context(|| format!("reading config {}", path.display()))?,
            None => RunConfig::default(),
        };
        if let Some(x) = self.x { config.x = x; }
        if let Some(dx) = self.dx { config.dx = dx; }
        if let Some(n) = self.iterations { config.iterations = n; }
        if let Some(d) = self.max_perturbation { config.max_perturbation = d; }
        if let Some(trial) = self.trial { config.trial = trial; }
        if let Some(alpha) = self.alpha { config.alpha = alpha; }
        if self.seed.is_some() { config.seed = self.seed; }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .init();

    let config = args.run_config()?;
    let output = match rust_qho::run(&config) {
        Ok(output) => output,
        Err(QhoError::Search(failure)) => {
            eprintln!("run failed at iteration {} after {} recorded energies",
                failure.iteration, failure.trajectory.len());
            return Err(QhoError::Search(failure).into());
        }
        Err(e) => return Err(e.into()),
    };

    ConsoleReporter.report(&output)?;
    if let Some(dir) = &args.output_dir {
        DataFileReporter::new(dir)
            .with_stride(args.trajectory_stride)
            .report(&output)?;
    }
    Ok(())
}
