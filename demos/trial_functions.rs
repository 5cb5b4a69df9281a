//! Compare trial wavefunctions
//!
//! Run with: cargo run --release --example trial_functions
//!
//! Starts the greedy search from each trial function with the same seed and
//! prints how far each one gets towards E₀ = 0.5.

use rust_qho::{run, RunConfig, TrialKind};

fn main() -> Result<(), rust_qho::QhoError> {
    let iterations = 200_000;
    let seed = 2018;

    println!("{:<10} {:>8} {:>14} {:>14} {:>10}", "trial", "alpha", "E_initial", "E_final", "accepted");
    let cases = [
        (TrialKind::Cosine, 1.0),
        (TrialKind::Quadratic, 1.0),
        (TrialKind::Gaussian, 0.5),
        (TrialKind::Gaussian, 1.0),
        (TrialKind::Gaussian, 2.0),
    ];
    for (trial, alpha) in cases {
        let config = RunConfig {
            trial,
            alpha,
            iterations,
            seed: Some(seed),
            ..RunConfig::default()
        };
        let output = run(&config)?;
        let search = &output.search;
        println!("{:<10} {:>8.2} {:>14.8} {:>14.8} {:>10}",
            format!("{:?}", trial), alpha, search.initial_energy, search.final_energy, search.accepted);
    }
    Ok(())
}
