//! # qscale
//!
//! Command-line front end for the two analysis pipelines.
//!
//! ## Usage
//!
//! ```bash
//! # Summarize calibration snapshots and export per-qubit readings
//! qscale extract --snapshots snapshots --output data/database-quantum-qiskit_ibm.csv
//!
//! # Fit roadmap trends and render charts
//! qscale plot --input data/database-quantum-qubits.csv --figures figures
//!
//! # Write synthetic inputs for both pipelines
//! qscale demo demo_data
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
