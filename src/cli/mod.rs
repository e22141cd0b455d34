use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use qscale::chart::ChartFormat;

mod config;
mod demo;
mod extract;
mod plot;

pub use config::Config;

/// qscale - Quantum hardware scaling analysis
#[derive(Parser)]
#[command(name = "qscale")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Chart image format.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    /// PNG raster image
    Png,
    /// SVG vector image
    Svg,
}

impl From<FormatArg> for ChartFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Png => ChartFormat::Png,
            FormatArg::Svg => ChartFormat::Svg,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize calibration snapshots and export per-qubit readings
    Extract {
        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Directory containing snapshot files
        #[arg(short = 's', long, value_name = "DIR")]
        snapshots: Option<PathBuf>,

        /// Output CSV file path
        #[arg(short = 'o', long, value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Fit roadmap trends and render charts
    Plot {
        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Roadmap CSV file path
        #[arg(short = 'i', long, value_name = "INPUT")]
        input: Option<PathBuf>,

        /// Directory for rendered charts
        #[arg(short = 'f', long, value_name = "DIR")]
        figures: Option<PathBuf>,

        /// Image formats to write (repeatable)
        #[arg(long, value_enum)]
        format: Vec<FormatArg>,
    },

    /// Generate synthetic snapshots and a roadmap CSV for testing
    Demo {
        /// Output directory
        #[arg(value_name = "DIR", default_value = "demo_data")]
        dir: PathBuf,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Extract {
            config,
            snapshots,
            output,
        } => extract::run(config, snapshots, output),
        Commands::Plot {
            config,
            input,
            figures,
            format,
        } => plot::run(
            config,
            input,
            figures,
            format.into_iter().map(ChartFormat::from).collect(),
        ),
        Commands::Demo { dir } => demo::run(dir),
    }
}
