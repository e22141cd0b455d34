//! TOML configuration file support.
//!
//! Every setting has a default matching the standard data layout, so a config
//! file only needs the parts that differ:
//!
//! ```toml
//! # qscale.toml
//! [extract]
//! snapshot_dir = "snapshots"
//! output = "data/database-quantum-qiskit_ibm.csv"
//!
//! [[extract.generation]]
//! label = "Heron (2024)"
//! devices = ["props_torino.json", { path = "props_fez.json", name = "Fez" }]
//!
//! [plot]
//! input = "data/database-quantum-qubits.csv"
//! figures_dir = "figures"
//! formats = ["png", "svg"]
//!
//! [plot.trends]
//! mid_year = "2022"
//! ```
//!
//! When `[[extract.generation]]` is absent the four built-in IBM eras are used.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use qscale::chart::ChartFormat;
use qscale::roadmap::TrendConfig;
use qscale::snapshot::{Catalog, GenerationSpec};

/// Root configuration structure for qscale.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Calibration extraction settings.
    #[serde(default)]
    pub extract: ExtractConfig,

    /// Roadmap plotting settings.
    #[serde(default)]
    pub plot: PlotConfig,
}

/// Configuration for the extract command.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Directory that snapshot paths resolve against.
    pub snapshot_dir: PathBuf,

    /// CSV file receiving per-qubit readings.
    pub output: PathBuf,

    /// Name of the readout operation in target snapshots.
    pub measure_operation: String,

    /// Custom generation catalog; the built-in eras when empty.
    #[serde(rename = "generation")]
    pub generations: Vec<GenerationSpec>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            snapshot_dir: PathBuf::from("snapshots"),
            output: PathBuf::from("data/database-quantum-qiskit_ibm.csv"),
            measure_operation: "measure".to_string(),
            generations: Vec::new(),
        }
    }
}

impl ExtractConfig {
    /// Catalog described by this configuration.
    pub fn catalog(&self) -> Catalog {
        let catalog = if self.generations.is_empty() {
            Catalog::ibm_eras()
        } else {
            Catalog {
                generations: self.generations.clone(),
                ..Catalog::default()
            }
        };
        catalog.with_snapshot_dir(&self.snapshot_dir)
    }
}

/// Configuration for the plot command.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Roadmap CSV file.
    pub input: PathBuf,

    /// Directory receiving rendered charts.
    pub figures_dir: PathBuf,

    /// Image formats to write.
    pub formats: Vec<ChartFormat>,

    /// Which roadmap subsets are fitted.
    pub trends: TrendConfig,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("data/database-quantum-qubits.csv"),
            figures_dir: PathBuf::from("figures"),
            formats: vec![ChartFormat::Png, ChartFormat::Svg],
            trends: TrendConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Load from `path` when given, built-in defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qscale::snapshot::DeviceEntry;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [extract]
            snapshot_dir = "archive"
            output = "out/readings.csv"

            [[extract.generation]]
            label = "Heron (2024)"
            devices = ["props_torino.json", { path = "props_fez.json", name = "Fez" }]

            [plot]
            input = "roadmap.csv"
            formats = ["svg"]

            [plot.trends]
            mid_year = "2023"
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.extract.snapshot_dir, PathBuf::from("archive"));
        assert_eq!(config.extract.output, PathBuf::from("out/readings.csv"));
        assert_eq!(config.plot.input, PathBuf::from("roadmap.csv"));
        assert_eq!(config.plot.figures_dir, PathBuf::from("figures"));
        assert_eq!(config.plot.formats, vec![ChartFormat::Svg]);
        assert_eq!(config.plot.trends.mid_year, "2023");
        assert_eq!(config.plot.trends.baseline_year, "2020");

        let catalog = config.extract.catalog();
        assert_eq!(catalog.snapshot_dir, PathBuf::from("archive"));
        assert_eq!(catalog.generations.len(), 1);
        assert_eq!(
            catalog.generations[0].devices[1],
            DeviceEntry::Named {
                path: "props_fez.json".to_string(),
                name: "Fez".to_string()
            }
        );
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_str("").unwrap();
        assert_eq!(
            config.extract.output,
            PathBuf::from("data/database-quantum-qiskit_ibm.csv")
        );
        assert_eq!(config.extract.measure_operation, "measure");
        assert_eq!(
            config.plot.input,
            PathBuf::from("data/database-quantum-qubits.csv")
        );
        assert_eq!(
            config.plot.formats,
            vec![ChartFormat::Png, ChartFormat::Svg]
        );

        let catalog = config.extract.catalog();
        assert_eq!(catalog.generations.len(), 4);
        assert_eq!(catalog.snapshot_dir, PathBuf::from("snapshots"));
    }

    #[test]
    fn test_invalid_format_rejected() {
        let toml = r#"
            [plot]
            formats = ["pdf"]
        "#;
        assert!(Config::from_str(toml).is_err());
    }
}
