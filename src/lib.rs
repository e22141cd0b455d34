//! # qscale - Quantum Hardware Scaling Analysis
//!
//! `qscale` studies how superconducting quantum processors have scaled across
//! hardware generations, from two independent angles:
//!
//! - **Calibration quality**: archived device snapshots are probed qubit by
//!   qubit for T1, T2 and readout error, summarized per device and per
//!   generation with medians, and exported as a flat CSV table.
//!
//! - **Qubit supply**: published processor roadmaps are cleaned, fitted with
//!   exponential trends in `log2(qubits)` and rendered as comparison charts.
//!
//! ## Quick Start - Calibration Extraction
//!
//! ```rust,no_run
//! use qscale::export::write_readings;
//! use qscale::extract::MetricExtractor;
//! use qscale::snapshot::Catalog;
//!
//! let generations = Catalog::ibm_eras().with_snapshot_dir("snapshots").load();
//! let report = MetricExtractor::new().extract(&generations);
//!
//! println!("{}", report);
//! write_readings("data/database-quantum-qiskit_ibm.csv", &report.readings)?;
//! # Ok::<(), qscale::export::ExportError>(())
//! ```
//!
//! ## Quick Start - Roadmap Trends
//!
//! ```rust,no_run
//! use qscale::chart::{render_all, ChartFormat};
//! use qscale::roadmap::{calculate_trends, load_roadmap, TrendConfig};
//!
//! let config = TrendConfig::default();
//! let points = load_roadmap("data/database-quantum-qubits.csv")?;
//! let trends = calculate_trends(&points, &config);
//!
//! for line in &trends {
//!     println!("{}", line.legend);
//! }
//! render_all(&points, &trends, "figures", &[ChartFormat::Png, ChartFormat::Svg], &config)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Output Format
//!
//! | Column | Type | Description |
//! |--------|------|-------------|
//! | Era | string | Hardware generation label |
//! | Chip | string | Device display name |
//! | Qubit_Index | integer | Physical qubit index |
//! | T1_us | float | Energy relaxation time (µs) |
//! | T2_us | float | Dephasing time (µs), empty when unknown |
//! | Readout_Error_Pct | float | Readout assignment error (%), empty when unknown |
//!
//! ## Architecture
//!
//! - [`snapshot`]: device snapshot formats, unit conversion, generation catalog
//! - [`extract`]: per-qubit probing with readout fallbacks, medians, console report
//! - [`export`]: CSV writer and reader for extracted readings
//! - [`roadmap`]: roadmap CSV cleaning and log-linear trend fitting
//! - [`chart`]: PNG/SVG rendering of roadmaps and trends

#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod chart;
pub mod export;
pub mod extract;
pub mod roadmap;
pub mod snapshot;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::chart::{render_all, ChartError, ChartFormat};
    pub use crate::export::{read_readings, write_readings, ExportError};
    pub use crate::extract::{
        median, ratio, DeviceSummary, ExtractionReport, GenerationSummary, MetricExtractor,
        QubitReading, ReadoutSource,
    };
    pub use crate::roadmap::{
        calculate_trends, load_roadmap, RoadmapError, RoadmapPoint, Status, TrendConfig,
        TrendGroup, TrendLine,
    };
    pub use crate::snapshot::{
        BackendProperties, BackendSnapshot, Catalog, DeviceSnapshot, HardwareGeneration,
        QubitProperties, SnapshotError, Target,
    };
}
