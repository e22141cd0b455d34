//! # Metric Extraction
//!
//! Walks every qubit of every device in every generation and collects three
//! calibration metrics: T1, T2 (both reported in microseconds) and the readout
//! error (reported in percent).
//!
//! ## Methodology
//!
//! - Medians, not means, are used throughout so that the manufacturing yield
//!   tail does not dominate a chip or a generation.
//! - Generation figures pool the raw samples of all devices; they are the
//!   median of the union, never an average of per-device medians.
//! - A qubit whose properties cannot be read contributes nothing and does not
//!   affect any other qubit.
//! - The readout error is looked up in the qubit's own properties, then in the
//!   measurement operation, then in the legacy device properties; the first
//!   value found wins.
//! - A row is exported only for qubits with a T1 sample.

mod extractor;
mod reading;
mod report;
mod stats;

#[cfg(test)]
mod tests;

pub use extractor::{MetricExtractor, QubitSample, ReadoutSource};
pub use reading::{QubitReading, READING_HEADER};
pub use report::{DeviceReport, ExtractionReport, GenerationReport};
pub use stats::{median, ratio, CoherenceSamples, DeviceSummary, GenerationSummary};
