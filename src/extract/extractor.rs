use log::{debug, info};

use crate::snapshot::{DeviceSnapshot, HardwareGeneration, QubitProperties};

use super::report::{DeviceReport, ExtractionReport, GenerationReport};
use super::stats::{CoherenceSamples, DeviceSummary, GenerationSummary};
use super::QubitReading;

/// Where a readout error value was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadoutSource {
    /// Direct per-qubit property
    QubitProperty,
    /// Per-qubit entry of the measurement operation
    MeasureOperation,
    /// Legacy whole-device properties
    LegacyProperties,
}

/// Values read from one qubit, already in reporting units
#[derive(Debug, Clone, PartialEq)]
pub struct QubitSample {
    /// Physical qubit index
    pub qubit: usize,
    /// T1 in microseconds
    pub t1_us: Option<f64>,
    /// T2 in microseconds
    pub t2_us: Option<f64>,
    /// Readout error in percent, with its source
    pub readout: Option<(f64, ReadoutSource)>,
}

/// Walks generations, devices and qubits collecting coherence metrics
#[derive(Debug, Clone)]
pub struct MetricExtractor {
    measure_operation: String,
}

impl Default for MetricExtractor {
    fn default() -> Self {
        Self {
            measure_operation: "measure".to_string(),
        }
    }
}

impl MetricExtractor {
    /// Create an extractor probing the "measure" operation
    pub fn new() -> Self {
        Self::default()
    }

    /// Probe a differently named measurement operation
    pub fn with_measure_operation(mut self, name: &str) -> Self {
        self.measure_operation = name.to_string();
        self
    }

    /// Read one qubit.
    ///
    /// Returns `None` when the qubit's properties are missing or the accessor
    /// fails; nothing from such a qubit is reported.
    pub fn sample_qubit(&self, device: &dyn DeviceSnapshot, qubit: usize) -> Option<QubitSample> {
        let props = match device.qubit_properties(qubit) {
            Ok(Some(props)) => props,
            Ok(None) => return None,
            Err(e) => {
                debug!("{}: skipping qubit {}: {}", device.name(), qubit, e);
                return None;
            }
        };

        Some(QubitSample {
            qubit,
            t1_us: props.t1.map(|t1| t1 * 1e6),
            t2_us: props.t2.map(|t2| t2 * 1e6),
            readout: self.resolve_readout_error(device, qubit, &props),
        })
    }

    /// Readout error in percent from the first source that has one:
    /// the qubit's own properties, the measurement operation, then the
    /// legacy device properties. A failing source counts as empty.
    pub fn resolve_readout_error(
        &self,
        device: &dyn DeviceSnapshot,
        qubit: usize,
        props: &QubitProperties,
    ) -> Option<(f64, ReadoutSource)> {
        if let Some(error) = props.readout_error {
            return Some((error * 100.0, ReadoutSource::QubitProperty));
        }

        match device.operation_error(&self.measure_operation, &[qubit]) {
            Ok(Some(error)) => return Some((error * 100.0, ReadoutSource::MeasureOperation)),
            Ok(None) => {}
            Err(e) => debug!("{}: qubit {} measure lookup failed: {}", device.name(), qubit, e),
        }

        match device.legacy_readout_error(qubit) {
            Ok(Some(error)) => Some((error * 100.0, ReadoutSource::LegacyProperties)),
            Ok(None) => None,
            Err(e) => {
                debug!("{}: qubit {} legacy lookup failed: {}", device.name(), qubit, e);
                None
            }
        }
    }

    /// Walk one device, appending kept rows to `readings` and durations to `pooled`
    pub fn extract_device(
        &self,
        generation: &str,
        device: &dyn DeviceSnapshot,
        pooled: &mut CoherenceSamples,
        readings: &mut Vec<QubitReading>,
    ) -> DeviceReport {
        let mut samples = CoherenceSamples::default();

        for qubit in 0..device.num_qubits() {
            let Some(sample) = self.sample_qubit(device, qubit) else {
                continue;
            };

            if let Some(t1) = sample.t1_us {
                samples.t1_us.push(t1);
                pooled.t1_us.push(t1);
            }
            if let Some(t2) = sample.t2_us {
                samples.t2_us.push(t2);
                pooled.t2_us.push(t2);
            }
            if let Some((error, _)) = sample.readout {
                samples.readout_pct.push(error);
            }

            if let Some(t1_us) = sample.t1_us {
                readings.push(QubitReading {
                    generation: generation.to_string(),
                    device: device.name().to_string(),
                    qubit,
                    t1_us,
                    t2_us: sample.t2_us,
                    readout_error_pct: sample.readout.map(|(error, _)| error),
                });
            }
        }

        debug!(
            "{}: {} T1, {} T2, {} readout samples",
            device.name(),
            samples.t1_us.len(),
            samples.t2_us.len(),
            samples.readout_pct.len()
        );

        DeviceReport {
            name: device.name().to_string(),
            summary: DeviceSummary::from_samples(&samples),
            samples,
        }
    }

    /// Walk every device of a generation
    pub fn extract_generation(
        &self,
        generation: &HardwareGeneration,
        readings: &mut Vec<QubitReading>,
    ) -> GenerationReport {
        let mut pooled = CoherenceSamples::default();
        let devices: Vec<DeviceReport> = generation
            .devices
            .iter()
            .map(|device| {
                self.extract_device(&generation.label, device.as_ref(), &mut pooled, readings)
            })
            .collect();

        let summary = GenerationSummary::from_samples(&pooled);
        match &summary {
            Some(s) => info!("{}: {}", generation.label, s),
            None => info!("{}: no data", generation.label),
        }

        GenerationReport {
            label: generation.label.clone(),
            devices,
            summary,
            pooled,
        }
    }

    /// Walk all generations in order
    pub fn extract(&self, generations: &[HardwareGeneration]) -> ExtractionReport {
        let mut readings = Vec::new();
        let generations = generations
            .iter()
            .map(|generation| self.extract_generation(generation, &mut readings))
            .collect();

        ExtractionReport {
            generations,
            readings,
        }
    }
}
