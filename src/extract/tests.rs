use super::*;
use crate::snapshot::{DeviceSnapshot, HardwareGeneration, QubitProperties, SnapshotError};
use proptest::prelude::*;
use std::collections::HashMap;

/// What a mock accessor answers for one qubit
#[derive(Clone, Copy)]
enum Answer {
    Value(f64),
    Missing,
    Fails,
}

impl Answer {
    fn resolve(self, qubit: usize) -> Result<Option<f64>, SnapshotError> {
        match self {
            Answer::Value(v) => Ok(Some(v)),
            Answer::Missing => Ok(None),
            Answer::Fails => Err(SnapshotError::PropertyNotFound {
                qubit,
                name: "readout_error".to_string(),
            }),
        }
    }
}

#[derive(Default)]
struct MockDevice {
    name: String,
    qubits: Vec<Option<QubitProperties>>,
    failing: Vec<usize>,
    measure: HashMap<usize, Answer>,
    legacy: HashMap<usize, Answer>,
}

impl MockDevice {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn qubit(mut self, t1_s: Option<f64>, t2_s: Option<f64>) -> Self {
        self.qubits.push(Some(QubitProperties {
            t1: t1_s,
            t2: t2_s,
            ..Default::default()
        }));
        self
    }

    fn qubit_with_readout(mut self, t1_s: f64, readout: f64) -> Self {
        self.qubits.push(Some(QubitProperties {
            t1: Some(t1_s),
            readout_error: Some(readout),
            ..Default::default()
        }));
        self
    }

    fn null_qubit(mut self) -> Self {
        self.qubits.push(None);
        self
    }

    fn failing_qubit(mut self) -> Self {
        self.failing.push(self.qubits.len());
        self.qubits.push(None);
        self
    }

    fn measure(mut self, qubit: usize, answer: Answer) -> Self {
        self.measure.insert(qubit, answer);
        self
    }

    fn legacy(mut self, qubit: usize, answer: Answer) -> Self {
        self.legacy.insert(qubit, answer);
        self
    }
}

impl DeviceSnapshot for MockDevice {
    fn name(&self) -> &str {
        &self.name
    }

    fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    fn qubit_properties(&self, index: usize) -> Result<Option<QubitProperties>, SnapshotError> {
        if self.failing.contains(&index) {
            return Err(SnapshotError::NoQubitProperties);
        }
        Ok(self.qubits[index])
    }

    fn operation_error(
        &self,
        _operation: &str,
        qubits: &[usize],
    ) -> Result<Option<f64>, SnapshotError> {
        self.measure
            .get(&qubits[0])
            .copied()
            .unwrap_or(Answer::Missing)
            .resolve(qubits[0])
    }

    fn legacy_readout_error(&self, index: usize) -> Result<Option<f64>, SnapshotError> {
        self.legacy
            .get(&index)
            .copied()
            .unwrap_or(Answer::Missing)
            .resolve(index)
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_median_odd_and_even() {
    assert_eq!(median(&[]), None);
    assert_eq!(median(&[3.0]), Some(3.0));
    assert_eq!(median(&[5.0, 1.0, 3.0]), Some(3.0));
    assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
}

#[test]
fn test_ratio_guards_zero() {
    assert_eq!(ratio(50.0, 100.0), 0.5);
    assert_eq!(ratio(50.0, 0.0), 0.0);
}

#[test]
fn test_failing_qubit_is_skipped_locally() {
    let device = MockDevice::new("Hanoi")
        .qubit(Some(100e-6), Some(80e-6))
        .failing_qubit()
        .null_qubit()
        .qubit(Some(120e-6), None);

    let mut pooled = CoherenceSamples::default();
    let mut readings = Vec::new();
    let report = MetricExtractor::new().extract_device("Falcon", &device, &mut pooled, &mut readings);

    let indices: Vec<usize> = readings.iter().map(|r| r.qubit).collect();
    assert_eq!(indices, vec![0, 3]);
    assert_eq!(report.samples.t1_us.len(), 2);
    assert_eq!(report.samples.t2_us.len(), 1);
    assert_eq!(pooled.t1_us.len(), 2);
    assert_close(readings[0].t1_us, 100.0);
    assert_close(readings[0].t2_us.unwrap(), 80.0);
    assert_eq!(readings[1].t2_us, None);
}

#[test]
fn test_row_requires_t1() {
    let device = MockDevice::new("Cairo")
        .qubit(None, Some(50e-6))
        .qubit(Some(90e-6), None);

    let mut pooled = CoherenceSamples::default();
    let mut readings = Vec::new();
    let report = MetricExtractor::new().extract_device("Falcon", &device, &mut pooled, &mut readings);

    assert_eq!(readings.len(), 1);
    assert_eq!(readings[0].qubit, 1);
    // T2 without T1 still counts toward the T2 statistics
    assert_eq!(report.samples.t2_us.len(), 1);
    assert_eq!(pooled.t2_us.len(), 1);
}

#[test]
fn test_readout_prefers_qubit_property() {
    let device = MockDevice::new("Kyoto")
        .qubit_with_readout(100e-6, 0.01)
        .measure(0, Answer::Value(0.02))
        .legacy(0, Answer::Value(0.03));

    let sample = MetricExtractor::new().sample_qubit(&device, 0).unwrap();
    let (value, source) = sample.readout.unwrap();
    assert_close(value, 1.0);
    assert_eq!(source, ReadoutSource::QubitProperty);
}

#[test]
fn test_readout_falls_back_to_measure_operation() {
    let device = MockDevice::new("Kyoto")
        .qubit(Some(100e-6), None)
        .measure(0, Answer::Value(0.02))
        .legacy(0, Answer::Value(0.03));

    let sample = MetricExtractor::new().sample_qubit(&device, 0).unwrap();
    let (value, source) = sample.readout.unwrap();
    assert_close(value, 2.0);
    assert_eq!(source, ReadoutSource::MeasureOperation);
}

#[test]
fn test_readout_failure_moves_to_next_source() {
    let device = MockDevice::new("Osaka")
        .qubit(Some(100e-6), None)
        .measure(0, Answer::Fails)
        .legacy(0, Answer::Value(0.03));

    let sample = MetricExtractor::new().sample_qubit(&device, 0).unwrap();
    let (value, source) = sample.readout.unwrap();
    assert_close(value, 3.0);
    assert_eq!(source, ReadoutSource::LegacyProperties);
}

#[test]
fn test_readout_all_sources_empty() {
    let device = MockDevice::new("Osaka")
        .qubit(Some(100e-6), None)
        .measure(0, Answer::Missing)
        .legacy(0, Answer::Fails);

    let mut pooled = CoherenceSamples::default();
    let mut readings = Vec::new();
    let report = MetricExtractor::new().extract_device("Eagle", &device, &mut pooled, &mut readings);

    assert_eq!(readings[0].readout_error_pct, None);
    let summary = report.summary.unwrap();
    assert_eq!(summary.median_readout_pct, None);
    assert_eq!(summary.median_t2_us, 0.0);
    assert_eq!(summary.t2_t1_ratio, 0.0);
}

#[test]
fn test_device_without_t1_has_no_summary() {
    let device = MockDevice::new("Washington")
        .failing_qubit()
        .qubit(None, Some(40e-6));

    let mut pooled = CoherenceSamples::default();
    let mut readings = Vec::new();
    let report = MetricExtractor::new().extract_device("Eagle R1", &device, &mut pooled, &mut readings);

    assert!(report.summary.is_none());
    assert!(readings.is_empty());
}

#[test]
fn test_generation_median_pools_samples() {
    let a = MockDevice::new("A")
        .qubit(Some(10e-6), Some(5e-6))
        .qubit(Some(20e-6), Some(10e-6))
        .qubit(Some(30e-6), Some(15e-6));
    let b = MockDevice::new("B").qubit(Some(100e-6), Some(200e-6));

    let generation = HardwareGeneration::new("Eagle R3").with_device(a).with_device(b);
    let mut readings = Vec::new();
    let report = MetricExtractor::new().extract_generation(&generation, &mut readings);

    assert_close(report.devices[0].summary.as_ref().unwrap().median_t1_us, 20.0);
    assert_close(report.devices[1].summary.as_ref().unwrap().median_t1_us, 100.0);

    // Median of the union {10, 20, 30, 100}, not the mean of medians (60)
    let summary = report.summary.unwrap();
    assert_eq!(summary.points, 4);
    assert_close(summary.median_t1_us, 25.0);
    assert_close(summary.median_t2_us, 12.5);
    assert_close(summary.t2_t1_ratio, 0.5);
    assert_eq!(readings.len(), 4);
}

#[test]
fn test_empty_generation_has_no_summary() {
    let generation =
        HardwareGeneration::new("Heron").with_device(MockDevice::new("Empty").failing_qubit());
    let report = MetricExtractor::new().extract(&[generation]);

    assert!(report.generations[0].summary.is_none());
    assert!(report.readings.is_empty());
    assert_eq!(report.devices_with_data(), 0);
}

#[test]
fn test_report_table() {
    let good = MockDevice::new("Torino")
        .qubit(Some(150e-6), Some(100e-6))
        .measure(0, Answer::Value(0.015));
    let empty = MockDevice::new("Fez").failing_qubit();
    let generation = HardwareGeneration::new("Heron (2024)")
        .with_device(good)
        .with_device(empty);

    let report = MetricExtractor::new().extract(&[generation]);
    let table = report.to_string();

    assert!(table.starts_with("Generation / Chip"));
    assert!(table.contains("Heron (2024)"));
    assert!(table.contains("  ├─ Torino"));
    assert!(table.contains("  150.0 µs"));
    assert!(table.contains("1.50%"));
    assert!(table.contains("├─ Fez"));
    assert!(table.contains("insufficient data (no T1 samples)"));
    assert!(table.contains("GENERATION MEDIAN (1 pts)"));
}

#[test]
fn test_report_marks_missing_readout() {
    let device = MockDevice::new("Brisbane").qubit(Some(200e-6), Some(150e-6));
    let generation = HardwareGeneration::new("Eagle R3 (2023)").with_device(device);
    let table = MetricExtractor::new().extract(&[generation]).to_string();

    assert!(table.contains("N/A"));
}

#[test]
fn test_reading_record_formatting() {
    let reading = QubitReading {
        generation: "Falcon (2020/21)".to_string(),
        device: "Hanoi".to_string(),
        qubit: 3,
        t1_us: 123.456789,
        t2_us: Some(0.0),
        readout_error_pct: None,
    };
    let record = reading.to_record();

    assert_eq!(record[2], "3");
    assert_eq!(record[3], "123.4568");
    assert_eq!(record[4], "");
    assert_eq!(record[5], "");
}

proptest! {
    #[test]
    fn prop_median_is_order_independent(
        values in proptest::collection::vec(0.0f64..1e6, 1..64),
        shift in 0usize..64,
    ) {
        let mut values = values;
        let expected = median(&values).unwrap();
        let len = values.len();
        values.rotate_left(shift % len);
        values.reverse();
        prop_assert_eq!(median(&values).unwrap(), expected);
    }

    #[test]
    fn prop_qubit_property_readout_is_never_overridden(
        direct in 0.0f64..1.0,
        measure in 0.0f64..1.0,
        legacy in 0.0f64..1.0,
    ) {
        let device = MockDevice::new("P")
            .qubit_with_readout(100e-6, direct)
            .measure(0, Answer::Value(measure))
            .legacy(0, Answer::Value(legacy));

        let sample = MetricExtractor::new().sample_qubit(&device, 0).unwrap();
        prop_assert_eq!(sample.readout, Some((direct * 100.0, ReadoutSource::QubitProperty)));
    }
}
