use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{BackendProperties, SnapshotError};

/// Per-qubit physical properties (SI units)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct QubitProperties {
    /// Energy relaxation time in seconds
    #[serde(default)]
    pub t1: Option<f64>,

    /// Dephasing time in seconds
    #[serde(default)]
    pub t2: Option<f64>,

    /// Qubit frequency in Hz
    #[serde(default)]
    pub frequency: Option<f64>,

    /// Readout assignment error as a fraction, when the provider exposes it here
    #[serde(default)]
    pub readout_error: Option<f64>,
}

/// Calibration of one operation on a specific set of qubits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstructionProperties {
    /// Qubits the operation acts on
    pub qubits: Vec<usize>,

    /// Error rate as a fraction
    #[serde(default)]
    pub error: Option<f64>,

    /// Duration in seconds
    #[serde(default)]
    pub duration: Option<f64>,
}

/// Device description in the newer target layout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// Number of physical qubits
    pub num_qubits: usize,

    /// Per-qubit properties; an empty list means none are published
    #[serde(default)]
    pub qubit_properties: Vec<Option<QubitProperties>>,

    /// Operation name to per-qubit-set calibrations
    #[serde(default)]
    pub operations: BTreeMap<String, Vec<InstructionProperties>>,
}

impl Target {
    /// Properties of one qubit.
    ///
    /// Fails when the target publishes no qubit properties or the index is
    /// outside the published list. A published-but-null entry is `Ok(None)`.
    pub fn qubit_properties(&self, index: usize) -> Result<Option<QubitProperties>, SnapshotError> {
        if self.qubit_properties.is_empty() {
            return Err(SnapshotError::NoQubitProperties);
        }
        self.qubit_properties
            .get(index)
            .copied()
            .ok_or(SnapshotError::QubitOutOfRange {
                index,
                available: self.qubit_properties.len(),
            })
    }

    /// Calibrations recorded for an operation, if the target supports it
    pub fn operation(&self, name: &str) -> Option<&[InstructionProperties]> {
        self.operations.get(name).map(Vec::as_slice)
    }

    /// Calibration of an operation on exactly `qubits`
    pub fn instruction_properties(
        &self,
        name: &str,
        qubits: &[usize],
    ) -> Option<&InstructionProperties> {
        self.operation(name)?
            .iter()
            .find(|props| props.qubits == qubits)
    }

    /// Build the target view of a legacy properties document.
    ///
    /// Qubits whose T1/T2/frequency entries carry unknown units are published
    /// as null entries.
    pub fn from_properties(props: &BackendProperties) -> Self {
        fn published(value: Result<f64, SnapshotError>) -> Result<Option<f64>, SnapshotError> {
            match value {
                Ok(v) => Ok(Some(v)),
                Err(SnapshotError::PropertyNotFound { .. }) => Ok(None),
                Err(e) => Err(e),
            }
        }

        let mut qubit_properties = Vec::with_capacity(props.qubits.len());
        let mut operations: BTreeMap<String, Vec<InstructionProperties>> = BTreeMap::new();

        for (qubit, entries) in props.qubits.iter().enumerate() {
            let lookup = |name: &str| -> Result<Option<f64>, SnapshotError> {
                entries
                    .iter()
                    .find(|e| e.name == name)
                    .map(|e| e.si_value())
                    .transpose()
            };

            let parsed = (|| -> Result<QubitProperties, SnapshotError> {
                Ok(QubitProperties {
                    t1: published(props.t1(qubit))?,
                    t2: published(props.t2(qubit))?,
                    frequency: lookup("frequency")?,
                    readout_error: None,
                })
            })();

            match parsed {
                Ok(qp) => qubit_properties.push(Some(qp)),
                Err(e) => {
                    log::debug!(
                        "{}: qubit {} properties unavailable: {}",
                        props.backend_name,
                        qubit,
                        e
                    );
                    qubit_properties.push(None);
                }
            }

            let readout_error = entries
                .iter()
                .find(|e| e.name == "readout_error")
                .map(|e| e.value);
            let readout_length = lookup("readout_length").ok().flatten();
            if readout_error.is_some() || readout_length.is_some() {
                operations
                    .entry("measure".to_string())
                    .or_default()
                    .push(InstructionProperties {
                        qubits: vec![qubit],
                        error: readout_error,
                        duration: readout_length,
                    });
            }
        }

        for gate in &props.gates {
            operations
                .entry(gate.gate.clone())
                .or_default()
                .push(InstructionProperties {
                    qubits: gate.qubits.clone(),
                    error: gate.parameter("gate_error").map(|p| p.value),
                    duration: gate
                        .parameter("gate_length")
                        .and_then(|p| p.si_value().ok()),
                });
        }

        Self {
            num_qubits: props.qubits.len(),
            qubit_properties,
            operations,
        }
    }
}
