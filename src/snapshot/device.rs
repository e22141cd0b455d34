use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{BackendProperties, QubitProperties, SnapshotError, Target};

/// Read-only view of an archived device characterization.
///
/// Every accessor may fail; callers decide whether a failure is fatal. The
/// extractor treats any `Err` as "not available" for the qubit it was probing.
pub trait DeviceSnapshot {
    /// Display name of the device (e.g. "Kyoto")
    fn name(&self) -> &str;

    /// Number of physical qubits described
    fn num_qubits(&self) -> usize;

    /// Physical properties of one qubit
    fn qubit_properties(&self, index: usize) -> Result<Option<QubitProperties>, SnapshotError>;

    /// Error rate of a named operation on the given qubits
    fn operation_error(&self, operation: &str, qubits: &[usize])
        -> Result<Option<f64>, SnapshotError>;

    /// Readout error from the legacy whole-device properties.
    ///
    /// `Ok(None)` when the device has no legacy properties.
    fn legacy_readout_error(&self, index: usize) -> Result<Option<f64>, SnapshotError>;
}

/// Envelope form of a snapshot file carrying either or both layouts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotDocument {
    /// Backend identifier
    pub backend_name: String,

    /// Target layout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Target>,

    /// Legacy properties layout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<BackendProperties>,
}

/// A snapshot loaded from JSON
#[derive(Debug, Clone)]
pub struct BackendSnapshot {
    name: String,
    backend_name: String,
    target: Target,
    properties: Option<BackendProperties>,
}

impl BackendSnapshot {
    /// Build a snapshot from a target and optional legacy properties
    pub fn new(backend_name: &str, target: Target, properties: Option<BackendProperties>) -> Self {
        Self {
            name: display_name(backend_name),
            backend_name: backend_name.to_string(),
            target,
            properties,
        }
    }

    /// Build a snapshot whose target is derived from legacy properties
    pub fn from_properties(properties: BackendProperties) -> Self {
        let target = Target::from_properties(&properties);
        let backend_name = properties.backend_name.clone();
        Self::new(&backend_name, target, Some(properties))
    }

    /// Load a snapshot file (bare properties document or envelope)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SnapshotError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a snapshot from JSON.
    ///
    /// A document with a top-level `qubits` array is read as legacy
    /// properties; anything else must be an envelope.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let value: serde_json::Value = serde_json::from_str(json)?;

        if value.get("qubits").is_some() {
            let properties: BackendProperties = serde_json::from_value(value)?;
            return Ok(Self::from_properties(properties));
        }

        let doc: SnapshotDocument = serde_json::from_value(value)?;
        match (doc.target, doc.properties) {
            (Some(target), properties) => Ok(Self::new(&doc.backend_name, target, properties)),
            (None, Some(properties)) => {
                let target = Target::from_properties(&properties);
                Ok(Self::new(&doc.backend_name, target, Some(properties)))
            }
            (None, None) => Err(SnapshotError::Empty(doc.backend_name)),
        }
    }

    /// Replace the display name
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Backend identifier as recorded in the file
    pub fn backend_name(&self) -> &str {
        &self.backend_name
    }

    /// Legacy properties, if archived
    pub fn properties(&self) -> Option<&BackendProperties> {
        self.properties.as_ref()
    }
}

impl DeviceSnapshot for BackendSnapshot {
    fn name(&self) -> &str {
        &self.name
    }

    fn num_qubits(&self) -> usize {
        self.target.num_qubits
    }

    fn qubit_properties(&self, index: usize) -> Result<Option<QubitProperties>, SnapshotError> {
        self.target.qubit_properties(index)
    }

    fn operation_error(
        &self,
        operation: &str,
        qubits: &[usize],
    ) -> Result<Option<f64>, SnapshotError> {
        Ok(self
            .target
            .instruction_properties(operation, qubits)
            .and_then(|props| props.error))
    }

    fn legacy_readout_error(&self, index: usize) -> Result<Option<f64>, SnapshotError> {
        match &self.properties {
            Some(props) => props.readout_error(index).map(Some),
            None => Ok(None),
        }
    }
}

/// Human-facing device name from a backend identifier.
///
/// `FakeHanoiV2` → `Hanoi`, `ibm_kyoto` → `Kyoto`, `fake_washington_v2` → `Washington`.
pub fn display_name(backend_name: &str) -> String {
    let mut name = backend_name.trim();
    for prefix in ["fake_", "Fake", "ibmq_", "ibm_"] {
        if let Some(rest) = name.strip_prefix(prefix) {
            name = rest;
            break;
        }
    }
    for suffix in ["_v2", "V2"] {
        if let Some(rest) = name.strip_suffix(suffix) {
            name = rest;
            break;
        }
    }

    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => backend_name.to_string(),
    }
}
