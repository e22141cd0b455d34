use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::SnapshotError;

/// A single calibration entry: name, date, unit, value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nduv {
    /// Calibration timestamp as written by the provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Entry name (e.g. "T1", "readout_error", "gate_error")
    pub name: String,

    /// Unit string (e.g. "us", "GHz", "" for dimensionless)
    #[serde(default)]
    pub unit: String,

    /// Raw value in `unit`
    pub value: f64,
}

impl Nduv {
    /// Create an entry without a date
    pub fn new(name: &str, unit: &str, value: f64) -> Self {
        Self {
            date: None,
            name: name.to_string(),
            unit: unit.to_string(),
            value,
        }
    }

    /// Value converted to SI units (seconds, Hz, or unchanged if dimensionless)
    pub fn si_value(&self) -> Result<f64, SnapshotError> {
        to_si(self.value, &self.unit)
    }
}

/// Calibration record for one gate on a set of qubits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateProperties {
    /// Gate name (e.g. "cx", "sx", "measure")
    pub gate: String,

    /// Qubits the gate acts on
    pub qubits: Vec<usize>,

    /// Calibration entries ("gate_error", "gate_length")
    #[serde(default)]
    pub parameters: Vec<Nduv>,

    /// Instance name (e.g. "cx0_1")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl GateProperties {
    /// Look up a parameter by name
    pub fn parameter(&self, name: &str) -> Option<&Nduv> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

/// Legacy whole-device calibration properties, as archived in `props_*.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackendProperties {
    /// Backend identifier (e.g. "ibm_kyoto")
    pub backend_name: String,

    /// Backend version string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend_version: Option<String>,

    /// Timestamp of the calibration snapshot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update_date: Option<String>,

    /// Per-qubit calibration entries, indexed by physical qubit
    #[serde(default)]
    pub qubits: Vec<Vec<Nduv>>,

    /// Per-gate calibration records
    #[serde(default)]
    pub gates: Vec<GateProperties>,

    /// Device-wide entries
    #[serde(default)]
    pub general: Vec<Nduv>,
}

impl BackendProperties {
    /// Create empty properties for the named backend
    pub fn new(backend_name: &str) -> Self {
        Self {
            backend_name: backend_name.to_string(),
            ..Default::default()
        }
    }

    /// Look up a named entry for a qubit
    pub fn qubit_property(&self, qubit: usize, name: &str) -> Result<&Nduv, SnapshotError> {
        let entries = self
            .qubits
            .get(qubit)
            .ok_or(SnapshotError::QubitOutOfRange {
                index: qubit,
                available: self.qubits.len(),
            })?;

        entries
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| SnapshotError::PropertyNotFound {
                qubit,
                name: name.to_string(),
            })
    }

    /// Readout assignment error of a qubit, as a fraction
    pub fn readout_error(&self, qubit: usize) -> Result<f64, SnapshotError> {
        Ok(self.qubit_property(qubit, "readout_error")?.value)
    }

    /// T1 relaxation time in seconds
    pub fn t1(&self, qubit: usize) -> Result<f64, SnapshotError> {
        self.qubit_property(qubit, "T1")?.si_value()
    }

    /// T2 dephasing time in seconds
    pub fn t2(&self, qubit: usize) -> Result<f64, SnapshotError> {
        self.qubit_property(qubit, "T2")?.si_value()
    }

    /// Calibration timestamp, if present and RFC 3339
    pub fn calibrated_at(&self) -> Option<DateTime<FixedOffset>> {
        self.last_update_date
            .as_deref()
            .and_then(|d| DateTime::parse_from_rfc3339(d).ok())
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Convert a value in `unit` to SI (seconds or Hz)
pub fn to_si(value: f64, unit: &str) -> Result<f64, SnapshotError> {
    let scale = match unit.trim() {
        "" | "s" | "Hz" => 1.0,
        "ms" => 1e-3,
        "us" | "µs" => 1e-6,
        "ns" => 1e-9,
        "ps" => 1e-12,
        "kHz" => 1e3,
        "MHz" => 1e6,
        "GHz" => 1e9,
        other => return Err(SnapshotError::UnknownUnit(other.to_string())),
    };
    Ok(value * scale)
}
