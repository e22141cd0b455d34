/// Errors raised while loading or probing a device snapshot
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// I/O error reading a snapshot file
    #[error("Failed to read snapshot: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML catalog parsing error
    #[error("Catalog parsing error: {0}")]
    CatalogError(#[from] toml::de::Error),

    /// Snapshot document carries neither a target nor legacy properties
    #[error("Snapshot {0} has neither target nor properties")]
    Empty(String),

    /// The device exposes no per-qubit properties at all
    #[error("Qubit properties are not available")]
    NoQubitProperties,

    /// Qubit index beyond what the snapshot describes
    #[error("Qubit {index} out of range (device has {available})")]
    QubitOutOfRange {
        /// Requested qubit index
        index: usize,
        /// Number of qubits described
        available: usize,
    },

    /// A named calibration entry is missing for a qubit
    #[error("Property {name} not found for qubit {qubit}")]
    PropertyNotFound {
        /// Qubit index
        qubit: usize,
        /// Entry name (e.g. "readout_error")
        name: String,
    },

    /// Unit string that cannot be converted to SI
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),
}
