use serde::{Deserialize, Serialize};

/// Column names of the exported table, in order
pub const READING_HEADER: [&str; 6] = [
    "Era",
    "Chip",
    "Qubit_Index",
    "T1_us",
    "T2_us",
    "Readout_Error_Pct",
];

/// One exported row: a qubit with at least a T1 sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QubitReading {
    /// Generation label
    #[serde(rename = "Era")]
    pub generation: String,

    /// Device display name
    #[serde(rename = "Chip")]
    pub device: String,

    /// Physical qubit index
    #[serde(rename = "Qubit_Index")]
    pub qubit: usize,

    /// T1 in microseconds
    #[serde(rename = "T1_us")]
    pub t1_us: f64,

    /// T2 in microseconds
    #[serde(rename = "T2_us")]
    pub t2_us: Option<f64>,

    /// Readout error in percent
    #[serde(rename = "Readout_Error_Pct")]
    pub readout_error_pct: Option<f64>,
}

impl QubitReading {
    /// Cells as written to the flat file: four decimals, empty when absent.
    ///
    /// A T2 of exactly zero is written empty.
    pub fn to_record(&self) -> [String; 6] {
        [
            self.generation.clone(),
            self.device.clone(),
            self.qubit.to_string(),
            format!("{:.4}", self.t1_us),
            self.t2_us
                .filter(|v| *v != 0.0)
                .map(|v| format!("{:.4}", v))
                .unwrap_or_default(),
            self.readout_error_pct
                .map(|v| format!("{:.4}", v))
                .unwrap_or_default(),
        ]
    }
}
