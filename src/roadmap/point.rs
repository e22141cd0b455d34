use std::fmt;
use std::str::FromStr;

/// Whether a roadmap entry was delivered or only announced
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Status {
    /// Processor was built
    Executed,
    /// Processor was projected
    Forecast,
    /// Any other status, kept verbatim
    Other(String),
}

impl From<&str> for Status {
    fn from(s: &str) -> Self {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "executed" => Status::Executed,
            "forecast" => Status::Forecast,
            _ => Status::Other(s.to_string()),
        }
    }
}

impl FromStr for Status {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Status::from(s))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Executed => write!(f, "Executed"),
            Status::Forecast => write!(f, "Forecast"),
            Status::Other(s) => write!(f, "{}", s),
        }
    }
}

/// One processor on one published roadmap
#[derive(Debug, Clone, PartialEq)]
pub struct RoadmapPoint {
    /// Roadmap edition the entry belongs to (e.g. "2022")
    pub roadmap_year: String,
    /// Processor family label (e.g. "Osprey")
    pub label: String,
    /// Calendar year of the processor
    pub year: f64,
    /// Physical qubit count
    pub qubits: f64,
    /// Delivery status
    pub status: Status,
}

impl RoadmapPoint {
    /// Whether the label contains `marker`, ignoring case
    pub fn label_contains(&self, marker: &str) -> bool {
        self.label.to_lowercase().contains(&marker.to_lowercase())
    }
}
