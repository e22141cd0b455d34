use std::fmt;

/// Median of a sample; `None` when empty.
///
/// Even-sized samples average the two middle values.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// `numerator / denominator`, or zero when the denominator is not positive
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Samples accumulated while walking a device or a generation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoherenceSamples {
    /// T1 values in microseconds
    pub t1_us: Vec<f64>,
    /// T2 values in microseconds
    pub t2_us: Vec<f64>,
    /// Readout errors in percent
    pub readout_pct: Vec<f64>,
}

impl CoherenceSamples {
    /// Whether no T1 sample was collected
    pub fn is_empty(&self) -> bool {
        self.t1_us.is_empty()
    }
}

/// Medians for one device
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceSummary {
    /// Number of qubits with a T1 sample
    pub qubits: usize,
    /// Median T1 in microseconds
    pub median_t1_us: f64,
    /// Median T2 in microseconds, zero without samples
    pub median_t2_us: f64,
    /// Median T2 over median T1
    pub t2_t1_ratio: f64,
    /// Median readout error in percent
    pub median_readout_pct: Option<f64>,
}

impl DeviceSummary {
    /// Summarize a device; `None` without any T1 sample
    pub fn from_samples(samples: &CoherenceSamples) -> Option<Self> {
        let median_t1_us = median(&samples.t1_us)?;
        let median_t2_us = median(&samples.t2_us).unwrap_or(0.0);
        Some(Self {
            qubits: samples.t1_us.len(),
            median_t1_us,
            median_t2_us,
            t2_t1_ratio: ratio(median_t2_us, median_t1_us),
            median_readout_pct: median(&samples.readout_pct),
        })
    }
}

/// Medians pooled over every qubit of a generation
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSummary {
    /// Number of pooled T1 samples
    pub points: usize,
    /// Median of all T1 samples in microseconds
    pub median_t1_us: f64,
    /// Median of all T2 samples in microseconds, zero without samples
    pub median_t2_us: f64,
    /// Pooled T2 median over pooled T1 median
    pub t2_t1_ratio: f64,
}

impl GenerationSummary {
    /// Summarize pooled samples; `None` without any T1 sample
    pub fn from_samples(samples: &CoherenceSamples) -> Option<Self> {
        let median_t1_us = median(&samples.t1_us)?;
        let median_t2_us = median(&samples.t2_us).unwrap_or(0.0);
        Some(Self {
            points: samples.t1_us.len(),
            median_t1_us,
            median_t2_us,
            t2_t1_ratio: ratio(median_t2_us, median_t1_us),
        })
    }
}

impl fmt::Display for GenerationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} pts, T1 {:.1} µs, T2 {:.1} µs, T2/T1 {:.2}",
            self.points, self.median_t1_us, self.median_t2_us, self.t2_t1_ratio
        )
    }
}
