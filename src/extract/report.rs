use std::fmt;

#[cfg(feature = "colorized_output")]
use console::style;

use super::stats::{CoherenceSamples, DeviceSummary, GenerationSummary};
use super::QubitReading;

const TABLE_WIDTH: usize = 95;

/// Result of walking one device
#[derive(Debug, Clone)]
pub struct DeviceReport {
    /// Device display name
    pub name: String,
    /// Medians, or `None` when the device yielded no T1 sample
    pub summary: Option<DeviceSummary>,
    /// Samples collected from this device
    pub samples: CoherenceSamples,
}

/// Result of walking one generation
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Generation label
    pub label: String,
    /// Per-device results in catalog order
    pub devices: Vec<DeviceReport>,
    /// Pooled medians, or `None` when no device yielded data
    pub summary: Option<GenerationSummary>,
    /// Samples pooled over every device
    pub pooled: CoherenceSamples,
}

/// Complete extraction output: the console table and the exported rows
#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    /// Per-generation results in catalog order
    pub generations: Vec<GenerationReport>,
    /// Rows to export
    pub readings: Vec<QubitReading>,
}

impl ExtractionReport {
    /// Number of devices that produced statistics
    pub fn devices_with_data(&self) -> usize {
        self.generations
            .iter()
            .flat_map(|g| &g.devices)
            .filter(|d| d.summary.is_some())
            .count()
    }

    fn header_line() -> String {
        format!(
            "{:<30} | {:^6} | {:>10} | {:>10} | {:^7} | {:>12}",
            "Generation / Chip", "Qubits", "T1 Med", "T2 Med", "T2/T1", "Readout Err"
        )
    }

    fn device_line(device: &DeviceReport) -> String {
        match &device.summary {
            Some(s) => {
                let readout = s
                    .median_readout_pct
                    .map(|v| format!("{:.2}%", v))
                    .unwrap_or_else(|| "N/A".to_string());
                format!(
                    "  ├─ {:<20} | {:^6} | {:>7.1} µs | {:>7.1} µs | {:^7.2} | {:>12}",
                    device.name, s.qubits, s.median_t1_us, s.median_t2_us, s.t2_t1_ratio, readout
                )
            }
            None => format!("  ├─ {:<20} | insufficient data (no T1 samples)", device.name),
        }
    }

    fn generation_line(summary: &GenerationSummary) -> String {
        format!(
            "  ➤ GENERATION MEDIAN ({} pts)| {:^6} | {:>7.1} µs | {:>7.1} µs | {:^7.2} | {:>12}",
            summary.points,
            "---",
            summary.median_t1_us,
            summary.median_t2_us,
            summary.t2_t1_ratio,
            "---"
        )
    }

    /// Format the report with colors (requires console feature)
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            let mut output = String::new();
            output.push_str(&format!("{}\n", style(Self::header_line()).bold().cyan()));
            output.push_str(&format!("{}\n", style("=".repeat(TABLE_WIDTH)).cyan()));

            for generation in &self.generations {
                output.push_str(&format!("{}\n", style(&generation.label).bold()));
                for device in &generation.devices {
                    let line = Self::device_line(device);
                    if device.summary.is_some() {
                        output.push_str(&format!("{}\n", line));
                    } else {
                        output.push_str(&format!("{}\n", style(line).yellow()));
                    }
                }
                if let Some(summary) = &generation.summary {
                    output.push_str(&format!(
                        "{}\n",
                        style(Self::generation_line(summary)).green().bold()
                    ));
                }
                output.push_str(&format!("{}\n", "-".repeat(TABLE_WIDTH)));
            }
            output
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            self.to_string()
        }
    }
}

impl fmt::Display for ExtractionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", Self::header_line())?;
        writeln!(f, "{}", "=".repeat(TABLE_WIDTH))?;

        for generation in &self.generations {
            writeln!(f, "{}", generation.label)?;
            for device in &generation.devices {
                writeln!(f, "{}", Self::device_line(device))?;
            }
            if let Some(summary) = &generation.summary {
                writeln!(f, "{}", Self::generation_line(summary))?;
            }
            writeln!(f, "{}", "-".repeat(TABLE_WIDTH))?;
        }
        Ok(())
    }
}
