use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use qscale::export::write_readings;
use qscale::extract::MetricExtractor;

use super::Config;

/// Extract calibration metrics from every snapshot in the catalog
pub fn run(
    config_path: Option<PathBuf>,
    snapshots: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let mut config = Config::load(config_path.as_deref())?.extract;
    if let Some(dir) = snapshots {
        config.snapshot_dir = dir;
    }
    if let Some(path) = output {
        config.output = path;
    }

    let catalog = config.catalog();
    info!(
        "Loading {} generations from {}",
        catalog.generations.len(),
        catalog.snapshot_dir.display()
    );
    let generations = catalog.load();

    let extractor = MetricExtractor::new().with_measure_operation(&config.measure_operation);
    let report = extractor.extract(&generations);

    #[cfg(feature = "colorized_output")]
    println!("{}", report.format_colored());
    #[cfg(not(feature = "colorized_output"))]
    println!("{}", report);

    let written = write_readings(&config.output, &report.readings)
        .with_context(|| format!("Failed to write {}", config.output.display()))?;

    info!("Extraction complete!");
    info!("  Devices with data: {}", report.devices_with_data());
    info!("  Readings written: {}", written);
    println!("Saved {} readings to {}", written, config.output.display());

    Ok(())
}
