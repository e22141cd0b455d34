use anyhow::{Context, Result};
use log::{info, warn};
use std::path::PathBuf;

use qscale::chart::{render_all, ChartFormat};
use qscale::roadmap::{calculate_trends, load_roadmap, RoadmapError};

use super::Config;

/// Fit roadmap trends and render the comparison charts
pub fn run(
    config_path: Option<PathBuf>,
    input: Option<PathBuf>,
    figures: Option<PathBuf>,
    formats: Vec<ChartFormat>,
) -> Result<()> {
    let mut config = Config::load(config_path.as_deref())?.plot;
    if let Some(path) = input {
        config.input = path;
    }
    if let Some(dir) = figures {
        config.figures_dir = dir;
    }
    if !formats.is_empty() {
        config.formats = formats;
    }

    let points = match load_roadmap(&config.input) {
        Ok(points) => points,
        Err(RoadmapError::NotFound(path)) => {
            warn!("Roadmap file not found: {}", path.display());
            return Ok(());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to load {}", config.input.display()))
        }
    };
    info!("Loaded {} roadmap points", points.len());

    let trends = calculate_trends(&points, &config.trends);
    for line in &trends {
        println!("{:<4} {:<9} {}", line.roadmap_year, line.group.as_str(), line.legend);
    }

    let written = render_all(
        &points,
        &trends,
        &config.figures_dir,
        &config.formats,
        &config.trends,
    )
    .context("Failed to render charts")?;

    info!("Rendered {} chart files", written.len());
    println!("Saved {} charts to {}", written.len(), config.figures_dir.display());

    Ok(())
}
