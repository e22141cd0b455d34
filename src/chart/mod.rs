//! # Roadmap Charts
//!
//! Renders roadmap points and their fitted trends with plotters.
//!
//! Counts are plotted as `log2(qubits)` on a linear axis whose tick labels are
//! mapped back to counts, so equal vertical distances mean equal growth
//! factors. Executed milestones are drawn as circles, forecasts as triangles,
//! and trends as dashed lines.
//!
//! Three figures are produced:
//!
//! - `roadmap_evolution_full`: one facet per roadmap edition, shared y axis
//! - `roadmap_<year>_detail`: one edition with point labels
//! - `roadmap_<year>_graphical_abstract`: the same edition in a poster style
//!
//! ## Example
//!
//! ```rust,ignore
//! use qscale::chart::{render_all, ChartFormat};
//! use qscale::roadmap::{calculate_trends, load_roadmap, TrendConfig};
//!
//! let config = TrendConfig::default();
//! let points = load_roadmap("data/database-quantum-qubits.csv")?;
//! let trends = calculate_trends(&points, &config);
//! let written = render_all(&points, &trends, "figures", &[ChartFormat::Png], &config)?;
//! ```

mod error;
mod figures;
mod layout;
mod panel;


use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{info, warn};
use plotters::prelude::*;
use serde::{Deserialize, Serialize};

use crate::roadmap::{RoadmapPoint, TrendConfig, TrendLine};

pub use error::ChartError;
pub use layout::{
    dash_segments, doubling_annotation, format_count, grid_shape, log2_bounds, palette_slot,
    point_label, trend_segment, year_bounds,
};

use figures::{EditionDetail, Figure, FullComparison, GraphicalAbstract};

/// Output image format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartFormat {
    /// Raster image
    Png,
    /// Vector image
    Svg,
}

impl ChartFormat {
    /// File extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            ChartFormat::Png => "png",
            ChartFormat::Svg => "svg",
        }
    }
}

impl FromStr for ChartFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(ChartFormat::Png),
            "svg" => Ok(ChartFormat::Svg),
            other => Err(format!("unsupported chart format '{}'", other)),
        }
    }
}

fn save<F: Figure>(figure: &F, path: &Path, format: ChartFormat) -> Result<(), ChartError> {
    match format {
        ChartFormat::Png => {
            let root = BitMapBackend::new(path, figure.size()).into_drawing_area();
            figure.draw(root)
        }
        ChartFormat::Svg => {
            let root = SVGBackend::new(path, figure.size()).into_drawing_area();
            figure.draw(root)
        }
    }
}

fn save_all<F: Figure>(
    figure: &F,
    dir: &Path,
    stem: &str,
    formats: &[ChartFormat],
    written: &mut Vec<PathBuf>,
) -> Result<(), ChartError> {
    for format in formats {
        let path = dir.join(format!("{}.{}", stem, format.extension()));
        save(figure, &path, *format)?;
        info!("Saved chart to {}", path.display());
        written.push(path);
    }
    Ok(())
}

/// Render the full comparison, the detail chart and the graphical abstract
///
/// The detail and abstract charts show `config.mid_year`; they are skipped
/// with a warning when that edition has no points. Returns every file written.
pub fn render_all<P: AsRef<Path>>(
    points: &[RoadmapPoint],
    trends: &[TrendLine],
    dir: P,
    formats: &[ChartFormat],
    config: &TrendConfig,
) -> Result<Vec<PathBuf>, ChartError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    let mut written = Vec::new();

    if points.is_empty() {
        warn!("No roadmap points to plot");
        return Ok(written);
    }

    save_all(
        &FullComparison { points, trends },
        dir,
        "roadmap_evolution_full",
        formats,
        &mut written,
    )?;

    let year = config.mid_year.as_str();
    let edition: Vec<&RoadmapPoint> = points.iter().filter(|p| p.roadmap_year == year).collect();
    if edition.is_empty() {
        warn!("Roadmap {} has no points, skipping detail charts", year);
        return Ok(written);
    }
    let edition_trends: Vec<&TrendLine> =
        trends.iter().filter(|t| t.roadmap_year == year).collect();

    save_all(
        &EditionDetail {
            year,
            points: edition.clone(),
            trends: edition_trends.clone(),
        },
        dir,
        &format!("roadmap_{}_detail", year),
        formats,
        &mut written,
    )?;
    save_all(
        &GraphicalAbstract {
            points: edition,
            trends: edition_trends,
        },
        dir,
        &format!("roadmap_{}_graphical_abstract", year),
        formats,
        &mut written,
    )?;

    Ok(written)
}
