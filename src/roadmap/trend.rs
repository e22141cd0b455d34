use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use super::RoadmapPoint;

/// Least-squares line through `(year, log2(count))`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    /// Doublings per year
    pub slope: f64,
    /// log2 count at year zero
    pub intercept: f64,
}

impl LinearFit {
    /// Fit `(year, count)` samples assuming exponential growth in count.
    ///
    /// Samples with a non-positive count are ignored. Returns `None` when
    /// fewer than two samples remain or all years coincide.
    pub fn fit_log2(samples: &[(f64, f64)]) -> Option<Self> {
        let points: Vec<(f64, f64)> = samples
            .iter()
            .filter(|(_, count)| *count > 0.0 && count.is_finite())
            .map(|&(year, count)| (year, count.log2()))
            .collect();

        if points.len() < 2 {
            return None;
        }

        let n = points.len() as f64;
        let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
        let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;

        let sxx: f64 = points.iter().map(|(x, _)| (x - mean_x).powi(2)).sum();
        if sxx == 0.0 {
            return None;
        }
        let sxy: f64 = points
            .iter()
            .map(|(x, y)| (x - mean_x) * (y - mean_y))
            .sum();

        let slope = sxy / sxx;
        Some(Self {
            slope,
            intercept: mean_y - slope * mean_x,
        })
    }

    /// Predicted count at `year`
    pub fn predict(&self, year: f64) -> f64 {
        (self.slope * year + self.intercept).exp2()
    }

    /// Months per doubling, `None` without growth
    pub fn doubling_months(&self) -> Option<f64> {
        (self.slope > 0.0).then(|| 12.0 / self.slope)
    }
}

/// Which trend a line belongs to within a roadmap edition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrendGroup {
    /// The edition's single scaling trend
    Main,
    /// Pre-pivot trend of the recent edition
    OldTrend,
    /// Post-pivot trend of the recent edition
    NewTrend,
}

impl TrendGroup {
    /// Identifier used in exports and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendGroup::Main => "Main",
            TrendGroup::OldTrend => "Old_Trend",
            TrendGroup::NewTrend => "New_Trend",
        }
    }
}

impl fmt::Display for TrendGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fitted trend drawn between the first and last year of its subset
#[derive(Debug, Clone, PartialEq)]
pub struct TrendLine {
    /// Roadmap edition the subset was taken from
    pub roadmap_year: String,
    /// Group within the edition
    pub group: TrendGroup,
    /// Legend entry, e.g. "2022 Roadmap (Double: 10.7 months)"
    pub legend: String,
    /// `(year, count)` at the earliest year
    pub start: (f64, f64),
    /// `(year, count)` at the latest year
    pub end: (f64, f64),
    /// Underlying fit
    pub fit: LinearFit,
}

impl TrendLine {
    /// Fit a subset of points; `None` when it cannot support a line
    pub fn fit(
        points: &[&RoadmapPoint],
        roadmap_year: &str,
        group: TrendGroup,
        name: &str,
    ) -> Option<Self> {
        let samples: Vec<(f64, f64)> = points.iter().map(|p| (p.year, p.qubits)).collect();
        let fit = LinearFit::fit_log2(&samples)?;

        let min_year = points.iter().map(|p| p.year).fold(f64::INFINITY, f64::min);
        let max_year = points.iter().map(|p| p.year).fold(f64::NEG_INFINITY, f64::max);

        let legend = match fit.doubling_months() {
            Some(months) => format!("{} (Double: {:.1} months)", name, months),
            None => format!("{} (No Growth)", name),
        };

        Some(Self {
            roadmap_year: roadmap_year.to_string(),
            group,
            legend,
            start: (min_year, fit.predict(min_year)),
            end: (max_year, fit.predict(max_year)),
            fit,
        })
    }

    /// Months per doubling, `None` without growth
    pub fn doubling_months(&self) -> Option<f64> {
        self.fit.doubling_months()
    }
}

/// Which subsets of the roadmap get a trend line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    /// Baseline edition, fitted in full
    pub baseline_year: String,
    /// Middle edition, fitted without `excluded_label`
    pub mid_year: String,
    /// Family excluded from pure-scaling fits
    pub excluded_label: String,
    /// Most recent edition, split at the family pivot
    pub recent_year: String,
    /// Last calendar year of the pre-pivot subset
    pub recent_cutoff_year: f64,
    /// Label marker of the post-pivot family
    pub new_family_marker: String,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            baseline_year: "2020".to_string(),
            mid_year: "2022".to_string(),
            excluded_label: "Heron".to_string(),
            recent_year: "2025".to_string(),
            recent_cutoff_year: 2023.0,
            new_family_marker: "Nighthawk".to_string(),
        }
    }
}

/// Distinct roadmap editions, sorted
pub fn roadmap_years(points: &[RoadmapPoint]) -> Vec<String> {
    let mut years: Vec<String> = points.iter().map(|p| p.roadmap_year.clone()).collect();
    years.sort();
    years.dedup();
    years
}

/// Fit every trend line the configuration describes, in legend order
pub fn calculate_trends(points: &[RoadmapPoint], config: &TrendConfig) -> Vec<TrendLine> {
    let mut lines = Vec::new();
    let mut push = |subset: Vec<&RoadmapPoint>, year: &str, group: TrendGroup, name: String| {
        match TrendLine::fit(&subset, year, group, &name) {
            Some(line) => {
                debug!("{} [{}]: {}", year, group, line.legend);
                lines.push(line);
            }
            None => debug!("{} [{}]: {} points, no trend", year, group, subset.len()),
        }
    };

    let baseline: Vec<&RoadmapPoint> = points
        .iter()
        .filter(|p| p.roadmap_year == config.baseline_year)
        .collect();
    push(
        baseline,
        &config.baseline_year,
        TrendGroup::Main,
        format!("{} Roadmap", config.baseline_year),
    );

    let mid: Vec<&RoadmapPoint> = points
        .iter()
        .filter(|p| p.roadmap_year == config.mid_year && p.label != config.excluded_label)
        .collect();
    push(
        mid,
        &config.mid_year,
        TrendGroup::Main,
        format!("{} Roadmap", config.mid_year),
    );

    let years = roadmap_years(points);
    let recent = if years.contains(&config.recent_year) {
        Some(config.recent_year.clone())
    } else {
        years.last().cloned()
    };

    if let Some(recent) = recent {
        let old: Vec<&RoadmapPoint> = points
            .iter()
            .filter(|p| {
                p.roadmap_year == recent
                    && p.year <= config.recent_cutoff_year
                    && !p.label_contains(&config.new_family_marker)
                    && p.label != config.excluded_label
            })
            .collect();
        push(old, &recent, TrendGroup::OldTrend, format!("{} Roadmap", recent));

        let new: Vec<&RoadmapPoint> = points
            .iter()
            .filter(|p| p.roadmap_year == recent && p.label_contains(&config.new_family_marker))
            .collect();
        push(
            new,
            &recent,
            TrendGroup::NewTrend,
            format!("{} Roadmap - {}", recent, config.new_family_marker),
        );
    }

    lines
}
