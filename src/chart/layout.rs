use crate::roadmap::{RoadmapPoint, TrendGroup, TrendLine};

/// Axis label for a count on the log2 axis: `32`, `512`, `1k`, `16k`
pub fn format_count(value: f64) -> String {
    if value >= 1024.0 {
        format!("{:.0}k", value / 1024.0)
    } else {
        format!("{:.0}", value)
    }
}

/// Point annotation, e.g. "Osprey (433)"; fractional counts are truncated
pub fn point_label(point: &RoadmapPoint) -> String {
    format!("{} ({})", point.label, point.qubits.trunc() as i64)
}

/// Palette index of a trend line, fixed by its edition and group.
///
/// Each edition takes the slot of its rank in `years`; the new-trend line of
/// an edition takes the next one. Dropping another line never shifts it.
pub fn palette_slot(trend: &TrendLine, years: &[String], palette_len: usize) -> usize {
    let rank = years
        .iter()
        .position(|y| y == &trend.roadmap_year)
        .unwrap_or(0);
    let offset = usize::from(trend.group == TrendGroup::NewTrend);
    (rank + offset) % palette_len.max(1)
}

/// Earliest and latest calendar year, widened by `pad` on both sides
pub fn year_bounds(points: &[&RoadmapPoint], pad: f64) -> Option<(f64, f64)> {
    let min = points.iter().map(|p| p.year).fold(f64::INFINITY, f64::min);
    let max = points.iter().map(|p| p.year).fold(f64::NEG_INFINITY, f64::max);
    (min.is_finite() && max.is_finite()).then(|| (min - pad, max + pad))
}

/// log2 range covering every point and trend endpoint, with headroom for labels
pub fn log2_bounds(points: &[&RoadmapPoint], trends: &[&TrendLine]) -> Option<(f64, f64)> {
    let values = points
        .iter()
        .map(|p| p.qubits)
        .chain(trends.iter().flat_map(|t| [t.start.1, t.end.1]))
        .filter(|v| *v > 0.0 && v.is_finite())
        .map(f64::log2);

    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    (min.is_finite() && max.is_finite()).then(|| (min - 0.5, max + 1.0))
}

/// Rows and columns for `panels` facets wrapped at `columns`
pub fn grid_shape(panels: usize, columns: usize) -> (usize, usize) {
    let columns = columns.max(1).min(panels.max(1));
    let rows = panels.div_ceil(columns).max(1);
    (rows, columns)
}

/// Split the segment `start → end` into `dashes` visible pieces with equal gaps
pub fn dash_segments(start: (f64, f64), end: (f64, f64), dashes: usize) -> Vec<[(f64, f64); 2]> {
    let pieces = (dashes.max(1) * 2 - 1) as f64;
    let at = |t: f64| (start.0 + (end.0 - start.0) * t, start.1 + (end.1 - start.1) * t);

    (0..dashes.max(1))
        .map(|i| {
            let from = (2 * i) as f64 / pieces;
            let to = (2 * i + 1) as f64 / pieces;
            [at(from), at(to)]
        })
        .collect()
}

/// Trend endpoints in plot coordinates (year, log2 count)
pub fn trend_segment(trend: &TrendLine) -> ((f64, f64), (f64, f64)) {
    (
        (trend.start.0, trend.start.1.log2()),
        (trend.end.0, trend.end.1.log2()),
    )
}

/// Annotation for the graphical abstract, e.g. "Doubling Rate: ~11 Months"
pub fn doubling_annotation(trend: &TrendLine) -> Option<String> {
    trend
        .doubling_months()
        .map(|months| format!("Doubling Rate: ~{:.0} Months", months))
}
