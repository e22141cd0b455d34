use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};

use crate::roadmap::{roadmap_years, RoadmapPoint, TrendLine};

use super::layout::{doubling_annotation, grid_shape, log2_bounds, palette_slot, year_bounds};
use super::panel::{draw_panel, Panel, PanelStyle};
use super::ChartError;

/// Manual palette for trend lines, indexed by `palette_slot`
pub(crate) const TREND_COLORS: [RGBColor; 4] = [
    RGBColor(0x34, 0x98, 0xdb),
    RGBColor(0xe7, 0x4c, 0x3c),
    RGBColor(0x9b, 0x59, 0xb6),
    RGBColor(0x2e, 0xcc, 0x71),
];
const DETAIL_COLOR: RGBColor = RGBColor(0xe7, 0x4c, 0x3c);
const ABSTRACT_COLOR: RGBColor = RGBColor(0xaa, 0x00, 0x69);
const ABSTRACT_EXECUTED: RGBColor = RGBColor(0x8e, 0x44, 0xad);
const ABSTRACT_FORECAST: RGBColor = RGBColor(0xff, 0x79, 0xcb);

const FACET_COLUMNS: usize = 3;

/// A chart that can be drawn on any plotters backend
pub(crate) trait Figure {
    /// Output size in pixels
    fn size(&self) -> (u32, u32);

    /// Draw the chart on `root`
    fn draw<DB: DrawingBackend>(&self, root: DrawingArea<DB, Shift>) -> Result<(), ChartError>;
}

fn title_font(size: f64) -> FontDesc<'static> {
    FontDesc::new(FontFamily::SansSerif, size, FontStyle::Bold)
}

/// Every roadmap edition side by side with its trend lines
pub(crate) struct FullComparison<'a> {
    pub points: &'a [RoadmapPoint],
    pub trends: &'a [TrendLine],
}

impl Figure for FullComparison<'_> {
    fn size(&self) -> (u32, u32) {
        (2400, 1050)
    }

    fn draw<DB: DrawingBackend>(&self, root: DrawingArea<DB, Shift>) -> Result<(), ChartError> {
        root.fill(&WHITE)?;
        let root = root.titled(
            "Quantum Supply Scaling: The Trajectory of Qubit Volume (IBM Roadmaps)",
            title_font(30.0),
        )?;

        let all_points: Vec<&RoadmapPoint> = self.points.iter().collect();
        let all_trends: Vec<&TrendLine> = self.trends.iter().collect();
        let Some(y_range) = log2_bounds(&all_points, &all_trends) else {
            return Ok(());
        };

        let years = roadmap_years(self.points);
        let (rows, columns) = grid_shape(years.len(), FACET_COLUMNS);
        let areas = root.split_evenly((rows, columns));

        for (year, area) in years.iter().zip(areas.iter()) {
            let points: Vec<&RoadmapPoint> = all_points
                .iter()
                .copied()
                .filter(|p| &p.roadmap_year == year)
                .collect();
            let Some(x_range) = year_bounds(&points, 0.9) else {
                continue;
            };
            let trends = self
                .trends
                .iter()
                .filter(|t| &t.roadmap_year == year)
                .map(|t| (t, TREND_COLORS[palette_slot(t, &years, TREND_COLORS.len())]))
                .collect();

            let panel = Panel {
                caption: Some(format!("{} Roadmap", year)),
                points,
                trends,
                x_range,
                y_range,
                annotation: None,
            };
            draw_panel(area, &panel, &PanelStyle::default())?;
        }

        root.present()?;
        Ok(())
    }
}

/// One roadmap edition with its trend, labelled
pub(crate) struct EditionDetail<'a> {
    pub year: &'a str,
    pub points: Vec<&'a RoadmapPoint>,
    pub trends: Vec<&'a TrendLine>,
}

impl Figure for EditionDetail<'_> {
    fn size(&self) -> (u32, u32) {
        (1500, 1050)
    }

    fn draw<DB: DrawingBackend>(&self, root: DrawingArea<DB, Shift>) -> Result<(), ChartError> {
        root.fill(&WHITE)?;
        let root = root.titled("Quantum Supply Scaling", title_font(30.0))?;

        let (Some(x_range), Some(y_range)) = (
            year_bounds(&self.points, 0.5),
            log2_bounds(&self.points, &self.trends),
        ) else {
            return Ok(());
        };

        let panel = Panel {
            caption: Some(format!(
                "Projected Qubit Counts in the {} Perspective (IBM Quantum Roadmap)",
                self.year
            )),
            points: self.points.clone(),
            trends: self.trends.iter().map(|t| (*t, DETAIL_COLOR)).collect(),
            x_range,
            y_range,
            annotation: None,
        };
        let style = PanelStyle {
            marker_size: 8,
            ..PanelStyle::default()
        };
        draw_panel(&root, &panel, &style)?;

        root.present()?;
        Ok(())
    }
}

/// High-contrast single-edition chart with the doubling rate spelled out
pub(crate) struct GraphicalAbstract<'a> {
    pub points: Vec<&'a RoadmapPoint>,
    pub trends: Vec<&'a TrendLine>,
}

impl Figure for GraphicalAbstract<'_> {
    fn size(&self) -> (u32, u32) {
        (1200, 1350)
    }

    fn draw<DB: DrawingBackend>(&self, root: DrawingArea<DB, Shift>) -> Result<(), ChartError> {
        root.fill(&WHITE)?;
        let root = root.titled("Quantum Moore's Law", title_font(48.0))?;

        let (Some(x_range), Some(y_range)) = (
            year_bounds(&self.points, 1.0),
            log2_bounds(&self.points, &self.trends),
        ) else {
            return Ok(());
        };

        let annotation = self.trends.first().and_then(|trend| {
            let label = doubling_annotation(trend)?;
            let x = (trend.start.0 + trend.end.0) / 2.0 - 1.0;
            let y = (trend.start.1.log2() + trend.end.1.log2()) / 2.0 + 1.0;
            Some((label, (x, y), ABSTRACT_COLOR))
        });

        let panel = Panel {
            caption: Some("Supply Scaling (IBM Roadmap)".to_string()),
            points: self.points.clone(),
            trends: self.trends.iter().map(|t| (*t, ABSTRACT_COLOR)).collect(),
            x_range,
            y_range,
            annotation,
        };
        let style = PanelStyle {
            caption_size: 34.0,
            axis_font: 26.0,
            marker_size: 14,
            line_width: 6,
            executed: ABSTRACT_EXECUTED,
            forecast: ABSTRACT_FORECAST,
            show_labels: false,
            y_desc: "Physical Qubits",
            ..PanelStyle::default()
        };
        draw_panel(&root, &panel, &style)?;

        root.present()?;
        Ok(())
    }
}
