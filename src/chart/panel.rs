use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};

use crate::roadmap::{RoadmapPoint, Status, TrendLine};

use super::layout::{dash_segments, format_count, point_label, trend_segment};
use super::ChartError;

const INK: RGBColor = RGBColor(0x2c, 0x3e, 0x50);
const LABEL_INK: RGBColor = RGBColor(0x34, 0x49, 0x5e);

const DASHES: usize = 12;

/// Visual parameters of one panel
pub(crate) struct PanelStyle {
    pub caption_size: f64,
    pub axis_font: f64,
    pub label_font: f64,
    pub marker_size: u32,
    pub line_width: u32,
    pub executed: RGBColor,
    pub forecast: RGBColor,
    pub show_labels: bool,
    pub show_legend: bool,
    pub y_desc: &'static str,
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self {
            caption_size: 22.0,
            axis_font: 15.0,
            label_font: 12.0,
            marker_size: 6,
            line_width: 3,
            executed: INK,
            forecast: INK,
            show_labels: true,
            show_legend: true,
            y_desc: "Physical Qubits (Log Scale)",
        }
    }
}

/// What to draw in one panel
pub(crate) struct Panel<'a> {
    pub caption: Option<String>,
    pub points: Vec<&'a RoadmapPoint>,
    pub trends: Vec<(&'a TrendLine, RGBColor)>,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub annotation: Option<(String, (f64, f64), RGBColor)>,
}

fn font(size: f64) -> FontDesc<'static> {
    FontDesc::new(FontFamily::SansSerif, size, FontStyle::Normal)
}

/// Draw points, dashed trends and labels on a log2 count axis
pub(crate) fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel<'_>,
    style: &PanelStyle,
) -> Result<(), ChartError> {
    let mut builder = ChartBuilder::on(area);
    builder
        .margin(15)
        .set_label_area_size(LabelAreaPosition::Left, 70)
        .set_label_area_size(LabelAreaPosition::Bottom, 50);
    if let Some(caption) = &panel.caption {
        builder.caption(caption, font(style.caption_size));
    }

    let (x_min, x_max) = panel.x_range;
    let (y_min, y_max) = panel.y_range;
    let mut chart = builder.build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    let year_ticks = (x_max - x_min).ceil() as usize + 1;
    chart
        .configure_mesh()
        .x_desc("Year")
        .y_desc(style.y_desc)
        .x_labels(year_ticks)
        .y_labels(((y_max - y_min).ceil() as usize).max(2))
        .x_label_formatter(&|x| format!("{:.0}", x))
        .y_label_formatter(&|y| format_count(y.exp2()))
        .label_style(font(style.axis_font))
        .draw()?;

    for &(trend, color) in &panel.trends {
        let (start, end) = trend_segment(trend);
        let stroke = color.stroke_width(style.line_width);
        let anno = chart.draw_series(
            dash_segments(start, end, DASHES)
                .into_iter()
                .map(move |segment| PathElement::new(segment.to_vec(), stroke)),
        )?;
        if style.show_legend {
            anno.label(trend.legend.clone())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], stroke));
        }
    }

    let coords = |status: fn(&Status) -> bool| -> Vec<(f64, f64)> {
        panel
            .points
            .iter()
            .filter(|p| status(&p.status))
            .map(|p| (p.year, p.qubits.log2()))
            .collect()
    };
    let executed = coords(|s| !matches!(s, Status::Forecast));
    let forecast = coords(|s| matches!(s, Status::Forecast));

    let executed_style = style.executed.filled();
    let forecast_style = style.forecast.filled();
    let size = style.marker_size;

    if !executed.is_empty() {
        let anno = chart.draw_series(
            executed
                .iter()
                .map(|&coord| Circle::new(coord, size, executed_style)),
        )?;
        if style.show_legend {
            anno.label("Executed")
                .legend(move |(x, y)| Circle::new((x + 12, y), size, executed_style));
        }
    }
    if !forecast.is_empty() {
        let anno = chart.draw_series(
            forecast
                .iter()
                .map(|&coord| TriangleMarker::new(coord, size + 2, forecast_style)),
        )?;
        if style.show_legend {
            anno.label("Forecast")
                .legend(move |(x, y)| TriangleMarker::new((x + 12, y), size + 2, forecast_style));
        }
    }

    if style.show_labels {
        let text = font(style.label_font).color(&LABEL_INK);
        chart.draw_series(panel.points.iter().map(|p| {
            EmptyElement::at((p.year, p.qubits.log2()))
                + Text::new(point_label(p), (-24, -26), text.clone())
        }))?;
    }

    if let Some((label, (x, y), color)) = &panel.annotation {
        let text = font(style.caption_size).color(color);
        chart.draw_series(std::iter::once(Text::new(label.clone(), (*x, *y), text)))?;
    }

    if style.show_legend {
        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.85))
            .border_style(&BLACK)
            .label_font(font(style.axis_font))
            .position(SeriesLabelPosition::UpperLeft)
            .draw()?;
    }

    Ok(())
}
