// src/plot_framework.rs

use plotters::backend::{BitMapBackend, DrawingBackend};
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{Circle, Text};
use plotters::style::colors::{BLACK, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use log::info;
use std::ops::Range;
use std::path::Path;

use crate::constants::{PLOT_HEIGHT, PLOT_WIDTH, SCATTER_POINT_SIZE};
use crate::font_config::{
    FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_CHART_TITLE, FONT_TUPLE_LEGEND, FONT_TUPLE_MAIN_TITLE,
};
use crate::types::{DriveplotResult, ScatterPoints};

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// One set of same-coloured scatter markers with its legend label.
#[derive(Debug, Clone)]
pub struct ScatterSeries {
    pub points: ScatterPoints,
    pub label: String,
    pub color: RGBColor,
}

#[derive(Debug, Clone)]
pub struct ScatterConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<ScatterSeries>,
    pub x_label: String,
    pub y_label: String,
}

impl ScatterConfig {
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

/// Draws a single scatter chart into `area`, one legend entry per series.
fn draw_scatter_chart<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    config: &ScatterConfig,
) -> DriveplotResult<()>
where
    DB::ErrorType: 'static,
{
    let mut chart = ChartBuilder::on(area)
        .caption(&config.title, FONT_TUPLE_CHART_TITLE)
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(config.x_range.clone(), config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&config.x_label)
        .y_desc(&config.y_label)
        .x_labels(20)
        .y_labels(10)
        .light_line_style(WHITE.mix(0.7))
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .draw()?;

    for s in &config.series {
        if s.points.is_empty() {
            continue;
        }
        let color = s.color;
        chart
            .draw_series(
                s.points
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), SCATTER_POINT_SIZE, color.filled())),
            )?
            .label(&s.label)
            .legend(move |(x, y)| Circle::new((x + 10, y), SCATTER_POINT_SIZE, color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(FONT_TUPLE_LEGEND)
        .draw()?;

    Ok(())
}

/// Renders a full-size scatter plot PNG with `root_name` as the page heading.
pub fn draw_scatter_plot(
    output_path: &Path,
    root_name: &str,
    config: &ScatterConfig,
) -> DriveplotResult<()> {
    let root_area = BitMapBackend::new(output_path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        root_name,
        (10, 10),
        FONT_TUPLE_MAIN_TITLE.into_font().color(&BLACK),
    ))?;
    let margined_root_area = root_area.margin(50, 5, 5, 5);

    draw_scatter_chart(&margined_root_area, config)?;

    root_area.present()?;
    info!(
        "Scatter plot with {} points saved as '{}'.",
        config.point_count(),
        output_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_range_pads_fifteen_percent() {
        let (min, max) = calculate_range(0.0, 10.0);
        assert!((min + 1.5).abs() < 1e-12);
        assert!((max - 11.5).abs() < 1e-12);
    }

    #[test]
    fn test_calculate_range_degenerate_and_swapped() {
        assert_eq!(calculate_range(2.0, 2.0), (1.5, 2.5));
        let (min, max) = calculate_range(10.0, 0.0);
        assert!(min < 0.0 && max > 10.0);
    }
}

// src/plot_framework.rs
