// src/plot_functions/plot_error_scatter.rs

use std::ops::Range;
use std::path::Path;

use log::warn;
use ndarray::Array1;
use ndarray_stats::QuantileExt; // .min() and .max() on Array1

use crate::classification::ClassColor;
use crate::data_input::log_data::{Field, ParsedLog};
use crate::error::DriveplotError;
use crate::plot_framework::{calculate_range, draw_scatter_plot, ScatterConfig, ScatterSeries};
use crate::section::Section;
use crate::types::{ClassifiedPoints, DriveplotResult};

/// Pairs `average` (x) with `stdev` (y) for each record of `section`, grouped by
/// classification colour. Records with a non-finite coordinate are dropped.
///
/// Returns the groups (ordered by colour) and the number of dropped records.
pub fn collect_classified_points(log: &ParsedLog, section: Section) -> (ClassifiedPoints, usize) {
    let table = log.table(section);
    let xs = table.column(Field::Average);
    let ys = table.column(Field::Stdev);

    let mut groups: ClassifiedPoints = Vec::new();
    let mut dropped = 0;
    for ((&x, &y), &color) in xs.iter().zip(ys).zip(table.classification()) {
        if !(x.is_finite() && y.is_finite()) {
            dropped += 1;
            continue;
        }
        match groups.iter_mut().find(|(c, _)| *c == color) {
            Some((_, points)) => points.push((x, y)),
            None => groups.push((color, vec![(x, y)])),
        }
    }
    groups.sort_by_key(|(color, _)| *color);
    (groups, dropped)
}

fn padded_range(values: Vec<f64>, section: Section) -> DriveplotResult<Range<f64>> {
    let values = Array1::from(values);
    let (min, max) = match (values.min(), values.max()) {
        (Ok(&min), Ok(&max)) => (min, max),
        _ => return Err(DriveplotError::EmptyPlot(section)),
    };
    let (lo, hi) = calculate_range(min, max);
    // Padding can overflow to +-inf, which plotters cannot lay out.
    if !(lo.is_finite() && hi.is_finite()) {
        return Err(DriveplotError::UnplottableRange { section, min, max });
    }
    Ok(lo..hi)
}

fn legend_label(color: ClassColor, count: usize) -> String {
    format!("{} ({}, n={})", color.code(), color.name(), count)
}

/// Builds the average-vs-stdev scatter configuration for one section.
pub fn build_error_scatter(log: &ParsedLog, section: Section) -> DriveplotResult<ScatterConfig> {
    let (groups, dropped) = collect_classified_points(log, section);
    if dropped > 0 {
        warn!(
            "Skipping {} {} records without a finite average/stdev pair",
            dropped, section
        );
    }

    let all_points = groups.iter().flat_map(|(_, points)| points.iter());
    let x_range = padded_range(all_points.clone().map(|&(x, _)| x).collect(), section)?;
    let y_range = padded_range(all_points.map(|&(_, y)| y).collect(), section)?;

    let label = section.short_label();
    let series = groups
        .into_iter()
        .map(|(color, points)| ScatterSeries {
            label: legend_label(color, points.len()),
            color: color.rgb(),
            points,
        })
        .collect();

    Ok(ScatterConfig {
        title: format!("{} Error: Average vs Standard Deviation", label),
        x_range,
        y_range,
        series,
        x_label: format!("{} average error", label),
        y_label: format!("{} error standard deviation", label),
    })
}

/// Generates the classification-coloured average/stdev scatter plot PNG.
pub fn plot_error_scatter(
    log: &ParsedLog,
    section: Section,
    root_name: &str,
    output_path: &Path,
) -> DriveplotResult<()> {
    let config = build_error_scatter(log, section)?;
    draw_scatter_plot(output_path, root_name, &config)
}
