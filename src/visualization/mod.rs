//! Box-plot grid rendering for vegetation metric tables.
//!
//! This module composes the output figure: a 5x5 grid of panels, one per
//! metric column, each comparing the metric's distribution across the input
//! files with one box per file. The figure is written as a PNG using the
//! plotters bitmap backend.

use std::fs;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters_bitmap::BitMapBackend;
use thiserror::Error;

use crate::config::{FigureConfig, StyleConfig};
use crate::core::loaders::MetricTable;
use crate::core::metrics::{MetricDef, METRIC_PANELS};
use crate::processors::stats::box_stats;

/// Errors that can occur during rendering.
#[derive(Error, Debug)]
pub enum VisualizationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Plotting error: {0}")]
    PlottingError(String),

    #[error("No input datasets to plot")]
    EmptyInput,

    #[error("Tick label count {labels} does not match dataset count {datasets}")]
    LabelMismatch { labels: usize, datasets: usize },
}

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, VisualizationError>;

/// Grid layout: one panel per metric column.
const GRID_ROWS: usize = 5;
const GRID_COLS: usize = 5;

/// Box half-width in axis units; boxes sit one unit apart.
const BOX_HALF_WIDTH: f64 = 0.25;

/// Whisker cap half-width in axis units.
const CAP_HALF_WIDTH: f64 = 0.125;

fn rgb(c: [u8; 3]) -> RGBColor {
    RGBColor(c[0], c[1], c[2])
}

/// Creates parent directories for the output path if they don't exist.
fn ensure_parent_dirs(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Y range covering every observation of a panel, with proportional padding.
///
/// A degenerate (constant) range is widened symmetrically so the panel still
/// renders; fully empty panels fall back to a unit range.
fn padded_value_range(series: &[&[f64]]) -> (f64, f64) {
    let mut min = f64::MAX;
    let mut max = f64::MIN;

    for values in series {
        for &v in *values {
            if v < min {
                min = v;
            }
            if v > max {
                max = v;
            }
        }
    }

    if min > max {
        return (0.0, 1.0);
    }

    if (max - min).abs() < f64::EPSILON {
        min -= 1.0;
        max += 1.0;
    }

    let padding = (max - min) * 0.05;
    (min - padding, max + padding)
}

/// Tick label for an x-axis position: files sit at x = 1..=n, every other
/// position stays unlabeled.
fn file_tick_label(x: f64, tick_labels: &[String]) -> String {
    let nearest = x.round();
    if (x - nearest).abs() > 1e-9 {
        return String::new();
    }

    let index = nearest as i64;
    if index < 1 || index > tick_labels.len() as i64 {
        return String::new();
    }

    tick_labels[index as usize - 1].clone()
}

/// Render the full metric comparison grid and save it as a PNG.
///
/// # Arguments
///
/// * `output_path` - Destination for the PNG image (parent directories are
///   created if needed)
/// * `tables` - One cleaned metric table per input file, in plotting order
/// * `tick_labels` - Pulse-density axis labels, one per table
/// * `figure` - Figure geometry and overall title
/// * `style` - Box styling and whisker percentiles
///
/// # Errors
///
/// Returns an error if the inputs are empty, the label count does not match
/// the table count, or the backend fails to draw or save the image.
pub fn render_metric_grid(
    output_path: &Path,
    tables: &[MetricTable],
    tick_labels: &[String],
    figure: &FigureConfig,
    style: &StyleConfig,
) -> Result<()> {
    if tables.is_empty() {
        return Err(VisualizationError::EmptyInput);
    }
    if tick_labels.len() != tables.len() {
        return Err(VisualizationError::LabelMismatch {
            labels: tick_labels.len(),
            datasets: tables.len(),
        });
    }

    ensure_parent_dirs(output_path)?;

    let root = BitMapBackend::new(output_path, (figure.width_px, figure.height_px))
        .into_drawing_area();

    root.fill(&WHITE)
        .map_err(|e| VisualizationError::PlottingError(e.to_string()))?;

    let titled = root
        .titled(&figure.title, ("sans-serif", 28))
        .map_err(|e| VisualizationError::PlottingError(e.to_string()))?;

    let panels = titled.split_evenly((GRID_ROWS, GRID_COLS));

    for (index, (area, def)) in panels.iter().zip(METRIC_PANELS.iter()).enumerate() {
        let series: Vec<&[f64]> = tables.iter().map(|t| t.column(index)).collect();
        draw_metric_panel(area, def, &series, tick_labels, style)?;
    }

    titled
        .present()
        .map_err(|e| VisualizationError::PlottingError(e.to_string()))?;

    Ok(())
}

/// Draw one metric panel: one box per file at x = 1..=n in input order.
fn draw_metric_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    def: &MetricDef,
    series: &[&[f64]],
    tick_labels: &[String],
    style: &StyleConfig,
) -> Result<()> {
    let num_files = series.len();
    let (y_min, y_max) = padded_value_range(series);

    let mut chart = ChartBuilder::on(area)
        .caption(def.name, ("sans-serif", 15))
        .margin(6)
        .x_label_area_size(32)
        .y_label_area_size(46)
        .build_cartesian_2d(0.0..num_files as f64 + 1.0, y_min..y_max)
        .map_err(|e| VisualizationError::PlottingError(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(num_files + 3)
        .x_label_formatter(&|x| file_tick_label(*x, tick_labels))
        .y_labels(6)
        .x_desc("Pulse density (pulses/m^2)")
        .y_desc(def.unit)
        .label_style(("sans-serif", 10))
        .axis_desc_style(("sans-serif", 11))
        .draw()
        .map_err(|e| VisualizationError::PlottingError(e.to_string()))?;

    let plot = chart.plotting_area();
    let fill = rgb(style.fill_for(def.group));
    let border = rgb(style.box_border);
    let median = rgb(style.median_color);
    let whisker = rgb(style.whisker_color);
    let cap = rgb(style.cap_color);
    let flier = rgb(style.flier_color);

    for (file, values) in series.iter().enumerate() {
        let stats = match box_stats(values, style.whisker_percentiles) {
            Some(stats) => stats,
            None => continue,
        };

        let center = file as f64 + 1.0;
        let left = center - BOX_HALF_WIDTH;
        let right = center + BOX_HALF_WIDTH;

        // Whisker stems and caps first so the box covers their inner ends
        plot.draw(&PathElement::new(
            vec![(center, stats.q3), (center, stats.whisker_high)],
            whisker,
        ))
        .map_err(|e| VisualizationError::PlottingError(e.to_string()))?;
        plot.draw(&PathElement::new(
            vec![(center, stats.whisker_low), (center, stats.q1)],
            whisker,
        ))
        .map_err(|e| VisualizationError::PlottingError(e.to_string()))?;
        plot.draw(&PathElement::new(
            vec![
                (center - CAP_HALF_WIDTH, stats.whisker_high),
                (center + CAP_HALF_WIDTH, stats.whisker_high),
            ],
            cap,
        ))
        .map_err(|e| VisualizationError::PlottingError(e.to_string()))?;
        plot.draw(&PathElement::new(
            vec![
                (center - CAP_HALF_WIDTH, stats.whisker_low),
                (center + CAP_HALF_WIDTH, stats.whisker_low),
            ],
            cap,
        ))
        .map_err(|e| VisualizationError::PlottingError(e.to_string()))?;

        // Filled quartile box with a contrasting border and median line
        plot.draw(&Rectangle::new(
            [(left, stats.q1), (right, stats.q3)],
            fill.filled(),
        ))
        .map_err(|e| VisualizationError::PlottingError(e.to_string()))?;
        plot.draw(&Rectangle::new([(left, stats.q1), (right, stats.q3)], border))
            .map_err(|e| VisualizationError::PlottingError(e.to_string()))?;
        plot.draw(&PathElement::new(
            vec![(left, stats.median), (right, stats.median)],
            median,
        ))
        .map_err(|e| VisualizationError::PlottingError(e.to_string()))?;

        // Outliers beyond the whiskers stay visible as filled dots
        for &value in &stats.fliers {
            plot.draw(&Circle::new(
                (center, value),
                style.flier_radius as i32,
                flier.filled(),
            ))
            .map_err(|e| VisualizationError::PlottingError(e.to_string()))?;
        }
    }

    Ok(())
}
